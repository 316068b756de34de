//! Conversion des coordonnées locales vers le brin direct

use crate::error::{Result, SeqError};
use crate::sequence::Strand;
use serde::{Deserialize, Serialize};

/// Intervalle 1-based, bornes incluses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: usize,
    pub end: usize,
}

impl Interval {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Nombre de bases couvertes, zéro si les bornes sont inversées
    pub fn len(&self) -> usize {
        (self.end + 1).saturating_sub(self.start)
    }

    /// Un intervalle valide n'est jamais vide
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Vérifie que l'intervalle tient dans une séquence de longueur `len`
    pub fn check_within(&self, len: usize) -> Result<()> {
        if self.start >= 1 && self.start <= self.end && self.end <= len {
            Ok(())
        } else {
            Err(SeqError::MalformedInterval {
                start: self.start,
                end: self.end,
                len,
            })
        }
    }
}

/// Ramène un intervalle local au brin direct
///
/// Identité pour le brin direct. Pour le brin inverse, `[s, e]` sur le
/// complément inverse d'une séquence de longueur `L` devient
/// `[L - e + 1, L - s + 1]`. L'opération est une involution.
pub fn to_forward(strand: Strand, local: Interval, seq_len: usize) -> Result<Interval> {
    local.check_within(seq_len)?;

    Ok(match strand {
        Strand::Forward => local,
        Strand::Reverse => Interval::new(seq_len - local.end + 1, seq_len - local.start + 1),
    })
}
