//! Enregistrements de séquences, brins, cadres de lecture et complément inverse

use crate::error::{Result, SeqError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Longueur d'un codon en paires de bases
pub const CODON_LENGTH: usize = 3;

/// Séquence nucléotidique chargée depuis une entrée FASTA
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceRecord {
    /// Ligne d'en-tête complète, sans le `>`
    pub id: String,
    /// Résidus bruts (ACGT plus éventuellement d'autres symboles)
    pub residues: Vec<u8>,
}

impl SequenceRecord {
    /// Crée un nouvel enregistrement
    pub fn new(id: impl Into<String>, residues: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            residues: residues.into(),
        }
    }

    /// Retourne la longueur de la séquence
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Vérifie si la séquence est vide
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

/// Brin d'ADN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Strand {
    #[serde(rename = "+")]
    Forward,
    #[serde(rename = "-")]
    Reverse,
}

impl Strand {
    /// Les deux brins, dans l'ordre de parcours
    pub const ALL: [Strand; 2] = [Strand::Forward, Strand::Reverse];

    /// Symbole du brin (`+` ou `-`)
    pub fn symbol(self) -> char {
        match self {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Cadre de lecture: décalage 0, 1 ou 2 depuis le début du brin
///
/// Affiché et sérialisé en numérotation 1-based (1, 2, 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Frame(u8);

impl Frame {
    /// Les trois cadres d'un brin
    pub const ALL: [Frame; 3] = [Frame(0), Frame(1), Frame(2)];

    /// Crée un cadre depuis un décalage 0-based
    pub fn new(offset: u8) -> Result<Self> {
        if usize::from(offset) < CODON_LENGTH {
            Ok(Self(offset))
        } else {
            Err(SeqError::InvalidFrame(offset))
        }
    }

    /// Décalage 0-based dans la séquence du brin
    pub fn offset(self) -> usize {
        usize::from(self.0)
    }

    /// Numéro 1-based du cadre
    pub fn number(self) -> u8 {
        self.0 + 1
    }
}

impl TryFrom<u8> for Frame {
    type Error = SeqError;

    fn try_from(offset: u8) -> Result<Self> {
        Frame::new(offset)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl Serialize for Frame {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}

impl<'de> Deserialize<'de> for Frame {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let number = u8::deserialize(deserializer)?;
        number
            .checked_sub(1)
            .ok_or(SeqError::InvalidFrame(number))
            .and_then(Frame::new)
            .map_err(serde::de::Error::custom)
    }
}

/// Complément d'une base, casse conservée
///
/// A<->T, C<->G. Tout autre symbole (N, IUPAC, ponctuation) est rendu tel quel.
#[inline]
pub const fn complement_base(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'a' => b't',
        b't' => b'a',
        b'c' => b'g',
        b'g' => b'c',
        _ => base,
    }
}

/// Complément inverse d'une séquence
pub fn reverse_complement(residues: &[u8]) -> Vec<u8> {
    residues.iter().rev().map(|&base| complement_base(base)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_complement() {
        assert_eq!(reverse_complement(b"ATGC"), b"GCAT".to_vec());
        assert_eq!(reverse_complement(b"AAAC"), b"GTTT".to_vec());
        assert_eq!(reverse_complement(b""), Vec::<u8>::new());
    }

    #[test]
    fn test_reverse_complement_keeps_case_and_unknown_symbols() {
        assert_eq!(reverse_complement(b"acgtN"), b"Nacgt".to_vec());
        assert_eq!(reverse_complement(b"AtN-g"), b"c-NaT".to_vec());
    }

    #[test]
    fn test_reverse_complement_twice_is_identity() {
        let seq = b"ATGCGTACGTTAGCNNacgt".to_vec();
        assert_eq!(reverse_complement(&reverse_complement(&seq)), seq);
    }

    #[test]
    fn test_frame_bounds() {
        assert_eq!(Frame::new(0).unwrap().number(), 1);
        assert_eq!(Frame::new(2).unwrap().offset(), 2);
        assert!(matches!(Frame::new(3), Err(SeqError::InvalidFrame(3))));
        assert!(Frame::try_from(7u8).is_err());
    }

    #[test]
    fn test_strand_symbols() {
        assert_eq!(Strand::Forward.to_string(), "+");
        assert_eq!(Strand::Reverse.to_string(), "-");
        assert!(Strand::Forward < Strand::Reverse);
    }

    #[test]
    fn test_frame_serializes_one_based() {
        let frame = Frame::new(1).unwrap();
        assert_eq!(serde_json::to_string(&frame).unwrap(), "2");
        let back: Frame = serde_json::from_str("3").unwrap();
        assert_eq!(back.offset(), 2);
        assert!(serde_json::from_str::<Frame>("0").is_err());
        assert!(serde_json::from_str::<Frame>("4").is_err());
    }

    #[test]
    fn test_record_length() {
        let record = SequenceRecord::new("seq1 demo", b"ATGAAATAG".to_vec());
        assert_eq!(record.len(), 9);
        assert!(!record.is_empty());
        assert!(SequenceRecord::new("vide", Vec::new()).is_empty());
    }
}
