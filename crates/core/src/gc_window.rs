//! Profil GC en fenêtre glissante

use crate::error::{Result, SeqError};
use serde::{Deserialize, Serialize};

/// Paramètres de la fenêtre glissante
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct GcWindowConfig {
    /// Taille de fenêtre en bases
    pub window: usize,
    /// Pas entre deux fenêtres en bases
    pub step: usize,
}

impl Default for GcWindowConfig {
    fn default() -> Self {
        Self {
            window: 100,
            step: 10,
        }
    }
}

impl GcWindowConfig {
    pub fn validate(&self) -> Result<()> {
        if self.window == 0 || self.step == 0 {
            return Err(SeqError::InvalidWindow {
                window: self.window,
                step: self.step,
            });
        }
        Ok(())
    }
}

/// Point du profil
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GcPoint {
    /// Position 0-based du milieu de la fenêtre
    pub position: usize,
    /// GC en pourcentage
    pub gc_percent: f64,
}

/// Profil GC d'une séquence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GcProfile {
    pub id: String,
    pub sequence_length: usize,
    /// GC global en pourcentage
    pub overall_gc: f64,
    /// Vide quand la séquence est plus courte que la fenêtre
    pub points: Vec<GcPoint>,
}

impl GcProfile {
    /// Vrai si la séquence était trop courte pour une seule fenêtre
    pub fn is_skipped(&self) -> bool {
        self.points.is_empty()
    }

    pub fn min_gc(&self) -> Option<f64> {
        self.points.iter().map(|p| p.gc_percent).reduce(f64::min)
    }

    pub fn max_gc(&self) -> Option<f64> {
        self.points.iter().map(|p| p.gc_percent).reduce(f64::max)
    }
}

fn is_gc(base: &u8) -> bool {
    matches!(base, b'G' | b'C')
}

/// Calcule le profil GC d'une séquence
pub fn sliding_gc(id: &str, residues: &[u8], config: GcWindowConfig) -> Result<GcProfile> {
    config.validate()?;

    let len = residues.len();
    let overall_gc = if len == 0 {
        0.0
    } else {
        residues.iter().filter(|b| is_gc(b)).count() as f64 / len as f64 * 100.0
    };

    let points = if len < config.window {
        Vec::new()
    } else {
        (0..=len - config.window)
            .step_by(config.step)
            .map(|start| {
                let gc = residues[start..start + config.window]
                    .iter()
                    .filter(|b| is_gc(b))
                    .count();
                GcPoint {
                    position: start + config.window / 2,
                    gc_percent: gc as f64 / config.window as f64 * 100.0,
                }
            })
            .collect()
    };

    Ok(GcProfile {
        id: id.to_string(),
        sequence_length: len,
        overall_gc,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(window: usize, step: usize) -> GcWindowConfig {
        GcWindowConfig { window, step }
    }

    #[test]
    fn test_window_positions_and_values() {
        let profile = sliding_gc("s", b"GGCCAATT", config(4, 2)).unwrap();
        let points: Vec<(usize, f64)> = profile
            .points
            .iter()
            .map(|p| (p.position, p.gc_percent))
            .collect();

        assert_eq!(points, vec![(2, 100.0), (4, 50.0), (6, 0.0)]);
        assert_eq!(profile.overall_gc, 50.0);
        assert_eq!(profile.min_gc(), Some(0.0));
        assert_eq!(profile.max_gc(), Some(100.0));
    }

    #[test]
    fn test_last_window_must_fit() {
        let profile = sliding_gc("s", b"GGCCAATTA", config(4, 3)).unwrap();
        let positions: Vec<usize> = profile.points.iter().map(|p| p.position).collect();
        assert_eq!(positions, vec![2, 5]);
    }

    #[test]
    fn test_short_sequence_is_skipped() {
        let profile = sliding_gc("s", b"GC", config(4, 1)).unwrap();
        assert!(profile.is_skipped());
        assert_eq!(profile.min_gc(), None);
        assert_eq!(profile.overall_gc, 100.0);
    }

    #[test]
    fn test_invalid_window() {
        assert!(matches!(
            sliding_gc("s", b"ACGT", config(0, 1)),
            Err(SeqError::InvalidWindow { window: 0, step: 1 })
        ));
        assert!(sliding_gc("s", b"ACGT", config(2, 0)).is_err());
    }
}
