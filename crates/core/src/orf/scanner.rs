//! Automate de lecture codon par codon sur un brin et un cadre

use super::mapper::Interval;
use super::{is_start_codon, is_stop_codon};
use crate::sequence::{Frame, CODON_LENGTH};
use tracing::{debug, trace};

/// État de l'automate de lecture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Aucun ORF ouvert
    Searching,
    /// ORF ouvert au décalage 0-based `start`
    InOrf { start: usize },
}

/// Lecteur d'un cadre sur une séquence linéaire
///
/// La séquence est soit le brin direct, soit son complément inverse; les
/// intervalles produits sont en coordonnées locales 1-based.
pub struct FrameScanner<'a> {
    residues: &'a [u8],
    frame: Frame,
}

impl<'a> FrameScanner<'a> {
    pub fn new(residues: &'a [u8], frame: Frame) -> Self {
        Self { residues, frame }
    }

    /// Parcourt le cadre et retourne les ORFs complets (ATG ... stop)
    ///
    /// Les intervalles sont triés par début croissant et ne se chevauchent pas.
    /// Un ORF encore ouvert en fin de séquence est abandonné.
    pub fn scan(&self) -> Vec<Interval> {
        let offset = self.frame.offset();
        let codons = self
            .residues
            .get(offset..)
            .unwrap_or_default()
            .chunks_exact(CODON_LENGTH);

        let mut state = ScanState::Searching;
        let mut found = Vec::new();

        for (index, codon) in codons.enumerate() {
            let position = offset + index * CODON_LENGTH;

            state = match state {
                ScanState::Searching if is_start_codon(codon) => ScanState::InOrf { start: position },
                ScanState::InOrf { start } if is_stop_codon(codon) => {
                    found.push(Interval::new(start + 1, position + CODON_LENGTH));
                    ScanState::Searching
                }
                unchanged => unchanged,
            };
        }

        if let ScanState::InOrf { start } = state {
            trace!(frame = %self.frame, start = start + 1, "ORF sans codon stop abandonné");
        }

        debug!(frame = %self.frame, orfs = found.len(), "Cadre parcouru");
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(residues: &[u8], offset: u8) -> Vec<Interval> {
        FrameScanner::new(residues, Frame::new(offset).unwrap()).scan()
    }

    #[test]
    fn test_single_orf() {
        assert_eq!(scan(b"ATGAAATAG", 0), vec![Interval::new(1, 9)]);
    }

    #[test]
    fn test_each_stop_codon_closes() {
        for stop in ["TAA", "TAG", "TGA"] {
            let seq = format!("CCATGCCC{}GG", stop);
            assert_eq!(scan(seq.as_bytes(), 2), vec![Interval::new(3, 11)], "stop {}", stop);
        }
    }

    #[test]
    fn test_open_orf_is_discarded() {
        assert!(scan(b"ATGAAAAAAAAA", 0).is_empty());
        assert!(scan(b"ATGAAATA", 0).is_empty());
    }

    #[test]
    fn test_stop_without_start_is_ignored() {
        assert!(scan(b"TAAATGTGA", 1).is_empty());
        assert_eq!(scan(b"TAAATGTGA", 0), vec![Interval::new(4, 9)]);
    }

    #[test]
    fn test_inner_atg_does_not_restart() {
        // Le second ATG est interne au premier ORF
        assert_eq!(scan(b"ATGATGAAATAA", 0), vec![Interval::new(1, 12)]);
    }

    #[test]
    fn test_multiple_orfs_in_one_frame() {
        let seq = b"ATGTAAATGCCCTGAGGGATGTAG";
        assert_eq!(
            scan(seq, 0),
            vec![Interval::new(1, 6), Interval::new(7, 15), Interval::new(19, 24)]
        );
    }

    #[test]
    fn test_search_resumes_right_after_stop() {
        assert_eq!(
            scan(b"ATGTAGATGTAA", 0),
            vec![Interval::new(1, 6), Interval::new(7, 12)]
        );
    }

    #[test]
    fn test_lowercase_codons_match() {
        assert_eq!(scan(b"atgaaatga", 0), vec![Interval::new(1, 9)]);
    }

    #[test]
    fn test_ambiguous_bases_never_match() {
        assert!(scan(b"ATNAAATAG", 0).is_empty());
        // N dans un ORF ouvert ne le ferme pas
        assert_eq!(scan(b"ATGNNNTAG", 0), vec![Interval::new(1, 9)]);
    }

    #[test]
    fn test_short_and_empty_sequences() {
        assert!(scan(b"", 0).is_empty());
        assert!(scan(b"AT", 2).is_empty());
        assert!(scan(b"A", 2).is_empty());
    }

    #[test]
    fn test_frame_offsets() {
        let seq = b"GATGAAATAGC";
        assert!(scan(seq, 0).is_empty());
        assert_eq!(scan(seq, 1), vec![Interval::new(2, 10)]);
        assert!(scan(seq, 2).is_empty());
    }
}
