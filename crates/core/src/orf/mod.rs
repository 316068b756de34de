//! Recherche d'ORFs sur les six cadres de lecture
//!
//! Trois cadres sur le brin direct, trois sur le complément inverse. Les
//! coordonnées rapportées sont toujours 1-based sur le brin direct, quel que
//! soit le brin de l'ORF.

pub mod mapper;
pub mod ranker;
pub mod scanner;

pub use mapper::{to_forward, Interval};
pub use ranker::{longest, rank_order, OrfRanker, Ranking};
pub use scanner::FrameScanner;

use crate::error::Result;
use crate::sequence::{reverse_complement, Frame, SequenceRecord, Strand, CODON_LENGTH};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Codon d'initiation du code génétique standard
pub const START_CODON: &[u8; 3] = b"ATG";

/// Codons stop du code génétique standard
pub const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];

/// Vrai si `codon` est ATG (casse ignorée)
#[inline]
pub fn is_start_codon(codon: &[u8]) -> bool {
    codon.eq_ignore_ascii_case(START_CODON)
}

/// Vrai si `codon` est TAA, TAG ou TGA (casse ignorée)
#[inline]
pub fn is_stop_codon(codon: &[u8]) -> bool {
    STOP_CODONS.iter().any(|stop| codon.eq_ignore_ascii_case(*stop))
}

/// Cadre de lecture ouvert, en coordonnées du brin direct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Orf {
    pub strand: Strand,
    pub frame: Frame,
    /// Début 1-based inclus sur le brin direct
    pub start: usize,
    /// Fin 1-based incluse sur le brin direct
    pub end: usize,
    /// Longueur en bases, codon stop compris
    pub length: usize,
}

impl Orf {
    /// Crée un ORF depuis un intervalle déjà ramené au brin direct
    pub fn new(strand: Strand, frame: Frame, forward: Interval) -> Self {
        Self {
            strand,
            frame,
            start: forward.start,
            end: forward.end,
            length: forward.len(),
        }
    }

    /// Nombre de codons, stop compris
    pub fn codons(&self) -> usize {
        self.length / CODON_LENGTH
    }

    /// Bases de l'ORF lues dans le sens de son brin (ATG en tête)
    ///
    /// `residues` est la séquence directe dont l'ORF est issu; `None` si
    /// l'ORF n'y tient pas.
    pub fn nucleotides(&self, residues: &[u8]) -> Option<Vec<u8>> {
        let span = residues.get(self.start.checked_sub(1)?..self.end)?;
        Some(match self.strand {
            Strand::Forward => span.to_vec(),
            Strand::Reverse => reverse_complement(span),
        })
    }
}

/// Paramètres de recherche et de présentation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrfConfig {
    /// Longueur minimale en bases
    pub min_length: usize,
    /// Ne pas appliquer la limite d'affichage
    pub emit_all: bool,
    /// Nombre maximal d'ORFs rapportés quand `emit_all` est faux
    pub display_limit: usize,
}

impl Default for OrfConfig {
    fn default() -> Self {
        Self {
            min_length: 100,
            emit_all: false,
            display_limit: 20,
        }
    }
}

impl OrfConfig {
    fn ranker(&self) -> OrfRanker {
        let limit = if self.emit_all { None } else { Some(self.display_limit) };
        OrfRanker::new(self.min_length, limit)
    }
}

/// Rapport d'ORFs pour une séquence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrfReport {
    pub id: String,
    pub sequence_length: usize,
    /// ORFs trouvés sur les six cadres, avant filtrage
    pub total_orfs: usize,
    /// ORFs passant la longueur minimale
    pub qualifying: usize,
    /// ORFs qualifiés masqués par la limite d'affichage
    pub hidden: usize,
    /// ORF le plus long, tous cadres et toutes longueurs confondus
    pub longest: Option<Orf>,
    /// ORFs retenus, classés
    pub orfs: Vec<Orf>,
}

/// Moteur de recherche d'ORFs sur six cadres
#[derive(Debug, Clone, Default)]
pub struct OrfFinder {
    config: OrfConfig,
}

impl OrfFinder {
    pub fn new(config: OrfConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OrfConfig {
        &self.config
    }

    /// Tous les ORFs des six cadres, en coordonnées du brin direct
    ///
    /// Ordre: brin direct cadres 1 à 3, puis brin inverse cadres 1 à 3; dans
    /// chaque cadre, ordre de lecture. Les six lectures tournent en parallèle.
    pub fn scan_all(&self, residues: &[u8]) -> Result<Vec<Orf>> {
        let reverse = reverse_complement(residues);
        let seq_len = residues.len();

        let jobs: Vec<(Strand, Frame)> = Strand::ALL
            .iter()
            .flat_map(|&strand| Frame::ALL.iter().map(move |&frame| (strand, frame)))
            .collect();

        let per_frame = jobs
            .par_iter()
            .map(|&(strand, frame)| {
                let working = match strand {
                    Strand::Forward => residues,
                    Strand::Reverse => reverse.as_slice(),
                };

                FrameScanner::new(working, frame)
                    .scan()
                    .into_iter()
                    .map(|local| {
                        to_forward(strand, local, seq_len)
                            .map(|forward| Orf::new(strand, frame, forward))
                    })
                    .collect::<Result<Vec<Orf>>>()
            })
            .collect::<Result<Vec<Vec<Orf>>>>()?;

        Ok(per_frame.into_iter().flatten().collect())
    }

    /// Analyse complète d'une séquence: six cadres, ORF le plus long, classement
    pub fn analyze(&self, record: &SequenceRecord) -> Result<OrfReport> {
        let all = self.scan_all(&record.residues)?;
        let longest = longest(&all);
        let total_orfs = all.len();
        debug!(id = %record.id, total_orfs, "ORFs assemblés");

        let ranking = self.config.ranker().rank(all);
        info!(
            id = %record.id,
            length = record.len(),
            qualifying = ranking.qualifying,
            "Recherche d'ORFs terminée"
        );

        Ok(OrfReport {
            id: record.id.clone(),
            sequence_length: record.len(),
            total_orfs,
            qualifying: ranking.qualifying,
            hidden: ranking.hidden,
            longest,
            orfs: ranking.orfs,
        })
    }

    /// Analyse plusieurs séquences en parallèle, résultats dans l'ordre d'entrée
    pub fn analyze_all(&self, records: &[SequenceRecord]) -> Result<Vec<OrfReport>> {
        records.par_iter().map(|record| self.analyze(record)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codon_predicates() {
        assert!(is_start_codon(b"ATG"));
        assert!(is_start_codon(b"aTg"));
        assert!(!is_start_codon(b"ATN"));
        assert!(!is_start_codon(b"AT"));
        for stop in STOP_CODONS {
            assert!(is_stop_codon(stop));
        }
        assert!(is_stop_codon(b"tga"));
        assert!(!is_stop_codon(b"TGG"));
        assert!(!is_stop_codon(b"NAA"));
    }

    #[test]
    fn test_reverse_strand_coordinates() {
        // CTATTTCAT = complément inverse de ATGAAATAG
        let finder = OrfFinder::default();
        let orfs = finder.scan_all(b"GCTATTTCAT").unwrap();

        assert_eq!(orfs.len(), 1);
        let orf = orfs[0];
        assert_eq!(orf.strand, Strand::Reverse);
        assert_eq!(orf.frame.number(), 1);
        assert_eq!((orf.start, orf.end, orf.length), (2, 10, 9));
        assert_eq!(orf.nucleotides(b"GCTATTTCAT"), Some(b"ATGAAATAG".to_vec()));
        assert_eq!(orf.codons(), 3);
    }

    #[test]
    fn test_nucleotides_outside_sequence() {
        let orf = Orf::new(Strand::Forward, Frame::new(0).unwrap(), Interval::new(1, 9));
        assert_eq!(orf.nucleotides(b"ATGAAATAG"), Some(b"ATGAAATAG".to_vec()));
        assert_eq!(orf.nucleotides(b"ATGAAA"), None);

        let zero = Orf::new(Strand::Forward, Frame::new(0).unwrap(), Interval::new(0, 3));
        assert_eq!(zero.nucleotides(b"ATGAAATAG"), None);
    }

    #[test]
    fn test_inverted_interval_gives_empty_orf() {
        let orf = Orf::new(Strand::Reverse, Frame::new(1).unwrap(), Interval::new(5, 1));
        assert_eq!(orf.length, 0);
        assert_eq!(orf.codons(), 0);
        assert_eq!(orf.nucleotides(b"ATGAAATAG"), None);
    }

    #[test]
    fn test_scan_order_is_deterministic() {
        let seq = b"ATGAAATAGCTATTTCATATGCCCTAA";
        let finder = OrfFinder::default();
        let first = finder.scan_all(seq).unwrap();
        for _ in 0..10 {
            assert_eq!(finder.scan_all(seq).unwrap(), first);
        }
        assert!(first.windows(2).all(|w| w[0].strand <= w[1].strand));
    }

    #[test]
    fn test_analyze_keeps_longest_outside_filter() {
        let record = SequenceRecord::new("court", b"ATGAAATAG".to_vec());
        let report = OrfFinder::default().analyze(&record).unwrap();

        assert_eq!(report.total_orfs, 1);
        assert_eq!(report.qualifying, 0);
        assert!(report.orfs.is_empty());
        assert_eq!(report.longest.map(|o| o.length), Some(9));
    }

    #[test]
    fn test_analyze_empty_sequence() {
        let record = SequenceRecord::new("vide", Vec::new());
        let report = OrfFinder::default().analyze(&record).unwrap();

        assert_eq!(report.total_orfs, 0);
        assert_eq!(report.longest, None);
    }

    #[test]
    fn test_orf_json_shape() {
        let orf = Orf::new(Strand::Reverse, Frame::new(2).unwrap(), Interval::new(4, 12));
        let json = serde_json::to_value(orf).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"strand": "-", "frame": 3, "start": 4, "end": 12, "length": 9})
        );
    }
}
