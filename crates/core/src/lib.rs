//! seqtools Core Library
//!
//! Analyse de séquences nucléotidiques: recherche d'ORFs sur six cadres,
//! composition, profil GC et usage des codons.

pub mod codon_usage;
pub mod composition;
pub mod error;
pub mod fasta;
pub mod gc_window;
pub mod logging;
pub mod orf;
pub mod sequence;

// Réexportations principales
pub use codon_usage::{amino_acid, CodonCount, CodonUsage};
pub use composition::{CompositionStats, DinucleotideFrequency};
pub use error::{Result, SeqError};
pub use fasta::{parse_fasta, read_fasta_file};
pub use gc_window::{sliding_gc, GcPoint, GcProfile, GcWindowConfig};
pub use logging::init_logging;
// Les macros log_operation et log_error sont automatiquement exportées à la racine du crate
pub use orf::{Interval, Orf, OrfConfig, OrfFinder, OrfRanker, OrfReport};
pub use sequence::{reverse_complement, Frame, SequenceRecord, Strand};
