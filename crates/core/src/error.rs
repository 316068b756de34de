//! Types d'erreurs pour la bibliothèque seqtools

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeqError {
    #[error("Cadre de lecture invalide: {0} (attendu 0, 1 ou 2)")]
    InvalidFrame(u8),

    #[error("Intervalle malformé: [{start}, {end}] hors de [1, {len}]")]
    MalformedInterval { start: usize, end: usize, len: usize },

    #[error("Fenêtre GC invalide: fenêtre {window}, pas {step}")]
    InvalidWindow { window: usize, step: usize },

    #[error("Erreur FASTA: {0}")]
    Fasta(String),

    #[error("Aucune séquence trouvée dans le fichier")]
    NoSequences,

    #[error("Erreur IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erreur de sérialisation: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SeqError>;
