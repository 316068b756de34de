//! Sous-commandes

pub mod codon;
pub mod gc_window;
pub mod orf;
pub mod stats;

use crate::create_spinner;
use anyhow::{bail, Context, Result};
use seqtools_core::{read_fasta_file, SeqError, SequenceRecord};
use std::path::{Path, PathBuf};

/// Résout le fichier d'entrée
///
/// Sans argument, prend l'unique fichier `.fasta` du répertoire courant.
pub fn resolve_input(file: Option<PathBuf>) -> Result<PathBuf> {
    resolve_input_in(file, Path::new("."))
}

fn resolve_input_in(file: Option<PathBuf>, dir: &Path) -> Result<PathBuf> {
    if let Some(path) = file {
        if !path.exists() {
            bail!("Fichier introuvable: {}", path.display());
        }
        return Ok(path);
    }

    let mut candidates: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("Lecture du répertoire {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "fasta"))
        .collect();
    candidates.sort();

    match candidates.len() {
        0 => bail!("Aucun fichier .fasta trouvé. Précisez le fichier en argument."),
        1 => Ok(candidates.remove(0)),
        _ => {
            let names: Vec<String> = candidates
                .iter()
                .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
                .collect();
            bail!(
                "Plusieurs fichiers .fasta trouvés ({}). Usage: seqtools <commande> fichier.fasta",
                names.join(", ")
            )
        }
    }
}

/// Charge les séquences d'un fichier FASTA
pub fn load_records(file: Option<PathBuf>) -> Result<(PathBuf, Vec<SequenceRecord>)> {
    let path = resolve_input(file)?;

    let spinner = create_spinner("Lecture des séquences...");
    let records = read_fasta_file(&path)
        .with_context(|| format!("Lecture de {}", path.display()))?;
    spinner.finish_and_clear();

    if records.is_empty() {
        return Err(SeqError::NoSequences.into());
    }

    tracing::info!(file = %path.display(), sequences = records.len(), "Fichier chargé");
    Ok((path, records))
}
