//! Lecture des fichiers FASTA

use crate::error::{Result, SeqError};
use crate::sequence::SequenceRecord;
use bio::io::fasta;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Parse toutes les entrées FASTA d'un flux
///
/// L'identifiant conserve la ligne d'en-tête complète (id et description),
/// même vide ou commençant par une espace. Les résidus sont mis en majuscules.
pub fn parse_fasta<R: Read>(reader: R) -> Result<Vec<SequenceRecord>> {
    let mut records = Vec::new();

    for result in fasta::Reader::new(reader).records() {
        let record = result.map_err(format_error)?;
        if !record.seq().is_ascii() {
            return Err(SeqError::Fasta(format!(
                "caractère non ASCII dans la séquence '{}'",
                header(&record)
            )));
        }

        records.push(SequenceRecord::new(header(&record), record.seq().to_ascii_uppercase()));
    }

    debug!(records = records.len(), "FASTA lu");
    Ok(records)
}

/// Reconstruit la ligne d'en-tête sans le '>'
///
/// bio coupe au premier blanc: `> gene1 desc` donne un id vide et la
/// description `gene1 desc`.
fn header(record: &fasta::Record) -> String {
    match record.desc() {
        Some(desc) => format!("{} {}", record.id(), desc),
        None => record.id().to_string(),
    }
}

/// Erreurs de format (UTF-8 invalide, '>' manquant) contre erreurs d'E/S
fn format_error(err: io::Error) -> SeqError {
    match err.kind() {
        io::ErrorKind::InvalidData | io::ErrorKind::Other => SeqError::Fasta(err.to_string()),
        _ => SeqError::Io(err),
    }
}

/// Lit un fichier FASTA depuis le disque
pub fn read_fasta_file(path: impl AsRef<Path>) -> Result<Vec<SequenceRecord>> {
    let file = File::open(path.as_ref())?;
    parse_fasta(BufReader::new(file))
}
