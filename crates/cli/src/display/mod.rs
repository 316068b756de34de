//! Mise en forme des rapports

pub mod tables;

use console::style;
use std::path::Path;

/// En-tête de rapport: fichier analysé et nombre de séquences
pub fn print_file_header(path: &Path, sequences: usize) {
    println!();
    println!("Fichier   : {}", style(path.display()).bold());
    println!("Séquences : {}", sequences);
    println!();
}

/// Bandeau de titre d'une commande
pub fn print_banner(title: &str) {
    let rule = "=".repeat(60);
    println!("{}", rule);
    println!("  {}", style(title).bold().cyan());
    println!("{}", rule);
}

/// Ligne d'en-tête d'une séquence
pub fn print_record_header(id: &str, length: usize) {
    println!();
    println!("{}  [{} pb]", style(format!(">{}", id)).bold().green(), length);
}

/// Écrit une valeur en JSON indenté sur stdout
pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
