//! CLI pour l'analyse de séquences FASTA

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use seqtools_core::{init_logging, log_error};
use std::path::PathBuf;

mod commands;
mod config;
mod display;

use commands::{codon, gc_window, orf, stats};
use crate::config::{AppConfig, DEFAULT_CONFIG_FILE};

#[derive(Parser)]
#[command(name = "seqtools")]
#[command(about = "Boîte à outils d'analyse de séquences FASTA", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Niveau de verbosité
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Fichier de configuration TOML
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Format de sortie
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Statistiques de composition nucléotidique
    Stats {
        /// Fichier FASTA (par défaut: l'unique .fasta du répertoire)
        file: Option<PathBuf>,
    },

    /// Recherche d'ORFs sur les six cadres de lecture
    Orf {
        /// Fichier FASTA (par défaut: l'unique .fasta du répertoire)
        file: Option<PathBuf>,

        /// Longueur minimale d'un ORF en pb
        #[arg(long = "min", value_name = "BP")]
        min_length: Option<usize>,

        /// Afficher tous les ORFs (par défaut: les 20 plus longs par séquence)
        #[arg(long)]
        all_frames: bool,
    },

    /// Profil GC en fenêtre glissante
    #[command(name = "gc-window", alias = "gc_window")]
    GcWindow {
        /// Fichier FASTA (par défaut: l'unique .fasta du répertoire)
        file: Option<PathBuf>,

        /// Taille de fenêtre en pb
        #[arg(long, value_name = "BP")]
        window: Option<usize>,

        /// Pas en pb
        #[arg(long, value_name = "BP")]
        step: Option<usize>,
    },

    /// Table d'usage des codons (cadre +1)
    Codon {
        /// Fichier FASTA (par défaut: l'unique .fasta du répertoire)
        file: Option<PathBuf>,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// `seqtools genome.fasta` équivaut à `seqtools stats genome.fasta`
fn normalize_args(mut args: Vec<String>) -> Vec<String> {
    if args.get(1).is_some_and(|arg| arg.ends_with(".fasta")) {
        args.insert(1, "stats".to_string());
    }
    args
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args().collect()));

    let mut app_config = AppConfig::load_from_file(&cli.config)?;
    init_logging(app_config.log_level(cli.verbose));

    if let Err(e) = run(cli, &mut app_config) {
        return Err(log_error!(e));
    }

    Ok(())
}

fn run(cli: Cli, app_config: &mut AppConfig) -> anyhow::Result<()> {
    let format = cli.format;

    match cli.command {
        Commands::Stats { file } => {
            stats::run(file, format)?;
        }
        Commands::Orf {
            file,
            min_length,
            all_frames,
        } => {
            app_config.apply_orf_flags(min_length, all_frames);
            orf::run(file, app_config.orf.clone(), format)?;
        }
        Commands::GcWindow { file, window, step } => {
            app_config.apply_gc_flags(window, step);
            gc_window::run(file, app_config.gc_window, format)?;
        }
        Commands::Codon { file } => {
            codon::run(file, format)?;
        }
    }

    Ok(())
}

/// Crée une barre de progression
pub fn create_progress_bar(length: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(length);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
    );
    pb.set_message(msg.to_string());
    pb
}

/// Crée une barre de progression spinner
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb
}
