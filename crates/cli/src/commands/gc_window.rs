//! Commande de profil GC en fenêtre glissante

use super::load_records;
use crate::display::{print_banner, print_file_header, print_json, print_record_header};
use crate::OutputFormat;
use anyhow::Result;
use console::style;
use seqtools_core::{log_operation, sliding_gc, GcProfile, GcWindowConfig};
use std::path::PathBuf;

pub fn run(file: Option<PathBuf>, config: GcWindowConfig, format: OutputFormat) -> Result<()> {
    config.validate()?;
    let (path, records) = load_records(file)?;

    let profiles = log_operation!("gc-window", {
        records
            .iter()
            .map(|record| sliding_gc(&record.id, &record.residues, config))
            .collect::<seqtools_core::Result<Vec<GcProfile>>>()?
    });

    match format {
        OutputFormat::Json => print_json(&profiles)?,
        OutputFormat::Table => {
            print_file_header(&path, records.len());
            print_banner(&format!(
                "SLIDING WINDOW GC  (fenêtre={} pb, pas={} pb)",
                config.window, config.step
            ));
            for profile in &profiles {
                print_profile(profile, config.window);
            }
        }
    }

    Ok(())
}

fn print_profile(profile: &GcProfile, window: usize) {
    if profile.is_skipped() {
        tracing::warn!(id = %profile.id, length = profile.sequence_length, "Séquence plus courte que la fenêtre");
        println!();
        println!(
            "  {} >{}: séquence plus courte que la fenêtre ({} pb < {} pb)",
            style("IGNORÉE").yellow(),
            profile.id,
            profile.sequence_length,
            window
        );
        return;
    }

    print_record_header(&profile.id, profile.sequence_length);
    println!("    Fenêtres     : {}", profile.points.len());
    println!("    GC global    : {:.2}%", profile.overall_gc);
    if let (Some(min), Some(max)) = (profile.min_gc(), profile.max_gc()) {
        println!("    Plage GC     : {:.2}% - {:.2}%", min, max);
    }
}
