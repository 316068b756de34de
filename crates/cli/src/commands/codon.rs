//! Commande d'usage des codons

use super::load_records;
use crate::display::{print_banner, print_file_header, print_json, print_record_header, tables};
use crate::OutputFormat;
use anyhow::Result;
use seqtools_core::{log_operation, CodonUsage};
use std::path::PathBuf;

pub fn run(file: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let (path, records) = load_records(file)?;

    let usages: Vec<CodonUsage> = log_operation!("codon", {
        records
            .iter()
            .map(|record| CodonUsage::compute(&record.id, &record.residues))
            .collect()
    });

    match format {
        OutputFormat::Json => print_json(&usages)?,
        OutputFormat::Table => {
            print_file_header(&path, records.len());
            print_banner("CODON USAGE TABLE");
            for usage in &usages {
                print_record_header(&usage.id, usage.sequence_length);
                if usage.total == 0 {
                    println!("  Aucun codon valide.");
                    continue;
                }
                println!("{}", tables::codon_table(&usage.rows));
                println!("  Codons analysés : {}", usage.total);
            }
        }
    }

    Ok(())
}
