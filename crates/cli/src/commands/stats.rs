//! Commande de statistiques de composition

use super::load_records;
use crate::display::{print_banner, print_file_header, print_json, print_record_header, tables};
use crate::OutputFormat;
use anyhow::Result;
use seqtools_core::{log_operation, CompositionStats};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct RecordStats<'a> {
    id: &'a str,
    length: usize,
    #[serde(flatten)]
    stats: CompositionStats,
}

pub fn run(file: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let (path, records) = load_records(file)?;

    let all_stats: Vec<RecordStats> = log_operation!("stats", {
        records
            .iter()
            .map(|record| RecordStats {
                id: &record.id,
                length: record.len(),
                stats: CompositionStats::compute(&record.residues),
            })
            .collect()
    });

    match format {
        OutputFormat::Json => print_json(&all_stats)?,
        OutputFormat::Table => {
            print_file_header(&path, records.len());
            print_banner("ANALYSIS REPORT");
            for entry in &all_stats {
                print_stats(entry);
            }
        }
    }

    Ok(())
}

fn print_stats(entry: &RecordStats) {
    let stats = &entry.stats;

    print_record_header(entry.id, entry.length);
    println!("  Bases ACGT      : {} pb", stats.total);
    println!("  GC content      : {:.2}%", stats.gc_content * 100.0);
    println!("  AT content      : {:.2}%", stats.at_content * 100.0);
    println!();
    println!("{}", tables::base_table(stats));
    println!("{}", tables::dinucleotide_table(stats));
    println!("  GC skew         : {:.6}", stats.gc_skew);
    println!("  AT skew         : {:.6}", stats.at_skew);
    println!("  CpG obs/exp     : {:.6}", stats.cpg_ratio);
}
