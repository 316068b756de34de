//! Commande de recherche d'ORFs

use super::load_records;
use crate::display::{print_banner, print_file_header, print_json, print_record_header, tables};
use crate::{create_progress_bar, OutputFormat};
use anyhow::Result;
use console::style;
use rayon::prelude::*;
use seqtools_core::{log_operation, OrfConfig, OrfFinder, OrfReport};
use std::path::PathBuf;

pub fn run(file: Option<PathBuf>, config: OrfConfig, format: OutputFormat) -> Result<()> {
    let (path, records) = load_records(file)?;
    let finder = OrfFinder::new(config);

    let reports = log_operation!("orf", {
        let pb = create_progress_bar(records.len() as u64, "Recherche des ORFs...");
        let reports = records
            .par_iter()
            .map(|record| {
                let report = finder.analyze(record);
                pb.inc(1);
                report
            })
            .collect::<seqtools_core::Result<Vec<OrfReport>>>()?;
        pb.finish_and_clear();
        reports
    });

    match format {
        OutputFormat::Json => print_json(&reports)?,
        OutputFormat::Table => {
            print_file_header(&path, records.len());
            print_reports(&reports, finder.config());
        }
    }

    Ok(())
}

fn print_reports(reports: &[OrfReport], config: &OrfConfig) {
    print_banner(&format!(
        "ORF FINDER  (longueur min: {} pb, 6 cadres)",
        config.min_length
    ));

    for report in reports {
        print_record_header(&report.id, report.sequence_length);

        if let Some(longest) = report.longest {
            println!(
                "  ORF le plus long : {} pb  (brin {}, cadre {}, pos {}-{})",
                longest.length, longest.strand, longest.frame, longest.start, longest.end
            );
        }

        if report.orfs.is_empty() {
            println!("  Aucun ORF d'au moins {} pb.", config.min_length);
            continue;
        }

        println!("  ORFs retenus     : {} / {} trouvés", report.qualifying, report.total_orfs);
        println!("{}", tables::orf_table(&report.orfs));

        if report.hidden > 0 {
            println!(
                "  {}",
                style(format!(
                    "... ({} ORFs de plus, --all-frames pour tout afficher)",
                    report.hidden
                ))
                .dim()
            );
        }
    }
}
