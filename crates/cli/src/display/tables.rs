//! Tableaux des rapports

use seqtools_core::composition::BASES;
use seqtools_core::{CodonCount, CompositionStats, Orf};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct OrfRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Strand")]
    strand: char,
    #[tabled(rename = "Frame")]
    frame: u8,
    #[tabled(rename = "Start")]
    start: usize,
    #[tabled(rename = "End")]
    end: usize,
    #[tabled(rename = "Length")]
    length: String,
    #[tabled(rename = "Codons")]
    codons: usize,
}

/// Tableau des ORFs classés
pub fn orf_table(orfs: &[Orf]) -> Table {
    let rows = orfs.iter().enumerate().map(|(i, orf)| OrfRow {
        rank: i + 1,
        strand: orf.strand.symbol(),
        frame: orf.frame.number(),
        start: orf.start,
        end: orf.end,
        length: format!("{} bp", orf.length),
        codons: orf.codons(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table
}

#[derive(Tabled)]
struct CodonRow {
    #[tabled(rename = "Codon")]
    codon: String,
    #[tabled(rename = "AA")]
    amino_acid: &'static str,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Freq/1000")]
    per_thousand: String,
}

/// Tableau d'usage des codons
pub fn codon_table(rows: &[CodonCount]) -> Table {
    let rows = rows.iter().map(|row| CodonRow {
        codon: row.codon.clone(),
        amino_acid: row.amino_acid,
        count: row.count,
        per_thousand: format!("{:.2}", row.per_thousand),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table
}

#[derive(Tabled)]
struct BaseRow {
    #[tabled(rename = "Base")]
    base: char,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Ratio")]
    ratio: String,
}

/// Tableau des fréquences nucléotidiques
pub fn base_table(stats: &CompositionStats) -> Table {
    let counts = [stats.count_a, stats.count_c, stats.count_g, stats.count_t];
    let rows = BASES.into_iter().zip(counts).map(|(base, count)| BaseRow {
        base: char::from(base),
        count,
        ratio: format!("{:.2}%", stats.base_ratio(base) * 100.0),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table
}

#[derive(Tabled)]
struct DinucleotideRow {
    #[tabled(rename = "Pair")]
    pair: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Frequency")]
    frequency: String,
}

/// Tableau des fréquences dinucléotidiques
pub fn dinucleotide_table(stats: &CompositionStats) -> Table {
    let rows = stats.dinucleotides.iter().map(|d| DinucleotideRow {
        pair: d.pair.clone(),
        count: d.count,
        frequency: format!("{:.6}", d.frequency),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table
}
