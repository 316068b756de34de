//! Usage des codons sur le cadre +1, code génétique standard

use crate::sequence::CODON_LENGTH;
use serde::Serialize;
use std::collections::BTreeMap;

/// Acide aminé (code à trois lettres) d'un codon du code standard
///
/// `Stop` pour TAA, TAG et TGA; `None` pour tout triplet hors ACGT.
pub fn amino_acid(codon: &[u8]) -> Option<&'static str> {
    let aa = match codon {
        b"TTT" | b"TTC" => "Phe",
        b"TTA" | b"TTG" | b"CTT" | b"CTC" | b"CTA" | b"CTG" => "Leu",
        b"ATT" | b"ATC" | b"ATA" => "Ile",
        b"ATG" => "Met",
        b"GTT" | b"GTC" | b"GTA" | b"GTG" => "Val",
        b"TCT" | b"TCC" | b"TCA" | b"TCG" | b"AGT" | b"AGC" => "Ser",
        b"CCT" | b"CCC" | b"CCA" | b"CCG" => "Pro",
        b"ACT" | b"ACC" | b"ACA" | b"ACG" => "Thr",
        b"GCT" | b"GCC" | b"GCA" | b"GCG" => "Ala",
        b"TAT" | b"TAC" => "Tyr",
        b"TAA" | b"TAG" | b"TGA" => "Stop",
        b"CAT" | b"CAC" => "His",
        b"CAA" | b"CAG" => "Gln",
        b"AAT" | b"AAC" => "Asn",
        b"AAA" | b"AAG" => "Lys",
        b"GAT" | b"GAC" => "Asp",
        b"GAA" | b"GAG" => "Glu",
        b"TGT" | b"TGC" => "Cys",
        b"TGG" => "Trp",
        b"CGT" | b"CGC" | b"CGA" | b"CGG" | b"AGA" | b"AGG" => "Arg",
        b"GGT" | b"GGC" | b"GGA" | b"GGG" => "Gly",
        _ => return None,
    };
    Some(aa)
}

/// Ligne de la table d'usage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodonCount {
    pub codon: String,
    pub amino_acid: &'static str,
    pub count: usize,
    /// Fréquence pour mille codons
    pub per_thousand: f64,
}

/// Table d'usage des codons d'une séquence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodonUsage {
    pub id: String,
    pub sequence_length: usize,
    /// Codons ACGT complets comptés
    pub total: usize,
    /// Groupées par acide aminé (ordre alphabétique), puis par effectif décroissant
    pub rows: Vec<CodonCount>,
}

impl CodonUsage {
    /// Compte les codons aux positions 0, 3, 6...
    ///
    /// Les triplets contenant autre chose que A, C, G ou T sont ignorés.
    pub fn compute(id: &str, residues: &[u8]) -> Self {
        let mut counts: BTreeMap<&[u8], usize> = BTreeMap::new();
        for codon in residues.chunks_exact(CODON_LENGTH) {
            if amino_acid(codon).is_some() {
                *counts.entry(codon).or_default() += 1;
            }
        }

        let total: usize = counts.values().sum();
        let mut rows: Vec<CodonCount> = counts
            .into_iter()
            .filter_map(|(codon, count)| {
                amino_acid(codon).map(|aa| CodonCount {
                    codon: String::from_utf8_lossy(codon).into_owned(),
                    amino_acid: aa,
                    count,
                    per_thousand: count as f64 / total as f64 * 1000.0,
                })
            })
            .collect();

        rows.sort_by(|a, b| {
            a.amino_acid
                .cmp(b.amino_acid)
                .then_with(|| b.count.cmp(&a.count))
                .then_with(|| a.codon.cmp(&b.codon))
        });

        Self {
            id: id.to_string(),
            sequence_length: residues.len(),
            total,
            rows,
        }
    }
}
