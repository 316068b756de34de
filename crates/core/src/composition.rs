//! Composition nucléotidique et dinucléotidique

use serde::{Deserialize, Serialize};

/// Les quatre bases, dans l'ordre des compteurs
pub const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

fn base_index(base: u8) -> Option<usize> {
    match base {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Fréquence d'un dinucléotide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DinucleotideFrequency {
    pub pair: String,
    pub count: usize,
    /// `count / (N - 1)`
    pub frequency: f64,
}

/// Statistiques de composition d'une séquence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositionStats {
    pub count_a: usize,
    pub count_c: usize,
    pub count_g: usize,
    pub count_t: usize,
    /// Nombre de bases A, C, G ou T
    pub total: usize,
    pub gc_content: f64,
    pub at_content: f64,
    pub gc_skew: f64,
    pub at_skew: f64,
    /// Rapport CpG observé/attendu
    pub cpg_ratio: f64,
    /// Les 16 dinucléotides, ordre lexicographique
    pub dinucleotides: Vec<DinucleotideFrequency>,
}

impl CompositionStats {
    /// Calcule la composition des résidus (attendus en majuscules)
    pub fn compute(residues: &[u8]) -> Self {
        let mut mono = [0usize; 4];
        for index in residues.iter().filter_map(|&b| base_index(b)) {
            mono[index] += 1;
        }

        let mut di = [[0usize; 4]; 4];
        for pair in residues.windows(2) {
            if let (Some(first), Some(second)) = (base_index(pair[0]), base_index(pair[1])) {
                di[first][second] += 1;
            }
        }

        let [a, c, g, t] = mono;
        let total = a + c + g + t;
        let n = total as f64;
        let pair_total = total.saturating_sub(1) as f64;

        let dinucleotides = BASES
            .into_iter()
            .enumerate()
            .flat_map(|(i, first)| {
                let row = di[i];
                BASES.into_iter().enumerate().map(move |(j, second)| DinucleotideFrequency {
                    pair: String::from_utf8_lossy(&[first, second]).into_owned(),
                    count: row[j],
                    frequency: ratio(row[j] as f64, pair_total),
                })
            })
            .collect();

        let cg = di[1][2] as f64;

        Self {
            count_a: a,
            count_c: c,
            count_g: g,
            count_t: t,
            total,
            gc_content: ratio((g + c) as f64, n),
            at_content: ratio((a + t) as f64, n),
            gc_skew: ratio(g as f64 - c as f64, (g + c) as f64),
            at_skew: ratio(a as f64 - t as f64, (a + t) as f64),
            cpg_ratio: ratio(cg * n, (c * g) as f64),
            dinucleotides,
        }
    }

    /// Proportion d'une base parmi les ACGT
    pub fn base_ratio(&self, base: u8) -> f64 {
        let count = match base {
            b'A' => self.count_a,
            b'C' => self.count_c,
            b'G' => self.count_g,
            b'T' => self.count_t,
            _ => 0,
        };
        ratio(count as f64, self.total as f64)
    }

    /// Fréquence d'un dinucléotide ACGT (`"CG"`, `"TA"`...)
    pub fn dinucleotide(&self, pair: &str) -> Option<&DinucleotideFrequency> {
        self.dinucleotides.iter().find(|d| d.pair == pair)
    }
}
