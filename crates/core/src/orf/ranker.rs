//! Classement, filtrage et troncature des ORFs

use super::Orf;
use std::cmp::Ordering;

/// Ordre de présentation des ORFs
///
/// Longueur décroissante, puis début croissant sur le brin direct, puis brin
/// direct avant inverse, puis cadre croissant.
pub fn rank_order(a: &Orf, b: &Orf) -> Ordering {
    b.length
        .cmp(&a.length)
        .then_with(|| a.start.cmp(&b.start))
        .then_with(|| a.strand.cmp(&b.strand))
        .then_with(|| a.frame.cmp(&b.frame))
        .then_with(|| a.end.cmp(&b.end))
}

/// ORF le plus long d'un ensemble, selon `rank_order`
pub fn longest(orfs: &[Orf]) -> Option<Orf> {
    orfs.iter().copied().min_by(rank_order)
}

/// Résultat du classement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ranking {
    /// ORFs retenus, triés
    pub orfs: Vec<Orf>,
    /// Nombre d'ORFs passant le filtre de longueur
    pub qualifying: usize,
    /// ORFs qualifiés mais coupés par la limite d'affichage
    pub hidden: usize,
}

/// Classeur paramétré par la longueur minimale et la limite d'affichage
#[derive(Debug, Clone, Copy)]
pub struct OrfRanker {
    min_length: usize,
    limit: Option<usize>,
}

impl OrfRanker {
    /// `limit = None` garde tous les ORFs qualifiés
    pub fn new(min_length: usize, limit: Option<usize>) -> Self {
        Self { min_length, limit }
    }

    /// Filtre, trie puis tronque
    pub fn rank(&self, orfs: impl IntoIterator<Item = Orf>) -> Ranking {
        let mut kept: Vec<Orf> = orfs
            .into_iter()
            .filter(|orf| orf.length >= self.min_length)
            .collect();
        kept.sort_unstable_by(rank_order);

        let qualifying = kept.len();
        if let Some(limit) = self.limit {
            kept.truncate(limit);
        }

        Ranking {
            hidden: qualifying - kept.len(),
            orfs: kept,
            qualifying,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orf::mapper::Interval;
    use crate::sequence::{Frame, Strand};

    fn orf(strand: Strand, frame: u8, start: usize, length: usize) -> Orf {
        Orf::new(
            strand,
            Frame::new(frame).unwrap(),
            Interval::new(start, start + length - 1),
        )
    }

    #[test]
    fn test_min_length_filter_is_inclusive() {
        let orfs = [90, 300, 301, 5592]
            .into_iter()
            .enumerate()
            .map(|(i, len)| orf(Strand::Forward, 0, 1 + i * 3, len));

        let ranking = OrfRanker::new(300, None).rank(orfs);
        let lengths: Vec<usize> = ranking.orfs.iter().map(|o| o.length).collect();
        assert_eq!(lengths, vec![5592, 301, 300]);
        assert_eq!(ranking.qualifying, 3);
        assert_eq!(ranking.hidden, 0);
    }

    #[test]
    fn test_tie_break_order() {
        let a = orf(Strand::Reverse, 0, 10, 30);
        let b = orf(Strand::Forward, 2, 10, 30);
        let c = orf(Strand::Forward, 1, 10, 30);
        let d = orf(Strand::Forward, 0, 4, 30);
        let e = orf(Strand::Reverse, 2, 1, 60);

        let ranking = OrfRanker::new(0, None).rank(vec![a, b, c, d, e]);
        assert_eq!(ranking.orfs, vec![e, d, c, b, a]);
    }

    #[test]
    fn test_limit_applies_after_sorting() {
        let orfs: Vec<Orf> = (1..=25).map(|i| orf(Strand::Forward, 0, i * 3, i * 3)).collect();

        let ranking = OrfRanker::new(0, Some(20)).rank(orfs.clone());
        assert_eq!(ranking.orfs.len(), 20);
        assert_eq!(ranking.orfs[0].length, 75);
        assert_eq!(ranking.orfs[19].length, 18);
        assert_eq!(ranking.qualifying, 25);
        assert_eq!(ranking.hidden, 5);

        assert_eq!(OrfRanker::new(0, None).rank(orfs).orfs.len(), 25);
    }

    #[test]
    fn test_longest() {
        assert_eq!(longest(&[]), None);

        let short = orf(Strand::Forward, 0, 1, 9);
        let long_rev = orf(Strand::Reverse, 1, 40, 99);
        let long_fwd = orf(Strand::Forward, 2, 40, 99);
        assert_eq!(longest(&[short, long_rev, long_fwd]), Some(long_fwd));
    }
}
