use crate::cards::Rank;

/// Shape of a hand's rank multiset, named after the category it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// [4, 1]
    Quads,
    /// [3, 2]
    FullHouse,
    /// [3, 1, 1]
    Trips,
    /// [2, 2, 1]
    TwoPair,
    /// [2, 1, 1, 1]
    OnePair,
    /// [1, 1, 1, 1, 1]
    Distinct,
}

/// Ranks of a hand grouped by multiplicity, sorted by (count desc, rank desc).
///
/// Example: AAKKQ groups as [(Ace, 2), (King, 2), (Queen, 1)]. Reading the ranks off in
/// that order gives the kicker sequence for every paired category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankMultiset {
    groups: Vec<(Rank, u8)>,
}

impl RankMultiset {
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut counts = [0u8; 15];
        for rank in ranks {
            counts[rank.value() as usize] += 1;
        }

        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .filter_map(|&rank| {
                let count = counts[rank.value() as usize];
                (count > 0).then_some((rank, count))
            })
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    pub fn multiplicity(&self, rank: Rank) -> u8 {
        self.groups.iter().find(|(r, _)| *r == rank).map_or(0, |(_, count)| *count)
    }

    pub fn multiplicities(&self) -> Vec<u8> {
        self.groups.iter().map(|(_, count)| *count).collect()
    }

    pub fn pattern(&self) -> Pattern {
        let mut counts = self.groups.iter().map(|(_, count)| *count);
        match (counts.next(), counts.next()) {
            // five of a rank cannot come from one deck; treat it as quads
            (Some(4..), _) => Pattern::Quads,
            (Some(3), Some(2)) => Pattern::FullHouse,
            (Some(3), _) => Pattern::Trips,
            (Some(2), Some(2)) => Pattern::TwoPair,
            (Some(2), _) => Pattern::OnePair,
            _ => Pattern::Distinct,
        }
    }

    /// Distinct ranks in group order.
    pub fn tiebreak(&self) -> Vec<Rank> {
        self.groups.iter().map(|(rank, _)| *rank).collect()
    }
}
