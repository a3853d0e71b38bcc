use crate::cards::{Card, Rank};

/// Rank frequencies of a hand, grouped and sorted by (count desc, rank desc).
///
/// Example: A A A K Q groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Count each rank once; every category trial reads from this table.
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        for card in cards {
            counts[card.rank().value() as usize] += 1;
        }

        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .rev()
            .filter_map(|&rank| match counts[rank.value() as usize] {
                0 => None,
                n => Some((rank, n)),
            })
            .collect();
        // Ranks are already descending; a stable sort on count keeps that.
        groups.sort_by(|a, b| b.1.cmp(&a.1));

        Self { groups }
    }

    pub fn as_slice(&self) -> &[(Rank, u8)] {
        &self.groups
    }

    /// Counts only, e.g. [3, 1, 1] for three of a kind.
    #[cfg(test)]
    pub fn shape(&self) -> Vec<u8> {
        self.groups.iter().map(|&(_, count)| count).collect()
    }

    /// Ranks occurring exactly `count` times, highest first.
    #[cfg(test)]
    pub fn ranks_with(&self, count: u8) -> Vec<Rank> {
        self.groups.iter().filter(|&&(_, c)| c == count).map(|&(rank, _)| rank).collect()
    }
}
