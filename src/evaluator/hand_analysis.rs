use super::rank_groups::RankGroups;
use super::straight_info::straight_high;
use crate::cards::{Card, Rank};

/// Pre-computed facts about a 5-card hand.
/// Built once and shared by all category trials.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Rank ascending, then suit.
    pub sorted_cards: [Card; 5],
    pub ranks_desc: [Rank; 5],
    pub groups: RankGroups,
    pub is_flush: bool,
    pub straight_high: Option<Rank>,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut sorted_cards = *cards;
        sorted_cards.sort();

        let ranks_asc = sorted_cards.map(Card::rank);
        let mut ranks_desc = ranks_asc;
        ranks_desc.reverse();

        let first_suit = sorted_cards[0].suit();
        let is_flush = sorted_cards.iter().all(|c| c.suit() == first_suit);

        Self {
            sorted_cards,
            ranks_desc,
            groups: RankGroups::from_cards(&sorted_cards),
            is_flush,
            straight_high: straight_high(&ranks_asc),
        }
    }
}
