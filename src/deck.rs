use crate::cards::{Card, Rank, Suit};
use crate::hand::{Hand, HAND_SIZE};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A standard 52-card deck. Every card is distinct, so hands dealt from one
/// deck never share a physical card.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use poker_showdown::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    /// A standard deck shuffled with a seeded RNG, for reproducible deals.
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_seeded(seed);
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deal five cards as a hand; `None` once fewer than five remain.
    /// The deck is left untouched when the top five do not form a hand.
    pub fn deal_hand(&mut self) -> Option<Hand> {
        let start = self.cards.len().checked_sub(HAND_SIZE)?;
        let hand = Hand::from_slice(&self.cards[start..]).ok()?;
        self.cards.truncate(start);
        Some(hand)
    }

    /// Deal up to `n` hands, stopping early if the deck runs out.
    pub fn deal_hands(&mut self, n: usize) -> Vec<Hand> {
        (0..n).map_while(|_| self.deal_hand()).collect()
    }
}
