use crate::cards::{Card, CardParseError};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error(transparent)]
    Card(#[from] CardParseError),
    #[error("invalid hand '{hand}': expected 5 cards, found {found}")]
    CardCount { hand: String, found: usize },
    #[error("invalid hand '{hand}': duplicate card {card}")]
    DuplicateCard { hand: String, card: Card },
}

/// Five distinct cards in the order the player supplied them.
///
/// ```
/// use poker_showdown::hand::Hand;
///
/// let hand: Hand = "  5♢ 2♡   8♡ A♡ J♡ ".parse().unwrap();
/// assert_eq!(hand.to_string(), "5♢ 2♡ 8♡ A♡ J♡");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn try_new(cards: [Card; HAND_SIZE]) -> Result<Self, HandError> {
        if let Some(card) = first_duplicate(&cards) {
            return Err(HandError::DuplicateCard { hand: render(&cards), card });
        }
        Ok(Self { cards })
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] = slice
            .try_into()
            .map_err(|_| HandError::CardCount { hand: render(slice), found: slice.len() })?;
        Self::try_new(cards)
    }

    /// Cards in input order.
    pub fn as_array(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.cards))
    }
}

impl FromStr for Hand {
    type Err = HandError;

    /// Tokens are checked left to right: a bad card or a repeated card is
    /// reported before the card count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hand = s.trim();
        let mut seen = HashSet::with_capacity(HAND_SIZE);
        let mut cards = Vec::with_capacity(HAND_SIZE);
        for token in hand.split_whitespace() {
            let card: Card = token.parse()?;
            if !seen.insert(card) {
                return Err(HandError::DuplicateCard { hand: hand.to_string(), card });
            }
            cards.push(card);
        }
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|v: Vec<Card>| HandError::CardCount { hand: hand.to_string(), found: v.len() })?;
        Ok(Self { cards })
    }
}

fn first_duplicate(cards: &[Card]) -> Option<Card> {
    let mut seen = HashSet::with_capacity(cards.len());
    cards.iter().copied().find(|c| !seen.insert(*c))
}

fn render(cards: &[Card]) -> String {
    cards.iter().map(Card::to_string).collect::<Vec<_>>().join(" ")
}
