pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;

use crate::cards::{Card, Rank};
use crate::hand::Hand;
use core::cmp::Ordering;
use std::fmt;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    /// 1 (high card) through 9 (straight flush).
    pub const fn priority(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A hand's category together with its tie-break key.
///
/// Variants are declared weakest first, so the derived `Ord` compares the
/// category before the payload, and payload fields compare in declaration
/// order. Straights carry their top rank, which is Five for the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// All five ranks, descending.
    HighCard([Rank; 5]),
    /// Remaining three ranks descending.
    Pair { pair: Rank, kickers: [Rank; 3] },
    TwoPair { high: Rank, low: Rank, kicker: Rank },
    ThreeOfAKind(Rank),
    Straight(Rank),
    /// All five ranks, descending.
    Flush([Rank; 5]),
    FullHouse { trips: Rank, pair: Rank },
    FourOfAKind { quad: Rank, kicker: Rank },
    StraightFlush(Rank),
}

impl HandRank {
    pub const fn category(&self) -> Category {
        match self {
            HandRank::HighCard(_) => Category::HighCard,
            HandRank::Pair { .. } => Category::Pair,
            HandRank::TwoPair { .. } => Category::TwoPair,
            HandRank::ThreeOfAKind(_) => Category::ThreeOfAKind,
            HandRank::Straight(_) => Category::Straight,
            HandRank::Flush(_) => Category::Flush,
            HandRank::FullHouse { .. } => Category::FullHouse,
            HandRank::FourOfAKind { .. } => Category::FourOfAKind,
            HandRank::StraightFlush(_) => Category::StraightFlush,
        }
    }

    /// Tie-break key as rank values, most significant first.
    pub fn tie_break(&self) -> Vec<u8> {
        let ranks: Vec<Rank> = match *self {
            HandRank::HighCard(ranks) | HandRank::Flush(ranks) => ranks.to_vec(),
            HandRank::Pair { pair, kickers: [k0, k1, k2] } => vec![pair, k0, k1, k2],
            HandRank::TwoPair { high, low, kicker } => vec![high, low, kicker],
            HandRank::ThreeOfAKind(trips) => vec![trips],
            HandRank::Straight(top) | HandRank::StraightFlush(top) => vec![top],
            HandRank::FullHouse { trips, pair } => vec![trips, pair],
            HandRank::FourOfAKind { quad, kicker } => vec![quad, kicker],
        };
        ranks.into_iter().map(Rank::value).collect()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            HandRank::HighCard(ranks) => write!(f, "High Card, {} high", ranks[0]),
            HandRank::Pair { pair, .. } => write!(f, "Pair of {pair}s"),
            HandRank::TwoPair { high, low, .. } => write!(f, "Two Pair, {high}s and {low}s"),
            HandRank::ThreeOfAKind(trips) => write!(f, "Three of a Kind, {trips}s"),
            HandRank::Straight(top) => write!(f, "Straight, {top} high"),
            HandRank::Flush(ranks) => write!(f, "Flush, {} high", ranks[0]),
            HandRank::FullHouse { trips, pair } => write!(f, "Full House, {trips}s over {pair}s"),
            HandRank::FourOfAKind { quad, .. } => write!(f, "Four of a Kind, {quad}s"),
            HandRank::StraightFlush(top) => write!(f, "Straight Flush, {top} high"),
        }
    }
}

/// Classify exactly five cards; detects category and extracts tie-breakers.
///
/// ```
/// use poker_showdown::cards::{Card, Rank, Suit};
/// use poker_showdown::evaluator::{evaluate_five, Category, HandRank};
///
/// let wheel = [
///     Card::new(Rank::Ace, Suit::Clubs),
///     Card::new(Rank::Two, Suit::Diamonds),
///     Card::new(Rank::Three, Suit::Hearts),
///     Card::new(Rank::Four, Suit::Spades),
///     Card::new(Rank::Five, Suit::Clubs),
/// ];
/// let rank = evaluate_five(&wheel);
/// assert_eq!(rank.category(), Category::Straight);
/// assert_eq!(rank, HandRank::Straight(Rank::Five));
/// ```
pub fn evaluate_five(cards: &[Card; 5]) -> HandRank {
    let analysis = hand_analysis::HandAnalysis::new(cards);
    detector::detect(&analysis)
}

/// A parsed hand with its classification. Ordering and equality only look
/// at the [`HandRank`], so hands of equal strength compare equal.
#[derive(Debug, Clone)]
pub struct ClassifiedHand {
    display: String,
    cards: [Card; 5],
    rank: HandRank,
}

impl ClassifiedHand {
    /// Canonical display string, cards in the order the player gave them.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Cards sorted by rank ascending.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    pub const fn rank(&self) -> HandRank {
        self.rank
    }

    pub const fn category(&self) -> Category {
        self.rank.category()
    }

    pub fn tie_break(&self) -> Vec<u8> {
        self.rank.tie_break()
    }
}

impl Ord for ClassifiedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl PartialOrd for ClassifiedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ClassifiedHand {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for ClassifiedHand {}

/// Classify a validated hand.
///
/// ```
/// use poker_showdown::evaluator::{classify, Category};
/// use poker_showdown::hand::Hand;
///
/// let hand: Hand = "2♢ 2♡ 3♡ 4♡ 5♡".parse().unwrap();
/// let classified = classify(&hand);
/// assert_eq!(classified.category(), Category::Pair);
/// assert_eq!(classified.display(), "2♢ 2♡ 3♡ 4♡ 5♡");
/// assert_eq!(classified.tie_break(), vec![2, 5, 4, 3]);
/// ```
pub fn classify(hand: &Hand) -> ClassifiedHand {
    let analysis = hand_analysis::HandAnalysis::new(hand.as_array());
    let rank = detector::detect(&analysis);
    ClassifiedHand { display: hand.to_string(), cards: analysis.sorted_cards, rank }
}

/// Compare two classified hands: category first, then tie-break key.
///
/// ```
/// use poker_showdown::evaluator::{classify, compare};
/// use poker_showdown::hand::Hand;
/// use std::cmp::Ordering;
///
/// let a = classify(&"A♡ K♤ Q♢ J♢ 10♧".parse::<Hand>().unwrap());
/// let b = classify(&"10♡ J♤ Q♧ K♧ A♢".parse::<Hand>().unwrap());
/// assert_eq!(compare(&a, &b), Ordering::Equal);
/// ```
pub fn compare(a: &ClassifiedHand, b: &ClassifiedHand) -> Ordering {
    a.cmp(b)
}
