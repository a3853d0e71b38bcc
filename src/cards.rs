use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Rank::value`]; `None` outside 2..=14.
    pub const fn from_value(v: u8) -> Option<Rank> {
        match v {
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            14 => Some(Rank::Ace),
            _ => None,
        }
    }

    /// Canonical token used in display strings. Ten renders as "10".
    pub const fn as_str(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankParseError {
    #[error("invalid card rank: '{0}'")]
    Invalid(String),
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let r = match upper.as_str() {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(RankParseError::Invalid(s.to_string())),
        };
        Ok(r)
    }
}

/// Four suits. They carry no hand strength; the derived order only exists so
/// cards can be sorted and used as map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Outline glyph used in display strings.
    pub const fn glyph(self) -> char {
        match self {
            Suit::Clubs => '♧',
            Suit::Diamonds => '♢',
            Suit::Hearts => '♡',
            Suit::Spades => '♤',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SuitParseError {
    #[error("invalid card suit: '{0}'")]
    Invalid(String),
}

impl TryFrom<char> for Suit {
    type Error = SuitParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '♧' | '♣' | 'c' | 'C' => Ok(Suit::Clubs),
            '♢' | '♦' | 'd' | 'D' => Ok(Suit::Diamonds),
            '♡' | '♥' | 'h' | 'H' => Ok(Suit::Hearts),
            '♤' | '♠' | 's' | 'S' => Ok(Suit::Spades),
            _ => Err(SuitParseError::Invalid(c.to_string())),
        }
    }
}

/// A playing card: rank + suit. Equal cards are the same physical card.
///
/// ```
/// use poker_showdown::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ten, Suit::Hearts);
/// assert_eq!(card.to_string(), "10♡");
/// assert_eq!("10♡".parse::<Card>().unwrap(), card);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
    pub const fn suit(self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Rank(#[from] RankParseError),
    #[error(transparent)]
    Suit(#[from] SuitParseError),
}

impl FromStr for Card {
    type Err = CardParseError;

    /// The suit is the last character; everything before it is the rank.
    /// The rank is checked first, so "11x" reports the rank.
    ///
    /// Input accepts more spellings than `Display` produces: ranks are
    /// case-insensitive and Ten may be written "T", suits may be filled
    /// glyphs or ASCII letters. Display always writes "10" and outline glyphs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let Some((split, suit_ch)) = t.char_indices().last() else {
            return Err(CardParseError::Invalid(s.to_string()));
        };
        if split == 0 {
            return Err(CardParseError::Invalid(s.to_string()));
        }

        let rank = Rank::from_str(&t[..split])?;
        let suit = Suit::try_from(suit_ch)?;
        Ok(Card::new(rank, suit))
    }
}
