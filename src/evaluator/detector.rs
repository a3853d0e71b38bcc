use super::hand_analysis::HandAnalysis;
use crate::evaluator::HandRank;

/// A category trial: `Some` when the hand belongs to that category.
type Trial = fn(&HandAnalysis) -> Option<HandRank>;

// ============================================================================
// Trials in priority order (highest to lowest). High card is the fallback.
// Each trial may assume every trial before it has already failed.
// ============================================================================

const TRIALS: [Trial; 8] = [
    straight_flush,
    four_of_a_kind,
    full_house,
    flush,
    straight,
    three_of_a_kind,
    two_pair,
    pair,
];

/// Classify an analysed hand. The first matching trial wins.
pub fn detect(analysis: &HandAnalysis) -> HandRank {
    TRIALS.iter().find_map(|trial| trial(analysis)).unwrap_or_else(|| high_card(analysis))
}

fn straight_flush(a: &HandAnalysis) -> Option<HandRank> {
    if !a.is_flush {
        return None;
    }
    a.straight_high.map(HandRank::StraightFlush)
}

fn four_of_a_kind(a: &HandAnalysis) -> Option<HandRank> {
    match *a.groups.as_slice() {
        [(quad, 4), (kicker, 1)] => Some(HandRank::FourOfAKind { quad, kicker }),
        _ => None,
    }
}

fn full_house(a: &HandAnalysis) -> Option<HandRank> {
    match *a.groups.as_slice() {
        [(trips, 3), (pair, 2)] => Some(HandRank::FullHouse { trips, pair }),
        _ => None,
    }
}

fn flush(a: &HandAnalysis) -> Option<HandRank> {
    a.is_flush.then_some(HandRank::Flush(a.ranks_desc))
}

fn straight(a: &HandAnalysis) -> Option<HandRank> {
    a.straight_high.map(HandRank::Straight)
}

fn three_of_a_kind(a: &HandAnalysis) -> Option<HandRank> {
    match *a.groups.as_slice() {
        [(trips, 3), (_, 1), (_, 1)] => Some(HandRank::ThreeOfAKind(trips)),
        _ => None,
    }
}

fn two_pair(a: &HandAnalysis) -> Option<HandRank> {
    match *a.groups.as_slice() {
        [(high, 2), (low, 2), (kicker, 1)] => Some(HandRank::TwoPair { high, low, kicker }),
        _ => None,
    }
}

fn pair(a: &HandAnalysis) -> Option<HandRank> {
    match *a.groups.as_slice() {
        [(pair, 2), (k0, 1), (k1, 1), (k2, 1)] => {
            Some(HandRank::Pair { pair, kickers: [k0, k1, k2] })
        }
        _ => None,
    }
}

fn high_card(a: &HandAnalysis) -> HandRank {
    HandRank::HighCard(a.ranks_desc)
}
