//! Resolve a showdown between any number of five-card hands.

use crate::cards::Card;
use crate::evaluator::{classify, ClassifiedHand};
use crate::hand::{Hand, HandError};
use log::{debug, trace};
use std::collections::HashMap;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShowdownError {
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error("card {card} used {count} times")]
    DuplicateCard { card: Card, count: usize },
}

/// Parse, validate and classify every hand, strongest first.
///
/// The sort is stable: hands of equal strength keep their input order.
pub fn rank_hands<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<ClassifiedHand>, ShowdownError> {
    let hands = inputs.iter().map(|s| s.as_ref().parse::<Hand>()).collect::<Result<Vec<_>, _>>()?;
    check_unique_cards(&hands)?;

    let mut ranked: Vec<ClassifiedHand> = hands
        .iter()
        .map(|hand| {
            let classified = classify(hand);
            debug!("'{}' classified as {}", classified.display(), classified.rank());
            classified
        })
        .collect();
    ranked.sort_by(|a, b| b.cmp(a));
    trace!("ranking: {:?}", ranked.iter().map(ClassifiedHand::display).collect::<Vec<_>>());
    Ok(ranked)
}

/// The leading run of hands equal to the strongest one.
/// `ranked` must already be sorted strongest first.
pub fn winners(ranked: &[ClassifiedHand]) -> &[ClassifiedHand] {
    let Some(best) = ranked.first() else {
        return &[];
    };
    let end = ranked.iter().position(|hand| hand != best).unwrap_or(ranked.len());
    &ranked[..end]
}

/// Return the display strings of the winning hand(s), in input order among
/// ties. Any invalid hand or reused card fails the whole call.
///
/// ```
/// use poker_showdown::showdown::resolve;
///
/// let winners = resolve(&["5♢ 2♡ 8♡ 7♡ J♡", "2♢ 2♤ 3♡ 4♡ 5♧"]).unwrap();
/// assert_eq!(winners, vec!["2♢ 2♤ 3♡ 4♡ 5♧"]);
///
/// let err = resolve(&["5♡ 2♡ 2♢ 3♢ 3♧", "5♡ 2♡ 2♤ 3♢ 3♧"]).unwrap_err();
/// assert!(err.to_string().contains("5♡"));
/// ```
pub fn resolve<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<String>, ShowdownError> {
    let ranked = rank_hands(inputs)?;
    let best = winners(&ranked);
    debug!("{} winner(s) among {} hand(s)", best.len(), ranked.len());
    Ok(best.iter().map(|hand| hand.display().to_string()).collect())
}

/// Fail on the first card, in input order, that appears in more than one place.
fn check_unique_cards(hands: &[Hand]) -> Result<(), ShowdownError> {
    let mut counts: HashMap<Card, usize> = HashMap::new();
    for card in hands.iter().flat_map(|h| h.iter()) {
        *counts.entry(card).or_default() += 1;
    }
    let reused = hands.iter().flat_map(|h| h.iter()).find(|card| counts[card] > 1);
    match reused {
        Some(card) => Err(ShowdownError::DuplicateCard { card, count: counts[&card] }),
        None => Ok(()),
    }
}
