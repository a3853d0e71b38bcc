use crate::cards::Rank;

/// Top rank of the straight formed by five ranks sorted ascending, if any.
///
/// The wheel (A-2-3-4-5) reports Five: the Ace only plays low while forming
/// this straight.
pub fn straight_high(ranks_asc: &[Rank; 5]) -> Option<Rank> {
    if *ranks_asc == [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace] {
        return Some(Rank::Five);
    }
    let consecutive = ranks_asc.windows(2).all(|w| w[1].value() == w[0].value() + 1);
    consecutive.then_some(ranks_asc[4])
}
