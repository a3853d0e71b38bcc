use poker_showdown::cards::{Card, Rank, Suit};
use poker_showdown::deck::Deck;
use poker_showdown::evaluator::{classify, compare, evaluate_five, Category, HandRank};
use poker_showdown::hand::Hand;
use poker_showdown::showdown::{rank_hands, resolve};
use proptest::prelude::*;
use std::cmp::Ordering;

fn all_cards() -> Vec<Card> {
    Suit::ALL.iter().flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s))).collect()
}

fn distinct_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(all_cards(), n).prop_shuffle()
}

fn five(cards: &[Card]) -> [Card; 5] {
    [cards[0], cards[1], cards[2], cards[3], cards[4]]
}

fn any_five() -> impl Strategy<Value = [Card; 5]> {
    distinct_cards(5).prop_map(|v| five(&v))
}

fn rank_from_val(v: u8) -> Rank {
    Rank::from_value(v).expect("rank value in 2..=14")
}

fn straight_cards(top: u8, suited: bool) -> [Card; 5] {
    let ranks = if top == 5 {
        [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]
    } else {
        [
            rank_from_val(top - 4),
            rank_from_val(top - 3),
            rank_from_val(top - 2),
            rank_from_val(top - 1),
            rank_from_val(top),
        ]
    };
    let suits = if suited {
        [Suit::Hearts; 5]
    } else {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs]
    };
    [
        Card::new(ranks[0], suits[0]),
        Card::new(ranks[1], suits[1]),
        Card::new(ranks[2], suits[2]),
        Card::new(ranks[3], suits[3]),
        Card::new(ranks[4], suits[4]),
    ]
}

fn render(cards: &[Card]) -> String {
    cards.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

// Every one of the C(52, 5) hands lands in exactly one category, in the
// textbook proportions.
#[test]
fn all_five_card_hands_have_standard_category_counts() {
    let deck = all_cards();
    let mut counts = [0usize; 10];
    for a in 0..deck.len() {
        for b in a + 1..deck.len() {
            for c in b + 1..deck.len() {
                for d in c + 1..deck.len() {
                    for e in d + 1..deck.len() {
                        let rank = evaluate_five(&[deck[a], deck[b], deck[c], deck[d], deck[e]]);
                        counts[rank.category().priority() as usize] += 1;
                    }
                }
            }
        }
    }

    let expected = [
        (Category::HighCard, 1_302_540),
        (Category::Pair, 1_098_240),
        (Category::TwoPair, 123_552),
        (Category::ThreeOfAKind, 54_912),
        (Category::Straight, 10_200),
        (Category::Flush, 5_108),
        (Category::FullHouse, 3_744),
        (Category::FourOfAKind, 624),
        (Category::StraightFlush, 40),
    ];
    for (category, n) in expected {
        assert_eq!(counts[category.priority() as usize], n, "{category}");
    }
    assert_eq!(counts.iter().sum::<usize>(), 2_598_960);
}

proptest! {
    #[test]
    fn tie_break_holds_valid_rank_values(cards in any_five()) {
        let rank = evaluate_five(&cards);
        prop_assert!(!rank.tie_break().is_empty());
        prop_assert!(rank.tie_break().iter().all(|v| (2..=14).contains(v)));
    }

    #[test]
    fn evaluation_ignores_card_order(cards in distinct_cards(5), rot in 0usize..5) {
        let mut rotated = cards.clone();
        rotated.rotate_left(rot);
        prop_assert_eq!(evaluate_five(&five(&cards)), evaluate_five(&five(&rotated)));
    }

    #[test]
    fn ordering_is_antisymmetric_and_transitive(cards in distinct_cards(15)) {
        let ea = evaluate_five(&five(&cards[0..5]));
        let eb = evaluate_five(&five(&cards[5..10]));
        let ec = evaluate_five(&five(&cards[10..15]));

        prop_assert_eq!(ea.cmp(&eb), eb.cmp(&ea).reverse());
        if ea >= eb && eb >= ec { prop_assert!(ea >= ec); }
    }

    #[test]
    fn category_dominates_tie_break(a in any_five(), b in any_five()) {
        let ea = evaluate_five(&a);
        let eb = evaluate_five(&b);
        if ea.category() != eb.category() {
            prop_assert_eq!(ea.cmp(&eb), ea.category().cmp(&eb.category()));
        } else {
            prop_assert_eq!(ea.cmp(&eb), ea.tie_break().cmp(&eb.tie_break()));
        }
    }

    #[test]
    fn straight_ordering_respects_top_card(top_hi in 6u8..=14u8, top_lo in 5u8..=13u8) {
        prop_assume!(top_hi > top_lo);
        let e_hi = evaluate_five(&straight_cards(top_hi, false));
        let e_lo = evaluate_five(&straight_cards(top_lo, false));
        prop_assert_eq!(e_hi, HandRank::Straight(rank_from_val(top_hi)));
        prop_assert_eq!(e_lo, HandRank::Straight(rank_from_val(top_lo)));
        prop_assert!(e_hi > e_lo);
    }

    #[test]
    fn wheel_is_lowest_straight(top in 6u8..=14u8, suited in any::<bool>()) {
        let wheel = evaluate_five(&straight_cards(5, suited));
        let higher = evaluate_five(&straight_cards(top, suited));
        prop_assert_eq!(wheel.tie_break(), vec![5]);
        prop_assert_eq!(wheel.category(), higher.category());
        prop_assert!(higher > wheel);
    }

    #[test]
    fn suited_run_is_a_straight_flush(top in 5u8..=14u8) {
        let rank = evaluate_five(&straight_cards(top, true));
        prop_assert_eq!(rank, HandRank::StraightFlush(rank_from_val(top)));
    }

    #[test]
    fn display_round_trips_to_same_rank(cards in any_five()) {
        let parsed: Hand = render(&cards).parse().unwrap();
        let classified = classify(&parsed);
        let reparsed = classify(&classified.display().parse::<Hand>().unwrap());
        prop_assert_eq!(classified.display(), reparsed.display());
        prop_assert_eq!(classified.rank(), evaluate_five(&cards));
        prop_assert_eq!(compare(&classified, &reparsed), Ordering::Equal);
    }

    #[test]
    fn winners_share_the_best_rank_in_input_order(seed in any::<u64>(), n in 1usize..=10) {
        let mut deck = Deck::shuffled(seed);
        let inputs: Vec<String> = deck.deal_hands(n).iter().map(ToString::to_string).collect();
        let ranked = rank_hands(&inputs).unwrap();
        let won = resolve(&inputs).unwrap();

        let best = ranked[0].rank();
        prop_assert!(ranked.windows(2).all(|w| w[0] >= w[1]));
        let expected: Vec<String> = inputs
            .iter()
            .filter(|s| classify(&s.parse::<Hand>().unwrap()).rank() == best)
            .cloned()
            .collect();
        prop_assert_eq!(won, expected);
    }
}
