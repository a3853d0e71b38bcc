//! poker-showdown: pick the winning hand(s) among five-card poker hands
//!
//! Goals:
//! - Exact standard hand ranking, including the A-2-3-4-5 wheel
//! - Ties resolved deterministically, keeping input order
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start
//! ```
//! use poker_showdown::showdown::resolve;
//!
//! let winners = resolve(&[
//!     "A♡ K♤ Q♢ J♢ 10♧",
//!     "3♡ 3♤ 3♢ 2♧ 4♡",
//!     "10♡ J♤ Q♧ K♧ A♢",
//! ]).unwrap();
//! assert_eq!(winners, vec!["A♡ K♤ Q♢ J♢ 10♧", "10♡ J♤ Q♧ K♧ A♢"]);
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin poker-showdown -- "2♢ 2♡ 3♡ 4♡ 5♡" "5♢ 6♡ 8♡ 7♡ J♡"
//! cargo run --bin poker-showdown -- --deal 4 --seed 7 --verbose
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod showdown;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
