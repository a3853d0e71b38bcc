use anyhow::{bail, Context};
use clap::Parser;
use log::{debug, LevelFilter};
use poker_showdown::deck::Deck;
use poker_showdown::showdown::{rank_hands, winners};

#[derive(Debug, Parser)]
#[command(version, about = "Pick the winning five-card poker hand(s).")]
struct Cli {
    /// Hands to compare, e.g. "A♤ K♤ Q♤ J♤ 10♤".
    #[arg(required_unless_present = "deal", conflicts_with = "deal")]
    hands: Vec<String>,
    /// Deal this many random hands instead of reading them.
    #[arg(long, value_parser = clap::value_parser!(u8).range(2..=10))]
    deal: Option<u8>,
    /// Seed for dealing; a random seed is used when omitted.
    #[arg(long, requires = "deal")]
    seed: Option<u64>,
    /// Show every hand with its category and enable debug logs.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::builder()
        .filter_level(default_level)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let hands = match cli.deal {
        Some(n) => {
            let seed = cli.seed.unwrap_or_else(rand::random);
            debug!("dealing {n} hands with seed {seed}");
            let mut deck = Deck::shuffled(seed);
            let dealt = deck.deal_hands(n as usize);
            dealt.iter().map(ToString::to_string).collect()
        }
        None => cli.hands,
    };
    if hands.is_empty() {
        bail!("no hands to compare");
    }

    let ranked = rank_hands(&hands).context("cannot resolve showdown")?;
    if cli.verbose {
        for hand in &ranked {
            println!("{:<20} {}", hand.display(), hand.rank());
        }
        println!();
    }
    for hand in winners(&ranked) {
        println!("{}", hand.display());
    }
    Ok(())
}
