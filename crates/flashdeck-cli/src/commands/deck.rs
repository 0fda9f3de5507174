use std::path::PathBuf;

use chrono::Duration;
use clap::Subcommand;
use flashdeck_core::{Config, DeckFile, Difficulty};

#[derive(Subcommand)]
pub enum DeckAction {
    /// List the cards in a deck
    List {
        /// Deck file (.toml or .json); defaults to the configured or built-in deck
        #[arg(long)]
        deck: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show how long each rating delays a card
    Intervals,
}

pub fn run(action: DeckAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        DeckAction::List { deck, json } => {
            let path = deck.or_else(|| config.session.deck.as_ref().map(PathBuf::from));
            let deck = DeckFile::load_or_builtin(path.as_deref())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&deck.items)?);
                return Ok(());
            }
            if let Some(title) = &deck.title {
                println!("{title}");
            }
            for item in &deck.items {
                if item.translation.is_empty() {
                    println!("{:>4}  {}", item.id.0, item.phrase);
                } else {
                    println!("{:>4}  {}  ({})", item.id.0, item.phrase, item.translation);
                }
            }
            println!("{} cards", deck.items.len());
        }
        DeckAction::Intervals => {
            for d in Difficulty::ALL {
                println!(
                    "{:<10} {:>12}  ({} ms)",
                    d.as_str(),
                    describe(d.interval()),
                    d.interval_ms()
                );
            }
        }
    }
    Ok(())
}

/// Human-readable delay, e.g. "7 days" or "10 minutes".
fn describe(delay: Duration) -> String {
    let plural = |n: i64, unit: &str| {
        if n == 1 {
            format!("{n} {unit}")
        } else {
            format!("{n} {unit}s")
        }
    };
    if delay.num_days() > 0 {
        plural(delay.num_days(), "day")
    } else if delay.num_hours() > 0 {
        plural(delay.num_hours(), "hour")
    } else {
        plural(delay.num_minutes(), "minute")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_picks_largest_unit() {
        assert_eq!(describe(Difficulty::Easy.interval()), "7 days");
        assert_eq!(describe(Difficulty::Difficult.interval()), "1 day");
        assert_eq!(describe(Difficulty::Repeat.interval()), "10 minutes");
        assert_eq!(describe(Duration::hours(2)), "2 hours");
    }
}
