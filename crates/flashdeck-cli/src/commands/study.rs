//! Interactive study loop.
//!
//! One command per input line. The loop owns the clock: every command
//! samples it once and hands that `now` to the session.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use flashdeck_core::review::to_datetime;
use flashdeck_core::{Config, DeckFile, Difficulty, EpochMs, Event, Session};
use rand::Rng;
use tracing::debug;

#[derive(Args)]
pub struct StudyArgs {
    /// Deck file (.toml or .json); defaults to the configured or built-in deck
    #[arg(long)]
    deck: Option<PathBuf>,
    /// Fixed shuffle seed for a reproducible card order
    #[arg(long)]
    seed: Option<u64>,
    /// Print one JSON event per line instead of rendering cards
    #[arg(long)]
    json: bool,
}

const HELP: &str = "\
commands:
  n, <enter>   next card
  p            previous card
  s            shuffle the due cards
  m, <space>   show/hide meaning
  1 / easy     rate easy      (7 days)
  2 / good     rate good      (3 days)
  3 / hard     rate difficult (1 day)
  4 / repeat   rate repeat    (10 minutes)
  status       session summary
  ?            this help
  q            quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Key {
    Next,
    Prev,
    Shuffle,
    Reveal,
    Rate(Difficulty),
    Status,
    Help,
    Quit,
}

fn parse_key(line: &str) -> Option<Key> {
    let line = line.trim_end_matches(['\r', '\n']);
    // A lone space is the reveal key; any other blank line means "next".
    if line == " " {
        return Some(Key::Reveal);
    }
    let key = match line.trim().to_ascii_lowercase().as_str() {
        "" | "n" | "next" => Key::Next,
        "p" | "prev" | "previous" => Key::Prev,
        "s" | "shuffle" => Key::Shuffle,
        "m" | "meaning" => Key::Reveal,
        "status" => Key::Status,
        "?" | "h" | "help" => Key::Help,
        "q" | "quit" | "exit" => Key::Quit,
        other => Key::Rate(other.parse().ok()?),
    };
    Some(key)
}

/// Rendering options for [`drive`].
pub struct View {
    pub json: bool,
    pub show_examples: bool,
    pub title: Option<String>,
}

pub fn run(args: StudyArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let path = args
        .deck
        .or_else(|| config.session.deck.as_ref().map(PathBuf::from));
    let deck = DeckFile::load_or_builtin(path.as_deref())?;
    let mut session = Session::with_seed(deck.items, args.seed.or(config.session.seed))?;
    let view = View {
        json: args.json,
        show_examples: config.session.show_examples,
        title: deck.title,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    drive(&mut session, stdin.lock(), &mut stdout.lock(), &view, now_ms)
}

/// Run the session until `quit` or end of input.
pub fn drive<G, R, W>(
    session: &mut Session<G>,
    input: R,
    out: &mut W,
    view: &View,
    mut clock: impl FnMut() -> EpochMs,
) -> Result<(), Box<dyn std::error::Error>>
where
    G: Rng,
    R: BufRead,
    W: Write,
{
    if !view.json {
        if let Some(title) = &view.title {
            writeln!(out, "{title}")?;
        }
        writeln!(out, "type ? for help")?;
    }

    // A session opens on a fresh shuffle.
    let now = clock();
    let opening = session.reshuffle(now);
    emit(session, out, view, &[opening], now)?;

    for line in input.lines() {
        let line = line?;
        let Some(key) = parse_key(&line) else {
            notice(out, view, &format!("unknown command: {}  (? for help)", line.trim()))?;
            continue;
        };
        debug!(?key, "key");

        let now = clock();
        let events = match key {
            Key::Quit => break,
            Key::Help => {
                notice(out, view, HELP)?;
                continue;
            }
            Key::Next => vec![session.advance(now)],
            Key::Prev => vec![session.retreat(now)],
            Key::Shuffle => vec![session.reshuffle(now)],
            Key::Rate(d) => session.rate(d, now)?,
            Key::Status => vec![session.snapshot(now)],
            Key::Reveal => {
                session.toggle_reveal();
                if view.json {
                    vec![session.snapshot(now)]
                } else {
                    Vec::new()
                }
            }
        };
        emit(session, out, view, &events, now)?;
    }

    out.flush()?;
    Ok(())
}

/// Human-facing text. In JSON mode stdout carries events only, so this
/// goes to stderr instead.
fn notice<W: Write>(out: &mut W, view: &View, text: &str) -> io::Result<()> {
    if view.json {
        writeln!(io::stderr().lock(), "{text}")
    } else {
        writeln!(out, "{text}")
    }
}

fn emit<G: Rng, W: Write>(
    session: &Session<G>,
    out: &mut W,
    view: &View,
    events: &[Event],
    now: EpochMs,
) -> Result<(), Box<dyn std::error::Error>> {
    if view.json {
        for event in events {
            writeln!(out, "{}", serde_json::to_string(event)?)?;
        }
        return Ok(());
    }

    for event in events {
        match event {
            Event::CardRated {
                difficulty,
                next_eligible_at,
                ..
            } => writeln!(
                out,
                "rated {difficulty}; due again {}",
                format_time(*next_eligible_at)
            )?,
            Event::DeckReshuffled { size, .. } => writeln!(out, "shuffled {size} due cards")?,
            Event::RetreatBlocked { .. } => writeln!(out, "no other card to go back to")?,
            Event::StateSnapshot {
                eligible_count,
                item_count,
                ..
            } => writeln!(out, "{eligible_count} of {item_count} cards due")?,
            Event::CardShown { .. } => {}
        }
    }
    render(session, out, view, now)
}

fn render<G: Rng, W: Write>(
    session: &Session<G>,
    out: &mut W,
    view: &View,
    now: EpochMs,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(card) = session.current() else {
        writeln!(out, "No cards available for review.")?;
        let next_due = session
            .store()
            .all()
            .map(|(_, record)| record.next_eligible_at)
            .filter(|&at| at > now)
            .min();
        if let Some(at) = next_due {
            writeln!(out, "next card due {}", format_time(at))?;
        }
        return Ok(());
    };

    writeln!(out)?;
    writeln!(
        out,
        "[{:>3.0}%] card {}/{}",
        session.progress(),
        card.position + 1,
        card.total
    )?;
    writeln!(out, "  {}", card.item.phrase)?;
    if !card.item.translation.is_empty() {
        writeln!(out, "  ({})", card.item.translation)?;
    }
    if !session.is_revealed() {
        writeln!(out, "  [m] show meaning")?;
        return Ok(());
    }

    writeln!(out, "  meaning: {}", card.item.meaning)?;
    if view.show_examples {
        for example in &card.item.examples {
            writeln!(out, "  - {}: {}", example.topic, example.example)?;
        }
    }
    Ok(())
}

fn format_time(at: EpochMs) -> String {
    to_datetime(at)
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

fn now_ms() -> EpochMs {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashdeck_core::Item;
    use std::io::Cursor;

    fn view(json: bool) -> View {
        View {
            json,
            show_examples: true,
            title: None,
        }
    }

    fn session() -> Session {
        Session::seeded(
            vec![
                Item::new(1, "Look up")
                    .with_meaning("To search for information")
                    .with_example("Research", "Look it up."),
                Item::new(2, "Look after").with_meaning("To take care of"),
            ],
            1,
        )
        .unwrap()
    }

    fn run_lines(session: &mut Session, input: &str, json: bool) -> String {
        let mut out = Vec::new();
        drive(session, Cursor::new(input), &mut out, &view(json), || 0).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_keys() {
        assert_eq!(parse_key(""), Some(Key::Next));
        assert_eq!(parse_key(" "), Some(Key::Reveal));
        assert_eq!(parse_key("P\r\n"), Some(Key::Prev));
        assert_eq!(parse_key("3"), Some(Key::Rate(Difficulty::Difficult)));
        assert_eq!(parse_key("repeat"), Some(Key::Rate(Difficulty::Repeat)));
        assert_eq!(parse_key("q"), Some(Key::Quit));
        assert_eq!(parse_key("bogus"), None);
    }

    #[test]
    fn opens_on_first_card() {
        let mut session = session();
        let out = run_lines(&mut session, "q\n", false);
        assert!(out.contains("shuffled 2 due cards"));
        assert!(out.contains("card 1/2"));
        assert!(out.contains("[m] show meaning"));
    }

    #[test]
    fn reveal_shows_meaning_and_next_hides_it() {
        let mut session = session();
        let out = run_lines(&mut session, "m\nn\n", false);
        assert!(out.contains("meaning: "));
        assert!(out.contains("card 2/2"));
        assert!(!session.is_revealed());
    }

    #[test]
    fn rating_everything_empties_the_deck() {
        let mut session = session();
        let out = run_lines(&mut session, "1\n1\n", false);
        assert!(out.contains("rated easy"));
        assert!(out.contains("No cards available for review."));
        assert!(out.contains("next card due"));
    }

    #[test]
    fn unknown_command_keeps_going() {
        let mut session = session();
        let out = run_lines(&mut session, "wat\nn\n", false);
        assert!(out.contains("unknown command: wat"));
        assert!(out.contains("card 2/2"));
    }

    #[test]
    fn json_mode_prints_one_event_per_line() {
        let mut session = session();
        let out = run_lines(&mut session, "2\nstatus\n", true);
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines[0]["type"], "DeckReshuffled");
        assert_eq!(lines[1]["type"], "CardRated");
        assert_eq!(lines[1]["difficulty"], "good");
        assert_eq!(lines[1]["next_eligible_at"], 259_200_000u64);
        assert_eq!(lines[2]["type"], "CardShown");
        assert_eq!(lines[3]["type"], "StateSnapshot");
        assert_eq!(lines[3]["eligible_count"], 1);
    }

    #[test]
    fn json_mode_stdout_stays_parseable_on_typos_and_help() {
        let mut session = session();
        let out = run_lines(&mut session, "wat\n?\nn\n", true);
        for line in out.lines() {
            assert!(
                serde_json::from_str::<serde_json::Value>(line).is_ok(),
                "non-JSON line on stdout: {line:?}"
            );
        }
        let types: Vec<String> = out
            .lines()
            .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap()["type"].to_string())
            .collect();
        assert_eq!(types, vec!["\"DeckReshuffled\"", "\"CardShown\""]);
    }

    #[test]
    fn help_is_printed_in_text_mode() {
        let mut session = session();
        let out = run_lines(&mut session, "?\n", false);
        assert!(out.contains("rate repeat"));
    }

    #[test]
    fn clock_is_sampled_per_command() {
        let mut session = session();
        let mut ticks = vec![0u64, 0, 700_000].into_iter();
        let mut out = Vec::new();
        // Rate repeat at 0, then shuffle 700s later when it is due again.
        drive(
            &mut session,
            Cursor::new("4\ns\n"),
            &mut out,
            &view(false),
            move || ticks.next().unwrap_or(700_000),
        )
        .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.ends_with("[m] show meaning\n"));
        assert!(out.contains("shuffled 2 due cards"));
    }
}
