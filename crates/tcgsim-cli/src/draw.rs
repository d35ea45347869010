//! Executes a parsed command against a generator.

use serde::Serialize;
use tcgsim_core::clock::Clock;
use tcgsim_rng::seeded::MAX_STATE;
use tcgsim_rng::{CoinFlip, DeterministicRng, DeterministicRngExt, RngSnapshot, SeededRng};
use tracing::{info, instrument};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// What a command drew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DrawResult {
    /// The generator's seed; nothing was drawn.
    Seed(u32),
    /// Integer rolls in draw order.
    Rolls(Vec<i64>),
    /// Coin flips in draw order.
    Flips(Vec<CoinFlip>),
    /// Heads seen before the first tails.
    HeadsBeforeTails(u64),
    /// Shuffled or sampled items.
    Items(Vec<String>),
    /// A single picked item.
    Item(String),
}

/// Output of one run. Passing `end` back as `--snapshot` continues the
/// sequence exactly where this run stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawReport {
    /// Generator position before drawing.
    pub start: RngSnapshot,
    /// The draw outcome.
    pub result: DrawResult,
    /// Generator position after drawing.
    pub end: RngSnapshot,
}

/// Builds the generator the arguments ask for.
///
/// # Errors
///
/// Returns `CliError::Config` for a seed wider than 31 bits, or
/// `CliError::Rng` for an unreadable or out-of-range snapshot.
pub fn build_rng(cli: &Cli, clock: &dyn Clock) -> Result<SeededRng, CliError> {
    match (cli.seed, cli.snapshot.as_deref()) {
        (Some(seed), _) if seed > MAX_STATE => Err(CliError::Config(format!(
            "seed must be at most {MAX_STATE}, got {seed}"
        ))),
        (Some(seed), _) => Ok(SeededRng::new(seed)),
        (None, Some(json)) => Ok(SeededRng::from_snapshot(RngSnapshot::from_json(json)?)?),
        (None, None) => Ok(SeededRng::from_clock(clock)),
    }
}

/// Runs the command and reports the generator position around it.
///
/// # Errors
///
/// Returns `CliError::Config` when the arguments cannot be drawn from
/// (inverted roll bounds, nothing to pick from), or any error from
/// [`build_rng`].
#[instrument(skip_all, fields(command = cli.command.name()))]
pub fn run(cli: &Cli, clock: &dyn Clock) -> Result<DrawReport, CliError> {
    let mut rng = build_rng(cli, clock)?;
    let start = rng.snapshot();
    info!(seed = start.seed, state = start.state, "generator ready");

    let result = draw(&mut rng, &cli.command)?;

    let end = rng.snapshot();
    info!(state = end.state, "draw complete");
    Ok(DrawReport { start, result, end })
}

fn draw(rng: &mut SeededRng, command: &Command) -> Result<DrawResult, CliError> {
    let result = match command {
        Command::Seed => DrawResult::Seed(rng.seed()),
        Command::Roll { min, max, count } => {
            if min > max {
                return Err(CliError::Config(format!(
                    "--min ({min}) must not exceed --max ({max})"
                )));
            }
            DrawResult::Rolls((0..*count).map(|_| rng.next_int(*min, *max)).collect())
        }
        Command::Flip { count } => DrawResult::Flips(rng.flip_coins(*count)),
        Command::FlipUntilTails => DrawResult::HeadsBeforeTails(rng.flip_until_tails()),
        Command::Shuffle { items } => DrawResult::Items(rng.shuffled(items)),
        Command::Pick { items } => {
            let picked = rng
                .pick(items)
                .ok_or_else(|| CliError::Config("pick needs at least one item".to_owned()))?;
            DrawResult::Item(picked.clone())
        }
        Command::PickN { n, items } => {
            if items.is_empty() {
                return Err(CliError::Config(
                    "pick-n needs at least one item".to_owned(),
                ));
            }
            DrawResult::Items(rng.pick_n(items, *n))
        }
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use clap::Parser;
    use tcgsim_test_support::FixedClock;

    fn fixed_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tcgsim").chain(args.iter().copied())).unwrap()
    }

    // --- build_rng tests ---

    #[test]
    fn test_build_rng_from_seed() {
        let rng = build_rng(&parse(&["--seed", "42", "seed"]), &fixed_clock()).unwrap();
        assert_eq!(rng.snapshot(), RngSnapshot { seed: 42, state: 42 });
    }

    #[test]
    fn test_build_rng_rejects_wide_seed() {
        let result = build_rng(&parse(&["--seed", "2147483648", "seed"]), &fixed_clock());

        match result {
            Err(CliError::Config(msg)) => assert!(msg.contains("2147483648")),
            other => panic!("expected Config, got {other:?}"),
        }
    }

    #[test]
    fn test_build_rng_from_snapshot() {
        let cli = parse(&["--snapshot", r#"{"seed":42,"state":1000676753}"#, "seed"]);

        let rng = build_rng(&cli, &fixed_clock()).unwrap();

        assert_eq!(rng.seed(), 42);
        assert_eq!(rng.state(), 1_000_676_753);
    }

    #[test]
    fn test_build_rng_rejects_malformed_snapshot() {
        let cli = parse(&["--snapshot", "not json", "seed"]);

        let result = build_rng(&cli, &fixed_clock());

        assert!(matches!(result, Err(CliError::Rng(_))));
    }

    #[test]
    fn test_build_rng_without_seed_uses_clock() {
        let clock = fixed_clock();

        let rng = build_rng(&parse(&["seed"]), &clock).unwrap();

        assert_eq!(rng, SeededRng::from_clock(&clock));
    }

    // --- run tests ---

    #[test]
    fn test_run_roll_matches_golden_vector() {
        let report = run(
            &parse(&["--seed", "42", "roll", "--min", "0", "--max", "99", "--count", "3"]),
            &fixed_clock(),
        )
        .unwrap();

        assert_eq!(report.start, RngSnapshot { seed: 42, state: 42 });
        assert_eq!(report.result, DrawResult::Rolls(vec![58, 51, 46]));
        assert_eq!(
            report.end,
            RngSnapshot {
                seed: 42,
                state: 1_000_676_753,
            }
        );
    }

    #[test]
    fn test_run_resumed_from_end_snapshot_continues_sequence() {
        let first = run(
            &parse(&["--seed", "42", "roll", "--min", "0", "--max", "99"]),
            &fixed_clock(),
        )
        .unwrap();
        let saved = first.end.to_json();
        let resumed = run(
            &parse(&[
                "--snapshot",
                saved.as_str(),
                "roll",
                "--min",
                "0",
                "--max",
                "99",
                "--count",
                "2",
            ]),
            &fixed_clock(),
        )
        .unwrap();

        assert_eq!(first.result, DrawResult::Rolls(vec![58]));
        assert_eq!(resumed.result, DrawResult::Rolls(vec![51, 46]));
    }

    #[test]
    fn test_run_seed_does_not_draw() {
        let report = run(&parse(&["--seed", "9", "seed"]), &fixed_clock()).unwrap();

        assert_eq!(report.result, DrawResult::Seed(9));
        assert_eq!(report.start, report.end);
    }

    #[test]
    fn test_run_flip_until_tails() {
        let report = run(&parse(&["--seed", "42", "flip-until-tails"]), &fixed_clock()).unwrap();
        assert_eq!(report.result, DrawResult::HeadsBeforeTails(2));
    }

    #[test]
    fn test_run_shuffle_matches_library_shuffle() {
        let report = run(
            &parse(&["--seed", "7", "shuffle", "a", "b", "c", "d"]),
            &fixed_clock(),
        )
        .unwrap();

        let mut rng = SeededRng::new(7);
        let expected = rng.shuffled(&["a", "b", "c", "d"].map(String::from));
        assert_eq!(report.result, DrawResult::Items(expected));
    }

    #[test]
    fn test_run_roll_with_inverted_bounds_is_config_error() {
        let result = run(
            &parse(&["--seed", "1", "roll", "--min", "6", "--max", "1"]),
            &fixed_clock(),
        );

        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_run_pick_without_items_is_config_error() {
        let result = run(&parse(&["--seed", "1", "pick"]), &fixed_clock());
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_run_pick_n_without_items_is_config_error() {
        let result = run(&parse(&["--seed", "1", "pick-n", "--n", "2"]), &fixed_clock());
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_report_json_shape() {
        let report = run(&parse(&["--seed", "42", "flip", "--count", "3"]), &fixed_clock()).unwrap();

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["start"], serde_json::json!({ "seed": 42, "state": 42 }));
        assert_eq!(json["result"]["kind"], "flips");
        assert_eq!(
            json["result"]["value"],
            serde_json::json!(["heads", "heads", "tails"])
        );
    }
}
