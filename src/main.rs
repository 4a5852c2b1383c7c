//! Terminal shell for the arithmetic drill.
//!
//! Run with: `cargo run -- --operation m --seed 42`

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::Rng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rocket_math::drill_engine::helpers::make_rng;
use rocket_math::{DrillSettings, Operation, SessionState};

#[derive(Parser)]
#[command(name = "rocket-math")]
#[command(version = "0.1")]
#[command(about = "Arithmetic drills for the terminal")]
struct Cli {
    /// JSON settings file (operation, shake_enabled, rng_seed)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Operation code: a (add), s (subtract), m (multiply), d (divide)
    #[arg(short, long, value_parser = parse_operation)]
    operation: Option<Operation>,

    /// Fixed RNG seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Don't shake the answer on a wrong guess
    #[arg(long = "no-shake")]
    no_shake: bool,
}

fn parse_operation(s: &str) -> Result<Operation, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(code), None) => Operation::from_code(code).map_err(|e| e.to_string()),
        _ => Err(format!("expected a single operation code, got {s:?}")),
    }
}

impl Cli {
    /// Config file first, then flags on top.
    fn settings(&self) -> Result<DrillSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                DrillSettings::from_json_str(&raw)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => DrillSettings::default(),
        };
        if let Some(op) = self.operation {
            settings.operation = op;
        }
        if self.seed.is_some() {
            settings.rng_seed = self.seed;
        }
        if self.no_shake {
            settings.shake_enabled = false;
        }
        Ok(settings)
    }
}

/// One line typed by the player.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Answer(i64),
    Hint,
    SwitchOperation(char),
    Quit,
    Unrecognised(String),
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    match line {
        "h" | "hint" => return Input::Hint,
        "q" | "quit" => return Input::Quit,
        _ => {}
    }
    if let Some(rest) = line.strip_prefix("op ") {
        let mut chars = rest.trim().chars();
        if let (Some(code), None) = (chars.next(), chars.next()) {
            return Input::SwitchOperation(code);
        }
    }
    match line.parse::<i64>() {
        Ok(n) => Input::Answer(n),
        Err(_) => Input::Unrecognised(line.to_string()),
    }
}

/// Stand-in for the web page's shake animation.
fn shake(out: &mut impl Write, guess: i64) -> io::Result<()> {
    writeln!(out, "\x1b[31m  <<  {guess}  >>  \x1b[0m")
}

fn show_question(out: &mut impl Write, session: &SessionState) -> io::Result<()> {
    writeln!(out, "\n{}", session.current_problem().question_text())
}

fn play<R: Rng>(
    input: impl BufRead,
    out: &mut impl Write,
    settings: &DrillSettings,
    rng: &mut R,
) -> Result<SessionState> {
    let mut operation = settings.operation;
    let mut session = SessionState::start(rng, operation);

    writeln!(
        out,
        "{} drill. Type an answer, 'h' for hints, 'op a|s|m|d' to switch, 'q' to quit.",
        operation
    )?;
    show_question(out, &session)?;

    for line in input.lines() {
        let line = line.context("reading answer")?;
        match parse_input(&line) {
            Input::Quit => break,
            Input::Hint => {
                writeln!(out, "{}", session.reveal_hints().hint_text())?;
            }
            Input::SwitchOperation(code) => match Operation::from_code(code) {
                Ok(op) => {
                    operation = op;
                    writeln!(out, "Switched to {}.", operation)?;
                    session.new_problem(rng, operation);
                    show_question(out, &session)?;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            Input::Unrecognised(text) => {
                writeln!(out, "'{text}' is not a number, try again.")?;
            }
            Input::Answer(guess) => {
                let answer = session.current_answer();
                let verdict = session.check(guess, session.hint_shown());
                if verdict.correct {
                    writeln!(
                        out,
                        "Correct! +{}  Score: {}",
                        verdict.score_delta, verdict.new_score
                    )?;
                } else {
                    if settings.shake_enabled {
                        shake(out, guess)?;
                    }
                    writeln!(
                        out,
                        "Not quite, the answer was {answer}.  Score: {}",
                        session.score()
                    )?;
                }
                session.new_problem(rng, operation);
                show_question(out, &session)?;
            }
        }
    }

    writeln!(out, "\nFinal score: {}", session.score())?;
    Ok(session)
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings()?;
    tracing::info!(?settings, "starting drill");

    let mut rng = make_rng(settings.rng_seed);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    play(stdin.lock(), &mut out, &settings, &mut rng)?;
    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rocket_math=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
