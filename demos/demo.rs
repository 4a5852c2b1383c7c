//! Walk through one seeded round of every operation.
//!
//! Run with: `cargo run --example demo`
//!
//! For each operation this shows:
//!
//! - the question as a player sees it,
//! - the hint line (what `h` would reveal),
//! - the verdicts for an unaided correct answer, a hinted correct answer,
//!   and a wrong one,
//! - the JSON view a UI shell would render.
//!
//! Fixed seeds keep the output the same on every run.

use rand::{rngs::StdRng, SeedableRng};
use rocket_math::{check, to_client_view, Operation, SessionState};

fn print_round(op: Operation, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = SessionState::start(&mut rng, op);
    let problem = *session.current_problem();

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}]  code: {}  seed: {}", op, op.code(), seed);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Q: {}", problem.question_text());

    let answer = i64::from(problem.answer);
    let unaided = check(answer, &session, false);
    let hinted = check(answer, &session, true);
    let wrong = check(answer - 1, &session, false);
    println!("  {answer:>4} unaided  -> correct={} +{}", unaided.correct, unaided.score_delta);
    println!("  {answer:>4} hinted   -> correct={} +{}", hinted.correct, hinted.score_delta);
    println!("  {:>4} wrong    -> correct={} +{}", answer - 1, wrong.correct, wrong.score_delta);

    println!("  {}", session.reveal_hints().hint_text());
    println!("  view: {}", to_client_view(&session));
    println!();
}

fn main() {
    for (i, op) in Operation::ALL.into_iter().enumerate() {
        print_round(op, 100 + i as u64);
    }

    // An unknown code is an error, never a silent fallback.
    let mut rng = StdRng::seed_from_u64(0);
    match SessionState::start_from_code(&mut rng, 'x') {
        Ok(s) => println!("unexpected problem: {}", s.current_problem()),
        Err(e) => println!("'x' rejected: {e}"),
    }
}
