//! # rocket_math
//!
//! Arithmetic drills for early grade-school math.
//!
//! The library deals randomised addition, subtraction, multiplication and
//! division problems, builds a five-value multiple-choice hint for each, and
//! scores typed answers. Everything visual (rendering, input, the "shake" on
//! a wrong answer) belongs to the caller; the `rocket-math` binary is one
//! such caller, playing the drill in a terminal.
//!
//! ## How it works
//!
//! 1. Call [`SessionState::start`] with an RNG (seeded for reproducible runs)
//!    and an [`Operation`]. The engine deals the first problem, drawing
//!    operands so the answer is always a non-negative whole number, and
//!    prepares its hint set.
//! 2. Optionally call [`SessionState::reveal_hints`].
//! 3. Call [`SessionState::check`] with the player's answer. A correct answer
//!    scores 5 points, or 1 point if the hints were shown.
//! 4. Call [`SessionState::new_problem`] for the next round.
//!
//! ## Quick start
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use rocket_math::{Operation, SessionState};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut session = SessionState::start(&mut rng, Operation::Multiply);
//!
//! let problem = *session.current_problem();
//! println!("{}", problem.question_text());
//!
//! let verdict = session.check(i64::from(problem.answer), false);
//! assert!(verdict.correct);
//! assert_eq!(session.score(), 5);
//! ```

pub mod drill_engine;
pub mod view;

// Convenience re-exports so callers can use `rocket_math::generate`
// directly without reaching into `drill_engine::`.
pub use drill_engine::{
    check, generate, generate_from_code, generate_problem, make_hints, score_delta,
    DrillError, DrillSettings, HintSet, Operation, Phase, Problem, ProblemRequest,
    SessionState, Verdict,
};
pub use view::to_client_view;

#[cfg(test)]
mod tests;
