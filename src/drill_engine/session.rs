//! Session state: score, the problem awaiting an answer, and its hints.
//!
//! A session always holds a problem. [`SessionState::start`] deals the first
//! one, so every session begins in `AwaitingAnswer`, then moves between two
//! phases:
//!
//! | From             | Event           | To               |
//! |------------------|-----------------|------------------|
//! | `AwaitingAnswer` | `check()`       | `Scored`         |
//! | `Scored`         | `new_problem()` | `AwaitingAnswer` |
//!
//! The score only ever grows.

use rand::Rng;
use serde::Serialize;

use crate::drill_engine::{
    error::DrillError,
    generator::generate,
    hints::make_hints,
    models::{HintSet, Operation, Phase, Problem, Verdict},
};

/// Points for a correct answer given without looking at the hints.
pub const POINTS_UNAIDED: u32 = 5;
/// Points for a correct answer given after the hints were shown.
pub const POINTS_WITH_HINT: u32 = 1;

/// Points awarded for one check.
pub fn score_delta(correct: bool, hint_was_shown: bool) -> u32 {
    match (correct, hint_was_shown) {
        (false, _)    => 0,
        (true, true)  => POINTS_WITH_HINT,
        (true, false) => POINTS_UNAIDED,
    }
}

/// Judge `submitted` against the session's current problem without
/// touching the session.
///
/// Once the problem is `Scored` nothing more can be scored, so the verdict
/// is always incorrect with no points.
pub fn check(submitted: i64, session: &SessionState, hint_was_shown: bool) -> Verdict {
    let correct = session.phase == Phase::AwaitingAnswer
        && i64::from(session.problem.answer) == submitted;
    let delta = score_delta(correct, hint_was_shown);
    Verdict {
        correct,
        score_delta: delta,
        new_score: session.score.saturating_add(delta),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    score: u32,
    problem: Problem,
    hints: HintSet,
    hint_shown: bool,
    phase: Phase,
}

impl SessionState {
    /// Open a session at score 0 with its first problem dealt.
    pub fn start<R: Rng>(rng: &mut R, operation: Operation) -> Self {
        let (problem, hints) = deal(rng, operation);
        SessionState {
            score: 0,
            problem,
            hints,
            hint_shown: false,
            phase: Phase::AwaitingAnswer,
        }
    }

    /// Like [`start`](Self::start), from an operation code.
    ///
    /// # Errors
    ///
    /// Returns [`DrillError::InvalidOperation`] for an unknown code.
    pub fn start_from_code<R: Rng>(rng: &mut R, code: char) -> Result<Self, DrillError> {
        let operation = Operation::from_code(code)?;
        Ok(Self::start(rng, operation))
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_problem(&self) -> &Problem {
        &self.problem
    }

    pub fn current_answer(&self) -> u32 {
        self.problem.answer
    }

    pub fn hints(&self) -> &HintSet {
        &self.hints
    }

    pub fn hint_shown(&self) -> bool {
        self.hint_shown
    }

    /// Deal a new problem and its hint set, replacing the previous ones.
    pub fn new_problem<R: Rng>(&mut self, rng: &mut R, operation: Operation) -> &Problem {
        let (problem, hints) = deal(rng, operation);
        self.problem = problem;
        self.hints = hints;
        self.hint_shown = false;
        self.phase = Phase::AwaitingAnswer;
        &self.problem
    }

    /// Like [`new_problem`](Self::new_problem), from an operation code.
    ///
    /// # Errors
    ///
    /// Returns [`DrillError::InvalidOperation`] for an unknown code; the
    /// session is left exactly as it was.
    pub fn new_problem_from_code<R: Rng>(
        &mut self,
        rng: &mut R,
        code: char,
    ) -> Result<&Problem, DrillError> {
        let operation = Operation::from_code(code)?;
        Ok(self.new_problem(rng, operation))
    }

    /// Mark the hints as shown and return them.
    pub fn reveal_hints(&mut self) -> &HintSet {
        self.hint_shown = true;
        &self.hints
    }

    /// Check `submitted` and apply the verdict.
    ///
    /// A correct answer scores [`POINTS_WITH_HINT`] if `hint_was_shown`,
    /// otherwise [`POINTS_UNAIDED`]. Either way the problem moves to
    /// `Scored`; the caller deals the next one.
    pub fn check(&mut self, submitted: i64, hint_was_shown: bool) -> Verdict {
        let verdict = check(submitted, self, hint_was_shown);
        if self.phase == Phase::AwaitingAnswer {
            self.score = verdict.new_score;
            self.phase = Phase::Scored;
            tracing::debug!(
                submitted,
                correct = verdict.correct,
                delta = verdict.score_delta,
                score = self.score,
                "answer checked"
            );
        } else {
            tracing::debug!(submitted, "check ignored, problem already scored");
        }
        verdict
    }
}

fn deal<R: Rng>(rng: &mut R, operation: Operation) -> (Problem, HintSet) {
    let problem = generate(rng, operation);
    let hints = make_hints(rng, problem.answer);
    (problem, hints)
}
