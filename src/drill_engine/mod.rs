//! Core drill engine: problem generation, hints, and scoring.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: operations, problems, hint sets, verdicts, settings |
//! | `error`     | `DrillError` |
//! | `helpers`   | RNG construction and operand drawing |
//! | `generator` | `generate()` and friends, one branch per operation |
//! | `hints`     | Multiple-choice hint sets with bounded rejection sampling |
//! | `session`   | `SessionState` and the scoring rules |

pub mod error;
pub mod generator;
pub mod helpers;
pub mod hints;
pub mod models;
pub mod session;

pub use error::DrillError;
pub use generator::{generate, generate_from_code, generate_problem};
pub use hints::make_hints;
pub use models::{
    DrillSettings, HintSet, Operation, Phase, Problem, ProblemRequest, Verdict,
};
pub use session::{check, score_delta, SessionState};
