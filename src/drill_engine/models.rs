use std::fmt;
use serde::{Deserialize, Serialize};

use crate::drill_engine::error::DrillError;

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Serialized as its single-character code (`"a"`, `"s"`, `"m"`, `"d"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Every operation in selector order (`a`, `s`, `m`, `d`).
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Parse a single-character operation code.
    ///
    /// # Errors
    ///
    /// Returns [`DrillError::InvalidOperation`] for anything other than
    /// `a`, `s`, `m` or `d`.
    pub fn from_code(code: char) -> Result<Self, DrillError> {
        match code {
            'a' => Ok(Operation::Add),
            's' => Ok(Operation::Subtract),
            'm' => Ok(Operation::Multiply),
            'd' => Ok(Operation::Divide),
            other => Err(DrillError::InvalidOperation(other)),
        }
    }

    pub fn code(self) -> char {
        match self {
            Operation::Add      => 'a',
            Operation::Subtract => 's',
            Operation::Multiply => 'm',
            Operation::Divide   => 'd',
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operation::Add      => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '×',
            Operation::Divide   => '÷',
        }
    }

    /// Apply the operator under integer arithmetic.
    ///
    /// Returns `None` when the result would be negative, fractional, or
    /// overflow `u32`. Generated problems never hit these cases.
    pub fn apply(self, first: u32, second: u32) -> Option<u32> {
        match self {
            Operation::Add      => first.checked_add(second),
            Operation::Subtract => first.checked_sub(second),
            Operation::Multiply => first.checked_mul(second),
            Operation::Divide   => {
                if second == 0 || first % second != 0 {
                    None
                } else {
                    Some(first / second)
                }
            }
        }
    }
}

impl TryFrom<char> for Operation {
    type Error = DrillError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        Operation::from_code(code)
    }
}

impl From<Operation> for char {
    fn from(op: Operation) -> char {
        op.code()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::Add      => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
            Operation::Divide   => "Division",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Problem / hints
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub first: u32,
    pub operator: Operation,
    pub second: u32,
    pub answer: u32,
}

impl Problem {
    /// Question as shown to the player, e.g. `"7 + 5 = ?"`.
    pub fn question_text(&self) -> String {
        format!("{} {} {} = ?", self.first, self.operator.symbol(), self.second)
    }

    /// True when `answer` is exactly `first <op> second`.
    pub fn is_consistent(&self) -> bool {
        self.operator.apply(self.first, self.second) == Some(self.answer)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.first,
            self.operator.symbol(),
            self.second,
            self.answer
        )
    }
}

/// Number of values offered by a hint.
pub const HINT_SIZE: usize = 5;

/// Five distinct candidate answers in display order, exactly one correct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HintSet {
    values: [u32; HINT_SIZE],
}

impl HintSet {
    /// Callers are expected to uphold the distinct/one-correct invariant;
    /// only the hint generator builds these.
    pub(crate) fn from_values(values: [u32; HINT_SIZE]) -> Self {
        HintSet { values }
    }

    pub fn values(&self) -> &[u32; HINT_SIZE] {
        &self.values
    }

    pub fn contains(&self, value: u32) -> bool {
        self.values.contains(&value)
    }

    /// Hint line as shown to the player.
    pub fn hint_text(&self) -> String {
        let joined = self
            .values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("Possible answers: {}", joined)
    }
}

// ---------------------------------------------------------------------------
// Session types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    AwaitingAnswer,
    Scored,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::AwaitingAnswer => write!(f, "AwaitingAnswer"),
            Phase::Scored         => write!(f, "Scored"),
        }
    }
}

/// Outcome of checking one submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub correct: bool,
    pub score_delta: u32,
    pub new_score: u32,
}

// ---------------------------------------------------------------------------
// Request / settings types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProblemRequest {
    pub operation: Operation,
    pub rng_seed: Option<u64>,
}

impl ProblemRequest {
    /// Request with an entropy-seeded RNG.
    pub fn new(operation: Operation) -> Self {
        ProblemRequest { operation, rng_seed: None }
    }
}

/// Player-facing settings: the operator selector and the
/// "shake on incorrect" toggle, plus an optional fixed seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillSettings {
    pub operation: Operation,
    pub shake_enabled: bool,
    pub rng_seed: Option<u64>,
}

impl Default for DrillSettings {
    fn default() -> Self {
        DrillSettings {
            operation: Operation::Add,
            shake_enabled: true,
            rng_seed: None,
        }
    }
}

impl DrillSettings {
    /// Parse settings from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`DrillError::InvalidConfig`] if the JSON is malformed.
    pub fn from_json_str(json: &str) -> Result<Self, DrillError> {
        Ok(serde_json::from_str(json)?)
    }
}
