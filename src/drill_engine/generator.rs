use std::ops::RangeInclusive;

use rand::Rng;

use crate::drill_engine::{
    error::DrillError,
    helpers::{draw_pair, make_rng},
    models::{Operation, Problem, ProblemRequest},
};

/// Operand range for addition.
pub const ADD_RANGE: RangeInclusive<u32> = 1..=12;
/// Range for both the subtrahend and the difference.
pub const SUBTRACT_RANGE: RangeInclusive<u32> = 1..=9;
/// Factor range for multiplication.
pub const MULTIPLY_RANGE: RangeInclusive<u32> = 2..=12;
/// Range for both the divisor and the quotient.
pub const DIVIDE_RANGE: RangeInclusive<u32> = 2..=12;

/// Generate a problem for `operation`.
///
/// Subtraction and division are built backwards from the result so the
/// answer is always a non-negative whole number. This skews the
/// distribution of `(first, second)` pairs and is kept that way on purpose.
pub fn generate<R: Rng>(rng: &mut R, operation: Operation) -> Problem {
    let problem = match operation {
        Operation::Add => {
            let (first, second) = draw_pair(rng, ADD_RANGE);
            Problem { first, operator: operation, second, answer: first + second }
        }
        Operation::Subtract => {
            let (second, answer) = draw_pair(rng, SUBTRACT_RANGE);
            Problem { first: second + answer, operator: operation, second, answer }
        }
        Operation::Multiply => {
            let (first, second) = draw_pair(rng, MULTIPLY_RANGE);
            Problem { first, operator: operation, second, answer: first * second }
        }
        Operation::Divide => {
            let (second, answer) = draw_pair(rng, DIVIDE_RANGE);
            Problem { first: second * answer, operator: operation, second, answer }
        }
    };
    tracing::debug!(problem = %problem, "generated problem");
    problem
}

/// Generate a problem from a single-character operation code.
///
/// # Errors
///
/// Returns [`DrillError::InvalidOperation`] for an unknown code. No RNG
/// state is consumed in that case.
pub fn generate_from_code<R: Rng>(rng: &mut R, code: char) -> Result<Problem, DrillError> {
    let operation = Operation::from_code(code)?;
    Ok(generate(rng, operation))
}

/// One-shot entry point for callers that don't hold an RNG.
pub fn generate_problem(request: ProblemRequest) -> Problem {
    let mut rng = make_rng(request.rng_seed);
    generate(&mut rng, request.operation)
}
