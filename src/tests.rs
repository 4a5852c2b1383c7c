//! Crate-level tests for `rocket_math`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical problems and hints |
//! | Invariants | Every operation stays consistent and non-negative over many draws |
//! | Scoring | +5 unaided, +1 with hint, 0 when wrong |
//! | Errors | Unknown operation code leaves the session unchanged |
//! | Scenario | A seeded `7 + 5` round plays through end to end |

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{
    check, generate, generate_from_code, generate_problem, make_hints, to_client_view,
    DrillError, Operation, Phase, Problem, ProblemRequest, SessionState,
};

// ── helpers ──────────────────────────────────────────────────────────────────

const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_rounds() {
    for seed in SEEDS {
        for op in Operation::ALL {
            let a = SessionState::start(&mut rng(seed), op);
            let b = SessionState::start(&mut rng(seed), op);
            assert_eq!(a, b, "session mismatch for {op:?} seed={seed}");
        }
    }
}

#[test]
fn different_seeds_produce_varied_problems() {
    let mut same = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let req = |rng_seed| ProblemRequest { operation: Operation::Multiply, rng_seed };
        let a = generate_problem(req(Some(seed)));
        let b = generate_problem(req(Some(seed + 500)));
        if a == b {
            same += 1;
        }
    }
    assert!(same < pairs as usize / 4, "too many identical problems ({same}/{pairs})");
}

#[test]
fn entropy_request_produces_a_valid_problem() {
    for op in Operation::ALL {
        let p = generate_problem(ProblemRequest::new(op));
        assert!(p.is_consistent(), "{p}");
    }
}

// ── invariants ───────────────────────────────────────────────────────────────

#[test]
fn ten_thousand_problems_per_operation_are_consistent() {
    let mut r = rng(10_000);
    for op in Operation::ALL {
        for _ in 0..10_000 {
            let p = generate(&mut r, op);
            let expected = match op {
                Operation::Add      => i64::from(p.first) + i64::from(p.second),
                Operation::Subtract => i64::from(p.first) - i64::from(p.second),
                Operation::Multiply => i64::from(p.first) * i64::from(p.second),
                Operation::Divide   => {
                    assert_eq!(p.first % p.second, 0, "remainder in {p}");
                    i64::from(p.first / p.second)
                }
            };
            assert!(expected >= 0, "negative answer in {p}");
            assert_eq!(i64::from(p.answer), expected, "wrong answer in {p}");
        }
    }
}

#[test]
fn every_dealt_hint_set_contains_the_answer_once() {
    for seed in SEEDS {
        let mut r = rng(seed);
        let mut s = SessionState::start(&mut r, Operation::Add);
        for op in Operation::ALL {
            for _ in 0..200 {
                s.new_problem(&mut r, op);
                let answer = s.current_answer();
                let values = s.hints().values();
                assert_eq!(values.iter().filter(|&&v| v == answer).count(), 1);
                let mut sorted = values.to_vec();
                sorted.sort_unstable();
                sorted.dedup();
                assert_eq!(sorted.len(), 5, "duplicate hint in {values:?}");
            }
        }
    }
}

#[test]
fn make_hints_handles_extreme_answers() {
    let mut r = rng(3);
    for correct in [0u32, 1, 144, 145, 1_000] {
        let hints = make_hints(&mut r, correct);
        assert!(hints.contains(correct));
        assert_eq!(hints.values().iter().filter(|&&v| v == correct).count(), 1);
    }
}

// ── scoring ──────────────────────────────────────────────────────────────────

#[test]
fn scoring_table_matches_hint_policy() {
    let mut r = rng(21);
    let s = SessionState::start(&mut r, Operation::Divide);
    let answer = i64::from(s.current_answer());

    let unaided = check(answer, &s, false);
    assert!(unaided.correct);
    assert_eq!(unaided.score_delta, 5);

    let aided = check(answer, &s, true);
    assert!(aided.correct);
    assert_eq!(aided.score_delta, 1);

    let wrong = check(answer - 1, &s, false);
    assert!(!wrong.correct);
    assert_eq!(wrong.score_delta, 0);
}

#[test]
fn wrong_answer_then_next_problem_awaits_again() {
    let mut r = rng(22);
    let mut s = SessionState::start(&mut r, Operation::Add);
    let answer = i64::from(s.current_answer());
    assert!(!s.check(answer + 1, false).correct);
    assert_eq!(s.phase(), Phase::Scored);

    s.new_problem(&mut r, Operation::Add);
    assert_eq!(s.phase(), Phase::AwaitingAnswer);
    assert_eq!(s.score(), 0);
}

// ── errors ───────────────────────────────────────────────────────────────────

#[test]
fn unrecognised_code_is_invalid_operation() {
    let mut r = rng(30);
    for code in ['x', 'A', '+', ' '] {
        let err = generate_from_code(&mut r, code).unwrap_err();
        assert!(matches!(err, DrillError::InvalidOperation(c) if c == code));
    }
}

#[test]
fn unrecognised_code_keeps_score_and_answer() {
    let mut r = rng(31);
    let mut s = SessionState::start(&mut r, Operation::Multiply);
    let answer = s.current_answer();
    let view_before = to_client_view(&s);

    assert!(s.new_problem_from_code(&mut r, 'x').is_err());
    assert_eq!(s.current_answer(), answer);
    assert_eq!(s.score(), 0);
    assert_eq!(to_client_view(&s), view_before);
}

// ── scenario ─────────────────────────────────────────────────────────────────

#[test]
fn seeded_seven_plus_five_round() {
    // Find a seed whose first addition problem is 7 + 5, then replay it.
    let seed = (0u64..100_000)
        .find(|&seed| {
            let p = generate(&mut rng(seed), Operation::Add);
            p.first == 7 && p.second == 5
        })
        .expect("some seed deals 7 + 5");

    let mut r = rng(seed);
    let mut s = SessionState::start_from_code(&mut r, 'a').unwrap();
    assert_eq!(s.phase(), Phase::AwaitingAnswer);
    let problem = *s.current_problem();
    assert_eq!(
        problem,
        Problem { first: 7, operator: Operation::Add, second: 5, answer: 12 }
    );
    assert_eq!(problem.question_text(), "7 + 5 = ?");

    let verdict = s.check(12, false);
    assert!(verdict.correct);
    assert_eq!(verdict.score_delta, 5);
    assert_eq!(to_client_view(&s)["score_text"], "5");
}
