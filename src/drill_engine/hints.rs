use std::ops::RangeInclusive;

use rand::Rng;

use crate::drill_engine::models::{HintSet, HINT_SIZE};

/// Decoys are drawn from here: 144 = 12 × 12 is the largest answer any
/// operation produces.
pub const DECOY_RANGE: RangeInclusive<u32> = 1..=144;

/// Upper bound on rejection-sampling draws for one hint set.
pub const MAX_HINT_DRAWS: usize = 1_000;

const DECOY_COUNT: usize = HINT_SIZE - 1;

/// Build a shuffled hint set holding `correct` plus four distinct decoys.
pub fn make_hints<R: Rng>(rng: &mut R, correct: u32) -> HintSet {
    let mut values = [correct; HINT_SIZE];
    let mut filled = 0usize;

    let mut draws = 0usize;
    while filled < DECOY_COUNT && draws < MAX_HINT_DRAWS {
        draws += 1;
        let candidate = rng.gen_range(DECOY_RANGE);
        if candidate != correct && !values[..filled].contains(&candidate) {
            values[filled] = candidate;
            filled += 1;
        }
    }

    if filled < DECOY_COUNT {
        tracing::warn!(correct, draws, filled, "hint draw cap hit, filling decoys in order");
        for candidate in *DECOY_RANGE.start().. {
            if filled == DECOY_COUNT {
                break;
            }
            if candidate != correct && !values[..filled].contains(&candidate) {
                values[filled] = candidate;
                filled += 1;
            }
        }
    }

    // values[DECOY_COUNT] already holds the correct answer. Fisher-Yates.
    for i in (1..values.len()).rev() {
        let j = rng.gen_range(0..=i);
        values.swap(i, j);
    }

    HintSet::from_values(values)
}
