// Copyright 2026 Pixelguess Contributors
// SPDX-License-Identifier: Apache-2.0

//! Resolution ladder generation.
//!
//! A guessing session walks a geometric ladder of target pixel widths,
//! starting at 8 and growing by 1.3x until the picture's natural width is
//! passed. This ladder is the pacing backbone for all scheduled work.

/// First rung of the ladder, in pixels.
pub const INITIAL_WIDTH: u32 = 8;

/// Growth factor between rungs.
pub const GROWTH_FACTOR: f64 = 1.3;

/// Generate the ladder of target pixel widths for a picture of the given
/// natural width.
///
/// The accumulator stays un-floored between steps, so small widths cannot
/// stall on a repeated floor value; each emitted rung is the floor of the
/// accumulator. Widths below 8 yield an empty ladder.
pub fn resolution_steps(natural_width: u32) -> Vec<u32> {
    let mut steps = Vec::new();
    let mut raw = f64::from(INITIAL_WIDTH);
    while raw <= f64::from(natural_width) {
        steps.push(raw.floor() as u32);
        raw *= GROWTH_FACTOR;
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_for_width_100() {
        assert_eq!(
            resolution_steps(100),
            vec![8, 10, 13, 17, 22, 29, 38, 50, 65, 84]
        );
    }

    #[test]
    fn test_below_initial_width_is_empty() {
        assert!(resolution_steps(0).is_empty());
        assert!(resolution_steps(7).is_empty());
    }

    #[test]
    fn test_exactly_initial_width() {
        assert_eq!(resolution_steps(8), vec![8]);
    }

    #[test]
    fn test_ladder_properties() {
        for natural_width in 8..2000 {
            let steps = resolution_steps(natural_width);
            assert_eq!(steps[0], INITIAL_WIDTH);
            // Strictly increasing.
            for pair in steps.windows(2) {
                assert!(pair[0] < pair[1], "ladder stalled at {pair:?}");
            }
            // Last rung fits; the next raw value would not.
            let last = *steps.last().unwrap();
            assert!(last <= natural_width);
            let final_raw = f64::from(INITIAL_WIDTH)
                * GROWTH_FACTOR.powi(steps.len() as i32);
            assert!(final_raw > f64::from(natural_width));
        }
    }
}
