//! Property-based tests for the recorte-core codec and filter cursor.
//!
//! Tests codec round-trips, clamping, and cursor availability using proptest
//! for randomized input generation.

use proptest::prelude::*;
use recorte_core::{ControlRange, FilterType, ParameterCursor, ranges};

/// Every named control range, for exhaustive codec sweeps.
const ALL_RANGES: [ControlRange; 15] = [
    ranges::FILTER_FREQUENCY,
    ranges::FILTER_BANDWIDTH,
    ranges::FILTER_GAIN,
    ranges::DYNAMICS_THRESHOLD,
    ranges::DYNAMICS_RATIO,
    ranges::MIX_PERCENT,
    ranges::PRE_GAIN,
    ranges::DELAY_TIME,
    ranges::FEEDBACK_PERCENT,
    ranges::DELAY_CUTOFF,
    ranges::PAN,
    ranges::PITCH_OFFSET,
    ranges::TEMPO_OFFSET,
    ranges::GLOBAL_PITCH,
    ranges::GLOBAL_TEMPO,
];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// denormalize(normalize(x)) == clamp(x) for every range and any finite
    /// input, within a relative tolerance for the log-scaled ranges.
    #[test]
    fn codec_round_trips_to_clamped_value(
        idx in 0usize..ALL_RANGES.len(),
        value in -40000.0f32..40000.0f32,
    ) {
        let range = ALL_RANGES[idx];
        let clamped = range.clamp(value);
        let rt = range.denormalize(range.normalize(value));
        let tol = (range.max - range.min).abs() * 1e-4 + 1e-5;
        prop_assert!(
            (rt - clamped).abs() <= tol.max(clamped.abs() * 1e-3),
            "range {idx}: value {value} clamps to {clamped} but round-trips to {rt}"
        );
    }

    /// normalize never escapes [0, 1], whatever the input.
    #[test]
    fn normalize_stays_in_unit_interval(
        idx in 0usize..ALL_RANGES.len(),
        value in -1e6f32..1e6f32,
    ) {
        let n = ALL_RANGES[idx].normalize(value);
        prop_assert!((0.0..=1.0).contains(&n), "range {idx}: {value} -> {n}");
    }

    /// denormalize never escapes [min, max], whatever the normalized input.
    #[test]
    fn denormalize_stays_in_range(
        idx in 0usize..ALL_RANGES.len(),
        normalized in -10.0f32..10.0f32,
    ) {
        let range = ALL_RANGES[idx];
        let v = range.denormalize(normalized);
        prop_assert!(
            v >= range.min && v <= range.max,
            "range {idx}: normalized {normalized} -> {v} outside [{}, {}]",
            range.min,
            range.max
        );
    }

    /// Any balanced sequence of next/previous type steps is an identity, and
    /// the cursor never lands outside the current type's availability list.
    #[test]
    fn cursor_never_leaves_available_set(steps in prop::collection::vec(0u8..4, 1..64)) {
        let mut filter_type = FilterType::LowPass;
        let mut cursor = ParameterCursor::new();

        for step in steps {
            match step {
                0 => {
                    filter_type = filter_type.next_in_cycle();
                    cursor.realign(filter_type);
                }
                1 => {
                    filter_type = filter_type.previous_in_cycle();
                    cursor.realign(filter_type);
                }
                2 => cursor.advance(filter_type),
                _ => cursor.retreat(filter_type),
            }
            prop_assert!(
                filter_type.supports(cursor.current()),
                "cursor on {:?} under {:?}",
                cursor.current(),
                filter_type
            );
        }
    }

    /// next_in_cycle applied six times is the identity from any cycle member.
    #[test]
    fn full_cycle_is_identity(start_idx in 0usize..6) {
        let start = FilterType::CYCLE[start_idx];
        let mut t = start;
        for _ in 0..6 {
            t = t.next_in_cycle();
        }
        prop_assert_eq!(t, start);
    }
}
