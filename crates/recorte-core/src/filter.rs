//! Filter types, parameter availability, and the active-parameter cursor.
//!
//! The filter stage exposes three continuous parameters — frequency,
//! bandwidth, and gain — but only a subset is meaningful for any given
//! response shape:
//!
//! | filter type | available parameters |
//! |---|---|
//! | low-pass, high-pass | frequency |
//! | band-pass | frequency, bandwidth |
//! | low-shelf, high-shelf | frequency, gain |
//! | parametric | frequency, bandwidth, gain |
//!
//! The UI drives a single cursor over the available set; cycling the filter
//! type realigns the cursor to frequency whenever its parameter drops out of
//! the new set.

use crate::codec::{ControlRange, ranges};

/// Filter response shape.
///
/// The first six variants are the user-cycling set. The remaining variants
/// mirror the host filter unit's full enum; they are reachable only
/// programmatically and are skipped by [`next_in_cycle`](Self::next_in_cycle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterType {
    /// Low-pass (frequency only).
    #[default]
    LowPass,
    /// High-pass (frequency only).
    HighPass,
    /// Band-pass (frequency + bandwidth).
    BandPass,
    /// Low shelf (frequency + gain).
    LowShelf,
    /// High shelf (frequency + gain).
    HighShelf,
    /// Fully parametric bell (frequency + bandwidth + gain).
    Parametric,
    /// Reserved host variant, not in the cycling order.
    ResonantLowPass,
    /// Reserved host variant, not in the cycling order.
    ResonantHighPass,
    /// Reserved host variant, not in the cycling order.
    BandStop,
    /// Reserved host variant, not in the cycling order.
    ResonantLowShelf,
    /// Reserved host variant, not in the cycling order.
    ResonantHighShelf,
}

impl FilterType {
    /// The six shapes the user can cycle through, in cycling order.
    pub const CYCLE: [FilterType; 6] = [
        FilterType::LowPass,
        FilterType::HighPass,
        FilterType::BandPass,
        FilterType::LowShelf,
        FilterType::HighShelf,
        FilterType::Parametric,
    ];

    /// Display label. Reserved variants render as an empty string.
    pub const fn label(&self) -> &'static str {
        match self {
            FilterType::LowPass => "Low Pass",
            FilterType::HighPass => "High Pass",
            FilterType::BandPass => "Band Pass",
            FilterType::LowShelf => "Low Shelf",
            FilterType::HighShelf => "High Shelf",
            FilterType::Parametric => "Parametric",
            _ => "",
        }
    }

    /// The next shape in the cycling order, wrapping at the end.
    ///
    /// A reserved variant (not in the cycle) restarts from the cycle head's
    /// successor, matching a cycle position of 0.
    pub fn next_in_cycle(&self) -> FilterType {
        let i = Self::CYCLE.iter().position(|t| t == self).unwrap_or(0);
        Self::CYCLE[(i + 1) % Self::CYCLE.len()]
    }

    /// The previous shape in the cycling order, wrapping at the start.
    pub fn previous_in_cycle(&self) -> FilterType {
        let n = Self::CYCLE.len();
        let i = Self::CYCLE.iter().position(|t| t == self).unwrap_or(0);
        Self::CYCLE[(i + n - 1) % n]
    }

    /// The parameters that are meaningful for this shape.
    ///
    /// Reserved variants report all three, as the host unit does.
    pub const fn available_parameters(&self) -> &'static [FilterParameter] {
        match self {
            FilterType::LowPass | FilterType::HighPass => &[FilterParameter::Frequency],
            FilterType::BandPass => &[FilterParameter::Frequency, FilterParameter::Bandwidth],
            FilterType::LowShelf | FilterType::HighShelf => {
                &[FilterParameter::Frequency, FilterParameter::Gain]
            }
            _ => &[
                FilterParameter::Frequency,
                FilterParameter::Bandwidth,
                FilterParameter::Gain,
            ],
        }
    }

    /// Returns whether `parameter` is meaningful for this shape.
    pub fn supports(&self, parameter: FilterParameter) -> bool {
        self.available_parameters().contains(&parameter)
    }

    /// The control range for `parameter` under this shape, or `None` when
    /// the parameter is not meaningful here.
    ///
    /// Callers treat `None` as normalize → 0 and denormalize → no-op, so an
    /// inapplicable control reads as zero and ignores writes.
    pub fn parameter_range(&self, parameter: FilterParameter) -> Option<ControlRange> {
        if !self.supports(parameter) {
            return None;
        }
        Some(match parameter {
            FilterParameter::Frequency => ranges::FILTER_FREQUENCY,
            FilterParameter::Bandwidth => ranges::FILTER_BANDWIDTH,
            FilterParameter::Gain => ranges::FILTER_GAIN,
        })
    }
}

/// One of the filter stage's three continuous parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterParameter {
    /// Center/cutoff frequency.
    #[default]
    Frequency,
    /// Bandwidth (Q).
    Bandwidth,
    /// Shelf/bell gain.
    Gain,
}

/// Cursor over the filter parameters available under the current shape.
///
/// The cursor is session-wide (one per instrument, not per pad). It can only
/// ever land on a parameter in the current shape's availability list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParameterCursor {
    current: FilterParameter,
}

impl ParameterCursor {
    /// A cursor resting on frequency.
    pub const fn new() -> Self {
        Self {
            current: FilterParameter::Frequency,
        }
    }

    /// The parameter the cursor rests on.
    pub const fn current(&self) -> FilterParameter {
        self.current
    }

    /// Moves to the next available parameter under `filter_type`, wrapping.
    pub fn advance(&mut self, filter_type: FilterType) {
        let available = filter_type.available_parameters();
        let i = available.iter().position(|p| *p == self.current).unwrap_or(0);
        self.current = available[(i + 1) % available.len()];
    }

    /// Moves to the previous available parameter under `filter_type`, wrapping.
    pub fn retreat(&mut self, filter_type: FilterType) {
        let available = filter_type.available_parameters();
        let n = available.len();
        let i = available.iter().position(|p| *p == self.current).unwrap_or(0);
        self.current = available[(i + n - 1) % n];
    }

    /// Resets the cursor to frequency if its parameter is not available
    /// under `filter_type`. Called after every type change.
    pub fn realign(&mut self, filter_type: FilterType) {
        if !filter_type.supports(self.current) {
            self.current = FilterParameter::Frequency;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_steps_return_to_start() {
        for start in FilterType::CYCLE {
            let mut t = start;
            for _ in 0..6 {
                t = t.next_in_cycle();
            }
            assert_eq!(t, start);
        }
    }

    #[test]
    fn previous_undoes_next() {
        for start in FilterType::CYCLE {
            assert_eq!(start.next_in_cycle().previous_in_cycle(), start);
        }
    }

    #[test]
    fn cycle_wraps_both_directions() {
        assert_eq!(FilterType::Parametric.next_in_cycle(), FilterType::LowPass);
        assert_eq!(
            FilterType::LowPass.previous_in_cycle(),
            FilterType::Parametric
        );
    }

    #[test]
    fn availability_table_matches_shapes() {
        assert_eq!(
            FilterType::LowPass.available_parameters(),
            &[FilterParameter::Frequency]
        );
        assert_eq!(
            FilterType::BandPass.available_parameters(),
            &[FilterParameter::Frequency, FilterParameter::Bandwidth]
        );
        assert_eq!(
            FilterType::HighShelf.available_parameters(),
            &[FilterParameter::Frequency, FilterParameter::Gain]
        );
        assert_eq!(
            FilterType::Parametric.available_parameters(),
            &[
                FilterParameter::Frequency,
                FilterParameter::Bandwidth,
                FilterParameter::Gain
            ]
        );
    }

    #[test]
    fn reserved_variants_report_everything_and_no_label() {
        assert_eq!(FilterType::BandStop.available_parameters().len(), 3);
        assert_eq!(FilterType::BandStop.label(), "");
        assert_eq!(FilterType::ResonantLowPass.label(), "");
    }

    #[test]
    fn parameter_range_is_none_when_unavailable() {
        assert!(
            FilterType::LowPass
                .parameter_range(FilterParameter::Gain)
                .is_none()
        );
        assert!(
            FilterType::HighShelf
                .parameter_range(FilterParameter::Bandwidth)
                .is_none()
        );
        assert!(
            FilterType::Parametric
                .parameter_range(FilterParameter::Gain)
                .is_some()
        );
    }

    #[test]
    fn cursor_cycles_within_available_set() {
        let mut c = ParameterCursor::new();
        c.advance(FilterType::Parametric);
        assert_eq!(c.current(), FilterParameter::Bandwidth);
        c.advance(FilterType::Parametric);
        assert_eq!(c.current(), FilterParameter::Gain);
        c.advance(FilterType::Parametric);
        assert_eq!(c.current(), FilterParameter::Frequency);
    }

    #[test]
    fn cursor_retreat_wraps() {
        let mut c = ParameterCursor::new();
        c.retreat(FilterType::BandPass);
        assert_eq!(c.current(), FilterParameter::Bandwidth);
        c.retreat(FilterType::BandPass);
        assert_eq!(c.current(), FilterParameter::Frequency);
    }

    #[test]
    fn cursor_on_single_parameter_type_stays_put() {
        let mut c = ParameterCursor::new();
        c.advance(FilterType::LowPass);
        assert_eq!(c.current(), FilterParameter::Frequency);
        c.retreat(FilterType::HighPass);
        assert_eq!(c.current(), FilterParameter::Frequency);
    }

    #[test]
    fn realign_resets_orphaned_cursor() {
        let mut c = ParameterCursor::new();
        c.advance(FilterType::Parametric);
        c.advance(FilterType::Parametric); // now on Gain
        c.realign(FilterType::LowPass);
        assert_eq!(c.current(), FilterParameter::Frequency);
    }

    #[test]
    fn realign_keeps_valid_cursor() {
        let mut c = ParameterCursor::new();
        c.advance(FilterType::LowShelf); // now on Gain
        assert_eq!(c.current(), FilterParameter::Gain);
        c.realign(FilterType::Parametric);
        assert_eq!(c.current(), FilterParameter::Gain);
    }
}
