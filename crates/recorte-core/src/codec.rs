//! Bidirectional transforms between engineering units and normalized values.
//!
//! Every continuous control in the instrument (knobs, sliders, the filter
//! cursor) works on a normalized \[0.0, 1.0\] value, while storage and the
//! signal chain work in engineering units (Hz, dB, seconds, percent). This
//! module provides the stateless codec between the two.
//!
//! # Normalization Formulas
//!
//! - **Linear**: `normalized = (value - min) / (max - min)`
//! - **Logarithmic**: `normalized = ln(value/min) / ln(max/min)` — requires
//!   `min > 0`. Used for filter frequency (20 Hz–20 kHz) and the dynamics
//!   ratio (1–10, where it reduces to `log10(ratio)`).
//!
//! # Clamping Contract
//!
//! Out-of-range input never propagates past this layer: `normalize` clamps
//! its result to \[0, 1\] and `denormalize` clamps its input to \[0, 1\]
//! before mapping, so the output always lands inside `[min, max]`.
//!
//! # Example
//!
//! ```rust
//! use recorte_core::ranges;
//!
//! // Filter frequency is log-scaled: 1 kHz does not sit at the midpoint.
//! let n = ranges::FILTER_FREQUENCY.normalize(1000.0);
//! let back = ranges::FILTER_FREQUENCY.denormalize(n);
//! assert!((back - 1000.0).abs() < 0.5);
//!
//! // A runaway normalized value is clamped, never rejected.
//! assert_eq!(ranges::MIX_PERCENT.denormalize(1.5), 100.0);
//! ```

use libm::{logf, powf};

/// Scaling curve for mapping a control range to normalized space.
///
/// Linear is the default for levels, mixes, and times. Logarithmic is used
/// where equal knob travel should feel like equal musical steps (frequency,
/// compression ratio).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlScale {
    /// Equal resolution across the range.
    #[default]
    Linear,
    /// More resolution at low values. Requires `min > 0.0`.
    Logarithmic,
}

/// Unit tag for formatting a control value on screen or hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlUnit {
    /// Decibels — gains and thresholds.
    Decibels,
    /// Hertz — frequencies and cutoffs.
    Hertz,
    /// Seconds — delay time and envelope times.
    Seconds,
    /// Percentage — wet/dry mixes and feedback.
    Percent,
    /// n:1 compression/expansion ratio.
    Ratio,
    /// Pitch offset in cents.
    Cents,
    /// Dimensionless (pan, tempo multiplier, Q).
    None,
}

impl ControlUnit {
    /// Display suffix for this unit.
    pub const fn suffix(&self) -> &'static str {
        match self {
            ControlUnit::Decibels => " dB",
            ControlUnit::Hertz => " Hz",
            ControlUnit::Seconds => " s",
            ControlUnit::Percent => "%",
            ControlUnit::Ratio => ":1",
            ControlUnit::Cents => " ct",
            ControlUnit::None => "",
        }
    }
}

/// A control's valid range, default value, and normalization curve.
///
/// One `ControlRange` exists per continuous parameter; see [`crate::ranges`]
/// for the full table. The range is the single authority on what values a
/// parameter may take — settings records and the signal chain both rely on
/// [`clamp`](Self::clamp) at every write boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRange {
    /// Minimum allowed value.
    pub min: f32,
    /// Maximum allowed value.
    pub max: f32,
    /// Default value on a fresh session.
    pub default: f32,
    /// Normalization curve.
    pub scale: ControlScale,
    /// Unit tag for display.
    pub unit: ControlUnit,
}

impl ControlRange {
    /// Linear range constructor.
    pub const fn linear(min: f32, max: f32, default: f32, unit: ControlUnit) -> Self {
        Self {
            min,
            max,
            default,
            scale: ControlScale::Linear,
            unit,
        }
    }

    /// Logarithmic range constructor. `min` must be positive.
    pub const fn logarithmic(min: f32, max: f32, default: f32, unit: ControlUnit) -> Self {
        Self {
            min,
            max,
            default,
            scale: ControlScale::Logarithmic,
            unit,
        }
    }

    /// Clamps a value to `[min, max]`.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Converts an engineering value to normalized \[0, 1\] space.
    ///
    /// The result is clamped, so out-of-range input maps to 0 or 1.
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        let n = match self.scale {
            ControlScale::Linear => (value - self.min) / range,
            ControlScale::Logarithmic => {
                if self.min <= 0.0 || value <= 0.0 {
                    return 0.0;
                }
                logf(value / self.min) / logf(self.max / self.min)
            }
        };
        n.clamp(0.0, 1.0)
    }

    /// Converts a normalized value back to engineering units.
    ///
    /// Inverse of [`normalize`](Self::normalize). The normalized input is
    /// clamped to \[0, 1\] first, so the output always lands in `[min, max]`.
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        let n = normalized.clamp(0.0, 1.0);
        match self.scale {
            ControlScale::Linear => self.min + n * (self.max - self.min),
            ControlScale::Logarithmic => {
                if self.min <= 0.0 {
                    return self.min;
                }
                self.min * powf(self.max / self.min, n)
            }
        }
    }
}

/// The control range of every continuous parameter in the instrument.
pub mod ranges {
    use super::{ControlRange, ControlUnit};

    /// Filter center/cutoff frequency. Log-scaled so the knob sweeps octaves.
    pub const FILTER_FREQUENCY: ControlRange =
        ControlRange::logarithmic(20.0, 20000.0, 1000.0, ControlUnit::Hertz);

    /// Filter bandwidth (Q).
    pub const FILTER_BANDWIDTH: ControlRange =
        ControlRange::linear(0.05, 5.0, 0.5, ControlUnit::None);

    /// Shelf/parametric filter gain.
    pub const FILTER_GAIN: ControlRange =
        ControlRange::linear(-20.0, 20.0, -10.0, ControlUnit::Decibels);

    /// Dynamics threshold as exposed on the continuous control.
    pub const DYNAMICS_THRESHOLD: ControlRange =
        ControlRange::linear(-30.0, 0.0, -25.0, ControlUnit::Decibels);

    /// Dynamics ratio. Logarithmic over 1–10 so `normalize` is `log10(ratio)`.
    pub const DYNAMICS_RATIO: ControlRange =
        ControlRange::logarithmic(1.0, 10.0, 2.0, ControlUnit::Ratio);

    /// Wet/dry mix shared by the distortion, delay, and reverb stages.
    pub const MIX_PERCENT: ControlRange =
        ControlRange::linear(0.0, 100.0, 50.0, ControlUnit::Percent);

    /// Distortion pre-gain.
    pub const PRE_GAIN: ControlRange =
        ControlRange::linear(-20.0, 20.0, 0.0, ControlUnit::Decibels);

    /// Delay time.
    pub const DELAY_TIME: ControlRange =
        ControlRange::linear(0.0, 2.0, 0.5, ControlUnit::Seconds);

    /// Delay feedback.
    pub const FEEDBACK_PERCENT: ControlRange =
        ControlRange::linear(0.0, 100.0, 50.0, ControlUnit::Percent);

    /// Low-pass cutoff inside the delay stage. Deliberately linear — the
    /// original hardware control sweeps it that way.
    pub const DELAY_CUTOFF: ControlRange =
        ControlRange::linear(2000.0, 20000.0, 10000.0, ControlUnit::Hertz);

    /// Per-pad stereo pan.
    pub const PAN: ControlRange = ControlRange::linear(-1.0, 1.0, 0.0, ControlUnit::None);

    /// Per-pad pitch offset on top of the global pitch.
    pub const PITCH_OFFSET: ControlRange =
        ControlRange::linear(-600.0, 600.0, 0.0, ControlUnit::Cents);

    /// Per-pad tempo multiplier on top of the global tempo.
    pub const TEMPO_OFFSET: ControlRange =
        ControlRange::linear(0.5, 1.5, 1.0, ControlUnit::None);

    /// Global pitch control.
    pub const GLOBAL_PITCH: ControlRange =
        ControlRange::linear(-600.0, 600.0, 0.0, ControlUnit::Cents);

    /// Global tempo control.
    pub const GLOBAL_TEMPO: ControlRange =
        ControlRange::linear(0.5, 1.5, 1.0, ControlUnit::None);
}

/// Hard limits of the pitch/tempo hardware, applied after composing global
/// and local values. Wider than the individual control ranges on purpose:
/// global + local may exceed either control alone.
pub mod hardware {
    /// Combined pitch clamp in cents.
    pub const PITCH_CENTS: (f32, f32) = (-2400.0, 2400.0);
    /// Combined tempo clamp as a playback-rate multiplier.
    pub const TEMPO_RATIO: (f32, f32) = (0.25, 4.0);
}
