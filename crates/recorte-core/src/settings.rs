//! Per-pad effect settings records.
//!
//! Each effect stage carries one small `Copy` record of its parameters.
//! Records are immutable-by-replacement: setters build a modified copy and
//! store it whole, which keeps the "swap the entire chain atomically on pad
//! selection" contract trivial.
//!
//! Defaults match the instrument's power-on state:
//!
//! | Record | Defaults |
//! |--------|----------|
//! | Distortion | mix 50%, pre-gain 0 dB |
//! | Filter | low-pass, 1 kHz, Q 0.5, gain -10 dB |
//! | Dynamics | low -20 dB, high -25 dB, ratio 2:1, attack 5 ms, release 100 ms, gain 0 dB |
//! | Delay | mix 50%, 0.5 s, feedback 50%, cutoff 10 kHz |
//! | Reverb | mix 50% |

use crate::filter::FilterType;

/// Distortion stage settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistortionSettings {
    /// Wet/dry mix in percent (0–100).
    pub wet_dry_mix: f32,
    /// Pre-gain in dB (-20–20).
    pub pre_gain: f32,
}

impl Default for DistortionSettings {
    fn default() -> Self {
        Self {
            wet_dry_mix: 50.0,
            pre_gain: 0.0,
        }
    }
}

/// Single-band filter stage settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSettings {
    /// Filter response shape.
    pub filter_type: FilterType,
    /// Center/cutoff frequency in Hz (20–20000).
    pub frequency: f32,
    /// Bandwidth (Q, 0.05–5.0). Only meaningful for band-pass and parametric.
    pub bandwidth: f32,
    /// Gain in dB (-20–20). Only meaningful for shelves and parametric.
    pub gain: f32,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            filter_type: FilterType::LowPass,
            frequency: 1000.0,
            bandwidth: 0.5,
            gain: -10.0,
        }
    }
}

/// Dynamics processor settings.
///
/// The underlying processor exposes a compressor threshold and a separate
/// expander threshold/ratio pair. `low_threshold` drives the compressor
/// threshold; `high_threshold` drives the expander threshold and is the
/// value the normalized threshold control edits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicsSettings {
    /// Compressor threshold in dB.
    pub low_threshold: f32,
    /// Expander threshold in dB. The continuous control edits this one.
    pub high_threshold: f32,
    /// Expansion ratio (1–20).
    pub ratio: f32,
    /// Attack time in seconds.
    pub attack_time: f32,
    /// Release time in seconds.
    pub release_time: f32,
    /// Output make-up gain in dB.
    pub master_gain: f32,
}

impl Default for DynamicsSettings {
    fn default() -> Self {
        Self {
            low_threshold: -20.0,
            high_threshold: -25.0,
            ratio: 2.0,
            attack_time: 0.005,
            release_time: 0.1,
            master_gain: 0.0,
        }
    }
}

/// Delay stage settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelaySettings {
    /// Wet/dry mix in percent (0–100).
    pub wet_dry_mix: f32,
    /// Delay time in seconds (0–2).
    pub delay_time: f32,
    /// Feedback in percent (0–100).
    pub feedback: f32,
    /// Low-pass cutoff inside the feedback path, in Hz (2000–20000).
    pub low_pass_cutoff: f32,
}

impl Default for DelaySettings {
    fn default() -> Self {
        Self {
            wet_dry_mix: 50.0,
            delay_time: 0.5,
            feedback: 50.0,
            low_pass_cutoff: 10000.0,
        }
    }
}

/// Reverb stage settings.
///
/// The reverb shares its bypass with the delay stage; its mix is the only
/// parameter, and it doubles as the bypass mechanism (see the session crate's
/// bypass handling).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReverbSettings {
    /// Wet/dry mix in percent (0–100).
    pub wet_dry_mix: f32,
}

impl Default for ReverbSettings {
    fn default() -> Self {
        Self { wet_dry_mix: 50.0 }
    }
}

/// The four bypassable stages, in chain application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Distortion stage.
    Distortion,
    /// Filter stage.
    Filter,
    /// Dynamics stage.
    Dynamics,
    /// Delay and reverb, bypassed as one unit.
    DelayReverb,
}

impl Stage {
    /// All stages in the fixed bypass application order.
    pub const ALL: [Stage; 4] = [
        Stage::Distortion,
        Stage::Filter,
        Stage::Dynamics,
        Stage::DelayReverb,
    ];
}

/// Per-pad bypass flags, one per [`Stage`], in `Stage::ALL` order.
///
/// A fresh pad starts fully bypassed — effects only engage once the user
/// turns a stage on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BypassVector([bool; 4]);

impl BypassVector {
    /// All stages bypassed.
    pub const fn all_bypassed() -> Self {
        Self([true; 4])
    }

    /// All stages engaged.
    pub const fn none_bypassed() -> Self {
        Self([false; 4])
    }

    /// Returns whether the given stage is bypassed.
    #[inline]
    pub fn is_bypassed(&self, stage: Stage) -> bool {
        self.0[Self::index(stage)]
    }

    /// Sets the bypass flag for one stage.
    #[inline]
    pub fn set(&mut self, stage: Stage, bypassed: bool) {
        self.0[Self::index(stage)] = bypassed;
    }

    /// Iterates `(stage, bypassed)` pairs in application order.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, bool)> + '_ {
        Stage::ALL.iter().map(|&s| (s, self.is_bypassed(s)))
    }

    const fn index(stage: Stage) -> usize {
        match stage {
            Stage::Distortion => 0,
            Stage::Filter => 1,
            Stage::Dynamics => 2,
            Stage::DelayReverb => 3,
        }
    }
}

impl Default for BypassVector {
    fn default() -> Self {
        Self::all_bypassed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distortion_defaults() {
        let d = DistortionSettings::default();
        assert_eq!(d.wet_dry_mix, 50.0);
        assert_eq!(d.pre_gain, 0.0);
    }

    #[test]
    fn filter_defaults() {
        let f = FilterSettings::default();
        assert_eq!(f.filter_type, FilterType::LowPass);
        assert_eq!(f.frequency, 1000.0);
        assert_eq!(f.bandwidth, 0.5);
        assert_eq!(f.gain, -10.0);
    }

    #[test]
    fn dynamics_defaults() {
        let d = DynamicsSettings::default();
        assert_eq!(d.low_threshold, -20.0);
        assert_eq!(d.high_threshold, -25.0);
        assert_eq!(d.ratio, 2.0);
        assert_eq!(d.attack_time, 0.005);
        assert_eq!(d.release_time, 0.1);
        assert_eq!(d.master_gain, 0.0);
    }

    #[test]
    fn delay_defaults() {
        let d = DelaySettings::default();
        assert_eq!(d.wet_dry_mix, 50.0);
        assert_eq!(d.delay_time, 0.5);
        assert_eq!(d.feedback, 50.0);
        assert_eq!(d.low_pass_cutoff, 10000.0);
    }

    #[test]
    fn bypass_defaults_to_all_bypassed() {
        let b = BypassVector::default();
        for (_, bypassed) in b.iter() {
            assert!(bypassed);
        }
    }

    #[test]
    fn bypass_set_and_read_single_stage() {
        let mut b = BypassVector::all_bypassed();
        b.set(Stage::Filter, false);
        assert!(!b.is_bypassed(Stage::Filter));
        assert!(b.is_bypassed(Stage::Distortion));
        assert!(b.is_bypassed(Stage::Dynamics));
        assert!(b.is_bypassed(Stage::DelayReverb));
    }

    #[test]
    fn bypass_iter_order_is_fixed() {
        let b = BypassVector::none_bypassed();
        let mut order = [Stage::Distortion; 4];
        for (i, (s, _)) in b.iter().enumerate() {
            order[i] = s;
        }
        assert_eq!(
            order,
            [
                Stage::Distortion,
                Stage::Filter,
                Stage::Dynamics,
                Stage::DelayReverb
            ]
        );
    }
}
