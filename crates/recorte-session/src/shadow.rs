//! The "most recent" shadow of every live-edited setting.
//!
//! Whenever the selected pad's parameters change, the session mirrors the
//! new value here. A pad selected for the first time with no stored bundle
//! is seeded from this struct, so fresh pads inherit whatever the user was
//! just dialing in rather than factory defaults (lazy default propagation).
//!
//! Session-scoped and owned by the selection controller — deliberately not
//! ambient global state. Created at session start, read only during seeding.

use recorte_core::{
    BypassVector, DelaySettings, DistortionSettings, DynamicsSettings, FilterSettings,
};

/// The last live-edited value of each per-pad setting.
#[derive(Debug, Clone, Copy)]
pub struct RecentSettings {
    /// Last edited filter settings.
    pub filter: FilterSettings,
    /// Last edited dynamics settings.
    pub dynamics: DynamicsSettings,
    /// Last edited distortion settings.
    pub distortion: DistortionSettings,
    /// Last edited delay settings.
    pub delay: DelaySettings,
    /// Last edited pitch offset in cents.
    pub pitch_offset: f32,
    /// Last edited tempo offset multiplier.
    pub tempo_offset: f32,
    /// Last edited bypass vector.
    pub bypass: BypassVector,
    /// Last edited pan position.
    pub pan: f32,
}

impl Default for RecentSettings {
    fn default() -> Self {
        Self {
            filter: FilterSettings::default(),
            dynamics: DynamicsSettings::default(),
            distortion: DistortionSettings::default(),
            delay: DelaySettings::default(),
            pitch_offset: 0.0,
            tempo_offset: 1.0,
            bypass: BypassVector::all_bypassed(),
            pan: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recorte_core::Stage;

    #[test]
    fn defaults_match_power_on_state() {
        let recent = RecentSettings::default();
        assert_eq!(recent.pitch_offset, 0.0);
        assert_eq!(recent.tempo_offset, 1.0);
        assert_eq!(recent.pan, 0.0);
        assert!(recent.bypass.is_bypassed(Stage::Distortion));
        assert!(recent.bypass.is_bypassed(Stage::DelayReverb));
        assert_eq!(recent.filter.frequency, 1000.0);
        assert_eq!(recent.delay.delay_time, 0.5);
    }
}
