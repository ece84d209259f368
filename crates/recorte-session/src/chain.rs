//! The signal-chain collaborator contract.
//!
//! The session never touches an audio engine directly. It speaks to one
//! [`SignalChain`] — an object wired by the platform layer around the real
//! node graph — through per-stage parameter setters and bypass toggles. The
//! chain's live parameters are always a projection of the selected pad's
//! stored settings, never an independent source of truth.
//!
//! Parameter writes are assumed synchronous and non-blocking from the
//! control thread's perspective.

use recorte_core::{DelaySettings, DistortionSettings, DynamicsSettings, FilterSettings, Stage};

/// One physical effects chain with settable live parameters.
///
/// Implementations map each call onto the corresponding engine node
/// parameter. Bundle appliers have default implementations in terms of the
/// granular setters; [`apply_filter`](Self::apply_filter) is primitive
/// because the filter band swaps as one unit.
pub trait SignalChain {
    /// Pushes a complete filter band configuration.
    fn apply_filter(&mut self, settings: &FilterSettings);

    /// Sets the compressor threshold in dB.
    fn set_compressor_threshold(&mut self, db: f32);

    /// Sets the expander threshold in dB.
    fn set_expander_threshold(&mut self, db: f32);

    /// Sets the expansion ratio.
    fn set_expander_ratio(&mut self, ratio: f32);

    /// Sets the dynamics attack time in seconds.
    fn set_attack_time(&mut self, seconds: f32);

    /// Sets the dynamics release time in seconds.
    fn set_release_time(&mut self, seconds: f32);

    /// Sets the dynamics make-up gain in dB.
    fn set_master_gain(&mut self, db: f32);

    /// Sets the distortion wet/dry mix in percent.
    fn set_distortion_mix(&mut self, percent: f32);

    /// Sets the distortion pre-gain in dB.
    fn set_distortion_pre_gain(&mut self, db: f32);

    /// Sets the delay wet/dry mix in percent.
    fn set_delay_mix(&mut self, percent: f32);

    /// Sets the delay time in seconds.
    fn set_delay_time(&mut self, seconds: f32);

    /// Sets the delay feedback in percent.
    fn set_delay_feedback(&mut self, percent: f32);

    /// Sets the delay low-pass cutoff in Hz.
    fn set_delay_cutoff(&mut self, hz: f32);

    /// Sets the reverb wet/dry mix in percent.
    ///
    /// Doubles as the reverb's bypass: the delay/reverb bypass forces this
    /// to zero instead of toggling a real bypass flag.
    fn set_reverb_mix(&mut self, percent: f32);

    /// Sets the composed pitch shift in cents.
    fn set_pitch(&mut self, cents: f32);

    /// Sets the composed playback-rate multiplier.
    fn set_tempo(&mut self, ratio: f32);

    /// Sets the output pan in [-1, 1].
    fn set_pan(&mut self, pan: f32);

    /// Toggles a stage's bypass flag.
    fn set_bypass(&mut self, stage: Stage, bypassed: bool);

    /// Clears the dynamics processor's internal envelope state.
    ///
    /// Called on every pad switch so gain reduction from the previous pad
    /// does not bleed into the next one.
    fn reset_dynamics(&mut self);

    /// Pushes a complete dynamics configuration.
    fn apply_dynamics(&mut self, settings: &DynamicsSettings) {
        self.set_compressor_threshold(settings.low_threshold);
        self.set_expander_threshold(settings.high_threshold);
        self.set_expander_ratio(settings.ratio);
        self.set_attack_time(settings.attack_time);
        self.set_release_time(settings.release_time);
        self.set_master_gain(settings.master_gain);
    }

    /// Pushes a complete distortion configuration.
    fn apply_distortion(&mut self, settings: &DistortionSettings) {
        self.set_distortion_mix(settings.wet_dry_mix);
        self.set_distortion_pre_gain(settings.pre_gain);
    }

    /// Pushes a complete delay configuration.
    fn apply_delay(&mut self, settings: &DelaySettings) {
        self.set_delay_mix(settings.wet_dry_mix);
        self.set_delay_time(settings.delay_time);
        self.set_delay_feedback(settings.feedback);
        self.set_delay_cutoff(settings.low_pass_cutoff);
    }
}
