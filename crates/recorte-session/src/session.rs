//! The pad session: selection control, parameter composition, and the
//! live-chain projection.
//!
//! [`PadSession`] is the single owner of all pad and parameter state. It
//! sits between the control surface and the [`SignalChain`] collaborator:
//! setters persist into the [`PadBank`], mirror into the most-recent shadow,
//! and push to the chain only when the edited pad is the selected one. Pad
//! selection swaps the whole chain configuration atomically.
//!
//! All mutation happens on one control thread; there is no internal locking.
//! Instead of a change-notification mechanism the session keeps a revision
//! counter — every mutator bumps it, and the render layer redraws when
//! [`revision`](PadSession::revision) moves.
//!
//! # Selection contract
//!
//! `select_pad` performs, in order:
//!
//! 1. reset the dynamics processor's envelope state (no bleed between pads)
//! 2. mark the pad selected
//! 3. seed the pad from the most-recent shadow if any settings are missing
//!    (all-or-nothing: a pad either has a full bundle or none)
//! 4. push filter, dynamics, and distortion settings to the chain
//! 5. recompute and push combined pitch, then combined tempo
//! 6. apply the pad's bypass vector, one stage at a time, in fixed order
//!
//! Delay settings are deliberately not pushed on selection: the delay stage
//! runs as shared live state across pads, even though each pad stores a
//! delay record for seeding. Only its bypass flag follows the pad.

use recorte_core::{
    BypassVector, DelaySettings, DistortionSettings, DynamicsSettings, FilterParameter,
    FilterSettings, FilterType, ParameterCursor, ReverbSettings, Stage, hardware, ranges,
};
use tracing::debug;

use crate::chain::SignalChain;
use crate::shadow::RecentSettings;
use crate::store::{PadBank, PadId};
use crate::transport::{PollerTicket, Transport, TransportSource};

/// Valid range of the stored dynamics ratio. Wider than the continuous
/// control, which only sweeps 1–10.
const RATIO_LIMITS: (f32, f32) = (1.0, 20.0);

/// Session state machine owning all pads, the shadow, and the chain.
pub struct PadSession<C> {
    chain: C,
    bank: PadBank,
    recent: RecentSettings,
    reverb: ReverbSettings,
    selected: Option<PadId>,
    global_pitch: f32,
    global_tempo: f32,
    cursor: ParameterCursor,
    sample_loaded: bool,
    revision: u64,
}

impl<C: SignalChain> PadSession<C> {
    /// Creates a session and pushes the power-on state to the chain:
    /// default filter/dynamics/distortion/delay parameters, everything
    /// bypassed, reverb silenced.
    pub fn new(mut chain: C) -> Self {
        let recent = RecentSettings::default();
        chain.apply_filter(&recent.filter);
        chain.apply_dynamics(&recent.dynamics);
        chain.apply_distortion(&recent.distortion);
        chain.apply_delay(&recent.delay);
        for stage in Stage::ALL {
            chain.set_bypass(stage, true);
        }
        // The reverb stage cannot be truly bypassed, so it starts at mix 0.
        chain.set_reverb_mix(0.0);
        Self {
            chain,
            bank: PadBank::new(),
            recent,
            reverb: ReverbSettings::default(),
            selected: None,
            global_pitch: 0.0,
            global_tempo: 1.0,
            cursor: ParameterCursor::new(),
            sample_loaded: false,
            revision: 0,
        }
    }

    /// Read access to the pad bank.
    pub fn bank(&self) -> &PadBank {
        &self.bank
    }

    /// Read access to the wrapped chain.
    pub fn chain(&self) -> &C {
        &self.chain
    }

    /// The currently selected pad, if any.
    pub fn selected_pad(&self) -> Option<PadId> {
        self.selected
    }

    /// Monotonic revision counter; bumps on every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Marks whether a sample is loaded. Pad selection and triggering are
    /// inert until this is set.
    pub fn set_sample_loaded(&mut self, loaded: bool) {
        self.sample_loaded = loaded;
        self.touch();
    }

    /// Whether a sample is loaded.
    pub fn is_sample_loaded(&self) -> bool {
        self.sample_loaded
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    // --- selection ---

    /// Makes `pad` the active pad and projects its settings onto the chain.
    ///
    /// See the module docs for the exact step ordering. No-op while no
    /// sample is loaded. Re-selecting the already-selected pad is idempotent
    /// apart from the dynamics envelope reset.
    pub fn select_pad(&mut self, pad: PadId) {
        if !self.sample_loaded {
            return;
        }
        // 1. clear spillover from the previous pad
        self.chain.reset_dynamics();
        // 2.
        self.selected = Some(pad);
        // 3. all-or-nothing seeding
        if self.bank.needs_seeding(pad) {
            debug!(%pad, "seeding from most-recent settings");
            self.bank.seed_from(pad, &self.recent);
        }
        // 4. project stored settings (delay intentionally omitted)
        let filter = self.bank.filter(pad).unwrap_or_default();
        let dynamics = self.bank.dynamics(pad).unwrap_or_default();
        let distortion = self.bank.distortion(pad).unwrap_or_default();
        self.chain.apply_filter(&filter);
        self.chain.apply_dynamics(&dynamics);
        self.chain.apply_distortion(&distortion);
        // 5. compose pitch and tempo with the pad's offsets
        self.push_combined_pitch();
        self.push_combined_tempo();
        // 6. bypass vector, fixed order
        self.apply_bypass(pad);
        self.touch();
    }

    /// Pad trigger gesture: an empty pad captures the current transport
    /// position as its chop start; a loaded pad seeks there and plays.
    /// Either way the pad becomes selected.
    pub fn trigger_pad<S: TransportSource>(
        &mut self,
        pad: PadId,
        transport: &mut Transport<S>,
    ) -> Option<PollerTicket> {
        if !self.sample_loaded {
            return None;
        }
        let ticket = match self.bank.chop_start(pad) {
            None => {
                let total = transport.total_duration();
                self.bank.set_chop_start(pad, transport.current_time(), total);
                None
            }
            Some(start) => {
                transport.seek_to(start);
                transport.play()
            }
        };
        self.select_pad(pad);
        ticket
    }

    // --- chop editing ---

    /// Sets a pad's chop start (clamped, end pulled along, Empty promoted).
    pub fn set_chop_start(&mut self, pad: PadId, time: f64, total: f64) {
        self.bank.set_chop_start(pad, time, total);
        self.touch();
    }

    /// Sets a pad's chop end (clamped to `[start, total]`).
    pub fn set_chop_end(&mut self, pad: PadId, time: f64, total: f64) {
        self.bank.set_chop_end(pad, time, total);
        self.touch();
    }

    /// Clears a pad's chop unless it is a favorite. Returns whether the
    /// chop was removed.
    pub fn clear_chop(&mut self, pad: PadId) -> bool {
        let removed = self.bank.clear_chop(pad);
        if removed {
            if self.selected == Some(pad) {
                self.selected = None;
            }
            self.touch();
        }
        removed
    }

    /// Flips a loaded pad's favorite flag.
    pub fn toggle_favorite(&mut self, pad: PadId) {
        self.bank.toggle_favorite(pad);
        self.touch();
    }

    // --- pitch and tempo composition ---

    /// Global pitch in cents.
    pub fn global_pitch(&self) -> f32 {
        self.global_pitch
    }

    /// Global tempo multiplier.
    pub fn global_tempo(&self) -> f32 {
        self.global_tempo
    }

    /// Sets the global pitch and re-pushes the composed value.
    pub fn set_global_pitch(&mut self, cents: f32) {
        self.global_pitch = ranges::GLOBAL_PITCH.clamp(cents);
        self.push_combined_pitch();
        self.touch();
    }

    /// Sets the global tempo and re-pushes the composed value.
    pub fn set_global_tempo(&mut self, ratio: f32) {
        self.global_tempo = ranges::GLOBAL_TEMPO.clamp(ratio);
        self.push_combined_tempo();
        self.touch();
    }

    /// Global pitch plus the pad's local offset, clamped to the hardware
    /// range. A pad without an offset contributes zero.
    pub fn combined_pitch(&self, pad: PadId) -> f32 {
        let local = self.bank.pitch_offset(pad).unwrap_or(0.0);
        (self.global_pitch + local).clamp(hardware::PITCH_CENTS.0, hardware::PITCH_CENTS.1)
    }

    /// Global tempo times the pad's local offset, clamped to the hardware
    /// range. A pad without an offset contributes unity.
    pub fn combined_tempo(&self, pad: PadId) -> f32 {
        let local = self.bank.tempo_offset(pad).unwrap_or(1.0);
        (self.global_tempo * local).clamp(hardware::TEMPO_RATIO.0, hardware::TEMPO_RATIO.1)
    }

    /// Sets a pad's local pitch offset. Pushes live only when the pad is
    /// selected; storage and shadow update either way.
    pub fn set_pad_pitch_offset(&mut self, pad: PadId, cents: f32) {
        let clamped = ranges::PITCH_OFFSET.clamp(cents);
        self.bank.set_pitch_offset(pad, clamped);
        if self.selected == Some(pad) {
            self.push_combined_pitch();
        }
        self.recent.pitch_offset = clamped;
        self.touch();
    }

    /// Sets a pad's local tempo offset. Pushes live only when the pad is
    /// selected; storage and shadow update either way.
    pub fn set_pad_tempo_offset(&mut self, pad: PadId, ratio: f32) {
        let clamped = ranges::TEMPO_OFFSET.clamp(ratio);
        self.bank.set_tempo_offset(pad, clamped);
        if self.selected == Some(pad) {
            self.push_combined_tempo();
        }
        self.recent.tempo_offset = clamped;
        self.touch();
    }

    fn push_combined_pitch(&mut self) {
        let cents = match self.selected {
            Some(pad) => self.combined_pitch(pad),
            None => self
                .global_pitch
                .clamp(hardware::PITCH_CENTS.0, hardware::PITCH_CENTS.1),
        };
        self.chain.set_pitch(cents);
    }

    fn push_combined_tempo(&mut self) {
        let ratio = match self.selected {
            Some(pad) => self.combined_tempo(pad),
            None => self
                .global_tempo
                .clamp(hardware::TEMPO_RATIO.0, hardware::TEMPO_RATIO.1),
        };
        self.chain.set_tempo(ratio);
    }

    // --- filter ---

    /// The selected pad's stored filter settings.
    pub fn current_filter_settings(&self) -> Option<FilterSettings> {
        self.selected.and_then(|pad| self.bank.filter(pad))
    }

    /// Stores and projects a complete filter configuration for the selected
    /// pad. No-op without a selection.
    pub fn update_filter_settings(&mut self, settings: FilterSettings) {
        let Some(pad) = self.selected else { return };
        self.bank.set_filter(pad, settings);
        self.recent.filter = settings;
        self.chain.apply_filter(&settings);
        self.touch();
    }

    /// Sets the filter frequency, clamped to 20–20000 Hz.
    pub fn set_filter_frequency(&mut self, hz: f32) {
        let Some(mut settings) = self.current_filter_settings() else {
            return;
        };
        settings.frequency = ranges::FILTER_FREQUENCY.clamp(hz);
        self.update_filter_settings(settings);
    }

    /// Sets the filter bandwidth, clamped to 0.05–5.0.
    pub fn set_filter_bandwidth(&mut self, q: f32) {
        let Some(mut settings) = self.current_filter_settings() else {
            return;
        };
        settings.bandwidth = ranges::FILTER_BANDWIDTH.clamp(q);
        self.update_filter_settings(settings);
    }

    /// Sets the filter gain, clamped to ±20 dB.
    pub fn set_filter_gain(&mut self, db: f32) {
        let Some(mut settings) = self.current_filter_settings() else {
            return;
        };
        settings.gain = ranges::FILTER_GAIN.clamp(db);
        self.update_filter_settings(settings);
    }

    /// Cycles to the next filter type and realigns the parameter cursor.
    pub fn next_filter_type(&mut self) {
        let Some(mut settings) = self.current_filter_settings() else {
            return;
        };
        settings.filter_type = settings.filter_type.next_in_cycle();
        self.update_filter_settings(settings);
        self.cursor.realign(settings.filter_type);
    }

    /// Cycles to the previous filter type and realigns the parameter cursor.
    pub fn previous_filter_type(&mut self) {
        let Some(mut settings) = self.current_filter_settings() else {
            return;
        };
        settings.filter_type = settings.filter_type.previous_in_cycle();
        self.update_filter_settings(settings);
        self.cursor.realign(settings.filter_type);
    }

    /// The filter parameter the control cursor rests on.
    pub fn current_filter_parameter(&self) -> FilterParameter {
        self.cursor.current()
    }

    /// Moves the cursor to the next available parameter.
    pub fn next_parameter(&mut self) {
        let filter_type = self.current_filter_type();
        self.cursor.advance(filter_type);
        self.touch();
    }

    /// Moves the cursor to the previous available parameter.
    pub fn previous_parameter(&mut self) {
        let filter_type = self.current_filter_type();
        self.cursor.retreat(filter_type);
        self.touch();
    }

    fn current_filter_type(&self) -> FilterType {
        self.current_filter_settings()
            .map(|s| s.filter_type)
            .unwrap_or_default()
    }

    /// The cursor's parameter as a normalized value, or 0 when the
    /// parameter does not apply to the current filter type.
    pub fn normalized_filter_parameter(&self) -> f32 {
        let Some(settings) = self.current_filter_settings() else {
            return 0.0;
        };
        let param = self.cursor.current();
        let Some(range) = settings.filter_type.parameter_range(param) else {
            return 0.0;
        };
        let value = match param {
            FilterParameter::Frequency => settings.frequency,
            FilterParameter::Bandwidth => settings.bandwidth,
            FilterParameter::Gain => settings.gain,
        };
        range.normalize(value)
    }

    /// Writes the cursor's parameter from a normalized value. No-op when
    /// the parameter does not apply to the current filter type.
    pub fn set_normalized_filter_parameter(&mut self, normalized: f32) {
        let Some(mut settings) = self.current_filter_settings() else {
            return;
        };
        let param = self.cursor.current();
        let Some(range) = settings.filter_type.parameter_range(param) else {
            return;
        };
        let value = range.denormalize(normalized);
        match param {
            FilterParameter::Frequency => settings.frequency = value,
            FilterParameter::Bandwidth => settings.bandwidth = value,
            FilterParameter::Gain => settings.gain = value,
        }
        self.update_filter_settings(settings);
    }

    // --- dynamics ---

    /// The selected pad's stored dynamics settings.
    pub fn current_dynamics_settings(&self) -> Option<DynamicsSettings> {
        self.selected.and_then(|pad| self.bank.dynamics(pad))
    }

    /// Stores and projects a complete dynamics configuration for the
    /// selected pad. No-op without a selection.
    pub fn update_dynamics_settings(&mut self, settings: DynamicsSettings) {
        let Some(pad) = self.selected else { return };
        self.bank.set_dynamics(pad, settings);
        self.recent.dynamics = settings;
        self.chain.apply_dynamics(&settings);
        self.touch();
    }

    fn edit_dynamics(&mut self, edit: impl FnOnce(&mut DynamicsSettings)) {
        let Some(pad) = self.selected else { return };
        let mut settings = self.bank.dynamics(pad).unwrap_or_default();
        edit(&mut settings);
        self.bank.set_dynamics(pad, settings);
        self.recent.dynamics = settings;
        self.touch();
    }

    /// Sets the compressor threshold.
    pub fn set_low_threshold(&mut self, db: f32) {
        self.chain.set_compressor_threshold(db);
        self.edit_dynamics(|d| d.low_threshold = db);
    }

    /// Sets the expander threshold — the value the normalized threshold
    /// control edits.
    pub fn set_high_threshold(&mut self, db: f32) {
        self.chain.set_expander_threshold(db);
        self.edit_dynamics(|d| d.high_threshold = db);
    }

    /// Sets the expansion ratio, clamped to 1–20.
    pub fn set_ratio(&mut self, ratio: f32) {
        let clamped = ratio.clamp(RATIO_LIMITS.0, RATIO_LIMITS.1);
        self.chain.set_expander_ratio(clamped);
        self.edit_dynamics(|d| d.ratio = clamped);
    }

    /// Sets the dynamics attack time in seconds.
    pub fn set_attack_time(&mut self, seconds: f32) {
        self.chain.set_attack_time(seconds);
        self.edit_dynamics(|d| d.attack_time = seconds);
    }

    /// Sets the dynamics release time in seconds.
    pub fn set_release_time(&mut self, seconds: f32) {
        self.chain.set_release_time(seconds);
        self.edit_dynamics(|d| d.release_time = seconds);
    }

    /// Sets the dynamics make-up gain in dB.
    pub fn set_master_gain(&mut self, db: f32) {
        self.chain.set_master_gain(db);
        self.edit_dynamics(|d| d.master_gain = db);
    }

    /// The expander threshold as a normalized value over -30..0 dB.
    pub fn normalized_dynamics_threshold(&self) -> f32 {
        self.current_dynamics_settings()
            .map(|d| ranges::DYNAMICS_THRESHOLD.normalize(d.high_threshold))
            .unwrap_or(0.0)
    }

    /// Writes the expander threshold from a normalized value.
    pub fn set_normalized_dynamics_threshold(&mut self, normalized: f32) {
        self.set_high_threshold(ranges::DYNAMICS_THRESHOLD.denormalize(normalized));
    }

    /// The ratio as a normalized value (`log10(ratio)` over 1–10).
    pub fn normalized_dynamics_ratio(&self) -> f32 {
        self.current_dynamics_settings()
            .map(|d| ranges::DYNAMICS_RATIO.normalize(d.ratio))
            .unwrap_or(0.0)
    }

    /// Writes the ratio from a normalized value.
    pub fn set_normalized_dynamics_ratio(&mut self, normalized: f32) {
        self.set_ratio(ranges::DYNAMICS_RATIO.denormalize(normalized));
    }

    // --- distortion ---

    /// A pad's stored distortion settings.
    pub fn distortion_settings(&self, pad: PadId) -> Option<DistortionSettings> {
        self.bank.distortion(pad)
    }

    /// Sets a pad's distortion wet/dry mix, clamped to 0–100%.
    ///
    /// Storage updates only when the pad already holds a bundle; the shadow
    /// updates regardless, and the chain only for the selected pad.
    pub fn set_distortion_mix(&mut self, pad: PadId, percent: f32) {
        let clamped = ranges::MIX_PERCENT.clamp(percent);
        if let Some(mut settings) = self.bank.distortion(pad) {
            settings.wet_dry_mix = clamped;
            self.bank.set_distortion(pad, settings);
        }
        if self.selected == Some(pad) {
            self.chain.set_distortion_mix(clamped);
        }
        self.recent.distortion.wet_dry_mix = clamped;
        self.touch();
    }

    /// Sets a pad's distortion pre-gain, clamped to ±20 dB.
    pub fn set_distortion_pre_gain(&mut self, pad: PadId, db: f32) {
        let clamped = ranges::PRE_GAIN.clamp(db);
        if let Some(mut settings) = self.bank.distortion(pad) {
            settings.pre_gain = clamped;
            self.bank.set_distortion(pad, settings);
        }
        if self.selected == Some(pad) {
            self.chain.set_distortion_pre_gain(clamped);
        }
        self.recent.distortion.pre_gain = clamped;
        self.touch();
    }

    // --- delay and reverb ---

    /// Stores and projects a complete delay configuration for the selected
    /// pad. No-op without a selection.
    pub fn update_delay_settings(&mut self, settings: DelaySettings) {
        let Some(pad) = self.selected else { return };
        self.bank.set_delay(pad, settings);
        self.recent.delay = settings;
        self.chain.apply_delay(&settings);
        self.touch();
    }

    /// Sets the live delay mix, clamped to 0–100%. The delay stage is
    /// shared live state: this writes the chain and the shadow, not the
    /// per-pad record.
    pub fn set_delay_mix(&mut self, percent: f32) {
        let clamped = ranges::MIX_PERCENT.clamp(percent);
        self.chain.set_delay_mix(clamped);
        self.recent.delay.wet_dry_mix = clamped;
        self.touch();
    }

    /// Sets the live delay time, clamped to 0–2 s.
    pub fn set_delay_time(&mut self, seconds: f32) {
        let clamped = ranges::DELAY_TIME.clamp(seconds);
        self.chain.set_delay_time(clamped);
        self.recent.delay.delay_time = clamped;
        self.touch();
    }

    /// Sets the live delay feedback, clamped to 0–100%.
    pub fn set_delay_feedback(&mut self, percent: f32) {
        let clamped = ranges::FEEDBACK_PERCENT.clamp(percent);
        self.chain.set_delay_feedback(clamped);
        self.recent.delay.feedback = clamped;
        self.touch();
    }

    /// Sets the live delay low-pass cutoff, clamped to 2–20 kHz.
    pub fn set_delay_cutoff(&mut self, hz: f32) {
        let clamped = ranges::DELAY_CUTOFF.clamp(hz);
        self.chain.set_delay_cutoff(clamped);
        self.recent.delay.low_pass_cutoff = clamped;
        self.touch();
    }

    /// Sets the session reverb mix, clamped to 0–100%. Pushed live only
    /// while the delay/reverb stage is engaged; a bypassed stage keeps the
    /// chain's reverb silent.
    pub fn set_reverb_mix(&mut self, percent: f32) {
        let clamped = ranges::MIX_PERCENT.clamp(percent);
        self.reverb.wet_dry_mix = clamped;
        if !self.current_bypass().is_bypassed(Stage::DelayReverb) {
            self.chain.set_reverb_mix(clamped);
        }
        self.touch();
    }

    /// The session reverb mix.
    pub fn reverb_mix(&self) -> f32 {
        self.reverb.wet_dry_mix
    }

    // --- pan ---

    /// A pad's pan as a normalized value (−1 → 0, 0 → 0.5, 1 → 1).
    pub fn normalized_pan(&self, pad: PadId) -> f32 {
        ranges::PAN.normalize(self.bank.pan(pad).unwrap_or(0.0))
    }

    /// Writes a pad's pan from a normalized value and pushes it to the
    /// chain's output stage.
    pub fn set_normalized_pan(&mut self, pad: PadId, normalized: f32) {
        let pan = ranges::PAN.denormalize(normalized);
        self.bank.set_pan(pad, pan);
        self.recent.pan = pan;
        self.chain.set_pan(pan);
        self.touch();
    }

    // --- bypass ---

    /// The effective bypass vector: the selected pad's stored vector, or
    /// the shadow when nothing is selected or the pad is unseeded.
    fn current_bypass(&self) -> BypassVector {
        self.selected
            .and_then(|pad| self.bank.bypass(pad))
            .unwrap_or(self.recent.bypass)
    }

    /// Whether a stage is bypassed on the given pad (shadow fallback).
    pub fn is_stage_bypassed(&self, pad: PadId, stage: Stage) -> bool {
        self.bank
            .bypass(pad)
            .unwrap_or(self.recent.bypass)
            .is_bypassed(stage)
    }

    /// Pushes all four of a pad's bypass flags to the chain in fixed order
    /// [distortion, filter, dynamics, delay/reverb], mirroring each into
    /// the shadow.
    pub fn apply_bypass(&mut self, pad: PadId) {
        let vector = self.bank.bypass(pad).unwrap_or_default();
        for (stage, bypassed) in vector.iter() {
            self.push_stage_bypass(stage, bypassed);
        }
        self.touch();
    }

    /// Sets one stage's bypass flag on a pad. Pushes live only when the
    /// pad is selected; storage and shadow update either way.
    pub fn set_stage_bypass(&mut self, pad: PadId, stage: Stage, bypassed: bool) {
        let mut vector = self.bank.bypass(pad).unwrap_or_default();
        vector.set(stage, bypassed);
        self.bank.set_bypass(pad, vector);
        if self.selected == Some(pad) {
            self.push_stage_bypass(stage, bypassed);
        } else {
            self.recent.bypass.set(stage, bypassed);
        }
        self.touch();
    }

    /// Flips one stage on the selected pad and re-applies the whole vector.
    pub fn toggle_stage_bypass(&mut self, stage: Stage) {
        let Some(pad) = self.selected else { return };
        let mut vector = self.bank.bypass(pad).unwrap_or_default();
        vector.set(stage, !vector.is_bypassed(stage));
        self.bank.set_bypass(pad, vector);
        self.apply_bypass(pad);
    }

    fn push_stage_bypass(&mut self, stage: Stage, bypassed: bool) {
        self.recent.bypass.set(stage, bypassed);
        self.chain.set_bypass(stage, bypassed);
        if stage == Stage::DelayReverb {
            // The engine mutes the whole chain when the reverb stage is
            // truly bypassed, so bypass is simulated by zeroing its mix.
            if bypassed {
                self.chain.set_reverb_mix(0.0);
            } else {
                self.chain.set_reverb_mix(self.reverb.wet_dry_mix);
            }
        }
    }
}

impl<C: SignalChain> core::fmt::Debug for PadSession<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PadSession")
            .field("selected", &self.selected)
            .field("global_pitch", &self.global_pitch)
            .field("global_tempo", &self.global_tempo)
            .field("sample_loaded", &self.sample_loaded)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}
