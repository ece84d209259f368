//! Per-pad storage: state tags, chop regions, and stored effect settings.
//!
//! The bank is a fixed array of eight slots created up front. Every settings
//! field is an `Option`: `None` means the pad has never been seeded, which
//! is a different thing from "holds the default value" — the all-or-nothing
//! seeding in the selection controller depends on that distinction.
//!
//! Chop invariants (`0 ≤ start ≤ end ≤ total`) are enforced on write, not on
//! read: setting a start past the current end pulls the end up to match.

use recorte_core::{
    BypassVector, DelaySettings, DistortionSettings, DynamicsSettings, FilterSettings,
};

use crate::shadow::RecentSettings;

/// Number of pads in the bank.
pub const PAD_COUNT: usize = 8;

/// A validated pad identifier, 1 through 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PadId(u8);

impl PadId {
    /// All pad identifiers in bank order.
    pub const ALL: [PadId; PAD_COUNT] = [
        PadId(1),
        PadId(2),
        PadId(3),
        PadId(4),
        PadId(5),
        PadId(6),
        PadId(7),
        PadId(8),
    ];

    /// Creates a pad identifier, or `None` when outside 1..=8.
    pub const fn new(id: u8) -> Option<Self> {
        if id >= 1 && id <= PAD_COUNT as u8 {
            Some(Self(id))
        } else {
            None
        }
    }

    /// The 1-based pad number.
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Zero-based slot index.
    pub(crate) const fn index(&self) -> usize {
        (self.0 - 1) as usize
    }
}

impl core::fmt::Display for PadId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "pad {}", self.0)
    }
}

/// Lifecycle tag of a pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PadState {
    /// No chop assigned.
    #[default]
    Empty,
    /// Has a chop start time and plays on trigger.
    Loaded,
    /// A loaded pad protected against deletion.
    Favorite,
}

/// Everything one pad stores.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PadSlot {
    pub state: PadState,
    pub chop_start: Option<f64>,
    pub chop_end: Option<f64>,
    pub filter: Option<FilterSettings>,
    pub dynamics: Option<DynamicsSettings>,
    pub distortion: Option<DistortionSettings>,
    pub delay: Option<DelaySettings>,
    pub pitch_offset: Option<f32>,
    pub tempo_offset: Option<f32>,
    pub bypass: Option<BypassVector>,
    pub pan: Option<f32>,
}

/// Fixed-size store owning all per-pad records.
#[derive(Debug, Default)]
pub struct PadBank {
    slots: [PadSlot; PAD_COUNT],
}

impl PadBank {
    /// A bank of eight empty pads.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn slot(&self, pad: PadId) -> &PadSlot {
        &self.slots[pad.index()]
    }

    pub(crate) fn slot_mut(&mut self, pad: PadId) -> &mut PadSlot {
        &mut self.slots[pad.index()]
    }

    // --- state tag ---

    /// The pad's lifecycle tag.
    pub fn state(&self, pad: PadId) -> PadState {
        self.slot(pad).state
    }

    /// Returns whether the pad is a favorite.
    pub fn is_favorite(&self, pad: PadId) -> bool {
        self.state(pad) == PadState::Favorite
    }

    /// Favorites are protected; everything else may be cleared.
    pub fn is_deletable(&self, pad: PadId) -> bool {
        self.state(pad) != PadState::Favorite
    }

    /// Flips a pad between Loaded and Favorite. Empty pads are untouched.
    pub fn toggle_favorite(&mut self, pad: PadId) {
        let slot = self.slot_mut(pad);
        slot.state = match slot.state {
            PadState::Loaded => PadState::Favorite,
            PadState::Favorite => PadState::Loaded,
            PadState::Empty => PadState::Empty,
        };
    }

    // --- chop region ---

    /// The chop start time, if one is set.
    pub fn chop_start(&self, pad: PadId) -> Option<f64> {
        self.slot(pad).chop_start
    }

    /// The chop end time, if one is set.
    pub fn chop_end(&self, pad: PadId) -> Option<f64> {
        self.slot(pad).chop_end
    }

    /// Sets the chop start, clamped to `[0, total]`.
    ///
    /// An end time sitting before the new start is pulled up to match it.
    /// Setting a start on an Empty pad promotes it to Loaded.
    pub fn set_chop_start(&mut self, pad: PadId, time: f64, total: f64) {
        let clamped = time.clamp(0.0, total.max(0.0));
        let slot = self.slot_mut(pad);
        slot.chop_start = Some(clamped);
        if let Some(end) = slot.chop_end
            && end < clamped
        {
            slot.chop_end = Some(clamped);
        }
        if slot.state == PadState::Empty {
            slot.state = PadState::Loaded;
        }
    }

    /// Sets the chop end, clamped to `[start, total]`.
    pub fn set_chop_end(&mut self, pad: PadId, time: f64, total: f64) {
        let start = self.slot(pad).chop_start.unwrap_or(0.0);
        let clamped = time.clamp(start, total.max(start));
        self.slot_mut(pad).chop_end = Some(clamped);
    }

    /// Clears the end marker only; the pad keeps playing to the sample end.
    pub fn clear_chop_end(&mut self, pad: PadId) {
        self.slot_mut(pad).chop_end = None;
    }

    /// Clears the chop region and reverts the pad to Empty, refusing
    /// favorites. Returns whether anything was removed.
    ///
    /// This is the safe entry point; the UI additionally gates the action on
    /// [`is_deletable`](Self::is_deletable).
    pub fn clear_chop(&mut self, pad: PadId) -> bool {
        if !self.is_deletable(pad) {
            return false;
        }
        self.clear_chop_unchecked(pad);
        true
    }

    /// Clears the chop region without the favorite guard.
    pub fn clear_chop_unchecked(&mut self, pad: PadId) {
        let slot = self.slot_mut(pad);
        slot.chop_start = None;
        slot.chop_end = None;
        slot.state = PadState::Empty;
    }

    // --- stored settings ---

    /// Stored filter settings, if the pad has been seeded.
    pub fn filter(&self, pad: PadId) -> Option<FilterSettings> {
        self.slot(pad).filter
    }

    /// Stores filter settings.
    pub fn set_filter(&mut self, pad: PadId, settings: FilterSettings) {
        self.slot_mut(pad).filter = Some(settings);
    }

    /// Stored dynamics settings, if the pad has been seeded.
    pub fn dynamics(&self, pad: PadId) -> Option<DynamicsSettings> {
        self.slot(pad).dynamics
    }

    /// Stores dynamics settings.
    pub fn set_dynamics(&mut self, pad: PadId, settings: DynamicsSettings) {
        self.slot_mut(pad).dynamics = Some(settings);
    }

    /// Stored distortion settings, if the pad has been seeded.
    pub fn distortion(&self, pad: PadId) -> Option<DistortionSettings> {
        self.slot(pad).distortion
    }

    /// Stores distortion settings.
    pub fn set_distortion(&mut self, pad: PadId, settings: DistortionSettings) {
        self.slot_mut(pad).distortion = Some(settings);
    }

    /// Stored delay settings, if the pad has been seeded.
    pub fn delay(&self, pad: PadId) -> Option<DelaySettings> {
        self.slot(pad).delay
    }

    /// Stores delay settings.
    pub fn set_delay(&mut self, pad: PadId, settings: DelaySettings) {
        self.slot_mut(pad).delay = Some(settings);
    }

    /// Stored pitch offset in cents, if the pad has been seeded.
    pub fn pitch_offset(&self, pad: PadId) -> Option<f32> {
        self.slot(pad).pitch_offset
    }

    /// Stores a pitch offset.
    pub fn set_pitch_offset(&mut self, pad: PadId, cents: f32) {
        self.slot_mut(pad).pitch_offset = Some(cents);
    }

    /// Stored tempo offset multiplier, if the pad has been seeded.
    pub fn tempo_offset(&self, pad: PadId) -> Option<f32> {
        self.slot(pad).tempo_offset
    }

    /// Stores a tempo offset.
    pub fn set_tempo_offset(&mut self, pad: PadId, ratio: f32) {
        self.slot_mut(pad).tempo_offset = Some(ratio);
    }

    /// Stored bypass vector, if the pad has been seeded.
    pub fn bypass(&self, pad: PadId) -> Option<BypassVector> {
        self.slot(pad).bypass
    }

    /// Stores a bypass vector.
    pub fn set_bypass(&mut self, pad: PadId, bypass: BypassVector) {
        self.slot_mut(pad).bypass = Some(bypass);
    }

    /// Stored pan, if the pad has been seeded.
    pub fn pan(&self, pad: PadId) -> Option<f32> {
        self.slot(pad).pan
    }

    /// Stores a pan position.
    pub fn set_pan(&mut self, pad: PadId, pan: f32) {
        self.slot_mut(pad).pan = Some(pan);
    }

    // --- seeding ---

    /// Returns whether the pad is missing any of the settings that gate
    /// seeding. Bypass and pan do not gate — they ride along when the gate
    /// trips.
    pub fn needs_seeding(&self, pad: PadId) -> bool {
        let slot = self.slot(pad);
        slot.filter.is_none()
            || slot.dynamics.is_none()
            || slot.pitch_offset.is_none()
            || slot.tempo_offset.is_none()
            || slot.distortion.is_none()
            || slot.delay.is_none()
    }

    /// Copies the full most-recent bundle into the pad — all eight slots,
    /// never a subset.
    pub fn seed_from(&mut self, pad: PadId, recent: &RecentSettings) {
        let slot = self.slot_mut(pad);
        slot.filter = Some(recent.filter);
        slot.dynamics = Some(recent.dynamics);
        slot.distortion = Some(recent.distortion);
        slot.delay = Some(recent.delay);
        slot.pitch_offset = Some(recent.pitch_offset);
        slot.tempo_offset = Some(recent.tempo_offset);
        slot.bypass = Some(recent.bypass);
        slot.pan = Some(recent.pan);
    }
}
