//! Recorte Session - pad bank, selection control, and playback transport
//!
//! This crate is the control-surface brain of the instrument. It owns the
//! eight-pad bank, the most-recent settings shadow, the pad selection
//! contract, and the playback transport — everything between a touch event
//! and a parameter write on the platform's audio engine.
//!
//! The engine itself stays behind two small traits the platform layer
//! implements:
//!
//! - [`SignalChain`] - per-stage parameter setters on the live effects chain
//! - [`TransportSource`] - the sample player (schedule, pause, stop, clock)
//!
//! # Core Abstractions
//!
//! - [`PadSession`] - selection state machine and parameter composer
//! - [`PadBank`] / [`PadId`] / [`PadState`] - per-pad storage and lifecycle
//! - [`RecentSettings`] - the shadow that seeds freshly selected pads
//! - [`Transport`] / [`PollerTicket`] / [`Tick`] - position polling with
//!   stale-ticket invalidation
//! - [`EngineError`] - engine refusals, logged and abandoned
//!
//! # Example
//!
//! ```rust
//! use recorte_session::{PadId, PadSession, SignalChain};
//! use recorte_core::{FilterSettings, Stage};
//!
//! struct NullChain;
//! impl SignalChain for NullChain {
//!     fn apply_filter(&mut self, _: &FilterSettings) {}
//!     fn set_compressor_threshold(&mut self, _: f32) {}
//!     fn set_expander_threshold(&mut self, _: f32) {}
//!     fn set_expander_ratio(&mut self, _: f32) {}
//!     fn set_attack_time(&mut self, _: f32) {}
//!     fn set_release_time(&mut self, _: f32) {}
//!     fn set_master_gain(&mut self, _: f32) {}
//!     fn set_distortion_mix(&mut self, _: f32) {}
//!     fn set_distortion_pre_gain(&mut self, _: f32) {}
//!     fn set_delay_mix(&mut self, _: f32) {}
//!     fn set_delay_time(&mut self, _: f32) {}
//!     fn set_delay_feedback(&mut self, _: f32) {}
//!     fn set_delay_cutoff(&mut self, _: f32) {}
//!     fn set_reverb_mix(&mut self, _: f32) {}
//!     fn set_pitch(&mut self, _: f32) {}
//!     fn set_tempo(&mut self, _: f32) {}
//!     fn set_pan(&mut self, _: f32) {}
//!     fn set_bypass(&mut self, _: Stage, _: bool) {}
//!     fn reset_dynamics(&mut self) {}
//! }
//!
//! let mut session = PadSession::new(NullChain);
//! session.set_sample_loaded(true);
//! let pad = PadId::new(1).unwrap();
//! session.select_pad(pad);
//! assert_eq!(session.selected_pad(), Some(pad));
//! ```

mod chain;
mod error;
mod session;
mod shadow;
mod store;
mod transport;

pub use chain::SignalChain;
pub use error::EngineError;
pub use session::PadSession;
pub use shadow::RecentSettings;
pub use store::{PAD_COUNT, PadBank, PadId, PadState};
pub use transport::{POLL_INTERVAL, PollerTicket, Tick, Transport, TransportSource, format_time};
