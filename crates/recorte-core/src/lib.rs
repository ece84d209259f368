//! Recorte Core - settings model and parameter codec for the pad sampler
//!
//! This crate holds the pure, allocation-free heart of the instrument: the
//! value types every pad carries and the normalized-value codec the control
//! surface speaks.
//!
//! # Core Abstractions
//!
//! ## Parameter Codec
//!
//! - [`ControlRange`] - a parameter's valid range, default, and curve
//! - [`ControlScale`] - linear or logarithmic normalization
//! - [`ranges`] - the named range of every continuous control
//! - [`hardware`] - hard clamp limits for composed pitch/tempo
//!
//! ## Settings Records
//!
//! - [`DistortionSettings`], [`FilterSettings`], [`DynamicsSettings`],
//!   [`DelaySettings`], [`ReverbSettings`] - per-stage parameter bundles
//! - [`BypassVector`] / [`Stage`] - the four-slot per-pad bypass state
//!
//! ## Filter Availability
//!
//! - [`FilterType`] - response shapes, cycling order, availability table
//! - [`FilterParameter`] / [`ParameterCursor`] - the active-control cursor
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! recorte-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use recorte_core::{FilterSettings, FilterType, ranges};
//!
//! let mut filter = FilterSettings::default();
//! assert_eq!(filter.filter_type, FilterType::LowPass);
//!
//! // Knob turn: normalized 0.75 → engineering units, clamped.
//! filter.frequency = ranges::FILTER_FREQUENCY.denormalize(0.75);
//! assert!(filter.frequency > 20.0 && filter.frequency < 20000.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

mod codec;
mod filter;
mod settings;

pub use codec::{ControlRange, ControlScale, ControlUnit, hardware, ranges};
pub use filter::{FilterParameter, FilterType, ParameterCursor};
pub use settings::{
    BypassVector, DelaySettings, DistortionSettings, DynamicsSettings, FilterSettings,
    ReverbSettings, Stage,
};
