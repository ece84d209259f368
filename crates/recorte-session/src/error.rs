//! Error types for engine-facing operations.
//!
//! Only collaborator failures surface as errors: the audio engine refusing
//! to start or to reschedule playback. Everything inside the session core is
//! total — missing settings fall back to defaults and out-of-range values
//! are clamped, never rejected.

use thiserror::Error;

/// A failure reported by the underlying audio engine.
///
/// These are logged and the triggering user action is abandoned with no
/// state change; nothing in the session retries automatically.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine could not start playback.
    #[error("audio engine failed to start: {reason}")]
    Start {
        /// Engine-reported failure description.
        reason: String,
    },

    /// The engine could not reschedule playback from a position.
    #[error("audio engine failed to seek to {position:.3}s: {reason}")]
    Seek {
        /// Requested position in seconds.
        position: f64,
        /// Engine-reported failure description.
        reason: String,
    },
}

impl EngineError {
    /// Create a start failure.
    pub fn start(reason: impl Into<String>) -> Self {
        EngineError::Start {
            reason: reason.into(),
        }
    }

    /// Create a seek failure.
    pub fn seek(position: f64, reason: impl Into<String>) -> Self {
        EngineError::Seek {
            position,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_display() {
        let err = EngineError::start("device lost");
        assert_eq!(err.to_string(), "audio engine failed to start: device lost");
    }

    #[test]
    fn seek_display_includes_position() {
        let err = EngineError::seek(1.5, "not scheduled");
        let msg = err.to_string();
        assert!(msg.contains("1.500"), "got: {msg}");
        assert!(msg.contains("not scheduled"), "got: {msg}");
    }
}
