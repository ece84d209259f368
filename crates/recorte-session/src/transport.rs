//! Playback transport: position tracking, seeking, and the poll gate.
//!
//! The transport wraps the platform's player ([`TransportSource`]) and owns
//! the only asynchronous boundary in the system: a periodic position poller.
//! The embedder runs a repeating ~33 ms timer (see [`POLL_INTERVAL`]) and
//! calls [`Transport::tick`] with the [`PollerTicket`] it was handed when
//! playback started.
//!
//! Two concurrent pollers would double-apply the loop-wraparound logic, so
//! every operation that (re)starts polling first invalidates the previous
//! ticket via a generation counter — a stale ticket's ticks are inert. The
//! same mechanism cancels polling on pause. A drag gesture sets a gate that
//! suppresses tick effects so the poller cannot overwrite the user's scrub
//! position mid-gesture.
//!
//! Engine failures (start/seek refused) are logged via `tracing` and the
//! operation is abandoned without state change; there is no retry.

use std::time::Duration;

use tracing::warn;

use crate::error::EngineError;

/// Recommended interval between position polls.
pub const POLL_INTERVAL: Duration = Duration::from_millis(33);

/// The platform player the transport drives.
///
/// `start_from` schedules the sample from the given offset and begins
/// playback; `elapsed_since_start` reports time played since the last
/// successful `start_from` (the player's clock resets on stop).
pub trait TransportSource {
    /// Total duration of the loaded sample in seconds.
    fn total_duration(&self) -> f64;

    /// Seconds played since the last `start_from`.
    fn elapsed_since_start(&self) -> f64;

    /// Schedules playback from `seconds` and starts the player.
    fn start_from(&mut self, seconds: f64) -> Result<(), EngineError>;

    /// Pauses the player, keeping its position.
    fn pause(&mut self);

    /// Stops the player, resetting its elapsed clock.
    fn stop(&mut self);
}

/// Capability to apply position ticks; invalidated by any poller restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollerTicket {
    generation: u64,
}

/// Result of one poll tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The ticket was superseded; this poller must stop.
    Stale,
    /// Playback is paused or a drag is in progress; nothing applied.
    Gated,
    /// Position advanced normally.
    Advanced,
    /// Playback reached the end and restarted from zero. The embedder must
    /// continue with the new ticket.
    Looped(PollerTicket),
}

/// Playback position state machine over a [`TransportSource`].
#[derive(Debug)]
pub struct Transport<S> {
    source: S,
    current_time: f64,
    saved_time: f64,
    is_playing: bool,
    is_dragging: bool,
    was_playing_before_drag: bool,
    sample_loaded: bool,
    poll_generation: u64,
}

impl<S: TransportSource> Transport<S> {
    /// Wraps a player with no sample loaded.
    pub fn new(source: S) -> Self {
        Self {
            source,
            current_time: 0.0,
            saved_time: 0.0,
            is_playing: false,
            is_dragging: false,
            was_playing_before_drag: false,
            sample_loaded: false,
            poll_generation: 0,
        }
    }

    /// Resets all transport state after the platform layer loaded a sample.
    ///
    /// Cancels any running poller and leaves playback stopped at zero.
    pub fn load(&mut self) {
        self.source.stop();
        self.current_time = 0.0;
        self.saved_time = 0.0;
        self.is_playing = false;
        self.is_dragging = false;
        self.was_playing_before_drag = false;
        self.sample_loaded = true;
        self.cancel_poller();
    }

    /// Whether a sample is loaded.
    pub fn is_loaded(&self) -> bool {
        self.sample_loaded
    }

    /// Whether the player is currently playing.
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Whether a drag gesture is gating the poller.
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Current playback position in seconds.
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Total duration of the loaded sample.
    pub fn total_duration(&self) -> f64 {
        self.source.total_duration()
    }

    /// Access to the wrapped player.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Starts playback from the current position.
    ///
    /// At the end of the sample the position wraps to zero first. On success
    /// the previous poller is cancelled and the new ticket returned; the
    /// embedder drives it at [`POLL_INTERVAL`]. On engine failure the
    /// operation is logged and abandoned — playback stays stopped.
    pub fn play(&mut self) -> Option<PollerTicket> {
        if !self.sample_loaded {
            return None;
        }
        if self.current_time >= self.total_duration() {
            self.current_time = 0.0;
        }
        self.saved_time = self.current_time;
        if let Err(err) = self.source.start_from(self.current_time) {
            warn!(%err, "playback start abandoned");
            return None;
        }
        self.is_playing = true;
        Some(self.start_poller())
    }

    /// Pauses playback and cancels the poller.
    pub fn pause(&mut self) {
        self.source.pause();
        self.is_playing = false;
        self.cancel_poller();
    }

    /// Pause/play toggle.
    pub fn toggle_playback(&mut self) -> Option<PollerTicket> {
        if self.is_playing {
            self.pause();
            None
        } else {
            self.play()
        }
    }

    /// Sets the position directly, clamped to `[0, total]`.
    pub fn set_current_time(&mut self, time: f64) {
        self.current_time = time.clamp(0.0, self.total_duration());
    }

    /// Stops the player, moves to `time`, and reschedules from there.
    ///
    /// Resumes playing only if playback was running before the drag began.
    /// Always restarts the poller; on engine failure playback stays stopped
    /// at the new position.
    pub fn seek_to(&mut self, time: f64) -> Option<PollerTicket> {
        if !self.sample_loaded {
            return None;
        }
        // The player's elapsed clock resets on stop, so the new position
        // becomes the saved base for subsequent ticks.
        self.source.stop();
        self.is_playing = false;
        self.set_current_time(time);
        self.saved_time = self.current_time;
        if self.was_playing_before_drag {
            match self.source.start_from(self.current_time) {
                Ok(()) => self.is_playing = true,
                Err(err) => warn!(%err, "seek restart abandoned"),
            }
        }
        Some(self.start_poller())
    }

    /// Marks the start of a scrub gesture; ticks are gated until
    /// [`end_drag`](Self::end_drag).
    pub fn begin_drag(&mut self) {
        self.is_dragging = true;
    }

    /// Clears the drag gate.
    pub fn end_drag(&mut self) {
        self.is_dragging = false;
    }

    /// Remembers the play state and pauses if needed, ahead of a drag.
    pub fn pause_for_drag(&mut self) {
        self.was_playing_before_drag = self.is_playing;
        if self.is_playing {
            self.pause();
        }
    }

    /// Resumes playback after a drag if it was playing before.
    pub fn resume_after_drag(&mut self) -> Option<PollerTicket> {
        if self.was_playing_before_drag {
            self.play()
        } else {
            None
        }
    }

    /// Applies one position poll.
    ///
    /// Stale tickets are inert. While paused or dragging the tick is gated.
    /// Reaching the end loops playback from zero and hands back a fresh
    /// ticket.
    pub fn tick(&mut self, ticket: PollerTicket) -> Tick {
        if ticket.generation != self.poll_generation {
            return Tick::Stale;
        }
        if !self.is_playing || self.is_dragging {
            return Tick::Gated;
        }
        self.current_time = self.source.elapsed_since_start() + self.saved_time;
        if self.current_time >= self.total_duration() {
            self.saved_time = 0.0;
            self.current_time = 0.0;
            self.source.stop();
            self.is_playing = false;
            return match self.play() {
                Some(next) => Tick::Looped(next),
                // Loop restart refused by the engine; poller stops.
                None => Tick::Stale,
            };
        }
        Tick::Advanced
    }

    fn start_poller(&mut self) -> PollerTicket {
        self.poll_generation += 1;
        PollerTicket {
            generation: self.poll_generation,
        }
    }

    fn cancel_poller(&mut self) {
        self.poll_generation += 1;
    }
}

/// Formats seconds as `m:ss` for the transport display.
pub fn format_time(seconds: f64) -> String {
    let whole = seconds.max(0.0) as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct FakeSource {
        total: f64,
        elapsed: f64,
        fail_start: bool,
        starts: Vec<f64>,
        stops: usize,
        pauses: usize,
    }

    impl FakeSource {
        fn with_total(total: f64) -> Self {
            Self {
                total,
                ..Self::default()
            }
        }
    }

    impl TransportSource for FakeSource {
        fn total_duration(&self) -> f64 {
            self.total
        }
        fn elapsed_since_start(&self) -> f64 {
            self.elapsed
        }
        fn start_from(&mut self, seconds: f64) -> Result<(), EngineError> {
            if self.fail_start {
                return Err(EngineError::start("refused"));
            }
            self.starts.push(seconds);
            self.elapsed = 0.0;
            Ok(())
        }
        fn pause(&mut self) {
            self.pauses += 1;
        }
        fn stop(&mut self) {
            self.stops += 1;
            self.elapsed = 0.0;
        }
    }

    fn loaded_transport(total: f64) -> Transport<FakeSource> {
        let mut t = Transport::new(FakeSource::with_total(total));
        t.load();
        t
    }

    #[test]
    fn play_requires_a_loaded_sample() {
        let mut t = Transport::new(FakeSource::with_total(10.0));
        assert!(t.play().is_none());
        assert!(!t.is_playing());
    }

    #[test]
    fn play_starts_from_current_position() {
        let mut t = loaded_transport(10.0);
        t.set_current_time(4.0);
        let ticket = t.play().unwrap();
        assert!(t.is_playing());
        assert_eq!(t.source().starts, vec![4.0]);
        assert_eq!(t.tick(ticket), Tick::Advanced);
    }

    #[test]
    fn play_at_end_wraps_to_zero_first() {
        let mut t = loaded_transport(10.0);
        t.set_current_time(10.0);
        t.play().unwrap();
        assert_eq!(t.current_time(), 0.0);
        assert_eq!(t.source().starts, vec![0.0]);
    }

    #[test]
    fn failed_start_is_abandoned_without_state_change() {
        let mut t = loaded_transport(10.0);
        t.source.fail_start = true;
        t.set_current_time(2.0);
        assert!(t.play().is_none());
        assert!(!t.is_playing());
        assert_eq!(t.current_time(), 2.0);
    }

    #[test]
    fn tick_advances_position_by_elapsed_plus_saved() {
        let mut t = loaded_transport(10.0);
        t.set_current_time(3.0);
        let ticket = t.play().unwrap();
        t.source.elapsed = 1.5;
        assert_eq!(t.tick(ticket), Tick::Advanced);
        assert!((t.current_time() - 4.5).abs() < 1e-9);
    }

    #[test]
    fn stale_ticket_is_inert() {
        let mut t = loaded_transport(10.0);
        let first = t.play().unwrap();
        let second = t.seek_to(1.0).unwrap();
        t.source.elapsed = 2.0;
        assert_eq!(t.tick(first), Tick::Stale);
        // The stale tick must not have moved the position.
        assert_eq!(t.current_time(), 1.0);
        assert_ne!(first, second);
    }

    #[test]
    fn pause_cancels_the_poller() {
        let mut t = loaded_transport(10.0);
        let ticket = t.play().unwrap();
        t.pause();
        assert!(!t.is_playing());
        assert_eq!(t.tick(ticket), Tick::Stale);
    }

    #[test]
    fn drag_gates_ticks_without_cancelling() {
        let mut t = loaded_transport(10.0);
        let ticket = t.play().unwrap();
        t.begin_drag();
        t.source.elapsed = 5.0;
        assert_eq!(t.tick(ticket), Tick::Gated);
        assert_eq!(t.current_time(), 0.0);
        t.end_drag();
        assert_eq!(t.tick(ticket), Tick::Advanced);
        assert_eq!(t.current_time(), 5.0);
    }

    #[test]
    fn reaching_the_end_loops_with_a_fresh_ticket() {
        let mut t = loaded_transport(10.0);
        let ticket = t.play().unwrap();
        t.source.elapsed = 11.0;
        let Tick::Looped(next) = t.tick(ticket) else {
            panic!("expected loop");
        };
        assert_eq!(t.current_time(), 0.0);
        assert!(t.is_playing());
        // Restarted from zero; old ticket is dead.
        assert_eq!(t.source().starts.last(), Some(&0.0));
        assert_eq!(t.tick(ticket), Tick::Stale);
        assert_eq!(t.tick(next), Tick::Advanced);
    }

    #[test]
    fn seek_saves_position_for_subsequent_ticks() {
        let mut t = loaded_transport(10.0);
        t.pause_for_drag();
        t.was_playing_before_drag = true;
        let ticket = t.seek_to(6.0).unwrap();
        assert!(t.is_playing());
        t.source.elapsed = 1.0;
        assert_eq!(t.tick(ticket), Tick::Advanced);
        assert!((t.current_time() - 7.0).abs() < 1e-9);
    }

    #[test]
    fn seek_while_paused_stays_paused() {
        let mut t = loaded_transport(10.0);
        t.pause_for_drag();
        t.seek_to(3.0).unwrap();
        assert!(!t.is_playing());
        assert_eq!(t.current_time(), 3.0);
    }

    #[test]
    fn set_current_time_clamps_to_duration() {
        let mut t = loaded_transport(10.0);
        t.set_current_time(-1.0);
        assert_eq!(t.current_time(), 0.0);
        t.set_current_time(42.0);
        assert_eq!(t.current_time(), 10.0);
    }

    #[test]
    fn pause_and_resume_around_drag() {
        let mut t = loaded_transport(10.0);
        t.play().unwrap();
        t.pause_for_drag();
        assert!(!t.is_playing());
        let ticket = t.resume_after_drag();
        assert!(ticket.is_some());
        assert!(t.is_playing());
    }

    #[test]
    fn resume_after_drag_respects_paused_state() {
        let mut t = loaded_transport(10.0);
        t.pause_for_drag();
        assert!(t.resume_after_drag().is_none());
        assert!(!t.is_playing());
    }

    #[test]
    fn load_resets_everything() {
        let mut t = loaded_transport(10.0);
        let ticket = t.play().unwrap();
        t.set_current_time(5.0);
        t.load();
        assert_eq!(t.current_time(), 0.0);
        assert!(!t.is_playing());
        assert_eq!(t.tick(ticket), Tick::Stale);
    }

    #[test]
    fn format_time_renders_minutes_and_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.2), "1:05");
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_time(-3.0), "0:00");
    }
}
