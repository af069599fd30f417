//! Rate animation
//!
//! Moves a displayed rate from the previous value to a new target over a
//! duration of `|previous - target| * 1000 / speed` milliseconds, producing one
//! [`Tick`] per display frame.
//!
//! ## Model
//!
//! - [`AnimationSession`] is one rate change: start, end, start time, duration.
//!   Sampling it is a pure function of the current timestamp.
//! - [`RateAnimator`] owns at most one active session. Starting a new session
//!   supersedes the old one, and frames addressed to a superseded session are
//!   ignored, so two sessions can never interleave their ticks.
//!
//! The host drives the animator: call [`RateAnimator::retarget`] when the
//! target changes, then [`RateAnimator::frame`] once per display frame until it
//! reports the terminal tick.
//!
//! ```
//! use vantui_core::animation::{RateAnimator, Retarget};
//!
//! let mut animator = RateAnimator::new();
//! let Retarget::Animating(id) = animator.retarget(0.0, 60.0, 100.0, 0.0) else {
//!     unreachable!()
//! };
//!
//! let halfway = animator.frame(id, 300.0).unwrap();
//! assert_eq!(halfway.rate, 30.0);
//!
//! let last = animator.frame(id, 600.0).unwrap();
//! assert_eq!(last.rate, 60.0);
//! assert!(last.finished);
//! ```

use tracing::{debug, trace, warn};

use crate::clock::{Clock, ManualClock};
use crate::rate::{clamp_rate, normalize_speed, round_tenth};

/// Default animation speed in rate units per second
pub const DEFAULT_SPEED: f64 = 100.0;

/// Frame interval used when a host has no display refresh signal (~60 Hz)
pub const DEFAULT_FRAME_MS: f64 = 16.0;

/// Longest animation the widget will run; slower changes jump to the target
pub const MAX_DURATION_MS: f64 = 600_000.0;

/// One animation frame's output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Rate to display, rounded to one decimal and within `[0, 100]`
    pub rate: f64,
    /// Whether this is the terminal tick of its session
    pub finished: bool,
}

/// A single animated rate change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSession {
    start_rate: f64,
    end_rate: f64,
    started_at: f64,
    duration_ms: f64,
}

impl AnimationSession {
    /// Build a session from raw inputs.
    ///
    /// Returns `None` when the rate should jump instead of animating: the
    /// speed is zero, negative or non-finite, or the resulting duration is not
    /// finite or exceeds [`MAX_DURATION_MS`].
    pub fn new(start_rate: f64, end_rate: f64, speed: f64, started_at: f64) -> Option<Self> {
        let speed = normalize_speed(speed)?;
        let start_rate = clamp_rate(start_rate);
        let end_rate = clamp_rate(end_rate);
        let duration_ms = (start_rate - end_rate).abs() * 1000.0 / speed;

        if !duration_ms.is_finite() || duration_ms > MAX_DURATION_MS {
            warn!(
                speed,
                start_rate,
                end_rate,
                duration_ms,
                "animation duration out of range, jumping to target"
            );
            return None;
        }

        Some(Self {
            start_rate,
            end_rate,
            started_at,
            duration_ms,
        })
    }

    pub fn start_rate(&self) -> f64 {
        self.start_rate
    }

    pub fn end_rate(&self) -> f64 {
        self.end_rate
    }

    pub fn started_at(&self) -> f64 {
        self.started_at
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Fraction of the session elapsed at `now_ms`, in `[0, 1]`.
    ///
    /// A zero-length session is complete immediately. A clock that reads
    /// earlier than the start time counts as no progress.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let elapsed = (now_ms - self.started_at).max(0.0);
        (elapsed / self.duration_ms).min(1.0)
    }

    /// Sample the displayed rate at `now_ms`.
    pub fn sample(&self, now_ms: f64) -> Tick {
        let progress = self.progress(now_ms);
        if progress >= 1.0 {
            return Tick {
                rate: self.end_rate,
                finished: true,
            };
        }

        let raw = progress * (self.end_rate - self.start_rate) + self.start_rate;
        let finished = if self.end_rate > self.start_rate {
            raw >= self.end_rate
        } else {
            raw <= self.end_rate
        };
        if finished {
            return Tick {
                rate: self.end_rate,
                finished,
            };
        }

        // Rounding must not carry the value past either endpoint.
        let low = self.start_rate.min(self.end_rate);
        let high = self.start_rate.max(self.end_rate);
        let rate = clamp_rate(round_tenth(raw)).clamp(low, high);

        Tick { rate, finished }
    }
}

/// Identifies the session a scheduled frame belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

/// Outcome of changing the target rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Retarget {
    /// No animation: display this rate now, exactly once
    Instant(f64),
    /// A session started; schedule a frame for it
    Animating(SessionId),
}

/// Drives the single active animation session of one widget
#[derive(Debug, Default)]
pub struct RateAnimator {
    next_id: u64,
    active: Option<(SessionId, AnimationSession)>,
}

impl RateAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start moving from `previous` to `target`, superseding any active session.
    pub fn retarget(&mut self, previous: f64, target: f64, speed: f64, now_ms: f64) -> Retarget {
        if let Some((old, _)) = self.active.take() {
            debug!(session = old.0, "superseding active rate animation");
        }

        let target = clamp_rate(target);
        let Some(session) = AnimationSession::new(previous, target, speed, now_ms) else {
            debug!(target, "rate set without animation");
            return Retarget::Instant(target);
        };

        let id = SessionId(self.next_id);
        self.next_id += 1;
        debug!(
            session = id.0,
            from = session.start_rate,
            to = session.end_rate,
            duration_ms = session.duration_ms,
            "rate animation started"
        );
        self.active = Some((id, session));
        Retarget::Animating(id)
    }

    /// Produce the tick for a frame scheduled on behalf of session `id`.
    ///
    /// Returns `None` for frames of superseded or stopped sessions. After the
    /// terminal tick the session is retired and further frames yield `None`.
    pub fn frame(&mut self, id: SessionId, now_ms: f64) -> Option<Tick> {
        let (active_id, session) = self.active?;
        if active_id != id {
            trace!(session = id.0, "dropping frame of superseded session");
            return None;
        }

        let tick = session.sample(now_ms);
        trace!(session = id.0, rate = tick.rate, "rate animation frame");
        if tick.finished {
            debug!(session = id.0, rate = tick.rate, "rate animation finished");
            self.active = None;
        }
        Some(tick)
    }

    /// Abandon the active session, e.g. on widget teardown.
    pub fn stop(&mut self) -> bool {
        self.active.take().is_some()
    }

    pub fn active_session(&self) -> Option<SessionId> {
        self.active.map(|(id, _)| id)
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// The active session, if any
    pub fn session(&self) -> Option<&AnimationSession> {
        self.active.as_ref().map(|(_, session)| session)
    }
}

/// Simulate a full rate change at a fixed frame interval.
///
/// Frames fire every `frame_ms` after the session starts, as a display refresh
/// would. Returns every reported rate in order; instant mode yields a single
/// value. At most `ceil(duration / frame_ms) + 1` frames are sampled and the
/// last reported rate is always the target.
pub fn timeline(previous: f64, target: f64, speed: f64, frame_ms: f64) -> Vec<f64> {
    let frame_ms = if frame_ms.is_finite() && frame_ms >= 1.0 {
        frame_ms
    } else {
        DEFAULT_FRAME_MS
    };

    let clock = ManualClock::new(0.0);
    let mut animator = RateAnimator::new();
    let id = match animator.retarget(previous, target, speed, clock.now_ms()) {
        Retarget::Instant(rate) => return vec![rate],
        Retarget::Animating(id) => id,
    };

    let Some(&session) = animator.session() else {
        return vec![clamp_rate(target)];
    };
    let max_frames = (session.duration_ms() / frame_ms).ceil() as usize + 1;

    let mut rates = Vec::with_capacity(max_frames);
    for _ in 0..max_frames {
        clock.advance(frame_ms);
        let Some(tick) = animator.frame(id, clock.now_ms()) else {
            break;
        };
        rates.push(tick.rate);
        if tick.finished {
            return rates;
        }
    }

    warn!(max_frames, "rate animation did not finish within its frame budget");
    rates.push(session.end_rate());
    rates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_scales_with_distance_and_speed() {
        let session = AnimationSession::new(0.0, 60.0, 100.0, 0.0).unwrap();
        assert_eq!(session.duration_ms(), 600.0);

        let session = AnimationSession::new(80.0, 30.0, 50.0, 0.0).unwrap();
        assert_eq!(session.duration_ms(), 1000.0);
    }

    #[test]
    fn inputs_are_clamped() {
        let session = AnimationSession::new(-20.0, 400.0, 100.0, 0.0).unwrap();
        assert_eq!(session.start_rate(), 0.0);
        assert_eq!(session.end_rate(), 100.0);
    }

    #[test]
    fn zero_speed_means_no_session() {
        assert!(AnimationSession::new(0.0, 60.0, 0.0, 0.0).is_none());
        assert!(AnimationSession::new(0.0, 60.0, f64::NAN, 0.0).is_none());
    }

    #[test]
    fn subnormal_speed_jumps_instead_of_hanging() {
        // 60 * 1000 / 5e-324 overflows to infinity
        assert!(AnimationSession::new(0.0, 60.0, 5e-324, 0.0).is_none());
    }

    #[test]
    fn tiny_speed_jumps_to_target() {
        // Finite but far longer than any display would wait
        assert!(AnimationSession::new(0.0, 60.0, 1e-300, 0.0).is_none());
        assert_eq!(timeline(0.0, 60.0, 1e-300, 16.0), vec![60.0]);
    }

    #[test]
    fn slow_speed_under_cap_still_animates() {
        let slow = AnimationSession::new(0.0, 100.0, 0.25, 0.0).unwrap();
        assert_eq!(slow.duration_ms(), 400_000.0);
        assert!(slow.duration_ms() <= MAX_DURATION_MS);
        // 800 s is past the cap
        assert!(AnimationSession::new(0.0, 100.0, 0.125, 0.0).is_none());
    }

    #[test]
    fn sample_midway_and_end() {
        let session = AnimationSession::new(0.0, 60.0, 100.0, 1000.0).unwrap();
        assert_eq!(session.sample(1300.0), Tick { rate: 30.0, finished: false });
        assert_eq!(session.sample(1600.0), Tick { rate: 60.0, finished: true });
        assert_eq!(session.sample(5000.0), Tick { rate: 60.0, finished: true });
    }

    #[test]
    fn sample_descending() {
        let session = AnimationSession::new(80.0, 20.0, 100.0, 0.0).unwrap();
        assert_eq!(session.sample(300.0).rate, 50.0);
        assert!(session.sample(600.0).finished);
    }

    #[test]
    fn clock_before_start_reads_as_start() {
        let session = AnimationSession::new(10.0, 20.0, 10.0, 500.0).unwrap();
        assert_eq!(session.sample(0.0).rate, 10.0);
    }

    #[test]
    fn rounding_never_overshoots_target() {
        let session = AnimationSession::new(0.0, 59.97, 100.0, 0.0).unwrap();
        // raw ~59.96 would round to 60.0
        let tick = session.sample(599.6);
        assert!(tick.rate <= 59.97);
    }

    #[test]
    fn equal_rates_finish_on_first_frame() {
        let mut animator = RateAnimator::new();
        let Retarget::Animating(id) = animator.retarget(40.0, 40.0, 100.0, 0.0) else {
            panic!("expected a session");
        };
        assert_eq!(animator.frame(id, 0.0), Some(Tick { rate: 40.0, finished: true }));
        assert_eq!(animator.frame(id, 16.0), None);
        assert!(!animator.is_animating());
    }

    #[test]
    fn instant_mode_reports_clamped_target() {
        let mut animator = RateAnimator::new();
        assert_eq!(animator.retarget(10.0, 130.0, 0.0, 0.0), Retarget::Instant(100.0));
        assert!(!animator.is_animating());
    }

    #[test]
    fn superseded_frames_are_dropped() {
        let mut animator = RateAnimator::new();
        let Retarget::Animating(first) = animator.retarget(0.0, 100.0, 100.0, 0.0) else {
            panic!("expected a session");
        };
        assert!(animator.frame(first, 100.0).is_some());

        let Retarget::Animating(second) = animator.retarget(10.0, 0.0, 100.0, 100.0) else {
            panic!("expected a session");
        };
        assert_ne!(first, second);
        assert_eq!(animator.frame(first, 116.0), None);
        assert!(animator.frame(second, 116.0).is_some());
    }

    #[test]
    fn stop_retires_session() {
        let mut animator = RateAnimator::new();
        let Retarget::Animating(id) = animator.retarget(0.0, 50.0, 100.0, 0.0) else {
            panic!("expected a session");
        };
        assert!(animator.stop());
        assert_eq!(animator.frame(id, 10.0), None);
        assert!(!animator.stop());
    }

    #[test]
    fn timeline_ends_on_target() {
        let rates = timeline(0.0, 60.0, 100.0, 100.0);
        assert_eq!(rates, vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
    }

    #[test]
    fn timeline_instant() {
        assert_eq!(timeline(20.0, 70.0, 0.0, 16.0), vec![70.0]);
    }

    #[test]
    fn timeline_frame_count_is_bounded() {
        let rates = timeline(0.0, 100.0, 1.0, 1000.0);
        assert_eq!(rates.len(), 100);
        assert_eq!(rates.last(), Some(&100.0));

        // Sub-millisecond intervals fall back to the default
        let rates = timeline(0.0, 10.0, 100.0, 1e-300);
        assert_eq!(rates.len(), 7);
    }

    #[test]
    fn timeline_bad_frame_interval_falls_back() {
        let rates = timeline(0.0, 10.0, 100.0, 0.0);
        assert_eq!(rates.last(), Some(&10.0));
        assert_eq!(rates.len(), 7);
    }
}
