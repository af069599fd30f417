//! Hooks binding the core animator to the Dioxus runtime.
//!
//! A rate animation session runs as one spawned [`Task`] that wakes once per
//! frame interval. The task is the session's frame handle: it lives in a
//! [`FrameSlot`], so starting a new session or unmounting the component
//! cancels it before it can report another tick.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use vantui_core::animation::DEFAULT_FRAME_MS;
use vantui_core::clock::{Clock, SystemClock};
use vantui_core::frame::{FrameHandle, FrameSlot};
use vantui_core::rate::clamp_rate;
use vantui_core::{RateAnimator, Retarget};

/// A spawned Dioxus task used as a frame handle
pub struct TaskHandle(Task);

impl FrameHandle for TaskHandle {
    fn cancel(self) {
        self.0.cancel();
    }
}

/// Sleep between frames; unusable intervals fall back to ~60 Hz.
pub fn frame_interval(frame_ms: f64) -> Duration {
    let ms = if frame_ms.is_finite() && frame_ms >= 1.0 {
        frame_ms
    } else {
        DEFAULT_FRAME_MS
    };
    Duration::from_micros((ms * 1000.0).round() as u64)
}

/// Inputs read when a new session starts; refreshed every render
#[derive(Clone)]
struct LatestInputs {
    start: Option<f64>,
    speed: f64,
    frame_ms: f64,
    on_change: Option<EventHandler<f64>>,
}

/// Options for [`use_rate_animation`]
#[derive(Clone, PartialEq)]
pub struct RateAnimation {
    /// Rate to move to; a change starts a new session
    pub target: f64,
    /// Caller-tracked displayed rate. `None` lets the hook track it.
    pub start: Option<f64>,
    /// Rate units per second; 0 jumps to the target
    pub speed: f64,
    pub frame_ms: f64,
    /// Called with every displayed rate
    pub on_change: Option<EventHandler<f64>>,
}

impl Default for RateAnimation {
    fn default() -> Self {
        Self {
            target: 100.0,
            start: None,
            speed: vantui_core::animation::DEFAULT_SPEED,
            frame_ms: DEFAULT_FRAME_MS,
            on_change: None,
        }
    }
}

/// Animate a displayed rate toward `options.target`.
///
/// Returns the hook's own record of the displayed rate. Components with a
/// caller-tracked rate render `options.start` instead and rely on
/// `on_change` to receive updates.
///
/// # Example
///
/// ```rust,ignore
/// let displayed = use_rate_animation(RateAnimation {
///     target: rate(),
///     speed: 50.0,
///     ..Default::default()
/// });
/// rsx! { "{displayed}%" }
/// ```
pub fn use_rate_animation(options: RateAnimation) -> ReadOnlySignal<f64> {
    let displayed = use_signal(|| clamp_rate(options.start.unwrap_or(0.0)));
    let animator = use_hook(|| Rc::new(RefCell::new(RateAnimator::new())));
    let slot = use_hook(|| Rc::new(RefCell::new(FrameSlot::<TaskHandle>::new())));
    let latest = use_hook(|| {
        Rc::new(RefCell::new(LatestInputs {
            start: options.start,
            speed: options.speed,
            frame_ms: options.frame_ms,
            on_change: options.on_change,
        }))
    });

    {
        let mut inputs = latest.borrow_mut();
        inputs.start = options.start;
        inputs.speed = options.speed;
        inputs.frame_ms = options.frame_ms;
        inputs.on_change = options.on_change;
    }

    let target = options.target;
    {
        let animator = Rc::clone(&animator);
        let slot = Rc::clone(&slot);
        let latest = Rc::clone(&latest);
        use_effect(use_reactive!(|(target,)| {
            let inputs = latest.borrow().clone();
            let previous = inputs.start.unwrap_or_else(|| *displayed.peek());
            let now = SystemClock.now_ms();

            let report = move |rate: f64| {
                let mut displayed = displayed;
                displayed.set(rate);
                if let Some(handler) = &inputs.on_change {
                    handler.call(rate);
                }
            };

            let retarget = animator.borrow_mut().retarget(previous, target, inputs.speed, now);
            match retarget {
                Retarget::Instant(rate) => {
                    slot.borrow_mut().cancel();
                    report(rate);
                }
                Retarget::Animating(session) => {
                    let animator = Rc::clone(&animator);
                    let task_slot = Rc::clone(&slot);
                    let interval = frame_interval(inputs.frame_ms);

                    let task = spawn(async move {
                        loop {
                            tokio::time::sleep(interval).await;
                            let tick = animator.borrow_mut().frame(session, SystemClock.now_ms());
                            let Some(tick) = tick else {
                                break;
                            };
                            report(tick.rate);
                            if tick.finished {
                                task_slot.borrow_mut().release();
                                break;
                            }
                        }
                    });
                    slot.borrow_mut().replace(TaskHandle(task));
                }
            }
        }));
    }

    use_drop(move || {
        slot.borrow_mut().cancel();
        animator.borrow_mut().stop();
    });

    displayed.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_interval_fallbacks() {
        assert_eq!(frame_interval(16.0), Duration::from_millis(16));
        assert_eq!(frame_interval(0.0), Duration::from_millis(16));
        assert_eq!(frame_interval(f64::INFINITY), Duration::from_millis(16));
        assert_eq!(frame_interval(f64::NAN), Duration::from_millis(16));
        assert_eq!(frame_interval(40.0), Duration::from_millis(40));
    }

    #[test]
    fn default_options() {
        let options = RateAnimation::default();
        assert_eq!(options.target, 100.0);
        assert_eq!(options.speed, 100.0);
        assert!(options.start.is_none());
    }
}
