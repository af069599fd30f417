//! Rate animation scenarios against a simulated frame host
//!
//! The host hands out cancelable frame handles the way a display refresh loop
//! would. A small widget harness wires the animator, a frame slot and a
//! manual clock together and records every reported rate.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use vantui_core::animation::{RateAnimator, Retarget, SessionId};
use vantui_core::clock::{Clock, ManualClock};
use vantui_core::frame::{FrameHandle, FrameSlot};

// ============================================================================
// Test Utilities
// ============================================================================

/// Frame requests that have not run or been cancelled
#[derive(Default)]
struct HostQueue {
    next: u64,
    pending: BTreeSet<u64>,
    cancelled: Vec<u64>,
}

#[derive(Clone, Default)]
struct FakeHost {
    queue: Rc<RefCell<HostQueue>>,
}

struct FakeHandle {
    id: u64,
    queue: Rc<RefCell<HostQueue>>,
}

impl FrameHandle for FakeHandle {
    fn cancel(self) {
        let mut queue = self.queue.borrow_mut();
        if queue.pending.remove(&self.id) {
            queue.cancelled.push(self.id);
        }
    }
}

impl FakeHost {
    fn request(&self) -> FakeHandle {
        let mut queue = self.queue.borrow_mut();
        let id = queue.next;
        queue.next += 1;
        queue.pending.insert(id);
        FakeHandle {
            id,
            queue: Rc::clone(&self.queue),
        }
    }

    fn pending(&self) -> usize {
        self.queue.borrow().pending.len()
    }

    fn cancelled(&self) -> usize {
        self.queue.borrow().cancelled.len()
    }

    /// Run the frame if it is still pending
    fn take(&self, id: u64) -> bool {
        self.queue.borrow_mut().pending.remove(&id)
    }
}

/// A circle widget reduced to its animation plumbing
struct Widget<'c> {
    clock: &'c ManualClock,
    host: FakeHost,
    animator: RateAnimator,
    slot: FrameSlot<FakeHandle>,
    scheduled: Option<(u64, SessionId)>,
    displayed: f64,
    speed: f64,
    reported: Vec<f64>,
}

impl<'c> Widget<'c> {
    fn new(clock: &'c ManualClock, speed: f64) -> Self {
        Self {
            clock,
            host: FakeHost::default(),
            animator: RateAnimator::new(),
            slot: FrameSlot::new(),
            scheduled: None,
            displayed: 0.0,
            speed,
            reported: Vec::new(),
        }
    }

    fn report(&mut self, rate: f64) {
        self.displayed = rate;
        self.reported.push(rate);
    }

    fn schedule(&mut self, session: SessionId) {
        let handle = self.host.request();
        let id = handle.id;
        self.slot.replace(handle);
        self.scheduled = Some((id, session));
    }

    fn set_rate(&mut self, rate: f64) {
        let retarget = self
            .animator
            .retarget(self.displayed, rate, self.speed, self.clock.now_ms());
        match retarget {
            Retarget::Instant(rate) => {
                self.slot.cancel();
                self.scheduled = None;
                self.report(rate);
            }
            Retarget::Animating(session) => self.schedule(session),
        }
    }

    /// One display refresh
    fn refresh(&mut self) {
        let Some((id, session)) = self.scheduled.take() else {
            return;
        };
        if !self.host.take(id) {
            return;
        }
        self.slot.release();

        if let Some(tick) = self.animator.frame(session, self.clock.now_ms()) {
            self.report(tick.rate);
            if !tick.finished {
                self.schedule(session);
            }
        }
    }

    fn run_for(&mut self, frames: usize, frame_ms: f64) {
        for _ in 0..frames {
            self.clock.advance(frame_ms);
            self.refresh();
        }
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn zero_to_sixty_at_default_speed() {
    let clock = ManualClock::new(10_000.0);
    let mut widget = Widget::new(&clock, 100.0);

    widget.set_rate(60.0);
    widget.run_for(3, 100.0);
    assert_eq!(widget.reported.last(), Some(&30.0));

    widget.run_for(3, 100.0);
    assert_eq!(widget.reported, vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
    assert_eq!(widget.host.pending(), 0);

    // Scheduling stopped: more refreshes report nothing
    widget.run_for(5, 100.0);
    assert_eq!(widget.reported.len(), 6);
}

#[test]
fn retarget_mid_flight_cancels_previous_frame() {
    let clock = ManualClock::new(0.0);
    let mut widget = Widget::new(&clock, 100.0);

    widget.set_rate(100.0);
    widget.run_for(4, 50.0);
    assert_eq!(widget.displayed, 20.0);

    widget.set_rate(0.0);
    assert_eq!(widget.host.cancelled(), 1);
    assert_eq!(widget.host.pending(), 1);

    let before = widget.reported.len();
    widget.run_for(10, 25.0);
    let after: Vec<f64> = widget.reported[before..].to_vec();

    // Only the descending session reports from here on
    assert!(after.windows(2).all(|w| w[1] <= w[0]));
    assert_eq!(after.last(), Some(&0.0));
}

#[test]
fn rapid_retargets_leave_one_pending_frame() {
    let clock = ManualClock::new(0.0);
    let mut widget = Widget::new(&clock, 50.0);

    for target in [10.0, 80.0, 35.0, 90.0] {
        widget.set_rate(target);
        assert_eq!(widget.host.pending(), 1);
    }
    assert_eq!(widget.host.cancelled(), 3);

    widget.run_for(200, 16.0);
    assert_eq!(widget.reported.last(), Some(&90.0));
    assert_eq!(widget.host.pending(), 0);
}

#[test]
fn instant_mode_reports_once_synchronously() {
    let clock = ManualClock::new(0.0);
    let mut widget = Widget::new(&clock, 0.0);

    widget.set_rate(250.0);
    assert_eq!(widget.reported, vec![100.0]);
    assert_eq!(widget.host.pending(), 0);

    widget.run_for(5, 16.0);
    assert_eq!(widget.reported, vec![100.0]);
}

#[test]
fn instant_retarget_cancels_running_animation() {
    let clock = ManualClock::new(0.0);
    let mut widget = Widget::new(&clock, 100.0);

    widget.set_rate(100.0);
    widget.run_for(2, 16.0);

    widget.speed = 0.0;
    widget.set_rate(5.0);
    assert_eq!(widget.host.pending(), 0);

    widget.run_for(5, 16.0);
    assert_eq!(widget.reported.last(), Some(&5.0));
}

#[test]
fn teardown_cancels_pending_frame() {
    let clock = ManualClock::new(0.0);
    let host;
    {
        let mut widget = Widget::new(&clock, 100.0);
        host = widget.host.clone();
        widget.set_rate(100.0);
        widget.run_for(1, 16.0);
        assert_eq!(host.pending(), 1);
    }
    assert_eq!(host.pending(), 0);
    assert_eq!(host.cancelled(), 1);
}

#[test]
fn same_rate_ticks_once() {
    let clock = ManualClock::new(0.0);
    let mut widget = Widget::new(&clock, 100.0);

    widget.set_rate(0.0);
    widget.run_for(5, 16.0);
    assert_eq!(widget.reported, vec![0.0]);
}
