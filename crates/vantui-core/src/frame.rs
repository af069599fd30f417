//! Owned slot for a pending frame callback
//!
//! A host schedules "run before the next repaint" work and hands back a
//! cancelable handle. [`FrameSlot`] owns at most one such handle: installing a
//! new one cancels the previous occupant, and dropping the slot cancels
//! whatever is still pending, so a torn-down widget never gets called back.

/// A cancelable handle to scheduled frame work
pub trait FrameHandle {
    /// Prevent the scheduled work from running. Cancelling work that already
    /// ran must be a no-op.
    fn cancel(self);
}

/// Exclusive owner of the currently pending frame handle
#[derive(Debug)]
pub struct FrameSlot<H: FrameHandle> {
    pending: Option<H>,
}

impl<H: FrameHandle> Default for FrameSlot<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H: FrameHandle> FrameSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `handle`, cancelling the previous occupant first.
    ///
    /// Returns `true` when a previous handle was cancelled.
    pub fn replace(&mut self, handle: H) -> bool {
        let superseded = self.cancel();
        self.pending = Some(handle);
        superseded
    }

    /// Cancel the pending handle, if any.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    /// Forget the pending handle without cancelling it (its work has run).
    pub fn release(&mut self) -> Option<H> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<H: FrameHandle> Drop for FrameSlot<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}
