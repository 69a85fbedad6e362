//! Frame scheduling bookkeeping for a cooperative redraw loop.
//!
//! The host supplies a [`FrameScheduler`] (in the browser, on top of
//! `requestAnimationFrame`). [`AnimationDriver`] guarantees at most one
//! outstanding request: every restart cancels the pending one first.

use std::fmt::Debug;

/// Host frame-callback service.
pub trait FrameScheduler {
    type Handle: Copy + Eq + Debug;

    /// Asks for one callback on the next display refresh. `None` if the host
    /// could not schedule it.
    fn request(&mut self) -> Option<Self::Handle>;

    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Debug)]
pub struct AnimationDriver<H> {
    pending: Option<H>,
    frames: u64,
}

impl<H> Default for AnimationDriver<H> {
    fn default() -> Self {
        Self {
            pending: None,
            frames: 0,
        }
    }
}

impl<H: Copy + Eq + Debug> AnimationDriver<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<H> {
        self.pending
    }

    /// Frames run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Call after any tracked parameter changes: cancels the pending frame,
    /// then schedules a fresh one unless frozen.
    pub fn restart<S>(&mut self, scheduler: &mut S, frozen: bool)
    where
        S: FrameScheduler<Handle = H> + ?Sized,
    {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
            log::debug!("[driver] cancelled frame {:?}", handle);
        }
        if !frozen {
            self.pending = scheduler.request();
        }
    }

    /// Runs one frame from the host callback: `render`, then schedules the
    /// next frame unless frozen.
    pub fn run_frame<S, F>(&mut self, scheduler: &mut S, frozen: bool, render: F)
    where
        S: FrameScheduler<Handle = H> + ?Sized,
        F: FnOnce(),
    {
        // the callback that brought us here is spent
        self.pending = None;
        render();
        self.frames += 1;
        if !frozen {
            self.pending = scheduler.request();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        next: u32,
        cancelled: Vec<u32>,
    }

    impl FrameScheduler for Counter {
        type Handle = u32;

        fn request(&mut self) -> Option<u32> {
            self.next += 1;
            Some(self.next)
        }

        fn cancel(&mut self, handle: u32) {
            self.cancelled.push(handle);
        }
    }

    #[test]
    fn restart_replaces_pending_request() {
        let mut s = Counter::default();
        let mut d = AnimationDriver::new();
        d.restart(&mut s, false);
        assert_eq!(d.pending(), Some(1));
        d.restart(&mut s, false);
        assert_eq!(s.cancelled, vec![1]);
        assert_eq!(d.pending(), Some(2));
    }

    #[test]
    fn frozen_restart_only_cancels() {
        let mut s = Counter::default();
        let mut d = AnimationDriver::new();
        d.restart(&mut s, false);
        d.restart(&mut s, true);
        assert_eq!(d.pending(), None);
        assert_eq!(s.cancelled, vec![1]);
    }
}
