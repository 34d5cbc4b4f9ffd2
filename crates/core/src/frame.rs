//! Frame scheduling - a one-shot, re-armable frame request
//!
//! The host fires at most one pending frame per request. After a frame is
//! taken it is gone; the callback must call [`FrameLoop::request`] again to
//! keep the loop going. Cancelling is idempotent and invalidates the pending
//! handle.

/// Identifies one armed frame request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    next_id: u64,
    pending: Option<FrameHandle>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the next frame.
    ///
    /// If a frame is already pending its handle is returned unchanged, so the
    /// loop never has two frames in flight.
    pub fn request(&mut self) -> FrameHandle {
        if let Some(handle) = self.pending {
            return handle;
        }
        self.next_id = self.next_id.wrapping_add(1);
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    /// Disarm the pending frame. Returns false if nothing was armed.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// True while `handle` is the pending request
    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending == Some(handle)
    }

    /// Consume the pending frame for dispatch
    pub fn take(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }
}
