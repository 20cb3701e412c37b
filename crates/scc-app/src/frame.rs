//! # Frame Coalescing
//!
//! Single-slot scheduler for work deferred to the next animation frame.
//! Requesting a frame while one is pending cancels the pending request and
//! replaces its payload, so any burst of input between two frames produces
//! exactly one unit of work carrying the last payload.

/// Identifier of one frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameToken(u64);

/// Pending-frame slot.
#[derive(Debug)]
pub struct FrameScheduler<T> {
    pending: Option<(FrameToken, T)>,
    next_token: u64,
    cancelled: u64,
}

impl<T> Default for FrameScheduler<T> {
    fn default() -> Self {
        Self {
            pending: None,
            next_token: 1,
            cancelled: 0,
        }
    }
}

impl<T> FrameScheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `payload` for the next frame, cancelling any pending request.
    pub fn request(&mut self, payload: T) -> FrameToken {
        let token = FrameToken(self.next_token);
        self.next_token += 1;
        if let Some((previous, _)) = self.pending.replace((token, payload)) {
            self.cancelled += 1;
            tracing::trace!(cancelled = previous.0, replacement = token.0, "frame request replaced");
        }
        token
    }

    /// Drop the pending request, if any.
    pub fn cancel(&mut self) -> Option<FrameToken> {
        let (token, _) = self.pending.take()?;
        self.cancelled += 1;
        Some(token)
    }

    /// Run the frame: hand out the pending payload and empty the slot.
    pub fn take(&mut self) -> Option<(FrameToken, T)> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Token of the pending request.
    pub fn pending_token(&self) -> Option<FrameToken> {
        self.pending.as_ref().map(|(t, _)| *t)
    }

    /// Requests cancelled or replaced so far.
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}
