use crate::common::types::FrameId;

/// Round-robin replacement hand.
///
/// The hand rotates over frame indices regardless of when the resident page
/// was actually loaded, so a page reloaded behind the hand waits a full turn.
pub struct FifoReplacer {
    hand: FrameId,
    frame_count: usize,
}

impl FifoReplacer {
    pub fn new(frame_count: usize) -> Self {
        Self { hand: 0, frame_count }
    }

    /// Victim selection: the frame under the hand, then advance
    pub fn victim(&mut self) -> FrameId {
        let victim = self.hand;
        self.hand = (self.hand + 1) % self.frame_count;
        victim
    }

    pub fn hand(&self) -> FrameId {
        self.hand
    }
}
