use log::warn;

use crate::common::types::{Frame, FrameId};

/// Second-chance (clock) replacement hand
pub struct ClockReplacer {
    hand: FrameId,
}

impl ClockReplacer {
    pub fn new() -> Self {
        Self { hand: 0 }
    }

    /// Sweep from the hand, clearing reference bits until an unreferenced
    /// frame is found. The sweep gives up after 4 * N visits and takes the
    /// frame under the hand.
    pub fn victim(&mut self, frames: &mut [Frame]) -> FrameId {
        let frame_count = frames.len();
        let mut scans = 0;

        loop {
            let frame = &mut frames[self.hand];
            if !frame.reference_bit {
                return self.take_hand(frame_count);
            }

            // Second chance
            frame.reference_bit = false;
            self.hand = (self.hand + 1) % frame_count;

            scans += 1;
            if scans > frame_count * 4 {
                warn!("Clock sweep exceeded {} visits, forcing frame {}", frame_count * 4, self.hand);
                return self.take_hand(frame_count);
            }
        }
    }

    pub fn hand(&self) -> FrameId {
        self.hand
    }

    fn take_hand(&mut self, frame_count: usize) -> FrameId {
        let victim = self.hand;
        self.hand = (self.hand + 1) % frame_count;
        victim
    }
}

impl Default for ClockReplacer {
    fn default() -> Self {
        Self::new()
    }
}
