use crate::common::types::{Frame, FrameId};

/// LRU (Least Recently Used) victim selection by logical access tick.
///
/// Ties go to the lowest frame index. Unoccupied frames are never chosen;
/// frame 0 is returned if nothing is occupied.
pub fn victim(frames: &[Frame]) -> FrameId {
    let mut victim = None;
    let mut oldest = None;

    for (frame_id, frame) in frames.iter().enumerate() {
        if !frame.occupied {
            continue;
        }
        if oldest.map_or(true, |tick| frame.last_access_tick < tick) {
            oldest = Some(frame.last_access_tick);
            victim = Some(frame_id);
        }
    }

    victim.unwrap_or(0)
}
