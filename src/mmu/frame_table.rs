use log::{debug, trace};

use crate::common::types::{Frame, FrameId, PageNumber, Tick, VictimRecord, DEFAULT_RANDOM_SEED};
use crate::mmu::error::MmuError;
use crate::mmu::replacer::{ReplacementPolicy, Replacer};

/// Physical frame table with the bookkeeping for every replacement policy.
///
/// Frames are filled lowest index first through [`FrameTable::allocate`];
/// once all are occupied, [`FrameTable::select_victim`] replaces a resident
/// page in place. A frame never goes back to being unoccupied.
pub struct FrameTable {
    frames: Vec<Frame>,
    replacer: Replacer,
    tick: Tick,
    seed: u64,
}

impl FrameTable {
    /// Create a frame table seeded with [`DEFAULT_RANDOM_SEED`]
    pub fn new(frame_count: usize) -> Result<Self, MmuError> {
        Self::with_seed(frame_count, DEFAULT_RANDOM_SEED)
    }

    pub fn with_seed(frame_count: usize, seed: u64) -> Result<Self, MmuError> {
        let frames = Self::create_frames(frame_count)?;

        Ok(Self {
            frames,
            replacer: Replacer::new(frame_count, seed),
            tick: 0,
            seed,
        })
    }

    /// Reset all state for a new run with `frame_count` frames.
    ///
    /// The random generator is reseeded, so a reinitialized table replays
    /// exactly like a freshly created one.
    pub fn initialize(&mut self, frame_count: usize) -> Result<(), MmuError> {
        self.frames = Self::create_frames(frame_count)?;
        self.replacer = Replacer::new(frame_count, self.seed);
        self.tick = 0;
        Ok(())
    }

    fn create_frames(frame_count: usize) -> Result<Vec<Frame>, MmuError> {
        if frame_count < 1 {
            return Err(MmuError::AllocationError(frame_count));
        }

        let mut frames = Vec::new();
        frames
            .try_reserve_exact(frame_count)
            .map_err(|_| MmuError::AllocationError(frame_count))?;
        frames.resize_with(frame_count, Frame::new);

        debug!("Created frame table with {} frames", frame_count);
        Ok(frames)
    }

    /// Check whether a page is resident, updating its access metadata on a hit
    pub fn lookup(&mut self, page_number: PageNumber) -> Option<FrameId> {
        let frame_id = self.find_frame(page_number)?;

        let tick = self.next_tick();
        self.frames[frame_id].touch(tick);
        trace!("Hit page {} in frame {}", page_number, frame_id);

        Some(frame_id)
    }

    /// Mark a resident page as modified. Counts as an access like a hit.
    pub fn mark_modified(&mut self, page_number: PageNumber) -> Option<FrameId> {
        let frame_id = self.find_frame(page_number)?;

        let tick = self.next_tick();
        let frame = &mut self.frames[frame_id];
        frame.dirty = true;
        frame.touch(tick);

        Some(frame_id)
    }

    /// Load a page into the first free frame
    pub fn allocate(&mut self, page_number: PageNumber) -> Result<FrameId, MmuError> {
        let frame_id = self
            .find_free_frame()
            .ok_or(MmuError::NoFreeFrame(page_number))?;

        let tick = self.next_tick();
        self.frames[frame_id].install(page_number, tick);
        debug!("Allocated page {} to frame {}", page_number, frame_id);

        Ok(frame_id)
    }

    /// Evict a resident page chosen by `policy` and load `page_number` in its place
    pub fn select_victim(
        &mut self,
        page_number: PageNumber,
        policy: ReplacementPolicy,
    ) -> Result<VictimRecord, MmuError> {
        if self.has_free_frame() {
            return Err(MmuError::InvalidOperation(format!(
                "Cannot evict for page {} while free frames remain",
                page_number
            )));
        }

        let frame_id = self.replacer.victim(policy, &mut self.frames);
        let frame = &self.frames[frame_id];
        let victim = VictimRecord {
            page_number: frame.page_number,
            dirty: frame.dirty,
            frame_id,
        };

        let tick = self.next_tick();
        self.frames[frame_id].install(page_number, tick);
        debug!(
            "{} evicted page {} (dirty: {}) from frame {} for page {}",
            policy, victim.page_number, victim.dirty, frame_id, page_number
        );

        Ok(victim)
    }

    /// Current frame contents
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.frames.iter().filter(|frame| frame.occupied).count()
    }

    pub fn has_free_frame(&self) -> bool {
        self.find_free_frame().is_some()
    }

    /// Resident pages in frame order
    pub fn resident_pages(&self) -> Vec<PageNumber> {
        self.frames.iter().filter_map(Frame::page).collect()
    }

    pub fn fifo_hand(&self) -> FrameId {
        self.replacer.fifo_hand()
    }

    pub fn clock_hand(&self) -> FrameId {
        self.replacer.clock_hand()
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn find_frame(&self, page_number: PageNumber) -> Option<FrameId> {
        self.frames
            .iter()
            .position(|frame| frame.occupied && frame.page_number == page_number)
    }

    fn find_free_frame(&self) -> Option<FrameId> {
        self.frames.iter().position(|frame| !frame.occupied)
    }

    fn next_tick(&mut self) -> Tick {
        self.tick += 1;
        self.tick
    }
}
