/// Number of address bits covered by the page offset (4KB pages)
pub const PAGE_OFFSET_BITS: u32 = 12;

/// Seed used for the random replacement policy unless configured otherwise
pub const DEFAULT_RANDOM_SEED: u64 = 1;

/// Logical page number type
pub type PageNumber = u32;

/// Physical frame index type
pub type FrameId = usize;

/// Logical access timestamp type
pub type Tick = u64;

/// Physical memory frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub occupied: bool,
    pub page_number: PageNumber,
    pub dirty: bool,
    pub reference_bit: bool,
    pub last_access_tick: Tick,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page held by this frame, if any
    pub fn page(&self) -> Option<PageNumber> {
        self.occupied.then_some(self.page_number)
    }

    /// Load a page into the frame, resetting its dirty state
    pub(crate) fn install(&mut self, page_number: PageNumber, tick: Tick) {
        self.occupied = true;
        self.page_number = page_number;
        self.dirty = false;
        self.reference_bit = true;
        self.last_access_tick = tick;
    }

    /// Record an access to the resident page
    pub(crate) fn touch(&mut self, tick: Tick) {
        self.reference_bit = true;
        self.last_access_tick = tick;
    }
}

/// The page evicted by a replacement, and where the new page went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VictimRecord {
    pub page_number: PageNumber,
    pub dirty: bool,
    pub frame_id: FrameId,
}
