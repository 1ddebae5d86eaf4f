use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

/// Identifies one fire-and-forget playback request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AudioHandle(u64);

impl AudioHandle {
    pub fn new() -> AudioHandle {
        AudioHandle(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

impl Default for AudioHandle {
    fn default() -> Self {
        Self::new()
    }
}
