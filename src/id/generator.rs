use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe monotonic id source.
///
/// Each call to [`next_id`](IdGenerator::next_id) increments the counter and
/// returns the new value, so the first id handed out is `1`. Concurrent callers
/// never observe the same value and the issued ids form a gapless sequence.
#[derive(Debug, Default)]
pub struct IdGenerator {
    counter: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        IdGenerator {
            counter: AtomicU64::new(0),
        }
    }

    /// Increment the counter and return the new value.
    pub fn next_id(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The most recently issued id, or `0` if none has been issued.
    pub fn current(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }
}
