//! Detection limits.
//!
//! The default read limit is the single piece of global mutable state in the
//! crate. It is read by every detection call that does not pass an explicit
//! limit; by convention it is set once at startup and never contended.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of leading bytes read from a source (overridable per call).
pub const DEFAULT_READ_LIMIT: usize = 4096;

/// Floor for the index's `max_bytes_needed`, so even a tiny custom catalog
/// gets a useful sniff window.
pub const MIN_INDEX_BYTES: usize = 512;

static READ_LIMIT: AtomicUsize = AtomicUsize::new(DEFAULT_READ_LIMIT);

/// Current process-wide default read limit.
pub fn default_read_limit() -> usize {
    READ_LIMIT.load(Ordering::Relaxed)
}

/// Set the process-wide default read limit. Zero is clamped to 1.
pub fn set_default_read_limit(limit: usize) {
    READ_LIMIT.store(limit.max(1), Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_limit_is_clamped() {
        let before = default_read_limit();
        set_default_read_limit(0);
        assert_eq!(default_read_limit(), 1);
        set_default_read_limit(before);
    }
}
