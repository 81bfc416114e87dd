//! Cooperative cancellation.
//!
//! The host environment sets the flag (e.g. from a Ctrl-C listener); the
//! driver only polls it at the top of each iteration.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the running comparison to stop after its current line.
    pub fn request(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let flag = InterruptFlag::new();
        let handle = flag.clone();
        assert!(!flag.is_requested());
        handle.request();
        assert!(flag.is_requested());
    }
}
