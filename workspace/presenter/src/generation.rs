//! Request generations: only the newest invocation may render.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out increasing tickets; cloning shares the same counter.
#[derive(Debug, Clone, Default)]
pub struct GenerationCounter {
    latest: Arc<AtomicU64>,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new invocation, superseding every ticket issued before.
    pub fn begin(&self) -> Ticket {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            generation,
            latest: Arc::clone(&self.latest),
        }
    }

    /// Generation of the most recent ticket (0 before the first one).
    pub fn current(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }
}

/// Proof of which invocation a response belongs to.
#[derive(Debug, Clone)]
pub struct Ticket {
    generation: u64,
    latest: Arc<AtomicU64>,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// False once a newer invocation has begun.
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_supersedes_older() {
        let counter = GenerationCounter::new();
        assert_eq!(counter.current(), 0);

        let first = counter.begin();
        assert!(first.is_current());

        let second = counter.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert_eq!(second.generation(), 2);
    }

    #[test]
    fn clones_share_the_counter() {
        let counter = GenerationCounter::new();
        let shared = counter.clone();

        let ticket = counter.begin();
        shared.begin();

        assert!(!ticket.is_current());
        assert_eq!(counter.current(), 2);
    }
}
