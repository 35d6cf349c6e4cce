//! IdGenerator trait for handing out control identities.
//!
//! Every control in a document draws its identity from the same generator so
//! that identities are unique across the whole document, not only within
//! one control type. Tests construct their own [`SequentialIdGenerator`] to
//! get deterministic values.

use quire_types::ControlId;
use std::fmt::Debug;
use std::sync::{Arc, LazyLock};
use std::sync::atomic::{AtomicU32, Ordering};

/// A source of distinct, positive control identities.
pub trait IdGenerator: Send + Sync + Debug {
    /// Returns an identity not returned before by this generator.
    fn next_id(&self) -> ControlId;
}

/// A counter-backed generator.
///
/// The increment is a single atomic `fetch_add`, so one instance may be shared
/// between threads. Values wrap on `u32` overflow, which is not expected in
/// practice.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU32,
}

impl SequentialIdGenerator {
    /// The first identity handed out by [`SequentialIdGenerator::new`].
    pub const DEFAULT_SEED: u32 = 1;

    pub fn new() -> Self {
        Self::starting_at(Self::DEFAULT_SEED)
    }

    /// Creates a generator whose first identity is `seed`. A seed of zero is
    /// bumped to one so identities stay positive.
    pub fn starting_at(seed: u32) -> Self {
        Self {
            next: AtomicU32::new(seed.max(1)),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> ControlId {
        ControlId::new(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

static SHARED: LazyLock<Arc<SequentialIdGenerator>> =
    LazyLock::new(|| Arc::new(SequentialIdGenerator::new()));

/// The process-wide generator used when a document builder is not given one.
pub fn shared_generator() -> Arc<dyn IdGenerator> {
    SHARED.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids_are_distinct() {
        let ids = SequentialIdGenerator::new();
        let seen: HashSet<_> = (0..1000).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 1000);
    }

    #[test]
    fn test_starting_at_is_deterministic() {
        let ids = SequentialIdGenerator::starting_at(100);
        assert_eq!(ids.next_id().get(), 100);
        assert_eq!(ids.next_id().get(), 101);
    }

    #[test]
    fn test_zero_seed_stays_positive() {
        let ids = SequentialIdGenerator::starting_at(0);
        assert_eq!(ids.next_id().get(), 1);
    }

    #[test]
    fn test_shared_generator_is_one_instance() {
        let a = shared_generator();
        let b = shared_generator();
        let first = a.next_id();
        let second = b.next_id();
        assert_ne!(first, second);
    }

    #[test]
    fn test_shared_across_threads() {
        let ids = Arc::new(SequentialIdGenerator::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = Arc::clone(&ids);
                std::thread::spawn(move || (0..250).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(seen.len(), 1000);
    }
}
