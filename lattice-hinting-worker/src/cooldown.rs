// Copyright (c) 2022 MASSA LABS <info@massa.net>

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use lattice_models::prehash::PreHashMap;
use lattice_models::BlockHash;

/// Recently activated hashes and the instant they can be activated again.
///
/// Owned by the worker thread only. `by_hash` and `by_expiry` always hold the
/// same entries.
pub(crate) struct CooldownTracker {
    duration: Duration,
    max_entries: usize,
    by_hash: PreHashMap<BlockHash, Instant>,
    by_expiry: BTreeSet<(Instant, BlockHash)>,
}

impl CooldownTracker {
    pub fn new(duration: Duration, max_entries: usize) -> Self {
        CooldownTracker {
            duration,
            max_entries,
            by_hash: PreHashMap::default(),
            by_expiry: BTreeSet::new(),
        }
    }

    /// Returns true if `hash` is still cooling down.
    /// Otherwise claims a new cooldown period for it starting at `now` and returns false.
    pub fn check_and_claim(&mut self, hash: BlockHash, now: Instant) -> bool {
        if let Some(expiry) = self.by_hash.get(&hash).copied() {
            if expiry > now {
                return true;
            }
            self.remove(hash, expiry);
        }

        let expiry = now.checked_add(self.duration).unwrap_or(now);
        self.by_hash.insert(hash, expiry);
        self.by_expiry.insert((expiry, hash));

        // expired entries first, then the earliest ones while above the ceiling
        while let Some(&(first_expiry, first_hash)) = self.by_expiry.first() {
            if first_expiry > now && self.by_expiry.len() <= self.max_entries {
                break;
            }
            self.remove(first_hash, first_expiry);
        }
        false
    }

    fn remove(&mut self, hash: BlockHash, expiry: Instant) {
        self.by_hash.remove(&hash);
        self.by_expiry.remove(&(expiry, hash));
    }

    pub fn len(&self) -> usize {
        debug_assert_eq!(self.by_hash.len(), self.by_expiry.len());
        self.by_hash.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_models::test_exports::block_hash_from_seed;

    const COOLDOWN: Duration = Duration::from_millis(5000);

    #[test]
    fn test_claim_then_cooldown() {
        let mut tracker = CooldownTracker::new(COOLDOWN, 100);
        let start = Instant::now();
        let a = block_hash_from_seed(1);

        assert!(!tracker.check_and_claim(a, start));
        assert!(tracker.check_and_claim(a, start + Duration::from_millis(1000)));
        assert!(tracker.check_and_claim(a, start + Duration::from_millis(4999)));
        // expiry is exclusive: at `start + cooldown` the hash is free again
        assert!(!tracker.check_and_claim(a, start + COOLDOWN));
        assert!(tracker.check_and_claim(a, start + COOLDOWN + Duration::from_millis(1)));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_hashes_are_independent() {
        let mut tracker = CooldownTracker::new(COOLDOWN, 100);
        let now = Instant::now();
        assert!(!tracker.check_and_claim(block_hash_from_seed(1), now));
        assert!(!tracker.check_and_claim(block_hash_from_seed(2), now));
        assert!(tracker.check_and_claim(block_hash_from_seed(1), now));
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn test_expired_entries_are_pruned() {
        let mut tracker = CooldownTracker::new(COOLDOWN, 100);
        let start = Instant::now();
        for seed in 0..10 {
            tracker.check_and_claim(block_hash_from_seed(seed), start);
        }
        assert_eq!(tracker.len(), 10);

        let later = start + COOLDOWN + Duration::from_millis(1);
        assert!(!tracker.check_and_claim(block_hash_from_seed(100), later));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_ceiling_evicts_earliest_expiry() {
        let mut tracker = CooldownTracker::new(COOLDOWN, 3);
        let start = Instant::now();
        for seed in 0..5u64 {
            let now = start + Duration::from_millis(seed);
            assert!(!tracker.check_and_claim(block_hash_from_seed(seed), now));
        }
        assert_eq!(tracker.len(), 3);

        let now = start + Duration::from_millis(10);
        // the two oldest claims were evicted
        assert!(!tracker.check_and_claim(block_hash_from_seed(0), now));
        assert!(tracker.check_and_claim(block_hash_from_seed(4), now));
        assert_eq!(tracker.len(), 3);
    }
}
