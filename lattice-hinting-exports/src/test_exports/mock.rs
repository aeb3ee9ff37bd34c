// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! In-memory implementations of the hinting collaborators.
//!
//! Each of them is a cheap handle over shared state: give a clone to the
//! worker and keep one in the test to drive and inspect it.

use std::sync::Arc;

use lattice_models::prehash::{PreHashMap, PreHashSet};
use lattice_models::{Amount, Block, BlockHash, ElectionBehavior};
use parking_lot::Mutex;

use crate::{
    ActiveElections, Bootstrapper, InsertResult, Ledger, LedgerReadTransaction, OnlineReps,
    TallyEntry, VoteCache,
};

#[derive(Default)]
struct LedgerState {
    blocks: PreHashMap<BlockHash, Arc<Block>>,
    confirmed: PreHashSet<BlockHash>,
    read_transactions: usize,
}

/// Ledger holding blocks in memory.
/// The dependencies of a block are its `previous` and `link` hashes.
#[derive(Clone, Default)]
pub struct TestLedger {
    state: Arc<Mutex<LedgerState>>,
}

impl TestLedger {
    /// Empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a block, unconfirmed
    pub fn add_block(&self, block: Block) -> Arc<Block> {
        let block = Arc::new(block);
        self.state
            .lock()
            .blocks
            .insert(block.hash(), Arc::clone(&block));
        block
    }

    /// Marks a block as confirmed. The block does not need to be stored.
    pub fn confirm(&self, hash: BlockHash) {
        self.state.lock().confirmed.insert(hash);
    }

    /// Stores a block and marks it confirmed
    pub fn add_confirmed_block(&self, block: Block) -> Arc<Block> {
        let block = self.add_block(block);
        self.confirm(block.hash());
        block
    }

    /// Number of read transactions opened so far
    pub fn read_transaction_count(&self) -> usize {
        self.state.lock().read_transactions
    }
}

impl Ledger for TestLedger {
    fn tx_begin_read(&self) -> Box<dyn LedgerReadTransaction + '_> {
        self.state.lock().read_transactions += 1;
        Box::new(TestLedgerTransaction { ledger: self })
    }
}

struct TestLedgerTransaction<'a> {
    ledger: &'a TestLedger,
}

impl LedgerReadTransaction for TestLedgerTransaction<'_> {
    fn block(&self, hash: &BlockHash) -> Option<Arc<Block>> {
        self.ledger.state.lock().blocks.get(hash).cloned()
    }

    fn dependents_confirmed(&self, block: &Block) -> bool {
        let state = self.ledger.state.lock();
        [block.previous(), block.link()]
            .iter()
            .filter(|hash| !hash.is_zero())
            .all(|hash| state.confirmed.contains(hash))
    }

    fn dependent_blocks(&self, block: &Block) -> Vec<BlockHash> {
        vec![block.previous(), block.link()]
    }

    fn block_confirmed_or_being_confirmed(&self, hash: &BlockHash) -> bool {
        self.ledger.state.lock().confirmed.contains(hash)
    }
}

struct ElectionsState {
    capacity: i64,
    inserted: Vec<(BlockHash, ElectionBehavior)>,
    vacancy_at_insert: Vec<i64>,
    refused: PreHashSet<BlockHash>,
}

/// Election set with a fixed capacity per category.
/// Duplicate insertions are refused.
#[derive(Clone)]
pub struct TestActiveElections {
    state: Arc<Mutex<ElectionsState>>,
}

impl TestActiveElections {
    /// Election set accepting `capacity` elections of each category
    pub fn new(capacity: i64) -> Self {
        TestActiveElections {
            state: Arc::new(Mutex::new(ElectionsState {
                capacity,
                inserted: Vec::new(),
                vacancy_at_insert: Vec::new(),
                refused: PreHashSet::default(),
            })),
        }
    }

    /// Changes the capacity of every category
    pub fn set_capacity(&self, capacity: i64) {
        self.state.lock().capacity = capacity;
    }

    /// Makes every future insertion of `hash` fail
    pub fn refuse(&self, hash: BlockHash) {
        self.state.lock().refused.insert(hash);
    }

    /// Hashes of the started elections, in insertion order
    pub fn inserted(&self) -> Vec<BlockHash> {
        self.state
            .lock()
            .inserted
            .iter()
            .map(|(hash, _)| *hash)
            .collect()
    }

    /// Vacancy of the category observed right before each insertion attempt
    pub fn vacancy_at_insert(&self) -> Vec<i64> {
        self.state.lock().vacancy_at_insert.clone()
    }
}

impl ActiveElections for TestActiveElections {
    fn vacancy(&self, behavior: ElectionBehavior) -> i64 {
        let state = self.state.lock();
        let used = state
            .inserted
            .iter()
            .filter(|(_, b)| *b == behavior)
            .count() as i64;
        state.capacity - used
    }

    fn insert(&self, block: Arc<Block>, behavior: ElectionBehavior) -> InsertResult {
        let vacancy = self.vacancy(behavior);
        let mut state = self.state.lock();
        state.vacancy_at_insert.push(vacancy);
        let hash = block.hash();
        if state.refused.contains(&hash) || state.inserted.iter().any(|(h, _)| *h == hash) {
            return InsertResult { inserted: false };
        }
        state.inserted.push((hash, behavior));
        InsertResult { inserted: true }
    }
}

#[derive(Clone, Copy)]
struct CachedVotes {
    hash: BlockHash,
    tally: Amount,
    final_tally: Amount,
}

/// Vote cache whose tallies are set by the test
#[derive(Clone, Default)]
pub struct TestVoteCache {
    entries: Arc<Mutex<Vec<CachedVotes>>>,
}

impl TestVoteCache {
    /// Empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tallies of a block, replacing previous ones
    pub fn set(&self, hash: BlockHash, tally: Amount, final_tally: Amount) {
        let mut entries = self.entries.lock();
        entries.retain(|e| e.hash != hash);
        entries.push(CachedVotes {
            hash,
            tally,
            final_tally,
        });
    }

    /// Forgets a block
    pub fn remove(&self, hash: &BlockHash) {
        self.entries.lock().retain(|e| e.hash != *hash);
    }

    fn collect(&self, min_tally: Amount, final_only: bool) -> Vec<TallyEntry> {
        let mut result: Vec<TallyEntry> = self
            .entries
            .lock()
            .iter()
            .map(|e| TallyEntry {
                hash: e.hash,
                tally: if final_only { e.final_tally } else { e.tally },
            })
            .filter(|e| e.tally >= min_tally)
            .collect();
        result.sort_by(|a, b| b.tally.cmp(&a.tally));
        result
    }
}

impl VoteCache for TestVoteCache {
    fn top(&self, min_tally: Amount) -> Vec<TallyEntry> {
        self.collect(min_tally, false)
    }

    fn top_final(&self, min_tally: Amount) -> Vec<TallyEntry> {
        self.collect(min_tally, true)
    }
}

/// Bootstrapper recording the requested hashes
#[derive(Clone, Default)]
pub struct TestBootstrapper {
    requested: Arc<Mutex<Vec<BlockHash>>>,
}

impl TestBootstrapper {
    /// Recorder with no request yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Requested hashes, in request order
    pub fn requested(&self) -> Vec<BlockHash> {
        self.requested.lock().clone()
    }
}

impl Bootstrapper for TestBootstrapper {
    fn bootstrap_block(&self, hash: BlockHash) {
        self.requested.lock().push(hash);
    }
}

/// Online weights set by the test
#[derive(Clone)]
pub struct TestOnlineReps {
    weights: Arc<Mutex<(Amount, Amount)>>,
}

impl TestOnlineReps {
    /// Fixed quorum delta and trended weight
    pub fn new(delta: Amount, trended: Amount) -> Self {
        TestOnlineReps {
            weights: Arc::new(Mutex::new((delta, trended))),
        }
    }

    /// Changes the quorum delta
    pub fn set_delta(&self, delta: Amount) {
        self.weights.lock().0 = delta;
    }
}

impl OnlineReps for TestOnlineReps {
    fn delta(&self) -> Amount {
        self.weights.lock().0
    }

    fn trended(&self) -> Amount {
        self.weights.lock().1
    }
}
