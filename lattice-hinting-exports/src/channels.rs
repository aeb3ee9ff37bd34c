// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Services the hinting worker reads from and writes to.
//!
//! None of them is owned by the hinting worker: the node creates them and hands
//! the worker a handle to each through `HintingChannels`.

use lattice_metrics::Stats;
use lattice_models::{Amount, Block, BlockHash, ElectionBehavior};
use std::sync::Arc;

/// A vote cache entry: a block hash and the voting weight observed for it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TallyEntry {
    /// hash of the voted block
    pub hash: BlockHash,
    /// observed voting weight
    pub tally: Amount,
}

/// Cache of votes received for blocks that have no local election
#[cfg_attr(any(test, feature = "test-exports"), mockall::automock)]
pub trait VoteCache: Send + Sync {
    /// Entries whose tally is at least `min_tally`, highest tally first.
    /// The result is a snapshot taken at call time.
    fn top(&self, min_tally: Amount) -> Vec<TallyEntry>;

    /// Same as `top`, using the weight of final votes only
    fn top_final(&self, min_tally: Amount) -> Vec<TallyEntry>;
}

/// Block store able to open read transactions
pub trait Ledger: Send + Sync {
    /// Opens a read transaction. It is closed when the returned value is dropped.
    fn tx_begin_read(&self) -> Box<dyn LedgerReadTransaction + '_>;
}

/// Reads performed inside one ledger read transaction
pub trait LedgerReadTransaction {
    /// Point lookup of a block
    fn block(&self, hash: &BlockHash) -> Option<Arc<Block>>;

    /// True iff every direct dependency of `block` is confirmed
    fn dependents_confirmed(&self, block: &Block) -> bool;

    /// Direct dependencies of `block`. `BlockHash::ZERO` entries mean "none".
    fn dependent_blocks(&self, block: &Block) -> Vec<BlockHash>;

    /// True if the block is confirmed or its confirmation is in progress
    fn block_confirmed_or_being_confirmed(&self, hash: &BlockHash) -> bool;
}

/// Outcome of an election insertion
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InsertResult {
    /// false when the election set refused the block (capacity race, duplicate...)
    pub inserted: bool,
}

/// Set of elections currently being voted on
#[cfg_attr(any(test, feature = "test-exports"), mockall::automock)]
pub trait ActiveElections: Send + Sync {
    /// Remaining room for elections of the given category. Negative when over capacity.
    fn vacancy(&self, behavior: ElectionBehavior) -> i64;

    /// Starts an election for `block`
    fn insert(&self, block: Arc<Block>, behavior: ElectionBehavior) -> InsertResult;
}

/// Block fetching from peers
#[cfg_attr(any(test, feature = "test-exports"), mockall::automock)]
pub trait Bootstrapper: Send + Sync {
    /// Requests a block missing from the ledger. Fire and forget.
    fn bootstrap_block(&self, hash: BlockHash);
}

/// Online representative weight tracking
#[cfg_attr(any(test, feature = "test-exports"), mockall::automock)]
pub trait OnlineReps: Send + Sync {
    /// Weight above which a vote tally is final (quorum delta)
    fn delta(&self) -> Amount;

    /// Trended online voting weight
    fn trended(&self) -> Amount;
}

/// Handles to every service the hinting worker uses
pub struct HintingChannels {
    /// vote cache to take candidates from
    pub vote_cache: Box<dyn VoteCache>,
    /// ledger to check blocks and dependencies in
    pub ledger: Box<dyn Ledger>,
    /// election set to start hinted elections in
    pub active_elections: Box<dyn ActiveElections>,
    /// fetches blocks missing from the ledger
    pub bootstrapper: Box<dyn Bootstrapper>,
    /// online weight, for tally thresholds
    pub online_reps: Box<dyn OnlineReps>,
    /// statistics sink
    pub stats: Stats,
}
