// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Shared node types: block identifiers, blocks, voting weights and configuration defaults.
#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

pub use amount::Amount;
pub use block::Block;
pub use block_hash::BlockHash;
pub use election::ElectionBehavior;
pub use error::{ModelsError, ModelsResult};

/// voting weight
pub mod amount;
/// blocks as stored in the ledger
pub mod block;
/// block identifiers
pub mod block_hash;
/// configuration defaults and settings loading
pub mod config;
/// election categories
pub mod election;
/// models error
pub mod error;
/// prehashed trait, for hash less hashmap/set
pub mod prehash;

/// Test utils
#[cfg(any(test, feature = "test-exports"))]
pub mod test_exports;
