// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::{Amount, Block, BlockHash};
use lattice_hash::Hash;

/// Deterministic block hash for tests
pub fn block_hash_from_seed(seed: u64) -> BlockHash {
    BlockHash::new(Hash::compute_from(&seed.to_be_bytes()))
}

/// Creates a block depending on `previous` and `link`.
/// `nonce` only serves to make otherwise identical blocks distinct.
pub fn create_block(previous: BlockHash, link: BlockHash, nonce: u64) -> Block {
    Block::new(previous, link, Amount::from_raw(nonce as u128))
}
