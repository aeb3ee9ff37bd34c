// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::{Amount, BlockHash};
use lattice_hash::Hash;

/// A ledger block.
///
/// `previous` is the preceding block of the same account chain and `link` the
/// block this one depends on across chains (the source of a receive).
/// Either may be `BlockHash::ZERO` when there is no such block.
/// The balance only takes part in the hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    previous: BlockHash,
    link: BlockHash,
    hash: BlockHash,
}

impl Block {
    /// Builds a block and computes its hash
    pub fn new(previous: BlockHash, link: BlockHash, balance: Amount) -> Self {
        let mut bytes = Vec::with_capacity(80);
        bytes.extend_from_slice(previous.to_bytes());
        bytes.extend_from_slice(link.to_bytes());
        bytes.extend_from_slice(&balance.to_raw().to_be_bytes());
        Block {
            previous,
            link,
            hash: BlockHash::new(Hash::compute_from(&bytes)),
        }
    }

    /// hash of the block content
    pub fn hash(&self) -> BlockHash {
        self.hash
    }

    /// previous block of the account chain
    pub fn previous(&self) -> BlockHash {
        self.previous
    }

    /// cross-chain link
    pub fn link(&self) -> BlockHash {
        self.link
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_covers_every_field() {
        let a = BlockHash::new(Hash::compute_from(b"a"));
        let block = Block::new(a, BlockHash::ZERO, Amount::from_raw(10));
        assert_eq!(
            block.hash(),
            Block::new(a, BlockHash::ZERO, Amount::from_raw(10)).hash()
        );
        assert_ne!(
            block.hash(),
            Block::new(a, BlockHash::ZERO, Amount::from_raw(11)).hash()
        );
        assert_ne!(
            block.hash(),
            Block::new(BlockHash::ZERO, a, Amount::from_raw(10)).hash()
        );
        assert_eq!(block.previous(), a);
        assert_eq!(block.link(), BlockHash::ZERO);
    }
}
