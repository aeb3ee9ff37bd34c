// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::error::ModelsError;
use crate::prehash::PreHashed;
use lattice_hash::{Hash, HASH_SIZE_BYTES};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::str::FromStr;

const BLOCKHASH_PREFIX: char = 'B';

/// Identifier of a block: the hash of its content
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default, SerializeDisplay, DeserializeFromStr)]
pub struct BlockHash(Hash);

impl PreHashed for BlockHash {}

// raw bytes only, so that `HashMapper` sees the hash itself
impl std::hash::Hash for BlockHash {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write(self.0.to_bytes());
    }
}

impl BlockHash {
    /// Hash meaning "no block" in ledger links
    pub const ZERO: BlockHash = BlockHash(Hash::ZERO);

    /// Wraps a hash
    pub const fn new(hash: Hash) -> Self {
        BlockHash(hash)
    }

    /// Returns true for `BlockHash::ZERO`
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Raw bytes of the hash
    pub fn to_bytes(&self) -> &[u8; HASH_SIZE_BYTES] {
        self.0.to_bytes()
    }
}

impl std::fmt::Display for BlockHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", BLOCKHASH_PREFIX, self.0.to_bs58_check())
    }
}

impl std::fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for BlockHash {
    type Err = ModelsError;
    /// ## Example
    /// ```rust
    /// # use lattice_hash::Hash;
    /// # use std::str::FromStr;
    /// # use lattice_models::BlockHash;
    /// let hash = BlockHash::new(Hash::compute_from(b"test"));
    /// let parsed = BlockHash::from_str(&hash.to_string()).unwrap();
    /// assert_eq!(hash, parsed);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match chars.next() {
            Some(prefix) if prefix == BLOCKHASH_PREFIX => {
                Ok(BlockHash(Hash::from_bs58_check(chars.as_str())?))
            }
            _ => Err(ModelsError::WrongPrefix(
                BLOCKHASH_PREFIX.to_string(),
                s.chars().next().map(String::from).unwrap_or_default(),
            )),
        }
    }
}
