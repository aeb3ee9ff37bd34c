// Copyright (c) 2022 MASSA LABS <info@massa.net>

use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasherDefault, Hasher};
use std::marker::PhantomData;

/// A trait indicating that its carrier is already a hash with at least 64 bits
/// and doesn't need to be re-hashed for hash-table purposes
pub trait PreHashed {}

/// A `Hasher` for `PreHashed` keys that is faster because it avoids re-hashing hashes but simply truncates them.
/// Note: when truncating, it takes the last 8 bytes of the key instead of the first 8 bytes.
/// This is done to circumvent biases induced by first-byte manipulations in addresses related to the thread assignment process
pub struct HashMapper<T: PreHashed> {
    source: u64,
    _phantom: PhantomData<T>,
}

/// Default implementation for `HashMapper` (zero hash)
impl<T: PreHashed> Default for HashMapper<T> {
    fn default() -> Self {
        HashMapper {
            source: 0,
            _phantom: Default::default(),
        }
    }
}

impl<T: PreHashed> Hasher for HashMapper<T> {
    /// write the bytes of a `PreHashed` key into the `HashMapper`
    /// Panics if `bytes.len()` is strictly lower than 8
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        // assumes bytes.len() is at least 8, otherwise panics
        self.source = u64::from_ne_bytes(bytes[bytes.len() - 8..].try_into().unwrap());
    }

    /// Returns the result of the Hasher
    #[inline]
    fn finish(&self) -> u64 {
        self.source
    }
}

/// `BuildHasherDefault` specialization for `HashMapper`
pub type BuildHashMapper<T> = BuildHasherDefault<HashMapper<T>>;

/// `HashMap` specialization for `PreHashed` keys
/// This hashmap is about 2x faster than the default `HashMap`
pub type PreHashMap<K, V> = HashMap<K, V, BuildHashMapper<K>>;

/// `HashSet` specialization for `PreHashed` keys
/// This hashset is about 2x faster than the default `HashSet`
pub type PreHashSet<T> = HashSet<T, BuildHashMapper<T>>;
