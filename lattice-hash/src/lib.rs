// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Content hashes used to identify blocks.
#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

pub use error::HashError;
pub use hash::Hash;
pub use settings::HASH_SIZE_BYTES;

mod error;
mod hash;
mod settings;
