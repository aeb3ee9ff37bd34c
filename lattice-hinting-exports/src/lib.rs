// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Election hinting: configuration, collaborator interfaces and controller traits.
//!
//! The hinting worker watches the vote cache for blocks that gathered network
//! votes without a local election and starts hinted elections for them.
//! Everything the worker talks to is described here as a trait so that the
//! worker can be driven by the real node services or by test doubles.
#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod channels;
mod config;
mod controller_traits;
mod error;

pub use channels::{
    ActiveElections, Bootstrapper, HintingChannels, InsertResult, Ledger, LedgerReadTransaction,
    OnlineReps, TallyEntry, VoteCache,
};
#[cfg(any(test, feature = "test-exports"))]
pub use channels::{MockActiveElections, MockBootstrapper, MockOnlineReps, MockVoteCache};
pub use config::{HintingConfig, HintingSettings, TallyThresholdPolicy};
pub use controller_traits::{HintingController, HintingManager};
pub use error::{HintingError, HintingResult};

/// Test utils
#[cfg(any(test, feature = "test-exports"))]
pub mod test_exports;
