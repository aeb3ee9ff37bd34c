//! DEFAULT VALUES USED TO INITIALIZE DIVERS CONFIGURATIONS STRUCTURES
//!
//! Each crate may contain a `settings.rs` or a `config.rs`; the `Default`
//! implementation of each object takes its default values from the following
//! file.
use lattice_time::LatticeTime;

/// Interval at which the hinting scheduler re-checks the vote cache when idle
pub const HINTING_CHECK_INTERVAL: LatticeTime = LatticeTime::from_millis(1000);
/// Same as `HINTING_CHECK_INTERVAL`, on development networks
pub const DEV_HINTING_CHECK_INTERVAL: LatticeTime = LatticeTime::from_millis(100);
/// Minimum delay between two activation attempts for the same hinted block
pub const HINTING_BLOCK_COOLDOWN: LatticeTime = LatticeTime::from_millis(5000);
/// Percentage of the trended online weight a normal-tier tally must reach
pub const HINTING_THRESHOLD_PERCENT: u8 = 10;
/// Maximum number of blocks visited by one dependency walk
pub const HINTING_MAX_DEPENDENCY_WALK: usize = 1024;
/// Maximum number of hashes tracked by the hinting cooldown table
pub const HINTING_MAX_COOLDOWN_ENTRIES: usize = 65536;
