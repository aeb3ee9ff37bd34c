// Copyright (c) 2022 MASSA LABS <info@massa.net>
//! Unsigned time management
#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Time interval in milliseconds.
/// Serialized as a plain integer so settings files can write `block_cooldown = 5000`.
#[derive(
    Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct LatticeTime(u64);

impl LatticeTime {
    /// Conversion from `u64`, representing milliseconds.
    pub const fn from_millis(value: u64) -> Self {
        LatticeTime(value)
    }

    /// Conversion to `std::time::Duration`.
    /// ```
    /// # use std::time::Duration;
    /// # use lattice_time::*;
    /// let time : LatticeTime = LatticeTime::from_millis(42);
    /// assert_eq!(time.to_duration(), Duration::from_millis(42));
    /// ```
    pub fn to_duration(&self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// true for the zero interval
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_is_plain_millis() {
        let time = LatticeTime::from_millis(5000);
        assert_eq!(serde_json::to_string(&time).unwrap(), "5000");
        let parsed: LatticeTime = serde_json::from_str("100").unwrap();
        assert_eq!(parsed.to_duration(), Duration::from_millis(100));
    }

    #[test]
    fn test_zero_interval() {
        assert!(LatticeTime::default().is_zero());
        assert!(LatticeTime::from_millis(0).is_zero());
        assert!(!LatticeTime::from_millis(1).is_zero());
        assert!(serde_json::from_str::<LatticeTime>("-1").is_err());
    }
}
