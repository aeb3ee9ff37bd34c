// Copyright (c) 2022 MASSA LABS <info@massa.net>

use crate::ModelsError;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

/// A voting weight, in raw units, with safe operations.
/// Tallies, quorum deltas and online weights are all expressed as `Amount`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Ord, PartialOrd, Default, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub struct Amount(u128);

impl Amount {
    /// Create a zero Amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Obtains the underlying raw `u128` representation
    pub const fn to_raw(&self) -> u128 {
        self.0
    }

    /// constructs an `Amount` from the underlying raw `u128` representation
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// safely multiply self with a `u64`, saturating the result on overflow
    /// ```
    /// # use lattice_models::Amount;
    /// let amount = Amount::from_raw(42);
    /// assert_eq!(amount.saturating_mul_u64(7), Amount::from_raw(294));
    /// assert_eq!(Amount::from_raw(u128::MAX).saturating_mul_u64(2), Amount::from_raw(u128::MAX));
    /// ```
    #[must_use]
    pub fn saturating_mul_u64(self, factor: u64) -> Self {
        Amount(self.0.saturating_mul(factor as u128))
    }

    /// Percentage of self, computed as `(self / 100) * percent` so that it never overflows
    /// ```
    /// # use lattice_models::Amount;
    /// assert_eq!(Amount::from_raw(1000).percent(10), Amount::from_raw(100));
    /// assert_eq!(Amount::from_raw(u128::MAX).percent(100).is_zero(), false);
    /// ```
    #[must_use]
    pub fn percent(self, percent: u8) -> Self {
        Amount(self.0 / 100).saturating_mul_u64(percent as u64)
    }
}

/// display an Amount as its raw integer
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// build an Amount from its raw integer form
impl FromStr for Amount {
    type Err = ModelsError;

    fn from_str(str_amount: &str) -> Result<Self, Self::Err> {
        u128::from_str(str_amount.trim())
            .map(Amount)
            .map_err(|err| ModelsError::AmountParseError(format!("{}: {}", str_amount, err)))
    }
}
