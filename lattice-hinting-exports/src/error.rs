// Copyright (c) 2022 MASSA LABS <info@massa.net>

use displaydoc::Display;
use thiserror::Error;

/// hinting result
pub type HintingResult<T, E = HintingError> = core::result::Result<T, E>;

/// hinting error
#[non_exhaustive]
#[derive(Display, Error, Debug, Clone, PartialEq, Eq)]
pub enum HintingError {
    /// invalid hinting configuration: {0}
    InvalidConfig(String),
}
