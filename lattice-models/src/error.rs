// Copyright (c) 2022 MASSA LABS <info@massa.net>

use displaydoc::Display;
use thiserror::Error;

/// models result
pub type ModelsResult<T, E = ModelsError> = core::result::Result<T, E>;

/// models error
#[non_exhaustive]
#[derive(Display, Error, Debug)]
pub enum ModelsError {
    /// hash error: {0}
    HashError(#[from] lattice_hash::HashError),
    /// Wrong prefix for hash: expected {0}, got {1}
    WrongPrefix(String, String),
    /// amount parse error: {0}
    AmountParseError(String),
    /// settings error: {0}
    SettingsError(#[from] config::ConfigError),
}
