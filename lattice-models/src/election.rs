// Copyright (c) 2022 MASSA LABS <info@massa.net>

use serde::{Deserialize, Serialize};

/// Category of an active election. Each category has its own admission capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElectionBehavior {
    /// started by the local block processing pipeline
    Normal,
    /// started because the vote cache observed network votes for a block
    Hinted,
}

impl std::fmt::Display for ElectionBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElectionBehavior::Normal => write!(f, "normal"),
            ElectionBehavior::Hinted => write!(f, "hinted"),
        }
    }
}
