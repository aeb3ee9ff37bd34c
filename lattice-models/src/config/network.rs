use serde::{Deserialize, Serialize};

/// Network the node runs on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NetworkKind {
    /// local development network, short timers
    Dev,
    /// beta network
    Beta,
    /// main network
    #[default]
    Live,
    /// test network
    Test,
}

impl NetworkKind {
    /// true on development networks
    pub fn is_dev_network(&self) -> bool {
        matches!(self, NetworkKind::Dev)
    }
}
