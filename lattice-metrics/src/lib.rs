// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Node statistics.
//!
//! `Stats` is the counter sink handed to the node services. Each service
//! increments `(type, detail)` counters and never reads them back; the
//! counters are exposed through a prometheus registry.

use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};
use strum::IntoStaticStr;
use tracing::warn;

/// Service a counter belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum StatType {
    /// election hinting scheduler
    Hinting,
}

/// What happened
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum StatDetail {
    /// one pass of a worker loop
    Loop,
    /// candidate taken from the final tally tier
    ActivateFinal,
    /// candidate taken from the normal tally tier
    ActivateNormal,
    /// election started
    Insert,
    /// election refused by the active election set
    InsertFailed,
    /// block not found in the ledger, fetch requested
    MissingBlock,
    /// block already confirmed or being confirmed
    AlreadyConfirmed,
    /// block has unconfirmed dependencies
    DependentUnconfirmed,
    /// dependency walk stopped at its size limit
    DependencyWalkTruncated,
    /// dependency walk stopped because the hinted elections were full
    WalkVacancyExhausted,
}

fn labels(stat_type: StatType, detail: StatDetail) -> [&'static str; 2] {
    [stat_type.into(), detail.into()]
}

/// Counter sink, cheap to clone: clones share the same counters
#[derive(Clone)]
pub struct Stats {
    registry: Registry,
    counters: IntCounterVec,
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

impl Stats {
    /// Creates a sink with its own registry
    pub fn new() -> Self {
        let registry = Registry::new();
        let counters = IntCounterVec::new(
            Opts::new("lattice_stats", "node statistics counters"),
            &["type", "detail"],
        )
        .expect("Failed to create counter");
        registry
            .register(Box::new(counters.clone()))
            .expect("Failed to register counter");
        Stats { registry, counters }
    }

    /// Increments a counter
    pub fn inc(&self, stat_type: StatType, detail: StatDetail) {
        self.counters
            .with_label_values(&labels(stat_type, detail))
            .inc();
    }

    /// Current value of a counter
    pub fn count(&self, stat_type: StatType, detail: StatDetail) -> u64 {
        self.counters
            .with_label_values(&labels(stat_type, detail))
            .get()
    }

    /// Renders every counter in the prometheus text format
    pub fn gather_text(&self) -> String {
        let mut buffer = Vec::new();
        if let Err(err) = TextEncoder::new().encode(&self.registry.gather(), &mut buffer) {
            warn!("could not encode statistics: {}", err);
            return String::new();
        }
        String::from_utf8(buffer).unwrap_or_default()
    }
}
