// Copyright (c) 2022 MASSA LABS <info@massa.net>

use lattice_hinting_exports::{HintingConfig, OnlineReps, TallyThresholdPolicy};
use lattice_models::Amount;

/// Minimum vote tallies a vote cache entry needs to be considered for hinting.
/// Both thresholds follow the live online weight and are recomputed on every call.
pub(crate) struct TallyPolicy {
    policy: TallyThresholdPolicy,
    percent: u8,
}

impl TallyPolicy {
    pub fn new(config: &HintingConfig) -> Self {
        TallyPolicy {
            policy: config.threshold_policy,
            percent: config.hinting_threshold_percent,
        }
    }

    /// Normal tier threshold
    pub fn tally_threshold(&self, online_reps: &dyn OnlineReps) -> Amount {
        match self.policy {
            TallyThresholdPolicy::Permissive => Amount::zero(),
            TallyThresholdPolicy::TrendedWeightPercent => {
                online_reps.trended().percent(self.percent)
            }
        }
    }

    /// Final tier threshold: the quorum delta
    pub fn final_tally_threshold(&self, online_reps: &dyn OnlineReps) -> Amount {
        online_reps.delta()
    }
}
