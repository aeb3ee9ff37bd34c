// Copyright (c) 2022 MASSA LABS <info@massa.net>

use lattice_models::config::{
    HINTING_BLOCK_COOLDOWN, HINTING_MAX_COOLDOWN_ENTRIES, HINTING_MAX_DEPENDENCY_WALK,
    HINTING_THRESHOLD_PERCENT,
};
use lattice_time::LatticeTime;

use crate::{HintingConfig, TallyThresholdPolicy};

impl Default for HintingConfig {
    fn default() -> Self {
        Self {
            vote_cache_check_interval: LatticeTime::from_millis(50),
            block_cooldown: HINTING_BLOCK_COOLDOWN,
            hinting_threshold_percent: HINTING_THRESHOLD_PERCENT,
            threshold_policy: TallyThresholdPolicy::Permissive,
            max_dependency_walk: HINTING_MAX_DEPENDENCY_WALK,
            max_cooldown_entries: HINTING_MAX_COOLDOWN_ENTRIES,
        }
    }
}
