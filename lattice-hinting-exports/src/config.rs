// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file defines the hinting settings
//!
//! * `HintingSettings`: read from the user settings file, every field has a default
//! * `HintingConfig`: validated settings handed to the worker

use crate::error::{HintingError, HintingResult};
use lattice_models::config::{
    NetworkKind, DEV_HINTING_CHECK_INTERVAL, HINTING_BLOCK_COOLDOWN, HINTING_CHECK_INTERVAL,
    HINTING_MAX_COOLDOWN_ENTRIES, HINTING_MAX_DEPENDENCY_WALK, HINTING_THRESHOLD_PERCENT,
};
use lattice_time::LatticeTime;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// How the minimum tally of the normal tier is computed
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TallyThresholdPolicy {
    /// any vote cache entry qualifies (threshold is zero)
    #[default]
    Permissive,
    /// `hinting_threshold_percent` of the trended online weight
    TrendedWeightPercent,
}

/// User facing hinting settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HintingSettings {
    /// interval between two vote cache checks when idle
    #[serde(alias = "vote_cache_check_interval_ms")]
    pub vote_cache_check_interval: LatticeTime,
    /// minimum delay between two activation attempts for the same block
    #[serde(alias = "cooldown_duration_ms")]
    pub block_cooldown: LatticeTime,
    /// percentage of the trended online weight used by `TrendedWeightPercent`
    pub hinting_threshold_percent: u8,
    /// normal tier tally threshold policy
    pub threshold_policy: TallyThresholdPolicy,
    /// maximum number of blocks visited by one dependency walk
    pub max_dependency_walk: usize,
    /// maximum number of hashes in the cooldown table
    pub max_cooldown_entries: usize,
}

impl HintingSettings {
    /// Default settings for a network. Development networks check the vote cache more often.
    pub fn for_network(network: NetworkKind) -> Self {
        HintingSettings {
            vote_cache_check_interval: if network.is_dev_network() {
                DEV_HINTING_CHECK_INTERVAL
            } else {
                HINTING_CHECK_INTERVAL
            },
            block_cooldown: HINTING_BLOCK_COOLDOWN,
            hinting_threshold_percent: HINTING_THRESHOLD_PERCENT,
            threshold_policy: TallyThresholdPolicy::default(),
            max_dependency_walk: HINTING_MAX_DEPENDENCY_WALK,
            max_cooldown_entries: HINTING_MAX_COOLDOWN_ENTRIES,
        }
    }
}

impl Default for HintingSettings {
    fn default() -> Self {
        HintingSettings::for_network(NetworkKind::default())
    }
}

/// Hinting worker configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintingConfig {
    /// interval between two vote cache checks when idle
    pub vote_cache_check_interval: LatticeTime,
    /// minimum delay between two activation attempts for the same block
    pub block_cooldown: LatticeTime,
    /// percentage of the trended online weight used by `TrendedWeightPercent`
    pub hinting_threshold_percent: u8,
    /// normal tier tally threshold policy
    pub threshold_policy: TallyThresholdPolicy,
    /// maximum number of blocks visited by one dependency walk
    pub max_dependency_walk: usize,
    /// maximum number of hashes in the cooldown table
    pub max_cooldown_entries: usize,
}

impl TryFrom<HintingSettings> for HintingConfig {
    type Error = HintingError;

    fn try_from(settings: HintingSettings) -> HintingResult<Self> {
        if settings.vote_cache_check_interval.is_zero() {
            return Err(HintingError::InvalidConfig(
                "vote_cache_check_interval must be positive".into(),
            ));
        }
        if settings.block_cooldown.is_zero() {
            return Err(HintingError::InvalidConfig(
                "block_cooldown must be positive".into(),
            ));
        }
        if settings.hinting_threshold_percent > 100 {
            return Err(HintingError::InvalidConfig(format!(
                "hinting_threshold_percent must be at most 100, got {}",
                settings.hinting_threshold_percent
            )));
        }
        if settings.max_dependency_walk == 0 || settings.max_cooldown_entries == 0 {
            return Err(HintingError::InvalidConfig(
                "max_dependency_walk and max_cooldown_entries must be positive".into(),
            ));
        }
        Ok(HintingConfig {
            vote_cache_check_interval: settings.vote_cache_check_interval,
            block_cooldown: settings.block_cooldown,
            hinting_threshold_percent: settings.hinting_threshold_percent,
            threshold_policy: settings.threshold_policy,
            max_dependency_walk: settings.max_dependency_walk,
            max_cooldown_entries: settings.max_cooldown_entries,
        })
    }
}

impl From<&HintingConfig> for HintingSettings {
    fn from(cfg: &HintingConfig) -> Self {
        HintingSettings {
            vote_cache_check_interval: cfg.vote_cache_check_interval,
            block_cooldown: cfg.block_cooldown,
            hinting_threshold_percent: cfg.hinting_threshold_percent,
            threshold_policy: cfg.threshold_policy,
            max_dependency_walk: cfg.max_dependency_walk,
            max_cooldown_entries: cfg.max_cooldown_entries,
        }
    }
}
