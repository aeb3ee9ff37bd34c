// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Activation of vote cache candidates.
//!
//! Final tier candidates are activated directly. Normal tier candidates first
//! have their unconfirmed dependencies walked, and only blocks whose
//! dependencies are all confirmed are inserted.

use lattice_hinting_exports::{HintingChannels, LedgerReadTransaction};
use lattice_logging::lattice_trace;
use lattice_metrics::{StatDetail, StatType};
use lattice_models::prehash::PreHashSet;
use lattice_models::{BlockHash, ElectionBehavior};

/// Activates blocks within one ledger read transaction
pub(crate) struct Activator<'a> {
    tx: &'a dyn LedgerReadTransaction,
    channels: &'a HintingChannels,
    max_dependency_walk: usize,
}

impl<'a> Activator<'a> {
    pub fn new(
        tx: &'a dyn LedgerReadTransaction,
        channels: &'a HintingChannels,
        max_dependency_walk: usize,
    ) -> Self {
        Activator {
            tx,
            channels,
            max_dependency_walk,
        }
    }

    fn count(&self, detail: StatDetail) {
        self.channels.stats.inc(StatType::Hinting, detail);
    }

    /// Starts a hinted election for `hash` without looking at its dependencies
    pub fn activate(&self, hash: BlockHash) {
        let Some(block) = self.tx.block(&hash) else {
            self.missing_block(hash);
            return;
        };
        if self.tx.block_confirmed_or_being_confirmed(&hash) {
            self.count(StatDetail::AlreadyConfirmed);
            return;
        }
        let result = self
            .channels
            .active_elections
            .insert(block, ElectionBehavior::Hinted);
        self.record_insert(hash, result.inserted);
    }

    /// Starts a hinted election for `hash` if its dependencies are confirmed.
    /// Otherwise walks the unconfirmed dependencies, depth first, and starts
    /// elections for the deepest ones that can be confirmed.
    pub fn activate_with_dependents(&self, hash: BlockHash) {
        let mut stack = vec![hash];
        let mut visited = PreHashSet::default();
        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            if visited.len() > self.max_dependency_walk {
                self.count(StatDetail::DependencyWalkTruncated);
                lattice_trace!("hinting.walk_truncated", {
                    "hash": hash.to_string(),
                    "pending": stack.len() + 1
                });
                return;
            }

            let Some(block) = self.tx.block(&current) else {
                self.missing_block(current);
                continue;
            };
            if self.tx.block_confirmed_or_being_confirmed(&current) {
                self.count(StatDetail::AlreadyConfirmed);
                continue;
            }
            if !self.tx.dependents_confirmed(&block) {
                self.count(StatDetail::DependentUnconfirmed);
                stack.extend(
                    self.tx
                        .dependent_blocks(&block)
                        .into_iter()
                        .filter(|dependency| !dependency.is_zero()),
                );
                continue;
            }

            // a single walk may start several elections
            if self
                .channels
                .active_elections
                .vacancy(ElectionBehavior::Hinted)
                <= 0
            {
                self.count(StatDetail::WalkVacancyExhausted);
                lattice_trace!("hinting.walk_vacancy_exhausted", {
                    "hash": hash.to_string(),
                    "blocked": current.to_string(),
                    "pending": stack.len()
                });
                return;
            }
            let result = self
                .channels
                .active_elections
                .insert(block, ElectionBehavior::Hinted);
            self.record_insert(current, result.inserted);
        }
    }

    fn missing_block(&self, hash: BlockHash) {
        self.count(StatDetail::MissingBlock);
        self.channels.bootstrapper.bootstrap_block(hash);
        lattice_trace!("hinting.missing_block", { "hash": hash.to_string() });
    }

    fn record_insert(&self, hash: BlockHash, inserted: bool) {
        self.count(if inserted {
            StatDetail::Insert
        } else {
            StatDetail::InsertFailed
        });
        lattice_trace!("hinting.insert", {
            "hash": hash.to_string(),
            "behavior": ElectionBehavior::Hinted.to_string(),
            "inserted": inserted
        });
    }
}
