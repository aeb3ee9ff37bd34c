// Copyright (c) 2022 MASSA LABS <info@massa.net>

use std::sync::Arc;
use std::thread;
use std::time::Instant;

use lattice_hinting_exports::{
    HintingChannels, HintingConfig, HintingController, HintingManager,
};
use lattice_metrics::{StatDetail, StatType};
use lattice_models::ElectionBehavior;
use parking_lot::{Condvar, Mutex};
use tracing::{debug, info};

use crate::activation::Activator;
use crate::controller::{HintingControllerImpl, HintingInputData, HintingManagerImpl};
use crate::cooldown::CooldownTracker;
use crate::tally::TallyPolicy;

/// Structure gathering all elements needed by the hinting thread
pub(crate) struct HintingThread {
    config: HintingConfig,
    input_data: Arc<(Condvar, Mutex<HintingInputData>)>,
    channels: HintingChannels,
    tally_policy: TallyPolicy,
    cooldown: CooldownTracker,
}

impl HintingThread {
    pub(crate) fn new(
        config: HintingConfig,
        input_data: Arc<(Condvar, Mutex<HintingInputData>)>,
        channels: HintingChannels,
    ) -> Self {
        let tally_policy = TallyPolicy::new(&config);
        let cooldown = CooldownTracker::new(
            config.block_cooldown.to_duration(),
            config.max_cooldown_entries,
        );
        HintingThread {
            config,
            input_data,
            channels,
            tally_policy,
            cooldown,
        }
    }

    /// There is room for a new hinted election
    fn predicate(&self) -> bool {
        self.channels
            .active_elections
            .vacancy(ElectionBehavior::Hinted)
            > 0
    }

    /// Waits for the check interval, or less if woken up.
    ///
    /// # Returns
    /// true if the worker must stop
    fn wait_loop_event(&self) -> bool {
        let mut input_data_lock = self.input_data.1.lock();
        if input_data_lock.stop {
            return true;
        }
        if !input_data_lock.wakeup {
            self.input_data.0.wait_for(
                &mut input_data_lock,
                self.config.vote_cache_check_interval.to_duration(),
            );
        }
        input_data_lock.wakeup = false;
        input_data_lock.stop
    }

    /// Main loop of the worker
    pub fn main_loop(&mut self) {
        loop {
            self.channels.stats.inc(StatType::Hinting, StatDetail::Loop);
            if self.wait_loop_event() {
                break;
            }
            // the state lock is released here: ledger reads never block `stop`
            if self.predicate() {
                self.run_iterative();
            }
        }
    }

    /// One pass over the final tier then the normal tier of the vote cache
    pub(crate) fn run_iterative(&mut self) {
        let online_reps = self.channels.online_reps.as_ref();
        let minimum_tally = self.tally_policy.tally_threshold(online_reps);
        let minimum_final_tally = self.tally_policy.final_tally_threshold(online_reps);

        let tx = self.channels.ledger.tx_begin_read();
        let activator = Activator::new(&*tx, &self.channels, self.config.max_dependency_walk);

        // above quorum: can be confirmed right away, dependencies are not checked
        for entry in self.channels.vote_cache.top_final(minimum_final_tally) {
            if !self.predicate() {
                break;
            }
            if self.cooldown.check_and_claim(entry.hash, Instant::now()) {
                continue;
            }
            self.channels
                .stats
                .inc(StatType::Hinting, StatDetail::ActivateFinal);
            activator.activate(entry.hash);
        }

        // highest observed tallies, possibly not final
        for entry in self.channels.vote_cache.top(minimum_tally) {
            if !self.predicate() {
                break;
            }
            if self.cooldown.check_and_claim(entry.hash, Instant::now()) {
                continue;
            }
            self.channels
                .stats
                .inc(StatType::Hinting, StatDetail::ActivateNormal);
            activator.activate_with_dependents(entry.hash);
        }

        debug!(
            "hinting iteration done: minimum_tally={} minimum_final_tally={} cooldowns={}",
            minimum_tally,
            minimum_final_tally,
            self.cooldown.len()
        );
    }
}

/// Launches the election hinting worker thread and returns its manager and controller
///
/// # Arguments
/// * `config`: hinting configuration
/// * `channels`: services the worker reads from and writes to
pub fn start_hinting_worker(
    config: HintingConfig,
    channels: HintingChannels,
) -> (Box<dyn HintingManager>, Box<dyn HintingController>) {
    let input_data = Arc::new((Condvar::new(), Mutex::new(HintingInputData::default())));
    let input_data_clone = input_data.clone();

    let controller = HintingControllerImpl {
        input_data: input_data.clone(),
    };

    let thread_builder = thread::Builder::new().name("election_hinting".into());
    let thread_handle = thread_builder
        .spawn(move || {
            HintingThread::new(config, input_data_clone, channels).main_loop();
        })
        .expect("failed to spawn thread : election_hinting");
    info!("Election hinting worker started");

    let manager = HintingManagerImpl {
        input_data,
        thread_handle: Some(thread_handle),
    };

    (Box::new(manager), Box::new(controller))
}
