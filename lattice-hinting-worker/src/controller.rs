// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Controller and manager of the hinting worker.
//! See `lattice-hinting-exports/controller_traits.rs` for functional details.

use std::sync::Arc;
use std::thread::JoinHandle;

use lattice_hinting_exports::{HintingController, HintingManager};
use parking_lot::{Condvar, Mutex};
use tracing::info;

/// Shared state between the worker thread and its handles
#[derive(Debug, Default)]
pub(crate) struct HintingInputData {
    /// the worker must exit
    pub stop: bool,
    /// a wake-up was requested since the worker last waited
    pub wakeup: bool,
}

/// Cloneable handle used to wake up the hinting worker
#[derive(Clone)]
pub struct HintingControllerImpl {
    pub(crate) input_data: Arc<(Condvar, Mutex<HintingInputData>)>,
}

impl HintingController for HintingControllerImpl {
    fn notify(&self) {
        let mut input_data = self.input_data.1.lock();
        input_data.wakeup = true;
        self.input_data.0.notify_all();
    }

    fn clone_box(&self) -> Box<dyn HintingController> {
        Box::new(self.clone())
    }
}

/// Hinting manager
/// Allows stopping the hinting worker
pub struct HintingManagerImpl {
    pub(crate) input_data: Arc<(Condvar, Mutex<HintingInputData>)>,
    /// handle used to join the worker thread
    pub(crate) thread_handle: Option<JoinHandle<()>>,
}

impl HintingManager for HintingManagerImpl {
    /// stops the worker
    fn stop(&mut self) {
        info!("Stopping election hinting worker...");
        {
            let mut input_data = self.input_data.1.lock();
            input_data.stop = true;
            self.input_data.0.notify_all();
        }
        if let Some(join_handle) = self.thread_handle.take() {
            join_handle
                .join()
                .expect("election hinting thread panicked");
        }
        info!("Election hinting worker stopped");
    }
}

impl Drop for HintingManagerImpl {
    fn drop(&mut self) {
        // the worker must be stopped before its manager goes away
        if !std::thread::panicking() {
            debug_assert!(
                self.thread_handle.is_none(),
                "hinting manager dropped while its worker is running"
            );
        }
    }
}
