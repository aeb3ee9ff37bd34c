// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This module exports generic traits representing interfaces for interacting
//! with the hinting worker.

/// interface that communicates with the hinting worker thread
pub trait HintingController: Send + Sync {
    /// Notify the worker that the hinted election vacancy may have changed.
    /// Only shortens the delay before the next check, the worker polls anyway.
    fn notify(&self);

    /// Returns a boxed clone of self.
    /// Useful to allow cloning `Box<dyn HintingController>`.
    fn clone_box(&self) -> Box<dyn HintingController>;
}

/// Allow cloning `Box<dyn HintingController>`
/// Uses `HintingController::clone_box` internally
impl Clone for Box<dyn HintingController> {
    fn clone(&self) -> Box<dyn HintingController> {
        self.clone_box()
    }
}

/// Hinting manager used to stop the hinting thread
pub trait HintingManager {
    /// Stop the hinting thread and wait for it to exit.
    /// Note that we do not take self by value to consume it
    /// because it is not allowed to move out of `Box<dyn HintingManager>`
    /// This will improve if the `unsized_fn_params` feature stabilizes enough to be safely usable.
    fn stop(&mut self);
}
