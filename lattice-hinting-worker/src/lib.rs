// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Election hinting worker.
//!
//! Starts hinted elections for blocks the vote cache saw network votes for.
//! See `lattice-hinting-exports` for the configuration and the interfaces of
//! the services the worker talks to.
#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod activation;
mod controller;
mod cooldown;
mod tally;
mod worker;

pub use worker::start_hinting_worker;

#[cfg(test)]
mod tests;
