//! Node configuration defaults and settings loading
//!
//! # Introduction
//!
//! This module defines the default values used through the project in all
//! *Configuration* objects.
//!
//! The name "constant" is used for hard-coded default values. When you need one
//! of these values in a worker, use the `cfg` parameter handed to the worker
//! instead. The only place where it's safe to use a constant directly is in
//! files named `settings.rs` or `config.rs`.

pub mod constants;
pub use constants::*;

mod network;
pub use network::NetworkKind;

// Export tool to read user setting file
mod lattice_settings;
pub use lattice_settings::build_lattice_settings;
