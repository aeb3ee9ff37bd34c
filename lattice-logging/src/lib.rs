// Copyright (c) 2021 MASSA LABS <info@massa.net>

//! Structured trace events.

// re-exported so that the crate dependencies stay used
#[doc(hidden)]
pub use serde_json as __serde_json;
#[doc(hidden)]
pub use tracing as __tracing;

/// Emits a `trace` level event named `$evt` whose fields are rendered as JSON.
///
/// ```
/// lattice_logging::lattice_trace!("hinting.insert", { "hash": "B1", "inserted": true });
/// ```
#[macro_export]
macro_rules! lattice_trace {
    ($evt:expr, $params:tt) => {
        $crate::__tracing::trace!(
            "lattice_trace:{}:{}",
            $evt,
            $crate::__serde_json::json!($params)
        );
    };
}
