//! ## Crate layout
//! - `core`: values, predicates, sort specs, cursors, the pagination engine,
//!   page shapes, configuration and telemetry sinks.
//!
//! The `prelude` module is the core prelude plus `async_trait`, which every
//! data-source implementor needs.

pub use cursorpage_core as core;

/// re-exports
///
/// data-source implementations need these; re-exporting them keeps downstream
/// Cargo.toml files to a single dependency
pub mod __reexports {
    pub use async_trait;
    pub use serde;
}

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use crate::core::{Error, db};

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::prelude::*;
    pub use async_trait::async_trait;
}
