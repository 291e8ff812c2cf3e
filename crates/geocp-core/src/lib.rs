// crates/geocp-core/src/lib.rs

//! # geocp-core
//!
//! Annotates a locality GeoJSON dataset with postal codes taken from a
//! province-level dataset.
//!
//! The work is one linear batch: read the source document, build a
//! [`PostalIndex`] keyed by normalized locality name, read the target
//! document, [`annotate`] every feature, write the result.
//!
//! ```rust,no_run
//! use geocp_core::{pipeline, JoinConfig};
//!
//! let report = pipeline::run(&JoinConfig::default())?;
//! println!("{} localities indexed", report.unique_localities);
//! # Ok::<(), geocp_core::GeoCpError>(())
//! ```

pub mod common;
pub mod config;
pub mod error;
pub mod feature;
pub mod index;
pub mod join;
pub mod loader;
pub mod pipeline;
pub mod text;

// Re-exports
pub use crate::common::JoinReport;
pub use crate::config::{FieldNames, JoinConfig};
pub use crate::error::{GeoCpError, Result};
pub use crate::index::PostalIndex;
pub use crate::join::{annotate, JoinStats};
pub use crate::text::{fold_key, normalize_key, KeyMode};
