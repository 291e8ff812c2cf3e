// crates/geocp-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, optional gzip) for both directions.
//! Parsing is plain `serde_json` into an untyped [`Value`].

use crate::error::Result;
use serde_json::Value;
use std::path::Path;

mod common_io;
mod writer;

pub use common_io::CompressionMode;
pub use writer::write_document;

/// Read and parse a JSON document. `.gz` paths are decompressed on the fly.
pub fn read_document(path: impl AsRef<Path>) -> Result<Value> {
    let reader = common_io::open_stream(path.as_ref())?;
    Ok(serde_json::from_reader(reader)?)
}
