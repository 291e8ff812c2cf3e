// crates/geocp-core/src/loader/writer.rs
use super::common_io::CompressionMode;
use crate::error::Result;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

/// Write `doc` as pretty-printed UTF-8 JSON (2-space indent, non-ASCII kept
/// literally), replacing whatever is at `path`. `.gz` paths are gzipped.
///
/// The document is serialized before the file is touched, so a failure at
/// that stage leaves any previous file in place.
pub fn write_document(path: impl AsRef<Path>, doc: &Value) -> Result<()> {
    let path = path.as_ref();
    let compression = CompressionMode::for_path(path).ensure_supported()?;
    let bytes = serde_json::to_vec_pretty(doc)?;

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    match compression {
        #[cfg(feature = "compact")]
        CompressionMode::Gzip => {
            let mut encoder = GzEncoder::new(writer, Compression::default());
            encoder.write_all(&bytes)?;
            encoder.finish()?.flush()?;
        }
        _ => {
            writer.write_all(&bytes)?;
            writer.flush()?;
        }
    }
    Ok(())
}
