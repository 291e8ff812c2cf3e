// crates/geocp-core/src/loader/common_io.rs
use crate::error::{GeoCpError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// How a file on disk is encoded, decided by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    pub fn for_path(path: &Path) -> Self {
        let is_gz = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
        if is_gz {
            CompressionMode::Gzip
        } else {
            CompressionMode::None
        }
    }

    /// Errors out when gzip is needed but the `compact` feature is off.
    pub fn ensure_supported(self) -> Result<Self> {
        #[cfg(not(feature = "compact"))]
        {
            if self == CompressionMode::Gzip {
                return Err(GeoCpError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        Ok(self)
    }
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder for `.gz` paths.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let compression = CompressionMode::for_path(path).ensure_supported()?;
    let file = File::open(path).map_err(|e| {
        GeoCpError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    match compression {
        #[cfg(feature = "compact")]
        CompressionMode::Gzip => Ok(Box::new(GzDecoder::new(reader))),
        _ => Ok(Box::new(reader)),
    }
}
