// crates/geocp-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading, joining or writing GeoJSON documents.
///
/// Every variant is fatal for a run: the pipeline stops at the first error
/// and no output file is produced.
#[derive(Debug, Error)]
pub enum GeoCpError {
    /// An input file could not be opened.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON on read, or a serialization failure on write.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required key is absent. `index` is the position of the offending
    /// feature, or `None` when the key belongs to the document itself.
    #[error("missing field `{field}`{}", feature_suffix(.index))]
    MissingField { index: Option<usize>, field: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, GeoCpError>;

fn feature_suffix(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" in feature #{i}"),
        None => String::new(),
    }
}

impl GeoCpError {
    pub(crate) fn missing(index: Option<usize>, field: &str) -> Self {
        GeoCpError::MissingField {
            index,
            field: field.to_owned(),
        }
    }
}
