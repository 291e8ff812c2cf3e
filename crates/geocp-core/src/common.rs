// crates/geocp-core/src/common.rs
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Summary of a completed run.
///
/// Returned by [`crate::pipeline::run`] once the output file has been
/// written; a failed run never produces one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinReport {
    pub output_path: PathBuf,
    /// Distinct normalized locality names in the index.
    pub unique_localities: usize,
    pub source_features: usize,
    /// Source features ignored because their locality was empty.
    pub source_skipped: usize,
    pub target_features: usize,
    pub matched: usize,
    pub unmatched: usize,
}

impl JoinReport {
    /// File name of the output, for console messages.
    pub fn output_file_name(&self) -> String {
        self.output_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.output_path.display().to_string())
    }
}
