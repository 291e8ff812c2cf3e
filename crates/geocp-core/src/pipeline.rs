// crates/geocp-core/src/pipeline.rs

//! The batch run: load source -> build index -> load target -> join -> write.

use crate::common::JoinReport;
use crate::config::JoinConfig;
use crate::error::Result;
use crate::index::PostalIndex;
use crate::join::annotate;
use crate::loader::{read_document, write_document};
use log::info;

/// Load the source dataset and build its postal-code index.
pub fn build_index(config: &JoinConfig) -> Result<PostalIndex> {
    info!("Reading source dataset {}", config.source_path.display());
    let source = read_document(&config.source_path)?;

    let index = PostalIndex::from_document(&source, &config.fields, config.key_mode())?;
    info!(
        "Indexed {} localities from {} source features ({} skipped)",
        index.len(),
        index.scanned(),
        index.skipped()
    );
    Ok(index)
}

/// Run the whole join and write the annotated target document.
///
/// Nothing is written unless every step before the write succeeded.
pub fn run(config: &JoinConfig) -> Result<JoinReport> {
    let index = build_index(config)?;

    info!("Reading target dataset {}", config.target_path.display());
    let mut target = read_document(&config.target_path)?;

    let stats = annotate(&mut target, &index, &config.fields)?;
    info!(
        "Annotated {} features ({} matched, {} unmatched)",
        stats.features, stats.matched, stats.unmatched
    );

    write_document(&config.output_path, &target)?;
    info!("Wrote {}", config.output_path.display());

    Ok(JoinReport {
        output_path: config.output_path.clone(),
        unique_localities: index.len(),
        source_features: index.scanned(),
        source_skipped: index.skipped(),
        target_features: stats.features,
        matched: stats.matched,
        unmatched: stats.unmatched,
    })
}
