// crates/geocp-core/src/config.rs

//! Run configuration.
//!
//! Defaults reproduce the fixed setup of the original batch job: file names
//! relative to the working directory and the Spanish property names of the
//! Argentine datasets.

use crate::text::KeyMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_SOURCE_FILE: &str = "Provincias_Unificadas_CP_Completo_Final.geojson";
pub const DEFAULT_TARGET_FILE: &str = "Localidades_Poly_2022_WGS84.geojson.json";
pub const DEFAULT_OUTPUT_FILE: &str = "Localidades_Poly_2022_WGS84_con_CP.geojson.json";

/// Written when a target locality has no match in the index.
pub const UNKNOWN_POSTAL_CODE: &str = "Desconocido";

/// Property names read from and written to the two datasets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldNames {
    /// Locality name in the source (province) dataset.
    pub source_locality: String,
    /// Postal code(s) in the source dataset, possibly comma-separated.
    pub source_postal_code: String,
    /// Locality name in the target dataset. Required on every feature.
    pub target_locality: String,
    /// Property added to every target feature.
    pub output: String,
    pub sentinel: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            source_locality: "Localidad".into(),
            source_postal_code: "CP".into(),
            target_locality: "LOCALIDAD".into(),
            output: "codigo_postal".into(),
            sentinel: UNKNOWN_POSTAL_CODE.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinConfig {
    pub source_path: PathBuf,
    pub target_path: PathBuf,
    pub output_path: PathBuf,
    pub fields: FieldNames,
    /// Match `"José"` with `"Jose"`. Off by default.
    pub fold_accents: bool,
}

impl Default for JoinConfig {
    fn default() -> Self {
        Self {
            source_path: DEFAULT_SOURCE_FILE.into(),
            target_path: DEFAULT_TARGET_FILE.into(),
            output_path: DEFAULT_OUTPUT_FILE.into(),
            fields: FieldNames::default(),
            fold_accents: false,
        }
    }
}

impl JoinConfig {
    pub fn new(
        source_path: impl Into<PathBuf>,
        target_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            target_path: target_path.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    pub fn with_fold_accents(mut self, fold: bool) -> Self {
        self.fold_accents = fold;
        self
    }

    pub fn with_fields(mut self, fields: FieldNames) -> Self {
        self.fields = fields;
        self
    }

    pub fn key_mode(&self) -> KeyMode {
        if self.fold_accents {
            KeyMode::FoldAccents
        } else {
            KeyMode::Exact
        }
    }
}
