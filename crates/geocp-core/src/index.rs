// crates/geocp-core/src/index.rs

//! Postal-code index: normalized locality name -> set of postal codes.

use crate::config::FieldNames;
use crate::error::Result;
use crate::feature::{coerce_to_string, features, properties};
use crate::text::KeyMode;
use log::debug;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Lookup table built from the source (province) dataset.
///
/// Several source features may normalize to the same key; their codes are
/// merged into one deduplicated set. Sets are ordered so that annotated
/// output is stable from one run to the next.
#[derive(Debug, Clone, Default)]
pub struct PostalIndex {
    mode: KeyMode,
    entries: BTreeMap<String, BTreeSet<String>>,
    scanned: usize,
    skipped: usize,
}

/// Split a raw `CP` value on commas, trimming parts and dropping empty ones.
///
/// ```rust
/// use geocp_core::index::split_postal_codes;
///
/// assert_eq!(split_postal_codes("1000, 1001,1002"), ["1000", "1001", "1002"]);
/// assert!(split_postal_codes(" , ").is_empty());
/// ```
pub fn split_postal_codes(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|cp| !cp.is_empty())
        .collect()
}

impl PostalIndex {
    pub fn new(mode: KeyMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Record the codes of one source feature.
    ///
    /// Returns `false` when the feature was skipped because its locality is
    /// empty after trimming. A locality without any code is counted as
    /// scanned but adds no key.
    pub fn insert(&mut self, locality: &str, cp_field: &str) -> bool {
        self.scanned += 1;
        let locality = locality.trim();
        if locality.is_empty() {
            self.skipped += 1;
            return false;
        }

        let codes = split_postal_codes(cp_field);
        if codes.is_empty() {
            return true;
        }

        let key = self.mode.key(locality);
        self.entries
            .entry(key)
            .or_default()
            .extend(codes.into_iter().map(str::to_owned));
        true
    }

    /// Build from the `features` list of the source document.
    pub fn from_features(features: &[Value], fields: &FieldNames, mode: KeyMode) -> Result<Self> {
        let mut index = Self::new(mode);
        for (i, feature) in features.iter().enumerate() {
            let props = properties(feature, i)?;
            let locality = coerce_to_string(props.get(&fields.source_locality));
            let cp = coerce_to_string(props.get(&fields.source_postal_code));
            if !index.insert(&locality, &cp) {
                debug!("source feature #{i}: empty locality, skipped");
            }
        }
        Ok(index)
    }

    pub fn from_document(doc: &Value, fields: &FieldNames, mode: KeyMode) -> Result<Self> {
        Self::from_features(features(doc)?, fields, mode)
    }

    pub fn mode(&self) -> KeyMode {
        self.mode
    }

    /// Normalized key for a free-text name, using this index's mode.
    pub fn key_for(&self, name: &str) -> String {
        self.mode.key(name.trim())
    }

    /// Codes for a free-text locality name, normalized with this index's mode.
    pub fn lookup(&self, name: &str) -> Option<Vec<String>> {
        self.codes(&self.key_for(name))
            .map(|set| set.iter().cloned().collect())
    }

    /// Codes stored under an already-normalized key.
    pub fn codes(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(key)
    }

    /// Number of unique normalized localities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.entries
    }

    /// Source features seen so far, skipped ones included.
    pub fn scanned(&self) -> usize {
        self.scanned
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }
}
