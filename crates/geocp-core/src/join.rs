// crates/geocp-core/src/join.rs

//! Annotates target features with the codes found in a [`PostalIndex`].

use crate::config::FieldNames;
use crate::error::{GeoCpError, Result};
use crate::feature::{features_mut, properties_mut};
use crate::index::PostalIndex;
use log::debug;
use serde_json::Value;

/// Counts produced by [`annotate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoinStats {
    pub features: usize,
    pub matched: usize,
    pub unmatched: usize,
}

/// Set `fields.output` on every feature of `doc`.
///
/// The value is the list of codes stored for the feature's normalized
/// locality, or `[fields.sentinel]` when the index has none. An existing
/// value is overwritten, so annotating twice gives the same document.
///
/// Fails on the first feature lacking `properties` or a string
/// `fields.target_locality`. Features before it may already be annotated;
/// callers must not persist `doc` after an error.
pub fn annotate(doc: &mut Value, index: &PostalIndex, fields: &FieldNames) -> Result<JoinStats> {
    let mut stats = JoinStats::default();

    for (i, feature) in features_mut(doc)?.iter_mut().enumerate() {
        let props = properties_mut(feature, i)?;
        let locality = match props.get(&fields.target_locality) {
            Some(Value::String(s)) => s.as_str(),
            Some(other) => {
                return Err(GeoCpError::InvalidData(format!(
                    "`{}` of feature #{i} is not a string: {other}",
                    fields.target_locality
                )))
            }
            None => return Err(GeoCpError::missing(Some(i), &fields.target_locality)),
        };

        let codes = match index.lookup(locality) {
            Some(codes) => {
                stats.matched += 1;
                codes
            }
            None => {
                debug!("no postal code for {locality:?} (feature #{i})");
                stats.unmatched += 1;
                vec![fields.sentinel.clone()]
            }
        };

        props.insert(
            fields.output.clone(),
            Value::Array(codes.into_iter().map(Value::String).collect()),
        );
        stats.features += 1;
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::KeyMode;
    use serde_json::json;

    fn rosario_index() -> PostalIndex {
        let mut index = PostalIndex::new(KeyMode::Exact);
        index.insert("Rosario", "2000");
        index.insert("La Plata", "1900, 1901");
        index
    }

    fn target(names: &[&str]) -> Value {
        let features: Vec<Value> = names
            .iter()
            .map(|n| json!({ "type": "Feature", "properties": { "LOCALIDAD": n }, "geometry": null }))
            .collect();
        json!({ "type": "FeatureCollection", "features": features })
    }

    #[test]
    fn matched_and_unmatched_features() {
        let mut doc = target(&["ROSARIO!!", "Ciudad Inexistente", " la plata "]);
        let stats = annotate(&mut doc, &rosario_index(), &FieldNames::default()).unwrap();

        assert_eq!(stats, JoinStats { features: 3, matched: 2, unmatched: 1 });
        let f = &doc["features"];
        assert_eq!(f[0]["properties"]["codigo_postal"], json!(["2000"]));
        assert_eq!(f[1]["properties"]["codigo_postal"], json!(["Desconocido"]));
        assert_eq!(f[2]["properties"]["codigo_postal"], json!(["1900", "1901"]));
    }

    #[test]
    fn every_feature_gets_a_non_empty_list() {
        let mut doc = target(&["a", "b", "Rosario", ""]);
        annotate(&mut doc, &rosario_index(), &FieldNames::default()).unwrap();
        for feature in doc["features"].as_array().unwrap() {
            let codes = feature["properties"]["codigo_postal"].as_array().unwrap();
            assert!(!codes.is_empty());
        }
    }

    #[test]
    fn rerun_overwrites_instead_of_appending() {
        let index = rosario_index();
        let mut doc = target(&["Rosario", "Nowhere"]);
        annotate(&mut doc, &index, &FieldNames::default()).unwrap();
        let first = doc.clone();
        annotate(&mut doc, &index, &FieldNames::default()).unwrap();
        assert_eq!(doc, first);
    }

    #[test]
    fn other_properties_are_untouched() {
        let mut doc = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": { "LOCALIDAD": "Rosario", "PROVINCIA": "Santa Fe", "codigo_postal": ["old"] },
                "geometry": { "type": "Point", "coordinates": [-60.6393, -32.9468] }
            }]
        });
        annotate(&mut doc, &rosario_index(), &FieldNames::default()).unwrap();
        let feature = &doc["features"][0];
        assert_eq!(feature["properties"]["PROVINCIA"], json!("Santa Fe"));
        assert_eq!(feature["properties"]["codigo_postal"], json!(["2000"]));
        assert_eq!(feature["geometry"]["type"], json!("Point"));
        let keys: Vec<&String> = feature["properties"].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["LOCALIDAD", "PROVINCIA", "codigo_postal"]);
    }

    #[test]
    fn missing_locality_is_fatal() {
        let mut doc = json!({
            "features": [
                { "properties": { "LOCALIDAD": "Rosario" } },
                { "properties": { "NOMBRE": "Rosario" } }
            ]
        });
        let err = annotate(&mut doc, &rosario_index(), &FieldNames::default()).unwrap_err();
        match err {
            GeoCpError::MissingField { index, field } => {
                assert_eq!(index, Some(1));
                assert_eq!(field, "LOCALIDAD");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn non_string_locality_is_fatal() {
        let mut doc = json!({ "features": [ { "properties": { "LOCALIDAD": null } } ] });
        let err = annotate(&mut doc, &rosario_index(), &FieldNames::default()).unwrap_err();
        assert!(matches!(err, GeoCpError::InvalidData(_)));
    }

    #[test]
    fn custom_field_names() {
        let fields = FieldNames {
            target_locality: "name".into(),
            output: "postcodes".into(),
            sentinel: "?".into(),
            ..FieldNames::default()
        };
        let mut doc = json!({ "features": [
            { "properties": { "name": "rosario" } },
            { "properties": { "name": "x" } }
        ] });
        annotate(&mut doc, &rosario_index(), &fields).unwrap();
        assert_eq!(doc["features"][0]["properties"]["postcodes"], json!(["2000"]));
        assert_eq!(doc["features"][1]["properties"]["postcodes"], json!(["?"]));
    }
}
