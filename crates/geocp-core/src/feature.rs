// crates/geocp-core/src/feature.rs

//! Accessors over untyped GeoJSON documents.
//!
//! Documents stay as [`serde_json::Value`] so that everything except the
//! annotated property is written back exactly as it was read.

use crate::error::{GeoCpError, Result};
use serde_json::{Map, Value};

pub const FEATURES: &str = "features";
pub const PROPERTIES: &str = "properties";

/// The `features` array of a FeatureCollection.
pub fn features(doc: &Value) -> Result<&Vec<Value>> {
    match doc.get(FEATURES) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(GeoCpError::InvalidData(format!(
            "`{FEATURES}` is not an array"
        ))),
        None => Err(GeoCpError::missing(None, FEATURES)),
    }
}

pub fn features_mut(doc: &mut Value) -> Result<&mut Vec<Value>> {
    match doc.get_mut(FEATURES) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(GeoCpError::InvalidData(format!(
            "`{FEATURES}` is not an array"
        ))),
        None => Err(GeoCpError::missing(None, FEATURES)),
    }
}

/// The `properties` object of the feature at position `index`.
pub fn properties(feature: &Value, index: usize) -> Result<&Map<String, Value>> {
    match feature.get(PROPERTIES) {
        Some(Value::Object(props)) => Ok(props),
        Some(_) => Err(GeoCpError::InvalidData(format!(
            "`{PROPERTIES}` of feature #{index} is not an object"
        ))),
        None => Err(GeoCpError::missing(Some(index), PROPERTIES)),
    }
}

pub fn properties_mut(feature: &mut Value, index: usize) -> Result<&mut Map<String, Value>> {
    match feature.get_mut(PROPERTIES) {
        Some(Value::Object(props)) => Ok(props),
        Some(_) => Err(GeoCpError::InvalidData(format!(
            "`{PROPERTIES}` of feature #{index} is not an object"
        ))),
        None => Err(GeoCpError::missing(Some(index), PROPERTIES)),
    }
}

/// Loose string view of a property value.
///
/// Numbers keep their JSON text (`2000` becomes `"2000"`), booleans become
/// `"true"`/`"false"`, and `null` or an absent key is the empty string.
/// Arrays and objects fall back to their compact JSON form.
pub fn coerce_to_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}
