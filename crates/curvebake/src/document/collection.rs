//! Region collections as stored on disk.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::region::Region;

/// Top-level layout of a region document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentLayout {
    /// A bare JSON array of region records.
    Array,
    /// A `FeatureCollection` object holding the records in `features`.
    FeatureCollection,
}

impl std::fmt::Display for DocumentLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentLayout::Array => write!(f, "array"),
            DocumentLayout::FeatureCollection => write!(f, "feature_collection"),
        }
    }
}

/// A decoded region document. Re-encoding keeps the layout it was read with.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionDocument {
    Array(Vec<Region>),
    FeatureCollection {
        /// The collection object, with `features` still in its original slot.
        members: Map<String, Value>,
        features: Vec<Region>,
    },
}

impl RegionDocument {
    /// Interpret a parsed JSON value as a region document.
    ///
    /// Errors carry a message describing why the shape was rejected.
    pub fn from_value(value: Value) -> Result<Self, String> {
        match value {
            Value::Array(items) => Ok(RegionDocument::Array(regions_from(items)?)),
            Value::Object(mut members) => {
                let is_collection = members
                    .get("type")
                    .and_then(Value::as_str)
                    .is_some_and(|t| t == "FeatureCollection");
                if !is_collection {
                    return Err(
                        "expected an array of regions or a FeatureCollection object".to_string(),
                    );
                }
                let items = match members.get_mut("features").map(Value::take) {
                    Some(Value::Array(items)) => items,
                    Some(_) => return Err("'features' is not an array".to_string()),
                    None => return Err("FeatureCollection has no 'features'".to_string()),
                };
                Ok(RegionDocument::FeatureCollection {
                    members,
                    features: regions_from(items)?,
                })
            }
            other => Err(format!(
                "expected an array of regions, found {}",
                json_kind(&other)
            )),
        }
    }

    /// Encode back to JSON in the same layout.
    pub fn to_value(&self) -> Value {
        match self {
            RegionDocument::Array(regions) => Value::Array(encode(regions)),
            RegionDocument::FeatureCollection { members, features } => {
                let mut members = members.clone();
                members.insert("features".to_string(), Value::Array(encode(features)));
                Value::Object(members)
            }
        }
    }

    pub fn layout(&self) -> DocumentLayout {
        match self {
            RegionDocument::Array(_) => DocumentLayout::Array,
            RegionDocument::FeatureCollection { .. } => DocumentLayout::FeatureCollection,
        }
    }

    pub fn regions(&self) -> &[Region] {
        match self {
            RegionDocument::Array(regions) => regions,
            RegionDocument::FeatureCollection { features, .. } => features,
        }
    }

    /// Same layout and collection members, different regions.
    pub fn with_regions(&self, regions: Vec<Region>) -> Self {
        match self {
            RegionDocument::Array(_) => RegionDocument::Array(regions),
            RegionDocument::FeatureCollection { members, .. } => {
                RegionDocument::FeatureCollection {
                    members: members.clone(),
                    features: regions,
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.regions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions().is_empty()
    }
}

fn regions_from(items: Vec<Value>) -> Result<Vec<Region>, String> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(Region::from_map(map)),
            other => Err(format!(
                "region {} is {}, expected an object",
                index,
                json_kind(&other)
            )),
        })
        .collect()
}

fn encode(regions: &[Region]) -> Vec<Value> {
    regions
        .iter()
        .map(|r| Value::Object(r.as_map().clone()))
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
