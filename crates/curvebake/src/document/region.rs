//! Region records.
//!
//! A region is kept as the JSON object it was read from. Only the outer ring
//! of `geometry.coordinates` is ever interpreted; every other field, hole
//! rings included, is carried through untouched and in its original key
//! order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value, json};

use crate::error::FitError;
use crate::geometry::Point;

/// A named polygonal area with opaque metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region(Map<String, Value>);

impl Region {
    /// Wrap an already-decoded JSON object.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Build a polygon feature from render-space rings.
    ///
    /// The first ring is the outer boundary, the rest are holes.
    pub fn polygon(name: &str, rings: &[Vec<Point>]) -> Self {
        let coordinates: Vec<Value> = rings
            .iter()
            .map(|ring| Value::Array(ring.iter().map(|p| json!([p.x, p.y])).collect()))
            .collect();

        let mut map = Map::new();
        map.insert("type".to_string(), json!("Feature"));
        map.insert("properties".to_string(), json!({ "name": name }));
        map.insert(
            "geometry".to_string(),
            json!({ "type": "Polygon", "coordinates": coordinates }),
        );
        Self(map)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Region name from `properties.name`, falling back to a top-level `name`.
    pub fn name(&self) -> Option<&str> {
        self.0
            .get("properties")
            .and_then(|p| p.get("name"))
            .and_then(Value::as_str)
            .or_else(|| self.0.get("name").and_then(Value::as_str))
    }

    /// Name for diagnostics; unnamed regions are labelled by position.
    pub fn label(&self, index: usize) -> String {
        match self.name() {
            Some(name) => name.to_string(),
            None => format!("#{}", index),
        }
    }

    /// Raw `geometry.coordinates` value, if present.
    pub fn boundary(&self) -> Option<&Value> {
        self.0.get("geometry").and_then(|g| g.get("coordinates"))
    }

    /// Number of positions in the outer ring, without interpreting them.
    pub fn outer_ring_len(&self) -> usize {
        self.boundary()
            .and_then(Value::as_array)
            .and_then(|rings| rings.first())
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// Decode the outer ring into render-space points.
    ///
    /// Returns `Ok(None)` when there is no ring to smooth: geometry or
    /// coordinates missing or null, no rings, or an empty outer ring.
    pub fn outer_ring(&self) -> Result<Option<Vec<Point>>, FitError> {
        let geometry = match self.0.get("geometry") {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Object(geometry)) => geometry,
            Some(_) => {
                return Err(FitError::MalformedGeometry(
                    "geometry is not an object".to_string(),
                ));
            }
        };

        let rings = match geometry.get("coordinates") {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Array(rings)) => rings,
            Some(_) => {
                return Err(FitError::MalformedGeometry(
                    "coordinates is not an array".to_string(),
                ));
            }
        };

        let outer = match rings.first() {
            None => return Ok(None),
            Some(Value::Array(outer)) => outer,
            Some(_) => {
                return Err(FitError::MalformedGeometry(
                    "outer ring is not an array".to_string(),
                ));
            }
        };
        if outer.is_empty() {
            return Ok(None);
        }

        outer
            .iter()
            .enumerate()
            .map(|(index, position)| decode_position(index, position))
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    /// A copy of this region with its outer ring replaced.
    ///
    /// The copy shares nothing with `self`; holes and all other fields are
    /// cloned as they are.
    pub fn with_outer_ring(&self, ring: &[Point]) -> Result<Region, FitError> {
        let positions = ring
            .iter()
            .enumerate()
            .map(|(index, p)| encode_position(index, *p))
            .collect::<Result<Vec<_>, _>>()?;

        let mut map = self.0.clone();
        let rings = map
            .get_mut("geometry")
            .and_then(|g| g.get_mut("coordinates"))
            .and_then(Value::as_array_mut)
            .ok_or_else(|| FitError::MalformedGeometry("region has no coordinates".to_string()))?;

        match rings.first_mut() {
            Some(outer) => *outer = Value::Array(positions),
            None => rings.push(Value::Array(positions)),
        }
        Ok(Region(map))
    }
}

fn decode_position(index: usize, position: &Value) -> Result<Point, FitError> {
    let coords = position.as_array().ok_or_else(|| {
        FitError::MalformedGeometry(format!("position {} is not an array", index))
    })?;
    if coords.len() < 2 {
        return Err(FitError::ShortPosition {
            index,
            found: coords.len(),
        });
    }

    let coordinate = |value: &Value| {
        value.as_f64().ok_or_else(|| {
            FitError::MalformedGeometry(format!("position {} has a non-numeric coordinate", index))
        })
    };
    let point = Point::new(coordinate(&coords[0])?, coordinate(&coords[1])?);
    if !point.is_finite() {
        return Err(FitError::NonFinite { index });
    }
    Ok(point)
}

fn encode_position(index: usize, p: Point) -> Result<Value, FitError> {
    let x = Number::from_f64(p.x).ok_or(FitError::NonFiniteSample { index })?;
    let y = Number::from_f64(p.y).ok_or(FitError::NonFiniteSample { index })?;
    Ok(Value::Array(vec![Value::Number(x), Value::Number(y)]))
}
