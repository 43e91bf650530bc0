//! Serde shapes of the input document.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
pub(crate) struct RawFeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawFeature {
    #[serde(default)]
    pub geometry: Option<RawGeometry>,
    #[serde(default)]
    pub properties: Option<FeatureProperties>,
}

// Coordinates stay untyped until the geometry kind is known, so a Point or
// LineString feature is skipped instead of failing the whole document.
#[derive(Debug, Deserialize)]
pub(crate) struct RawGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub coordinates: serde_json::Value,
}

/// The feature properties gridbench reads.
///
/// Only `id` is consulted. Other keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeatureProperties {
    /// Numeric identifier, truncated to an integer. Non-numeric values are
    /// treated as absent.
    #[serde(default, deserialize_with = "numeric_id")]
    pub id: Option<i64>,
}

fn numeric_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()).map(|v| v as i64))
}
