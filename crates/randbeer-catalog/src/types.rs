//! Catalog API response types for the `/beers` endpoint.
//!
//! Every field is optional on the wire. Records come back with or without
//! labels, styles, breweries and ingredient breakdowns depending on what the
//! catalog has on file, so nothing here is required except the `data` array
//! of the envelope itself.
//!
//! Brewery objects are kept as [`BreweryInfo`] directly since the display
//! layer consumes them unchanged.

use serde::{Deserialize, Deserializer, Serialize};

use crate::normalize::{BreweryInfo, NamedItem};

/// Top-level response from `GET /beers`.
///
/// `data` is kept as raw JSON values; only the first element is consumed and
/// it is parsed on demand.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    pub data: Vec<serde_json::Value>,
}

/// A single beer as returned by the catalog.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCatalogRecord {
    /// Catalog identifier, e.g. `"c4f2KE"`. Absent or empty means the record
    /// carries no usable data.
    pub id: Option<String>,
    pub name: Option<String>,
    pub style: Option<RawStyle>,
    pub labels: Option<ImageSet>,
    #[serde(deserialize_with = "null_as_default")]
    pub breweries: Vec<BreweryInfo>,
    pub ingredients: Option<RawIngredients>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawStyle {
    pub description: Option<String>,
}

/// Label or brewery image URLs keyed by size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ImageSet {
    pub large: Option<String>,
    pub medium: Option<String>,
}

impl ImageSet {
    /// `large`, falling back to `medium`. Empty strings count as absent.
    #[must_use]
    pub fn best(&self) -> Option<&str> {
        non_empty(self.large.as_deref()).or_else(|| non_empty(self.medium.as_deref()))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawIngredients {
    #[serde(deserialize_with = "null_as_default")]
    pub hops: Vec<NamedItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub malt: Vec<NamedItem>,
}

pub(crate) fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.is_empty())
}

/// Treats an explicit JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

/// Accepts a JSON string or number (e.g. a year sent as `1856`), keeping it
/// as text. `null` and missing both yield `None`.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<StringOrNumber>::deserialize(deserializer)?.map(|v| match v {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }),
    )
}
