//! Normalization of raw catalog records into display-ready structures.
//!
//! The catalog omits fields freely. Instead of scattering `Option` checks
//! through rendering, [`normalize_record`] produces a [`DisplayRecord`] whose
//! accessors already resolve every default (`""`, `[]`, or `"N/A"`).

use serde::{Deserialize, Serialize};

use crate::types::{non_empty, null_as_default, string_or_number, ImageSet, RawCatalogRecord};

/// Fallback shown for a brewery's founding year or website when unknown.
pub const NOT_AVAILABLE: &str = "N/A";

/// An ingredient or brewery location; only the name is displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NamedItem {
    pub name: Option<String>,
}

impl NamedItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Brewery attached to a beer. `BreweryInfo::default()` is the "empty
/// object" used when the beer lists no breweries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BreweryInfo {
    pub name: Option<String>,
    pub description: Option<String>,
    pub images: Option<ImageSet>,
    #[serde(deserialize_with = "null_as_default")]
    pub locations: Vec<NamedItem>,
    /// Founding year. Usually a string (`"1995"`), occasionally a number.
    #[serde(deserialize_with = "string_or_number")]
    pub established: Option<String>,
    pub website: Option<String>,
}

impl BreweryInfo {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// `images.large`, falling back to `images.medium`.
    pub fn image(&self) -> Option<&str> {
        self.images.as_ref().and_then(ImageSet::best)
    }

    pub fn established(&self) -> &str {
        non_empty(self.established.as_deref()).unwrap_or(NOT_AVAILABLE)
    }

    pub fn website(&self) -> &str {
        non_empty(self.website.as_deref()).unwrap_or(NOT_AVAILABLE)
    }
}

/// Display-ready beer. Created fresh per successful fetch and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub brewery: BreweryInfo,
    pub hops: Vec<NamedItem>,
    pub malt: Vec<NamedItem>,
}

impl DisplayRecord {
    /// True for the record produced from input with no `id`.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn beer_name(&self) -> &str {
        self.beer_name.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn image(&self) -> &str {
        self.image.as_deref().unwrap_or_default()
    }
}

/// Converts a raw catalog record into a [`DisplayRecord`].
///
/// A missing record, or one without an `id`, yields the empty record even if
/// other fields are present.
#[must_use]
pub fn normalize_record(raw: Option<&RawCatalogRecord>) -> DisplayRecord {
    let Some(raw) = raw.filter(|r| non_empty(r.id.as_deref()).is_some()) else {
        return DisplayRecord::default();
    };

    let (hops, malt) = raw
        .ingredients
        .as_ref()
        .map(|i| (i.hops.clone(), i.malt.clone()))
        .unwrap_or_default();

    DisplayRecord {
        beer_name: raw.name.clone(),
        description: raw.style.as_ref().and_then(|s| s.description.clone()),
        image: raw.labels.as_ref().and_then(ImageSet::best).map(str::to_owned),
        brewery: raw.breweries.first().cloned().unwrap_or_default(),
        hops,
        malt,
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
