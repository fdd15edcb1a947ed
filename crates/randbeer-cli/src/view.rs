//! Maps [`ViewState`] to what the terminal shows.
//!
//! Rendering is a pure function of the state plus a random source used only
//! to choose the loading visual and message.

use std::fmt;

use rand::Rng;
use randbeer_catalog::{DisplayRecord, NamedItem, NOT_AVAILABLE};

use crate::controller::ViewState;
use crate::loader::{pick, LOADER_VISUALS, LOADING_MESSAGES};

pub const APP_TITLE: &str = "THE RANDOM BEER APP";
pub const MAIN_ACTION: &str = "[n] Guess My Beer";
pub const RETRY_PROMPT: &str = ";-/ Lets retry... press r";
pub const BACK_PROMPT: &str = "<< Back [b]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Loading(LoadingView),
    Beer(EntityView),
    Brewery(EntityView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingView {
    pub visual: &'static str,
    pub message: &'static str,
    /// Retry affordance, present only after a failed fetch.
    pub retry: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityView {
    pub title: String,
    pub body: String,
    pub image: String,
    pub details: Vec<Detail>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub label: &'static str,
    pub value: String,
}

impl Detail {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

impl EntityView {
    pub fn detail(&self, label: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|d| d.label == label)
            .map(|d| d.value.as_str())
    }
}

/// Comma-joined item names. Unnamed items contribute an empty entry.
pub fn join_names(items: &[NamedItem]) -> String {
    items
        .iter()
        .map(|i| i.name.as_deref().unwrap_or_default())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render<R: Rng + ?Sized>(state: &ViewState, rng: &mut R) -> View {
    if state.loading || state.error {
        return View::Loading(LoadingView {
            visual: LOADER_VISUALS[pick(rng, LOADER_VISUALS.len())],
            message: LOADING_MESSAGES[pick(rng, LOADING_MESSAGES.len())],
            retry: state.error.then_some(RETRY_PROMPT),
        });
    }

    let empty = DisplayRecord::default();
    let record = state.record.as_ref().unwrap_or(&empty);
    if state.showing_beer {
        View::Beer(beer_view(record))
    } else {
        View::Brewery(brewery_view(record))
    }
}

fn beer_view(record: &DisplayRecord) -> EntityView {
    let mut details = vec![Detail::new("Brewery", format!("{} [b]", record.brewery.name()))];

    let ingredients = if record.hops.is_empty() && record.malt.is_empty() {
        NOT_AVAILABLE
    } else {
        ""
    };
    details.push(Detail::new("Ingredients", ingredients));
    if !record.hops.is_empty() {
        details.push(Detail::new("Hops", join_names(&record.hops)));
    }
    if !record.malt.is_empty() {
        details.push(Detail::new("Malt", join_names(&record.malt)));
    }

    EntityView {
        title: record.beer_name().to_owned(),
        body: record.description().to_owned(),
        image: record.image().to_owned(),
        details,
    }
}

fn brewery_view(record: &DisplayRecord) -> EntityView {
    let brewery = &record.brewery;
    let locations = if brewery.locations.is_empty() {
        NOT_AVAILABLE.to_owned()
    } else {
        join_names(&brewery.locations)
    };

    EntityView {
        title: brewery.name().to_owned(),
        body: brewery.description().to_owned(),
        image: brewery.image().unwrap_or_default().to_owned(),
        details: vec![
            Detail::new("Since", brewery.established()),
            Detail::new("Website", brewery.website()),
            Detail::new("Locations", locations),
        ],
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{APP_TITLE}    {MAIN_ACTION}")?;
        match self {
            View::Loading(loading) => {
                writeln!(f)?;
                writeln!(f, "{}", loading.visual)?;
                writeln!(f, "{}", loading.message)?;
                if let Some(retry) = loading.retry {
                    writeln!(f, "{retry}")?;
                }
                Ok(())
            }
            View::Beer(entity) => write_entity(f, entity),
            View::Brewery(entity) => {
                writeln!(f, "{BACK_PROMPT}")?;
                write_entity(f, entity)
            }
        }
    }
}

fn write_entity(f: &mut fmt::Formatter<'_>, entity: &EntityView) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}", entity.title)?;
    writeln!(f, "{}", "-".repeat(entity.title.chars().count().max(3)))?;
    writeln!(f, "{}", entity.body)?;
    writeln!(f, "Image : {}", entity.image)?;
    writeln!(f)?;
    for detail in &entity.details {
        writeln!(f, "{} :  {}", detail.label, detail.value)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
