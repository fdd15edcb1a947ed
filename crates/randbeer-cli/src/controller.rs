//! View state and the fetch/toggle/retry actions that drive it.
//!
//! A fetch is split into [`Controller::begin_fetch`] and
//! [`Controller::finish_fetch`] so the interactive loop can keep several
//! requests in flight and apply each result as it resolves. Results are
//! never fenced: whichever response resolves last overwrites the state.

use randbeer_catalog::{
    normalize_record, CatalogClient, CatalogError, DisplayRecord, RawCatalogRecord,
};

/// Message shown to the user whenever a fetch fails, whatever the cause.
pub const FETCH_FAILED_ALERT: &str = "Drunk coder did something, please try again later.";

/// Everything the presentation layer derives its output from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub record: Option<DisplayRecord>,
    pub loading: bool,
    pub error: bool,
    pub showing_beer: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            record: None,
            loading: false,
            error: false,
            showing_beer: true,
        }
    }
}

/// Result of applying a fetch to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded,
    /// The fetch failed; `alert` must be surfaced to the user.
    Failed { alert: &'static str },
}

#[derive(Debug, Default)]
pub struct Controller {
    state: ViewState,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Initial automatic fetch performed once when the view is mounted.
    pub async fn mount(&mut self, client: &CatalogClient) -> FetchOutcome {
        self.fetch_random(client).await
    }

    /// Main action: fetch a new random beer and show it.
    pub async fn fetch_random(&mut self, client: &CatalogClient) -> FetchOutcome {
        self.begin_fetch();
        let result = client.fetch_random().await;
        self.finish_fetch(result)
    }

    /// Retry from the error view. Issues the same request as
    /// [`Controller::fetch_random`].
    ///
    /// The interactive session runs fetches concurrently, so it drives the
    /// same [`Controller::begin_fetch`] / [`Controller::finish_fetch`] pair
    /// from spawned tasks instead of awaiting this method.
    pub async fn retry(&mut self, client: &CatalogClient) -> FetchOutcome {
        self.fetch_random(client).await
    }

    /// Synchronous part of a fetch, applied before the request is sent.
    pub fn begin_fetch(&mut self) {
        self.state.showing_beer = true;
        self.state.error = false;
        self.state.loading = true;
        self.state.record = None;
    }

    /// Applies a settled request. Every error collapses into a single
    /// failure kind; `loading` is cleared on both paths. A success also
    /// clears `error`, so the last request to settle decides the view.
    pub fn finish_fetch(
        &mut self,
        result: Result<Option<RawCatalogRecord>, CatalogError>,
    ) -> FetchOutcome {
        self.state.loading = false;
        match result {
            Ok(raw) => {
                let record = normalize_record(raw.as_ref());
                tracing::info!(
                    beer = record.beer_name(),
                    brewery = record.brewery.name(),
                    empty = record.is_empty(),
                    "random beer loaded"
                );
                self.state.error = false;
                self.state.record = Some(record);
                FetchOutcome::Loaded
            }
            Err(e) => {
                tracing::error!(error = %e, "random beer fetch failed");
                self.state.error = true;
                FetchOutcome::Failed {
                    alert: FETCH_FAILED_ALERT,
                }
            }
        }
    }

    /// Switches between the beer and its brewery. Valid in any state.
    pub fn toggle_showing_beer(&mut self) {
        self.state.showing_beer = !self.state.showing_beer;
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
