//! HTTP client for the catalog's `/beers` endpoint.
//!
//! Every call asks for exactly one random beer with breweries, ingredients
//! and labels attached. Transport failures, non-2xx statuses and bodies that
//! do not match the `{ "data": [...] }` envelope all surface as
//! [`CatalogError`]; callers decide how to present them.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::CatalogError;
use crate::types::{CatalogResponse, RawCatalogRecord};

/// Fixed query parameters sent with every random-beer request, after `key`.
const RANDOM_BEER_PARAMS: [(&str, &str); 5] = [
    ("order", "random"),
    ("randomCount", "1"),
    ("withBreweries", "Y"),
    ("withIngredients", "Y"),
    ("hasLabels", "Y"),
];

/// Client for the beer catalog API.
///
/// Holds the HTTP client, the optional API key and the endpoint URL. Point
/// the endpoint at a mock server in tests.
pub struct CatalogClient {
    client: Client,
    api_key: Option<String>,
    endpoint: Url,
}

impl CatalogClient {
    /// Creates a client for the given catalog endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`CatalogError::InvalidEndpoint`] if
    /// `endpoint` is not a valid URL.
    pub fn new(
        endpoint: &str,
        api_key: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let endpoint = Url::parse(endpoint).map_err(|e| CatalogError::InvalidEndpoint {
            url: endpoint.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.map(str::to_owned),
            endpoint,
        })
    }

    /// Fetches one random beer.
    ///
    /// Returns the first element of the response's `data` array, or `None`
    /// when the array is empty or its first element is `null`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Http`] on network failure or non-2xx HTTP status.
    /// - [`CatalogError::Deserialize`] if the body is not JSON, lacks the
    ///   `data` array, or the first record has fields of the wrong type.
    pub async fn fetch_random(&self) -> Result<Option<RawCatalogRecord>, CatalogError> {
        let url = self.random_beer_url();
        tracing::debug!(url = %self.redacted_url(), "requesting random beer");

        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let envelope: CatalogResponse =
            serde_json::from_str(&body).map_err(|e| CatalogError::Deserialize {
                context: "beers(order=random)".to_owned(),
                source: e,
            })?;

        let Some(first) = envelope.data.into_iter().next() else {
            return Ok(None);
        };
        serde_json::from_value::<Option<RawCatalogRecord>>(first).map_err(|e| {
            CatalogError::Deserialize {
                context: "beers(order=random) data[0]".to_owned(),
                source: e,
            }
        })
    }

    /// Builds the random-beer request URL with percent-encoded query parameters.
    ///
    /// The `key` parameter is omitted when no API key is configured.
    pub fn random_beer_url(&self) -> Url {
        self.build_url(self.api_key.as_deref())
    }

    fn redacted_url(&self) -> Url {
        self.build_url(self.api_key.as_ref().map(|_| "[redacted]"))
    }

    fn build_url(&self, key: Option<&str>) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(key) = key {
                pairs.append_pair("key", key);
            }
            for (k, v) in RANDOM_BEER_PARAMS {
                pairs.append_pair(k, v);
            }
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(api_key: Option<&str>) -> CatalogClient {
        CatalogClient::new(
            "https://sandbox-api.brewerydb.com/v2/beers",
            api_key,
            30,
            "randbeer-test/0.1",
        )
        .expect("client construction should not fail")
    }

    #[test]
    fn random_beer_url_has_expected_query_string() {
        let url = test_client(Some("test-key")).random_beer_url();
        assert_eq!(
            url.as_str(),
            "https://sandbox-api.brewerydb.com/v2/beers?key=test-key&order=random&randomCount=1&withBreweries=Y&withIngredients=Y&hasLabels=Y"
        );
    }

    #[test]
    fn random_beer_url_omits_missing_key() {
        let url = test_client(None).random_beer_url();
        assert_eq!(
            url.as_str(),
            "https://sandbox-api.brewerydb.com/v2/beers?order=random&randomCount=1&withBreweries=Y&withIngredients=Y&hasLabels=Y"
        );
    }

    #[test]
    fn random_beer_url_encodes_key() {
        let url = test_client(Some("a b&c")).random_beer_url();
        assert!(
            url.as_str().contains("key=a+b%26c"),
            "key should be percent-encoded: {url}"
        );
    }

    #[test]
    fn redacted_url_hides_key() {
        let url = test_client(Some("secret")).redacted_url();
        assert!(!url.as_str().contains("secret"), "{url}");
    }

    #[test]
    fn new_rejects_invalid_endpoint() {
        let result = CatalogClient::new("not a url", None, 30, "randbeer-test/0.1");
        assert!(
            matches!(result, Err(CatalogError::InvalidEndpoint { .. })),
            "expected InvalidEndpoint"
        );
    }
}
