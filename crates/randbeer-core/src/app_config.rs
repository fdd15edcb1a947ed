use reqwest::Url;

/// Default catalog endpoint queried for random beers.
pub const DEFAULT_CATALOG_URL: &str = "https://sandbox-api.brewerydb.com/v2/beers";

/// Process-wide settings, read once at startup and never mutated.
#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Credential passed as the `key` query parameter. Absence is not an
    /// error here; the upstream API rejects the request instead.
    pub api_key: Option<String>,
    pub catalog_url: Url,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("catalog_url", &self.catalog_url.as_str())
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
