//! View configuration: where to send queries and the fixed page copy.

use url::Url;

use crate::error::ConfigError;

/// Backend endpoint used when none is given.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/search";

/// The one message shown for every failed search.
pub const BACKEND_DOWN_MESSAGE: &str = "Backend not responding. Run: python app.py";

const DEFAULT_TITLE: &str = "Know About Scooby Doo!";
const DEFAULT_SUBTITLE: &str = "Shoot your question";
const DEFAULT_PLACEHOLDER: &str = "Type your question...";

#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    pub endpoint: Url,
    pub error_message: String,
    pub title: String,
    pub subtitle: String,
    pub placeholder: String,
}

impl ViewConfig {
    /// Parse `endpoint` and build a config around it.
    pub fn new(endpoint: &str) -> Result<Self, ConfigError> {
        parse_endpoint(endpoint).map(Self::with_endpoint)
    }

    /// Config for an already-validated endpoint, keeping the default copy.
    pub fn with_endpoint(endpoint: Url) -> Self {
        Self {
            endpoint,
            error_message: BACKEND_DOWN_MESSAGE.to_string(),
            title: DEFAULT_TITLE.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

/// Parse and check an endpoint URL. Only http(s) endpoints can be posted to.
fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}
