//! The one network call: `POST {endpoint}` with `{"query": ...}`.

use url::Url;

use crate::error::SearchError;
use crate::model::{SearchRequest, SearchResult};

#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl SearchClient {
    pub fn new(endpoint: Url) -> Self {
        Self::with_http(reqwest::Client::new(), endpoint)
    }

    /// Reuse an existing connection pool.
    pub fn with_http(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Post `query` and decode the answer. No timeout and no retry.
    pub async fn search(&self, query: &str) -> Result<SearchResult, SearchError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&SearchRequest { query })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status));
        }
        Ok(response.json::<SearchResult>().await?)
    }
}
