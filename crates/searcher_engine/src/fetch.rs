use std::time::Duration;

use url::Url;
use widget_logging::widget_info;

use crate::{SearchError, TorRecord};

/// Where and how to reach the torrent-listing search endpoint.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    /// Absolute URL of the listing endpoint, e.g. `http://host/browse/tor`.
    pub endpoint: String,
    /// Query-string parameter carrying the live input. Deployments use
    /// either `query` or `prefix`.
    pub query_param: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8080/browse/tor".to_string(),
            query_param: "query".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Seam for the search request, so the dispatch loop can be driven against
/// a double in tests.
#[async_trait::async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<TorRecord>, SearchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    settings: SearchSettings,
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(settings: SearchSettings) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| SearchError::Network(err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn request_url(&self, query: &str) -> Result<Url, SearchError> {
        let mut url = Url::parse(&self.settings.endpoint)
            .map_err(|err| SearchError::InvalidEndpoint(err.to_string()))?;
        url.query_pairs_mut()
            .append_pair(&self.settings.query_param, query);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl SearchBackend for ReqwestBackend {
    async fn search(&self, query: &str) -> Result<Vec<TorRecord>, SearchError> {
        let url = self.request_url(query)?;
        widget_info!("fetch {url}");

        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::HttpStatus(status.as_u16()));
        }

        // The body must be a JSON array of record objects.
        response.json::<Vec<TorRecord>>().await.map_err(|err| {
            if err.is_timeout() {
                SearchError::Timeout
            } else {
                SearchError::MalformedBody(err.to_string())
            }
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        return SearchError::Timeout;
    }
    SearchError::Network(err.to_string())
}
