use std::time::Duration;

use newswire_core::error::Error;
use newswire_core::render::Payload;
use newswire_core::request::QueryParams;

pub const API_BASE: &str = "https://newsapi.org/v2";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The three upstream operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    TopHeadlines,
    Sources,
    Everything,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::TopHeadlines => "top-headlines",
            Endpoint::Sources => "sources",
            Endpoint::Everything => "everything",
        }
    }

    pub fn url(&self) -> String {
        format!("{API_BASE}/{}", self.path())
    }
}

/// API configuration from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_key: String,
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var("NEWS_API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            return Err(Error::Config(
                "NEWS_API_KEY environment variable not set".to_string(),
            ));
        }
        Ok(Self { api_key })
    }
}

/// Issue a single GET against `endpoint` with the request's serialized
/// query parameters and return the raw body text.
///
/// Non-success statuses whose body carries the API's own error document
/// surface as [`Error::Upstream`]; everything else on the transport path
/// is [`Error::Transport`].
pub async fn fetch(endpoint: Endpoint, request: &impl QueryParams) -> Result<String, Error> {
    let params = request.query_params()?;

    let client = reqwest::Client::builder()
        .user_agent(concat!("newswire/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| Error::Transport(format!("failed to build HTTP client: {e}")))?;

    let response = client
        .get(endpoint.url())
        .query(&params)
        .send()
        .await
        .map_err(|e| Error::Transport(format!("request to {} failed: {e}", endpoint.path())))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::Transport(format!("failed to read response body: {e}")))?;

    if !status.is_success() {
        if let Some(Payload::Failure { code, message }) = Payload::sniff(&body) {
            return Err(Error::Upstream { code, message });
        }
        return Err(Error::Transport(format!(
            "HTTP {status} from {}",
            endpoint.path()
        )));
    }

    Ok(body)
}
