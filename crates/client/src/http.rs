//! Shared HTTP plumbing

use procurex_core::config::normalize_base_url;
use procurex_core::{ApiConfig, ConsoleError, ConsoleResult};
use reqwest::header::ACCEPT;
use reqwest::{Client, Method};
use serde_json::Value;

/// HTTP client bound to the backend base URL
///
/// Cloning is cheap; the underlying connection pool is shared.
///
/// # Example
///
/// ```rust,ignore
/// let api = ApiClient::new("https://procurex-backend.onrender.com")?;
/// let vendors = api.resource(&procurex_schema::catalog::VENDOR);
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// The underlying reqwest HTTP client.
    client: Client,
    /// Base URL without a trailing slash.
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL
    pub fn new(base_url: &str) -> ConsoleResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("procurex/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConsoleError::internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// Create a client from the `[api]` config section
    pub fn from_config(config: &ApiConfig) -> ConsoleResult<Self> {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ========================================================================
    // Requests
    // ========================================================================

    /// Send a request and hand back status and body without judging them
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> ConsoleResult<RawResponse> {
        let url = self.url(path);
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        if !(200..300).contains(&status) {
            tracing::warn!("{} {} returned {}", method, url, status);
        }
        Ok(RawResponse { status, body })
    }

    /// GET and decode JSON
    pub async fn get(&self, path: &str) -> ConsoleResult<Value> {
        self.execute(Method::GET, path, None).await?.into_json(None)
    }

    /// DELETE, ignoring any success body
    pub async fn delete(&self, path: &str) -> ConsoleResult<()> {
        self.execute(Method::DELETE, path, None)
            .await?
            .check_status(None)
    }
}

/// Status and body of a completed exchange
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Judge the status alone; a success body of any shape is accepted
    ///
    /// When the error body carries no message, `fallback` (or a generic
    /// status line) is used.
    pub fn check_status(&self, fallback: Option<&str>) -> ConsoleResult<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(self.server_error(fallback))
        }
    }

    /// Decode the body on success, or build a `ServerError`
    ///
    /// An empty success body decodes to `Value::Null`.
    pub fn into_json(self, fallback: Option<&str>) -> ConsoleResult<Value> {
        if !self.is_success() {
            return Err(self.server_error(fallback));
        }
        if self.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&self.body)?)
    }

    fn server_error(&self, fallback: Option<&str>) -> ConsoleError {
        let message = self
            .server_message()
            .or_else(|| fallback.map(str::to_string))
            .unwrap_or_else(|| format!("Server returned status {}", self.status));
        ConsoleError::server(self.status, message)
    }

    /// The `error` or `message` field of a JSON error body
    pub fn server_message(&self) -> Option<String> {
        let value: Value = serde_json::from_str(&self.body).ok()?;
        ["error", "message"]
            .iter()
            .find_map(|key| value.get(*key).and_then(Value::as_str))
            .filter(|msg| !msg.trim().is_empty())
            .map(str::to_string)
    }
}

fn transport_error(err: reqwest::Error) -> ConsoleError {
    if err.is_timeout() {
        ConsoleError::network(format!("request timed out ({err})"))
    } else if err.is_connect() {
        ConsoleError::network(format!("unable to connect ({err})"))
    } else if err.is_decode() {
        ConsoleError::Decode(err.to_string())
    } else {
        ConsoleError::network(err.to_string())
    }
}
