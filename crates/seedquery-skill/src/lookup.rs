//! SEED server lookup client.
//!
//! Issues one GET per call against the legacy SEED query script and reduces
//! the reply to a single line of speakable text. Failures are spoken too:
//! callers always get a `String` back.

use std::time::Duration;

use async_trait::async_trait;
use seedquery_core::config::LookupConfig;
use url::form_urlencoded;

use crate::error::LookupError;

/// Spoken when the server answers 200 with an empty body.
pub const NO_INFORMATION_SPEECH: &str = "No further information.";

/// One outbound lookup: the action name and its single parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    pub action: String,
    pub parameter: String,
}

impl LookupQuery {
    pub fn new(action: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            parameter: parameter.into(),
        }
    }

    /// Form-encoded query string. Fields are joined with `;`, not `&`, which
    /// is what the server script parses.
    pub fn to_query_string(&self) -> String {
        format!(
            "{}={};{}={}",
            encode("action"),
            encode(&self.action),
            encode("parameter"),
            encode(&self.parameter)
        )
    }

    /// Full request URL under `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}?{}", base_url, self.to_query_string())
    }
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Source of answers for data-bearing intents.
#[async_trait]
pub trait LookupClient: Send + Sync {
    /// Ask the server for `action` with `parameter`. Never fails: errors come
    /// back as spoken text.
    async fn fetch(&self, action: &str, parameter: &str) -> String;
}

/// `LookupClient` backed by the SEED server over HTTP.
pub struct HttpLookupClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpLookupClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| LookupError::Setup(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &LookupConfig) -> Result<Self, LookupError> {
        Self::new(
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Single attempt, no retries. Returns the first body line, or `None` for
    /// an empty body.
    pub async fn try_fetch(&self, query: &LookupQuery) -> Result<Option<String>, LookupError> {
        let url = query.url(&self.base_url);
        tracing::debug!(url = %url, "SEED lookup");

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(LookupError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(first_line(&body).map(str::to_string))
    }
}

#[async_trait]
impl LookupClient for HttpLookupClient {
    async fn fetch(&self, action: &str, parameter: &str) -> String {
        let query = LookupQuery::new(action, parameter);
        match self.try_fetch(&query).await {
            Ok(Some(line)) => line,
            Ok(None) => NO_INFORMATION_SPEECH.to_string(),
            Err(err) => {
                match &err {
                    LookupError::HttpStatus(status) => {
                        tracing::warn!(action, parameter, status, "SEED server returned an error status");
                    }
                    LookupError::Transport { kind, message } => {
                        tracing::error!(action, parameter, kind = %kind, error = %message, "SEED lookup failed");
                    }
                    LookupError::Setup(message) => {
                        tracing::error!(error = %message, "SEED lookup client unusable");
                    }
                }
                err.to_string()
            }
        }
    }
}

/// First line of a body, ending at `\n`, `\r` or `\r\n`. `None` if the body is empty.
fn first_line(body: &str) -> Option<&str> {
    if body.is_empty() {
        return None;
    }
    body.split(['\n', '\r']).next()
}
