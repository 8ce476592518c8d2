//! Async HTTP client for the advice endpoint.
//!
//! One call to [`AdviceClient::fetch_advice`] performs exactly one `GET`.
//! Redirects are not followed and any status other than 200 is a failure.
//! There is no retry; callers decide what a failure means.

use std::time::Duration;

use reqwest::redirect::Policy;
use reqwest::StatusCode;

use advice_core::prelude::*;
use advice_core::Advice;

use crate::endpoint::AdviceEndpoint;
use crate::protocol::parse_slip_response;

/// Settings used to build an [`AdviceClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: AdviceEndpoint,
    /// `None` lets a request hang until the transport itself gives up
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: AdviceEndpoint::default(),
            timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    pub fn with_endpoint(mut self, endpoint: AdviceEndpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// `advice-dice/<version>`
pub fn default_user_agent() -> String {
    format!("advice-dice/{}", env!("CARGO_PKG_VERSION"))
}

/// Client for the advice endpoint.
///
/// Clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct AdviceClient {
    http: reqwest::Client,
    endpoint: AdviceEndpoint,
}

impl AdviceClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .redirect(Policy::none())
            .user_agent(config.user_agent);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint,
        })
    }

    pub fn endpoint(&self) -> &AdviceEndpoint {
        &self.endpoint
    }

    /// Fetch one random advice.
    ///
    /// # Errors
    ///
    /// - [`Error::Fetch`] with `Network` for transport failures and timeouts.
    /// - [`Error::Fetch`] with `Status(code)` for any non-200 response.
    /// - [`Error::Fetch`] with `Body` for an unreadable or malformed body.
    pub async fn fetch_advice(&self) -> Result<Advice> {
        debug!("GET {}", self.endpoint);

        let response = self
            .http
            .get(self.endpoint.url().clone())
            .send()
            .await
            .map_err(|e| Error::network(describe_reqwest_error(&e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::bad_status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::network(describe_reqwest_error(&e)))?;

        let advice = parse_slip_response(&body)?;
        debug!("Received advice #{}", advice.id());
        Ok(advice)
    }
}

fn describe_reqwest_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("request timed out: {}", e)
    } else if e.is_connect() {
        format!("connection failed: {}", e)
    } else {
        e.to_string()
    }
}
