//! Advice endpoint URL

use std::fmt;
use std::str::FromStr;

use advice_core::prelude::*;
use url::Url;

/// Public Advice Slip API resource returning one random slip
pub const DEFAULT_ENDPOINT: &str = "https://api.adviceslip.com/advice";

/// Validated URL of the advice resource.
///
/// Only absolute `http`/`https` URLs are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceEndpoint(Url);

impl AdviceEndpoint {
    pub fn parse(raw: &str) -> Result<Self> {
        let url = Url::parse(raw.trim()).map_err(|e| Error::invalid_endpoint(raw, e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(Self(url)),
            other => Err(Error::invalid_endpoint(
                raw,
                format!("unsupported scheme '{}'", other),
            )),
        }
    }

    pub fn url(&self) -> &Url {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for AdviceEndpoint {
    fn default() -> Self {
        Self(Url::parse(DEFAULT_ENDPOINT).expect("DEFAULT_ENDPOINT is a valid URL"))
    }
}

impl FromStr for AdviceEndpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for AdviceEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
