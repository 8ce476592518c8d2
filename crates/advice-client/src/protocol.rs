//! Advice Slip API wire format
//!
//! A successful `/advice` response looks like:
//!
//! ```json
//! { "slip": { "id": 117, "advice": "It is easy to sit up and take notice, ..." } }
//! ```
//!
//! The API also answers some failures with HTTP 200 and a message object:
//!
//! ```json
//! { "message": { "type": "error", "text": "Advice slip not found." } }
//! ```

use advice_core::prelude::*;
use advice_core::Advice;
use serde::Deserialize;

/// Top-level response body
#[derive(Debug, Clone, Deserialize)]
pub struct SlipResponse {
    pub slip: Option<Slip>,
    pub message: Option<ApiMessage>,
}

/// The nested slip object
#[derive(Debug, Clone, Deserialize)]
pub struct Slip {
    pub id: u64,
    pub advice: String,
}

/// In-band message the API returns instead of a slip
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl SlipResponse {
    /// Convert into the domain type, treating a missing slip as a body failure
    pub fn into_advice(self) -> Result<Advice> {
        match (self.slip, self.message) {
            (Some(slip), _) => Advice::new(slip.id, slip.advice),
            (None, Some(message)) => Err(Error::bad_body(format!(
                "API returned {} message: {}",
                message.kind, message.text
            ))),
            (None, None) => Err(Error::bad_body("response has no 'slip' object")),
        }
    }
}

/// Parse a raw response body into an [`Advice`].
///
/// The Advice Slip API serves JSON with a `text/html` content type, so the body
/// is parsed from text rather than trusting the header.
pub fn parse_slip_response(body: &str) -> Result<Advice> {
    let response: SlipResponse = serde_json::from_str(body)
        .map_err(|e| Error::bad_body(format!("malformed JSON body: {}", e)))?;
    response.into_advice()
}
