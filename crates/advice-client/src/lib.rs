//! # advice-client - Advice Slip API Client
//!
//! Performs the single outbound call of the application: `GET` on the advice
//! endpoint, strict HTTP 200 check, and parsing of the `{"slip": {...}}` body.
//!
//! Depends on [`advice_core`] for the [`Advice`](advice_core::Advice) type and
//! error handling.
//!
//! ## Public API
//!
//! - [`AdviceEndpoint`] - Validated http(s) URL of the advice resource
//! - [`ClientConfig`] - Endpoint, optional timeout, user agent
//! - [`AdviceClient`] - Cheap-to-clone client issuing one GET per fetch
//! - [`parse_slip_response()`] - Parse a response body into an `Advice`

pub mod client;
pub mod endpoint;
pub mod protocol;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{AdviceClient, ClientConfig};
pub use endpoint::{AdviceEndpoint, DEFAULT_ENDPOINT};
pub use protocol::{parse_slip_response, SlipResponse};
