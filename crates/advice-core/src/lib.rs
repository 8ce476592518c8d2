//! # advice-core - Core Domain Types
//!
//! Foundation crate for Advice Dice. Provides the advice domain type, the
//! diagnostic log entry types, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Advice`] - One piece of advice: positive id plus non-empty text
//! - [`WidgetPhase`] - Idle / Loading / Quitting lifecycle of the widget
//! - [`LogEntry`], [`LogLevel`] - Entries of the in-app diagnostic log
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `is_fatal()` classification
//! - [`FetchFailureKind`] - Why an advice fetch failed (network, status, body)
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use advice_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Advice Dice crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, FetchFailureKind, Result, ResultExt};
pub use types::{Advice, LogEntry, LogLevel, WidgetPhase};
