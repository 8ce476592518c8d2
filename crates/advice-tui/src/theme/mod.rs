//! Centralized theme for the advice card.
//!
//! This module provides:
//! - `palette`: Raw color constants
//! - `styles`: Semantic style builder functions
//! - `icons`: Dice faces and divider glyphs with Unicode fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
