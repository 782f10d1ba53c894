//! Style tokens and their mapping to terminal attributes.
//!
//! This module provides the styling primitives:
//!
//! - [`StyleAttribute`]: A single named attribute (bold, a color, ...)
//! - [`resolve`]: Case-insensitive token lookup in the static registry
//! - [`compose`]: Folding an attribute sequence into a [`console::Style`]
//!
//! The registry is a closed, hand-maintained mapping; extending it is a
//! code change, not a runtime operation.

mod attribute;
mod registry;

pub use attribute::{compose, StyleAttribute};
pub use registry::resolve;
