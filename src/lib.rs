//! # tintlog
//!
//! Severity-based console logging with per-severity text styling and
//! output routing, plus a minimal elapsed-time helper.
//!
//! Each severity (`Debug < Info < Error`) owns a [`Formatter`] that
//! frames messages with a styled prefix and suffix, and an optional
//! output sink of its own. Styling is expressed as case-insensitive
//! tokens (`"bold"`, `"fghiyellow"`, ...) resolved against a fixed
//! registry; unknown tokens are silently dropped, and logging never
//! fails the calling process.
//!
//! # Example
//!
//! ```rust
//! use tintlog::{args, Logger, Severity};
//!
//! let mut log = Logger::new(true);
//!
//! // Severity-labeled, colorized lines to stdout.
//! log.info("service starting");
//! log.error_with("bind failed on port %d", &args![8080]);
//!
//! // Customize a severity's framing through its formatter.
//! log.formatter(Severity::Debug).set_suffix(["bold", "fghiblue", "!"]);
//!
//! // Time a section of code.
//! log.timer_start();
//! let elapsed = log.timer_stop();
//! log.debug_with("warmup took %vns", &args![elapsed]);
//! ```
//!
//! Interpolation follows a positional `%`-verb convention and never
//! panics: template/argument mismatches are reported inline in the
//! produced string (see [`format::interpolate`]).

pub mod format;
pub mod style;

mod logger;
mod severity;

pub use format::{Arg, Formatter};
pub use logger::{Logger, Suppression};
pub use severity::Severity;
