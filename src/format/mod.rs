//! Message formatting: styled line assembly and interpolation.
//!
//! - [`Formatter`]: body style + prefix/suffix framing, one line out
//! - [`Arg`]: owned interpolation value, built via [`args!`](crate::args)
//! - [`interpolate`]: positional `%`-verb substitution, never failing

mod formatter;
mod interp;

pub use formatter::Formatter;
pub use interp::{interpolate, Arg};
