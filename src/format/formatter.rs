//! Per-severity line formatter.

use console::Style;

use super::interp::{interpolate, Arg};
use crate::style::{compose, resolve, StyleAttribute};

/// Turns a message into one styled, newline-terminated line, framed by
/// a configurable styled prefix and suffix.
///
/// The body style is fixed at construction; the prefix and suffix can
/// be replaced at any time via [`set_prefix`](Formatter::set_prefix)
/// and [`set_suffix`](Formatter::set_suffix). Each produced line has
/// the shape `"<prefix> <body> <suffix>\n"`.
///
/// # Example
///
/// ```rust
/// use tintlog::{args, Formatter};
///
/// let mut f = Formatter::new(["underline", "fghiblack"]);
/// f.set_prefix(["bold", "fgyellow", "[", "reset", "fggreen", "app", "bold", "fgyellow", "]"]);
/// f.set_suffix(["bold", "fgred", "!"]);
///
/// let line = f.format("ready in %dms", &args![12]);
/// assert!(line.ends_with('\n'));
/// assert!(line.contains("ready in 12ms"));
/// ```
#[derive(Debug, Clone)]
pub struct Formatter {
    body: Style,
    prefix: String,
    suffix: String,
}

impl Formatter {
    /// Creates a formatter whose body is rendered with the given style
    /// tokens, applied in order. Unresolved tokens are dropped.
    pub fn new<I, S>(body_tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let attrs = body_tokens
            .into_iter()
            .filter_map(|token| resolve(token.as_ref()));

        Self {
            body: compose(attrs),
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    /// Replaces the prefix with the rendering of `segments`.
    ///
    /// Segments that name a style token accumulate into a pending run;
    /// each literal segment is rendered through the pending run (which
    /// is then cleared), or passed through untouched when no run is
    /// pending. Style tokens with no following literal are dropped.
    /// Rendered pieces concatenate with no separator.
    pub fn set_prefix<I, S>(&mut self, segments: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.prefix = render_inline(segments);
    }

    /// Replaces the suffix. Same segment rules as
    /// [`set_prefix`](Formatter::set_prefix).
    pub fn set_suffix<I, S>(&mut self, segments: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.suffix = render_inline(segments);
    }

    /// Formats one line.
    ///
    /// With no arguments the message is used verbatim; otherwise it is
    /// interpolated positionally (see
    /// [`interpolate`](crate::format::interpolate)). Pure; performs no
    /// I/O.
    pub fn format(&self, message: &str, args: &[Arg]) -> String {
        let body = if args.is_empty() {
            message.to_string()
        } else {
            interpolate(message, args)
        };

        format!(
            "{} {} {}\n",
            self.prefix,
            self.body.apply_to(body),
            self.suffix
        )
    }
}

/// Renders a mixed sequence of style tokens and literal segments.
fn render_inline<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut pending: Vec<StyleAttribute> = Vec::new();
    let mut out = String::new();

    for segment in segments {
        let segment = segment.as_ref();

        if let Some(attr) = resolve(segment) {
            pending.push(attr);
        } else if pending.is_empty() {
            out.push_str(segment);
        } else {
            let run = compose(pending.drain(..));
            out.push_str(&run.apply_to(segment).to_string());
        }
    }

    out
}
