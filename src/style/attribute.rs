//! Style attributes and composition onto `console::Style`.

use console::{Attribute, Color, Style};

/// A single named styling attribute recognized by the registry.
///
/// Attributes are resolved from lowercase tokens (see
/// [`resolve`](crate::style::resolve)) and folded onto a
/// [`console::Style`] renderer with [`compose`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleAttribute {
    /// Discards everything accumulated so far; codes after a reset win.
    Reset,
    Bold,
    Faint,
    Italic,
    Underline,
    BlinkSlow,
    BlinkRapid,
    Reverse,
    Concealed,
    CrossedOut,
    /// Foreground color.
    Fg(Color),
    /// Bright (high-intensity) foreground color.
    FgBright(Color),
    /// Background color.
    Bg(Color),
    /// Bright (high-intensity) background color.
    BgBright(Color),
}

impl StyleAttribute {
    /// Folds this attribute onto a style builder.
    pub fn apply(self, style: Style) -> Style {
        match self {
            StyleAttribute::Reset => Style::new(),
            StyleAttribute::Bold => style.attr(Attribute::Bold),
            StyleAttribute::Faint => style.attr(Attribute::Dim),
            StyleAttribute::Italic => style.attr(Attribute::Italic),
            StyleAttribute::Underline => style.attr(Attribute::Underlined),
            StyleAttribute::BlinkSlow => style.attr(Attribute::Blink),
            StyleAttribute::BlinkRapid => style.attr(Attribute::BlinkFast),
            StyleAttribute::Reverse => style.attr(Attribute::Reverse),
            StyleAttribute::Concealed => style.attr(Attribute::Hidden),
            StyleAttribute::CrossedOut => style.attr(Attribute::StrikeThrough),
            StyleAttribute::Fg(c) => style.fg(c),
            StyleAttribute::FgBright(c) => style.fg(c).bright(),
            StyleAttribute::Bg(c) => style.bg(c),
            StyleAttribute::BgBright(c) => style.bg(c).on_bright(),
        }
    }
}

/// Composes an ordered attribute sequence into a single renderer.
pub fn compose<I>(attrs: I) -> Style
where
    I: IntoIterator<Item = StyleAttribute>,
{
    attrs
        .into_iter()
        .fold(Style::new(), |style, attr| attr.apply(style))
}
