//! Static registry of style-name tokens.

use std::collections::HashMap;

use console::Color;
use once_cell::sync::Lazy;

use super::attribute::StyleAttribute;

/// Every token the registry knows, with its attribute.
///
/// The map is built once and never mutated, so it is safe to share
/// across all formatters without synchronization.
static STYLE_TOKENS: Lazy<HashMap<&'static str, StyleAttribute>> = Lazy::new(|| {
    use StyleAttribute::*;

    let mut map = HashMap::new();

    map.insert("reset", Reset);
    map.insert("bold", Bold);
    map.insert("faint", Faint);
    map.insert("italic", Italic);
    map.insert("underline", Underline);
    map.insert("blinkslow", BlinkSlow);
    map.insert("blinkrapid", BlinkRapid);
    map.insert("reversevideo", Reverse);
    map.insert("concealed", Concealed);
    map.insert("crossedout", CrossedOut);

    const COLORS: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    const FG: [&str; 8] = [
        "fgblack", "fgred", "fggreen", "fgyellow", "fgblue", "fgmagenta", "fgcyan", "fgwhite",
    ];
    const FG_HI: [&str; 8] = [
        "fghiblack",
        "fghired",
        "fghigreen",
        "fghiyellow",
        "fghiblue",
        "fghimagenta",
        "fghicyan",
        "fghiwhite",
    ];
    const BG: [&str; 8] = [
        "bgblack", "bgred", "bggreen", "bgyellow", "bgblue", "bgmagenta", "bgcyan", "bgwhite",
    ];
    const BG_HI: [&str; 8] = [
        "bghiblack",
        "bghired",
        "bghigreen",
        "bghiyellow",
        "bghiblue",
        "bghimagenta",
        "bghicyan",
        "bghiwhite",
    ];

    for (i, color) in COLORS.into_iter().enumerate() {
        map.insert(FG[i], Fg(color));
        map.insert(FG_HI[i], FgBright(color));
        map.insert(BG[i], Bg(color));
        map.insert(BG_HI[i], BgBright(color));
    }

    map
});

/// Looks up a style token, case-insensitively.
///
/// Unknown tokens resolve to `None`, never an error; callers drop them
/// silently.
///
/// # Example
///
/// ```rust
/// use tintlog::style::resolve;
///
/// assert!(resolve("Bold").is_some());
/// assert!(resolve("FgHiYellow").is_some());
/// assert!(resolve("sparkle").is_none());
/// ```
pub fn resolve(token: &str) -> Option<StyleAttribute> {
    STYLE_TOKENS.get(token.to_ascii_lowercase().as_str()).copied()
}
