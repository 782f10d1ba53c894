//! Log severity levels.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Severity of a log message.
///
/// The declaration order is the total order: `Debug < Info < Error`.
///
/// # Example
///
/// ```rust
/// use tintlog::Severity;
///
/// assert!(Severity::Debug < Severity::Error);
/// assert_eq!(Severity::Info.to_string(), "info");
/// assert_eq!(Severity::from_name("INFO"), Severity::Info);
/// assert_eq!(Severity::from_name("trace"), Severity::Error);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    Debug,
    Info,
    Error,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Severity; 3] = [Severity::Debug, Severity::Info, Severity::Error];

    /// Returns the canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Error => "error",
        }
    }

    /// Parses a severity from its name, case-insensitively.
    ///
    /// Unrecognized input escalates to [`Severity::Error`] rather than
    /// silently downgrading: an unknown level is treated as the most
    /// visible one.
    pub fn from_name(s: &str) -> Severity {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Severity::Debug,
            "info" => Severity::Info,
            _ => Severity::Error,
        }
    }

    /// Index into per-severity tables.
    pub(crate) fn idx(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Severity::from_name(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_order() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Error);
    }

    #[test]
    fn test_severity_round_trip() {
        for sev in Severity::ALL {
            assert_eq!(Severity::from_name(sev.as_str()), sev);
        }
    }

    #[test]
    fn test_severity_parse_case_insensitive() {
        assert_eq!(Severity::from_name("Debug"), Severity::Debug);
        assert_eq!(Severity::from_name("INFO"), Severity::Info);
        assert_eq!(Severity::from_name("eRrOr"), Severity::Error);
    }

    #[test]
    fn test_severity_parse_unknown_falls_back_to_error() {
        assert_eq!(Severity::from_name("warn"), Severity::Error);
        assert_eq!(Severity::from_name(""), Severity::Error);
        assert_eq!(Severity::from_name("verbose"), Severity::Error);
    }

    #[test]
    fn test_severity_from_str_never_fails() {
        let sev: Severity = "info".parse().unwrap();
        assert_eq!(sev, Severity::Info);
        let fallback: Severity = "nope".parse().unwrap();
        assert_eq!(fallback, Severity::Error);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(format!("{}", Severity::Debug), "debug");
    }
}
