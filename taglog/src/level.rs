//! Severity levels and threshold filters.

use core::str::FromStr;
use core::{error, fmt};

use serde::{Deserialize, Serialize};

/// Log message severity levels.
///
/// Ordered from least to most severe. The numeric discriminant is part of
/// the sink contract, so comparing two severities compares their importance.
///
/// As a rule of thumb, the log of a healthy, well-tested application should
/// stay close to empty at [`Severity::Info`] and above.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Severity {
    /// The "verbose" level.
    ///
    /// Everything that is not interesting enough for [`Severity::Debug`].
    Verbose = 1,

    /// The "debug" level.
    ///
    /// The minimal set of events needed to reconstruct the execution path.
    Debug = 2,

    /// The "info" level.
    ///
    /// A significant life cycle event or major state transition.
    Info = 3,

    /// The "warn" level.
    ///
    /// Something that usually should not happen and noticeably changes
    /// behavior for a while, like a missing configuration file.
    Warn = 4,

    /// The "error" level.
    ///
    /// Something unexpected happened, but the process can recover and
    /// continue.
    Error = 5,

    /// The "fatal" level.
    ///
    /// Something impossible happened and the process cannot meaningfully
    /// continue. Whether a fatal message terminates the process is the
    /// embedding application's policy, not this crate's.
    Fatal = 6,
}

impl Severity {
    /// Lowercase name of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verbose => "verbose",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }

    /// Single-letter marker used by the bundled sinks.
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Verbose => 'V',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
            Self::Fatal => 'F',
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.as_str())
    }
}

/// A severity threshold: every [`Severity`] plus a sentinel above all of
/// them.
///
/// Used both for the compile-time floor and for the runtime output
/// threshold. A filter `allows` a severity when the severity is at least as
/// important as the filter.
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum LevelFilter {
    /// Allows every severity.
    #[default]
    Verbose = 1,
    /// Allows [`Severity::Debug`] and above.
    Debug = 2,
    /// Allows [`Severity::Info`] and above.
    Info = 3,
    /// Allows [`Severity::Warn`] and above.
    Warn = 4,
    /// Allows [`Severity::Error`] and above.
    Error = 5,
    /// Allows only [`Severity::Fatal`].
    Fatal = 6,
    /// Allows nothing, ever.
    None = 7,
}

impl LevelFilter {
    /// Returns whether `severity` passes this threshold.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taglog::{LevelFilter, Severity};
    ///
    /// assert!(LevelFilter::Warn.allows(Severity::Error));
    /// assert!(!LevelFilter::Warn.allows(Severity::Info));
    /// assert!(!LevelFilter::None.allows(Severity::Fatal));
    /// ```
    #[inline]
    #[must_use]
    pub const fn allows(self, severity: Severity) -> bool {
        severity as u8 >= self as u8
    }

    /// Lowercase name of the threshold.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verbose => "verbose",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::None => "none",
        }
    }

    /// Decodes a stored discriminant. Values outside the domain fall back to
    /// the silence sentinel; they can only come from memory corruption.
    pub(crate) const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Verbose,
            2 => Self::Debug,
            3 => Self::Info,
            4 => Self::Warn,
            5 => Self::Error,
            6 => Self::Fatal,
            _ => Self::None,
        }
    }
}

impl From<Severity> for LevelFilter {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Verbose => Self::Verbose,
            Severity::Debug => Self::Debug,
            Severity::Info => Self::Info,
            Severity::Warn => Self::Warn,
            Severity::Error => Self::Error,
            Severity::Fatal => Self::Fatal,
        }
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.as_str())
    }
}

impl FromStr for LevelFilter {
    type Err = ParseLevelFilterError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let candidates = [
            Self::Verbose,
            Self::Debug,
            Self::Info,
            Self::Warn,
            Self::Error,
            Self::Fatal,
            Self::None,
        ];
        candidates
            .into_iter()
            .find(|candidate| text.eq_ignore_ascii_case(candidate.as_str()))
            .ok_or(ParseLevelFilterError(()))
    }
}

/// The type returned when parsing a [`LevelFilter`] from text fails.
#[derive(Debug, Eq, PartialEq)]
pub struct ParseLevelFilterError(());

impl ParseLevelFilterError {
    const MESSAGE: &'static str = "unknown level filter name";
}

impl fmt::Display for ParseLevelFilterError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(Self::MESSAGE)
    }
}

impl error::Error for ParseLevelFilterError {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn severities_are_totally_ordered() {
        assert!(Severity::Verbose < Severity::Debug);
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn the_sentinel_sits_above_every_severity() {
        for severity in [
            Severity::Verbose,
            Severity::Debug,
            Severity::Info,
            Severity::Warn,
            Severity::Error,
            Severity::Fatal,
        ] {
            assert!(!LevelFilter::None.allows(severity));
            assert!(LevelFilter::Verbose.allows(severity));
        }
    }

    #[test]
    fn a_filter_allows_its_own_severity_and_above() {
        assert!(LevelFilter::Warn.allows(Severity::Warn));
        assert!(LevelFilter::Warn.allows(Severity::Fatal));
        assert!(!LevelFilter::Warn.allows(Severity::Info));
    }

    #[test_case("verbose", LevelFilter::Verbose)]
    #[test_case("debug", LevelFilter::Debug)]
    #[test_case("info", LevelFilter::Info)]
    #[test_case("WARN", LevelFilter::Warn)]
    #[test_case("Error", LevelFilter::Error)]
    #[test_case("fatal", LevelFilter::Fatal)]
    #[test_case("none", LevelFilter::None)]
    fn parsing_accepts_names_case_insensitively(text: &str, expected: LevelFilter) {
        assert_eq!(text.parse::<LevelFilter>(), Ok(expected));
    }

    #[test]
    fn parsing_rejects_unknown_names() {
        assert_eq!(
            "loud".parse::<LevelFilter>(),
            Err(ParseLevelFilterError(()))
        );
        assert_eq!("".parse::<LevelFilter>(), Err(ParseLevelFilterError(())));
    }

    #[test]
    fn display_and_parse_round_trip() {
        for filter in [
            LevelFilter::Verbose,
            LevelFilter::Debug,
            LevelFilter::Info,
            LevelFilter::Warn,
            LevelFilter::Error,
            LevelFilter::Fatal,
            LevelFilter::None,
        ] {
            assert_eq!(filter.to_string().parse::<LevelFilter>(), Ok(filter));
        }
    }

    #[test]
    fn serde_round_trips_through_variant_names() {
        let encoded = serde_json::to_string(&Severity::Warn).expect("severity serializes");
        assert_eq!(encoded, "\"Warn\"");
        let decoded: Severity = serde_json::from_str(&encoded).expect("severity deserializes");
        assert_eq!(decoded, Severity::Warn);

        let encoded = serde_json::to_string(&LevelFilter::None).expect("filter serializes");
        assert_eq!(encoded, "\"None\"");
        let decoded: LevelFilter = serde_json::from_str(&encoded).expect("filter deserializes");
        assert_eq!(decoded, LevelFilter::None);
    }

    #[test]
    fn discriminants_match_the_wire_values() {
        assert_eq!(Severity::Verbose as u8, 1);
        assert_eq!(Severity::Fatal as u8, 6);
        assert_eq!(LevelFilter::None as u8, 7);
        assert_eq!(LevelFilter::from_u8(3), LevelFilter::Info);
        assert_eq!(LevelFilter::from_u8(0xFF), LevelFilter::None);
    }
}
