//! The two gates a message passes before it is dispatched: the compile-time
//! severity floor and the runtime output threshold.

use crate::level::{LevelFilter, Severity};
use crate::output;

/// The severity floor baked into this build.
///
/// Resolved from the `level-*` cargo features; when none is enabled the floor
/// follows the build profile: [`LevelFilter::Debug`] with debug assertions,
/// [`LevelFilter::Info`] for optimized builds. Features are additive across a
/// dependency graph, so when several are enabled the most permissive wins.
///
/// Call sites below this floor are compiled out entirely, including their
/// argument expressions, and no runtime setting can bring them back.
pub const COMPILE_THRESHOLD: LevelFilter = if cfg!(feature = "level-verbose") {
    LevelFilter::Verbose
} else if cfg!(feature = "level-debug") {
    LevelFilter::Debug
} else if cfg!(feature = "level-info") {
    LevelFilter::Info
} else if cfg!(feature = "level-warn") {
    LevelFilter::Warn
} else if cfg!(feature = "level-error") {
    LevelFilter::Error
} else if cfg!(feature = "level-fatal") {
    LevelFilter::Fatal
} else if cfg!(feature = "level-none") {
    LevelFilter::None
} else if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};

/// Returns whether `severity` survives the compile-time gate.
///
/// This is a `const fn` over a `const` threshold: the emission macros use it
/// as the leading branch condition, so a statically false result makes the
/// whole call site, argument expressions included, dead code.
///
/// Useful directly for keeping helper data out of builds that could never
/// print it:
///
/// ```rust
/// use taglog::Severity;
///
/// if taglog::allowed(Severity::Debug) {
///     let names = ["idle", "connecting", "draining"];
///     taglog::debug!("state: {}", names[1]);
/// }
/// ```
#[inline]
#[must_use]
pub const fn allowed(severity: Severity) -> bool {
    COMPILE_THRESHOLD.allows(severity)
}

/// Returns whether `severity` would reach the sink right now.
///
/// Combines [`allowed`] with the runtime output threshold. The emission
/// macros evaluate this after the compile-time gate; callers can use it to
/// guard argument preparation that is too expensive to run unconditionally:
///
/// ```rust
/// use taglog::Severity;
///
/// # fn checksum(_: &[u8]) -> u64 { 0 }
/// # let payload = [0u8; 16];
/// if taglog::output_allowed(Severity::Debug) {
///     taglog::debug!("payload checksum: {:016x}", checksum(&payload));
/// }
/// ```
#[inline]
#[must_use]
pub fn output_allowed(severity: Severity) -> bool {
    allowed(severity) && output::output_level().allows(severity)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[cfg(not(any(
        feature = "level-verbose",
        feature = "level-debug",
        feature = "level-info",
        feature = "level-warn",
        feature = "level-error",
        feature = "level-fatal",
        feature = "level-none",
    )))]
    #[test]
    fn default_floor_follows_the_build_profile() {
        let expected = if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        assert_eq!(COMPILE_THRESHOLD, expected);
    }

    #[test]
    fn allowed_matches_the_floor_predicate() {
        for severity in [
            Severity::Verbose,
            Severity::Debug,
            Severity::Info,
            Severity::Warn,
            Severity::Error,
            Severity::Fatal,
        ] {
            assert_eq!(allowed(severity), COMPILE_THRESHOLD.allows(severity));
        }
    }
}
