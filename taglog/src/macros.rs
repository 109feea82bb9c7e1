//! Call-site emission macros.
//!
//! One macro per severity level, plus the generic [`log!`]. Every macro
//! accepts an optional leading `tag: <expr>` argument followed by a format
//! string and its arguments.
//!
//! Each call site expands to a conditional whose leading operand is a
//! compile-time constant: when the severity sits below the compile-time
//! floor the whole statement, argument expressions included, is dead code
//! and vanishes from optimized binaries. When it survives the build, a
//! runtime check against the output threshold decides whether the message is
//! rendered and dispatched.

/// Logs a message at the given severity.
///
/// This is the base macro the per-severity macros expand into. The severity
/// should be a plain [`Severity`][crate::Severity] path so the compile-time
/// gate stays constant-foldable.
///
/// # Examples
///
/// ```rust
/// use taglog::Severity;
///
/// taglog::log!(Severity::Warn, "disk {}% full", 93);
/// taglog::log!(tag: "STORE", Severity::Warn, "disk {}% full", 93);
/// ```
#[macro_export]
macro_rules! log {
    (tag: $tag:expr, $severity:expr, $($arg:tt)+) => {{
        let severity = $severity;
        if $crate::allowed(severity) && $crate::output_allowed(severity) {
            $crate::__dispatch!(
                severity,
                ::core::option::Option::Some(::core::convert::AsRef::<str>::as_ref(&$tag)),
                $($arg)+
            );
        }
    }};
    ($severity:expr, $($arg:tt)+) => {{
        let severity = $severity;
        if $crate::allowed(severity) && $crate::output_allowed(severity) {
            $crate::__dispatch!(severity, ::core::option::Option::None, $($arg)+);
        }
    }};
}

/// Logs a verbose-level message.
///
/// Compiled out of most builds; the default compile-time floor keeps verbose
/// call sites only when the `level-verbose` feature is enabled.
#[macro_export]
macro_rules! verbose {
    (tag: $tag:expr, $($arg:tt)+) => {
        $crate::log!(tag: $tag, $crate::Severity::Verbose, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Verbose, $($arg)+)
    };
}

/// Logs a debug-level message.
///
/// # Examples
///
/// ```rust
/// let attempt = 2;
/// taglog::debug!("retrying, attempt {attempt}");
/// ```
#[macro_export]
macro_rules! debug {
    (tag: $tag:expr, $($arg:tt)+) => {
        $crate::log!(tag: $tag, $crate::Severity::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Debug, $($arg)+)
    };
}

/// Logs an info-level message.
///
/// # Examples
///
/// ```rust
/// taglog::info!("server started");
/// taglog::info!(tag: "NET", "listening on port {}", 8080);
/// ```
#[macro_export]
macro_rules! info {
    (tag: $tag:expr, $($arg:tt)+) => {
        $crate::log!(tag: $tag, $crate::Severity::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Info, $($arg)+)
    };
}

/// Logs a warn-level message.
#[macro_export]
macro_rules! warn {
    (tag: $tag:expr, $($arg:tt)+) => {
        $crate::log!(tag: $tag, $crate::Severity::Warn, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Warn, $($arg)+)
    };
}

/// Logs an error-level message.
#[macro_export]
macro_rules! error {
    (tag: $tag:expr, $($arg:tt)+) => {
        $crate::log!(tag: $tag, $crate::Severity::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Error, $($arg)+)
    };
}

/// Logs a fatal-level message.
///
/// The message is rendered and forwarded like any other; this macro does not
/// terminate the process. Whether a fatal condition aborts is the embedding
/// application's (or its sink's) policy.
#[macro_export]
macro_rules! fatal {
    (tag: $tag:expr, $($arg:tt)+) => {
        $crate::log!(tag: $tag, $crate::Severity::Fatal, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Fatal, $($arg)+)
    };
}

/// Picks the dispatch flavor for the build: with source metadata under debug
/// assertions, without it otherwise.
#[doc(hidden)]
#[macro_export]
macro_rules! __dispatch {
    ($severity:expr, $tag:expr, $($arg:tt)+) => {
        if ::core::cfg!(debug_assertions) {
            $crate::dispatch::write_with_location(
                $crate::__function_name!(),
                ::core::concat!(::core::file!(), ":", ::core::line!()),
                $severity,
                $tag,
                ::core::format_args!($($arg)+),
            )
        } else {
            $crate::dispatch::write($severity, $tag, ::core::format_args!($($arg)+))
        }
    };
}

/// Captures the path of the enclosing function via a monomorphized probe.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn __probe() {}
        $crate::macro_helpers::strip_probe_suffix($crate::macro_helpers::function_name_of(
            &__probe,
        ))
    }};
}
