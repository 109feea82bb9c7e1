//! Message rendering and sink invocation.
//!
//! These functions are the runtime half of the emission macros: they run
//! only after a call site has passed both gates. They are `pub` so macro
//! expansions can reach them, but they are not part of the supported API
//! surface.
//!
//! A message renders as `[{function}@{file}:{line} ][{tag}: ]{body}` plus a
//! line terminator. The severity is not embedded in the bytes; it travels as
//! the sink's first parameter, and sinks that want it in text render their
//! own marker.

use core::fmt;
use std::io::Write as _;

use crate::level::Severity;
use crate::output;

/// Renders and forwards a message without source metadata.
#[doc(hidden)]
pub fn write(severity: Severity, tag: Option<&str>, args: fmt::Arguments<'_>) {
    emit(None, severity, tag, args);
}

/// Renders and forwards a message with the calling function and a
/// `file:line` locator. Used by builds with debug assertions.
#[doc(hidden)]
pub fn write_with_location(
    function: &'static str,
    location: &'static str,
    severity: Severity,
    tag: Option<&str>,
    args: fmt::Arguments<'_>,
) {
    emit(Some((function, location)), severity, tag, args);
}

fn emit(
    source: Option<(&str, &str)>,
    severity: Severity,
    tag: Option<&str>,
    args: fmt::Arguments<'_>,
) {
    let mut line = Vec::with_capacity(64);
    if let Some((function, location)) = source {
        write!(line, "{function}@{location} ").expect("writing to a Vec cannot fail");
    }
    let sink = output::with_registry(|prefix, sink| {
        compose_tag(prefix, tag, &mut line);
        sink
    });
    // Caller arguments are formatted after the registry guard is released; a
    // `Display` impl that logs re-enters the registry without deadlocking.
    write!(line, "{args}").expect("writing to a Vec cannot fail");
    let len = line.len();
    line.push(b'\n');
    if let Some(sink) = sink {
        sink.write(severity, &mut line, len);
    }
}

/// Appends the effective tag and its `": "` separator to `line`.
///
/// `prefix.tag` when both are present, either one alone otherwise, nothing
/// when both are missing. Composed per message and never cached; the prefix
/// may change between calls. An empty tag counts as missing.
fn compose_tag(prefix: &str, tag: Option<&str>, line: &mut Vec<u8>) {
    let tag = tag.filter(|tag| !tag.is_empty());
    match (prefix.is_empty(), tag) {
        (false, Some(tag)) => write!(line, "{prefix}.{tag}: "),
        (false, None) => write!(line, "{prefix}: "),
        (true, Some(tag)) => write!(line, "{tag}: "),
        (true, None) => Ok(()),
    }
    .expect("writing to a Vec cannot fail");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn composed(prefix: &str, tag: Option<&str>) -> String {
        let mut line = Vec::new();
        compose_tag(prefix, tag, &mut line);
        String::from_utf8(line).expect("tags are utf-8")
    }

    #[test]
    fn prefix_and_tag_join_with_a_dot() {
        assert_eq!(composed("NET", Some("HTTP")), "NET.HTTP: ");
    }

    #[test]
    fn tag_stands_alone_without_a_prefix() {
        assert_eq!(composed("", Some("HTTP")), "HTTP: ");
    }

    #[test]
    fn prefix_stands_alone_without_a_tag() {
        assert_eq!(composed("NET", None), "NET: ");
    }

    #[test]
    fn nothing_is_rendered_when_both_are_missing() {
        assert_eq!(composed("", None), "");
    }

    #[test]
    fn an_empty_tag_counts_as_missing() {
        assert_eq!(composed("NET", Some("")), "NET: ");
        assert_eq!(composed("", Some("")), "");
    }
}
