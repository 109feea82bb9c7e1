//! Support functions for the emission macros.

/// Returns the type name of the probe value, which for a local `fn` item is
/// the full path of the enclosing function plus the probe's own segment.
#[doc(hidden)]
pub fn function_name_of<T>(_probe: &T) -> &'static str {
    core::any::type_name::<T>()
}

/// Strips the probe's own path segment, leaving the enclosing function.
#[doc(hidden)]
pub const fn strip_probe_suffix(name: &'static str) -> &'static str {
    // `::__probe`
    name.split_at(name.len() - 9).0
}
