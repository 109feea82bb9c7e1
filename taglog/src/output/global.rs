//! Process-wide output registry state.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::Sink;
use crate::level::LevelFilter;

/// Runtime output threshold, stored as the [`LevelFilter`] discriminant so
/// the dispatch hot path is a single relaxed load. No other memory depends
/// on its value, so relaxed ordering is sufficient.
static OUTPUT_LEVEL: AtomicU8 = AtomicU8::new(LevelFilter::Verbose as u8);

/// The replaceable parts of the registry. A fat `&dyn` reference cannot be
/// swapped atomically, so they live behind a lock instead.
static CONFIG: RwLock<Config> = RwLock::new(Config::new());

struct Config {
    tag_prefix: String,
    sink: Option<&'static (dyn Sink + Sync)>,
}

impl Config {
    const fn new() -> Self {
        Self {
            tag_prefix: String::new(),
            sink: None,
        }
    }
}

// Writers only assign whole fields, so a poisoned lock cannot guard a
// half-updated registry; recovering the guard is always safe.
fn read_config() -> RwLockReadGuard<'static, Config> {
    CONFIG.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_config() -> RwLockWriteGuard<'static, Config> {
    CONFIG.write().unwrap_or_else(PoisonError::into_inner)
}

pub(super) fn output_level() -> LevelFilter {
    LevelFilter::from_u8(OUTPUT_LEVEL.load(Ordering::Relaxed))
}

pub(super) fn set_output_level(level: LevelFilter) {
    OUTPUT_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub(super) fn set_tag_prefix(prefix: String) {
    write_config().tag_prefix = prefix;
}

pub(super) fn set_sink(sink: Option<&'static (dyn Sink + Sync)>) {
    write_config().sink = sink;
}

/// Runs `f` with the current tag prefix and hands back the registered sink.
///
/// The guard is released when `f` returns; callers format messages and
/// invoke the sink afterwards, so neither can deadlock by logging
/// recursively.
pub(super) fn read<R>(f: impl FnOnce(&str, Option<&'static (dyn Sink + Sync)>) -> R) -> R {
    let config = read_config();
    f(&config.tag_prefix, config.sink)
}
