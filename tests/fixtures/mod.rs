//! Shared helpers for channel tests

#![allow(dead_code)]

use chanlog::{Level, LogChannels, MemorySink};
use regex::Regex;

/// Channels with every level disabled except `level`, which writes to the
/// returned buffer.
pub fn capture(level: Level) -> (LogChannels, MemorySink) {
    let channels = LogChannels::silent();
    let memory = MemorySink::new();
    channels.set(level, Some(memory.sink()));
    (channels, memory)
}

/// Pattern for one complete record on `level` from `file`.
pub fn record_pattern(level: Level, file: &str, message: &str) -> Regex {
    Regex::new(&format!(
        r"^\[{}\] \d{{4}}/\d{{2}}/\d{{2}} \d{{2}}:\d{{2}}:\d{{2}}\.\d{{6}} {}:\d+: {}\n$",
        level.tag(),
        regex::escape(file),
        message
    ))
    .unwrap()
}
