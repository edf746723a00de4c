// src/internal/logger/format.rs

use chrono::{DateTime, TimeZone};
use std::fmt::{self, Write as _};
use std::panic::Location;
use std::path::Path;

use crate::internal::level::Level;

/// Date and time of day with microseconds, e.g. `2024/03/09 14:05:07.123456`.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.6f";

/// Build one complete record:
/// `[<LVL>] <date> <time> <file>:<line>: <message>\n`.
///
/// The record always ends with exactly one newline added here, unless the
/// message already supplies it.
pub(crate) fn render_record<Tz>(
    level: Level,
    location: &Location<'_>,
    now: &DateTime<Tz>,
    message: fmt::Arguments<'_>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut record = String::with_capacity(96);
    let _ = write!(
        record,
        "[{}] {} {}:{}: {}",
        level.tag(),
        now.format(TIMESTAMP_FORMAT),
        short_file(location.file()),
        location.line(),
        message
    );
    if !record.ends_with('\n') {
        record.push('\n');
    }
    record
}

/// Final path component of a source file.
pub(crate) fn short_file(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file)
}

/// Display adapter joining values with single spaces.
pub(crate) struct SpaceJoined<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for SpaceJoined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
