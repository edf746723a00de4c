// src/internal/level/mod.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log channel.
///
/// Each level owns exactly one channel in a [`LogChannels`](crate::LogChannels)
/// set, and every record written on that channel starts with the level's
/// fixed prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
}

impl Level {
    /// All levels, least severe first.
    pub const ALL: [Level; 5] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
    ];

    /// Three-letter tag; records start with `[<tag>] `.
    pub fn tag(self) -> &'static str {
        match self {
            Level::Trace => "TRC",
            Level::Debug => "DBG",
            Level::Info => "INF",
            Level::Warning => "WRN",
            Level::Error => "ERR",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }

    /// Whether the channel writes to standard error before any reconfiguration.
    pub fn enabled_by_default(self) -> bool {
        matches!(self, Level::Warning | Level::Error)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level: {0}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" | "trc" => Ok(Level::Trace),
            "debug" | "dbg" => Ok(Level::Debug),
            "info" | "inf" => Ok(Level::Info),
            "warning" | "warn" | "wrn" => Ok(Level::Warning),
            "error" | "err" => Ok(Level::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_warning_and_error_start_enabled() {
        let enabled: Vec<Level> = Level::ALL
            .into_iter()
            .filter(|level| level.enabled_by_default())
            .collect();
        assert_eq!(enabled, vec![Level::Warning, Level::Error]);
    }

    #[test]
    fn parses_names_and_tags() {
        assert_eq!("WRN".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("warn".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!(" Info ".parse::<Level>().unwrap(), Level::Info);
        assert_eq!(
            "fatal".parse::<Level>().unwrap_err(),
            ParseLevelError("fatal".to_string())
        );
    }

    #[test]
    fn ordering_follows_severity() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
    }
}
