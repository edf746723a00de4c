use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::{Sink, SinkError};

/// A channel destination as written in configuration: `none`, `stderr`,
/// `stdout`, or a file path.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Destination {
    #[default]
    Disabled,
    Stderr,
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// Resolve into the sink a channel should use; `None` disables it.
    pub fn open(&self, append: bool) -> Result<Option<Sink>, SinkError> {
        match self {
            Destination::Disabled => Ok(None),
            Destination::Stderr => Ok(Some(Sink::stderr())),
            Destination::Stdout => Ok(Some(Sink::stdout())),
            Destination::File(path) => Sink::file(path, append).map(Some),
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Destination::Disabled)
    }
}

impl FromStr for Destination {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.to_ascii_lowercase().as_str() {
            "" | "none" | "off" | "disabled" => Destination::Disabled,
            "stderr" => Destination::Stderr,
            "stdout" => Destination::Stdout,
            _ => Destination::File(PathBuf::from(trimmed)),
        })
    }
}

impl From<String> for Destination {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(destination) => destination,
            Err(never) => match never {},
        }
    }
}

impl From<Destination> for String {
    fn from(value: Destination) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Disabled => f.write_str("none"),
            Destination::Stderr => f.write_str("stderr"),
            Destination::Stdout => f.write_str("stdout"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::sink::SinkKind;

    #[test]
    fn parses_keywords_case_insensitively() {
        assert_eq!(Destination::from("NONE".to_string()), Destination::Disabled);
        assert_eq!(Destination::from(String::new()), Destination::Disabled);
        assert_eq!(Destination::from("Stderr".to_string()), Destination::Stderr);
        assert_eq!(Destination::from("stdout".to_string()), Destination::Stdout);
        assert_eq!(
            Destination::from(" logs/trace.log ".to_string()),
            Destination::File(PathBuf::from("logs/trace.log"))
        );
    }

    #[test]
    fn displays_as_it_parses() {
        for text in ["none", "stderr", "stdout", "var/log/app.log"] {
            assert_eq!(Destination::from(text.to_string()).to_string(), text);
        }
    }

    #[test]
    fn opens_matching_sinks() {
        assert!(Destination::Disabled.open(false).unwrap().is_none());
        let sink = Destination::Stderr.open(false).unwrap().unwrap();
        assert_eq!(sink.kind(), &SinkKind::Stderr);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("info.log");
        let sink = Destination::File(path.clone()).open(true).unwrap().unwrap();
        assert_eq!(sink.kind(), &SinkKind::File(path));
    }
}
