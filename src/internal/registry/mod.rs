// src/internal/registry/mod.rs

pub mod global;

use std::sync::Arc;

use crate::internal::config::ChannelsConfig;
use crate::internal::level::Level;
use crate::internal::logger::Logger;
use crate::internal::sink::{Sink, SinkError};
use crate::internal::stack::{BacktraceInspector, StackInspector};

/// The five severity channels of one application.
///
/// Construct one per application (or per test) and hand it to collaborators;
/// the free functions in [`global`] wrap a single process-wide instance.
#[derive(Debug)]
pub struct LogChannels {
    trace: Logger,
    debug: Logger,
    info: Logger,
    warning: Logger,
    error: Logger,
}

impl LogChannels {
    /// Channels in their default state: trace, debug and info disabled,
    /// warning and error writing to standard error.
    pub fn new() -> Self {
        Self::with_inspector(Arc::new(BacktraceInspector::new()))
    }

    /// Default channels resolving callers and stacks through `inspector`.
    pub fn with_inspector(inspector: Arc<dyn StackInspector>) -> Self {
        let channels = Self {
            trace: Logger::with_inspector(Level::Trace, Arc::clone(&inspector)),
            debug: Logger::with_inspector(Level::Debug, Arc::clone(&inspector)),
            info: Logger::with_inspector(Level::Info, Arc::clone(&inspector)),
            warning: Logger::with_inspector(Level::Warning, Arc::clone(&inspector)),
            error: Logger::with_inspector(Level::Error, inspector),
        };
        let stderr = Sink::stderr();
        for level in Level::ALL.into_iter().filter(|level| level.enabled_by_default()) {
            channels.channel(level).set_sink(Some(stderr.clone()));
        }
        channels
    }

    /// Every channel disabled.
    pub fn silent() -> Self {
        let channels = Self::new();
        channels.disable_all();
        channels
    }

    /// Channels opened from configuration.
    pub fn from_config(config: &ChannelsConfig) -> Result<Self, SinkError> {
        let channels = Self::new();
        channels.apply_config(config)?;
        Ok(channels)
    }

    /// Reconfigure every channel from `config`.
    ///
    /// All sinks are opened before any channel changes, so a failure leaves
    /// the current configuration untouched. Channels that name the same file
    /// share one sink.
    pub fn apply_config(&self, config: &ChannelsConfig) -> Result<(), SinkError> {
        let mut opened: Vec<(Level, Option<Sink>)> = Vec::with_capacity(Level::ALL.len());
        for level in Level::ALL {
            let destination = config.destination(level);
            let shared = opened
                .iter()
                .find(|(other, _)| config.destination(*other) == destination)
                .map(|(_, sink)| sink.clone());
            let sink = match shared {
                Some(sink) => sink,
                None => destination.open(config.append_to_file)?,
            };
            opened.push((level, sink));
        }

        for (level, sink) in opened {
            let channel = self.channel(level);
            channel.set_sink(sink);
            channel.set_qualified_names(config.qualified_names);
        }
        Ok(())
    }

    pub fn channel(&self, level: Level) -> &Logger {
        match level {
            Level::Trace => &self.trace,
            Level::Debug => &self.debug,
            Level::Info => &self.info,
            Level::Warning => &self.warning,
            Level::Error => &self.error,
        }
    }

    /// Point `level`'s channel at `sink`, or disable it with `None`.
    pub fn set(&self, level: Level, sink: Option<Sink>) {
        self.channel(level).set_sink(sink);
    }

    pub fn trace(&self) -> &Logger {
        &self.trace
    }

    pub fn debug(&self) -> &Logger {
        &self.debug
    }

    pub fn info(&self) -> &Logger {
        &self.info
    }

    pub fn warning(&self) -> &Logger {
        &self.warning
    }

    pub fn error(&self) -> &Logger {
        &self.error
    }

    pub fn set_trace(&self, sink: Option<Sink>) {
        self.trace.set_sink(sink);
    }

    pub fn set_debug(&self, sink: Option<Sink>) {
        self.debug.set_sink(sink);
    }

    pub fn set_info(&self, sink: Option<Sink>) {
        self.info.set_sink(sink);
    }

    pub fn set_warning(&self, sink: Option<Sink>) {
        self.warning.set_sink(sink);
    }

    pub fn set_error(&self, sink: Option<Sink>) {
        self.error.set_sink(sink);
    }

    /// Send every channel to the same sink.
    pub fn set_all(&self, sink: Option<Sink>) {
        for channel in self.iter() {
            channel.set_sink(sink.clone());
        }
    }

    pub fn disable_all(&self) {
        self.set_all(None);
    }

    pub fn set_qualified_names(&self, qualified: bool) {
        for channel in self.iter() {
            channel.set_qualified_names(qualified);
        }
    }

    /// Channels from trace to error.
    pub fn iter(&self) -> impl Iterator<Item = &Logger> {
        Level::ALL.into_iter().map(move |level| self.channel(level))
    }
}

impl Default for LogChannels {
    fn default() -> Self {
        Self::new()
    }
}
