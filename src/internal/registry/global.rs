// src/internal/registry/global.rs
//
// Process-wide channels. The instance is built with the default
// configuration on first access, so its state is never observable before
// initialization.

use std::sync::LazyLock;

use super::LogChannels;
use crate::internal::config::ChannelsConfig;
use crate::internal::level::Level;
use crate::internal::logger::Logger;
use crate::internal::sink::{Sink, SinkError};

static CHANNELS: LazyLock<LogChannels> = LazyLock::new(LogChannels::new);

/// The process-wide channel set.
pub fn channels() -> &'static LogChannels {
    &CHANNELS
}

pub fn channel(level: Level) -> &'static Logger {
    CHANNELS.channel(level)
}

pub fn trace() -> &'static Logger {
    CHANNELS.trace()
}

pub fn debug() -> &'static Logger {
    CHANNELS.debug()
}

pub fn info() -> &'static Logger {
    CHANNELS.info()
}

pub fn warning() -> &'static Logger {
    CHANNELS.warning()
}

pub fn error() -> &'static Logger {
    CHANNELS.error()
}

pub fn set_trace(sink: Option<Sink>) {
    CHANNELS.set_trace(sink);
}

pub fn set_debug(sink: Option<Sink>) {
    CHANNELS.set_debug(sink);
}

pub fn set_info(sink: Option<Sink>) {
    CHANNELS.set_info(sink);
}

pub fn set_warning(sink: Option<Sink>) {
    CHANNELS.set_warning(sink);
}

pub fn set_error(sink: Option<Sink>) {
    CHANNELS.set_error(sink);
}

/// Apply a whole configuration to the process-wide channels.
pub fn configure(config: &ChannelsConfig) -> Result<(), SinkError> {
    CHANNELS.apply_config(config)
}
