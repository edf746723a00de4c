//! Leveled channel logging.
//!
//! Five severity channels (trace, debug, info, warning, error), each either
//! disabled or writing to one [`Sink`]. Records look like
//!
//! ```text
//! [WRN] 2024/03/09 14:05:07.123456 main.rs:42: disk almost full
//! ```
//!
//! Applications can own a [`LogChannels`] and pass it around, or use the
//! process-wide set through the free functions re-exported here:
//!
//! ```
//! use chanlog::{MemorySink, LogChannels};
//!
//! let channels = LogChannels::silent();
//! let memory = MemorySink::new();
//! channels.set_info(Some(memory.sink()));
//!
//! chanlog::log_println!(channels.info(), "loaded", 3, "plugins");
//! assert!(memory.contents().ends_with(": loaded 3 plugins\n"));
//! ```
//!
//! Enter/leave tracing names the enclosing function at compile time:
//!
//! ```
//! # let channels = chanlog::LogChannels::silent();
//! # let memory = chanlog::MemorySink::new();
//! # channels.set_trace(Some(memory.sink()));
//! fn refresh(channels: &chanlog::LogChannels) {
//!     chanlog::log_enter!(channels.trace());
//!     chanlog::log_leave_anon!(channels.trace(), "cache warm");
//! }
//! refresh(&channels);
//! assert!(memory.contents().ends_with(": <= refresh (cache warm)\n"));
//! ```

pub mod cli;
pub mod internal;

// Re-export commonly used types
pub use internal::config::{AppConfig, ChannelsConfig};
pub use internal::level::{Level, ParseLevelError};
pub use internal::logger::Logger;
pub use internal::registry::global::{
    channel, channels, configure, debug, error, info, set_debug, set_error, set_info,
    set_trace, set_warning, trace, warning,
};
pub use internal::registry::LogChannels;
pub use internal::sink::{Destination, MemorySink, Sink, SinkError, SinkKind, SinkWriter};
pub use internal::stack::{
    capture_stack, short_function_name, BacktraceInspector, StackDump, StackInspector,
    INITIAL_STACK_BUFFER, MAX_STACK_BUFFER, UNKNOWN_CALLER,
};
