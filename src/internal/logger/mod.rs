// src/internal/logger/mod.rs

pub mod format;
pub mod logger;
mod macros;

pub use format::TIMESTAMP_FORMAT;
pub use logger::Logger;

// The log_printf!/log_println! macros are exported at the crate root via #[macro_export].
