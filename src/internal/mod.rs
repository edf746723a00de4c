pub mod config;
pub mod demo;
pub mod diagnostics;
pub mod level;
pub mod logger;
pub mod registry;
pub mod sink;
pub mod stack;
