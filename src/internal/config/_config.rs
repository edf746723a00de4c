use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::internal::level::Level;
use crate::internal::sink::Destination;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version information
pub fn get_version_info() -> String {
    let build_timestamp = option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown");
    let build_date = option_env!("VERGEN_BUILD_DATE").unwrap_or("unknown");
    let rustc_semver = option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown");
    let cargo_target_triple = option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown");
    let host_os = option_env!("VERGEN_SYSINFO_OS_VERSION").unwrap_or("unknown");

    format!(
        "chanlog version {}\n\
         Built: {} ({}) on {}\n\
         Rust: {}\n\
         Target: {}",
        VERSION, build_date, build_timestamp, host_os, rustc_semver, cargo_target_triple
    )
}

/// Destination of every channel plus options shared by file sinks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelsConfig {
    #[serde(default)]
    pub trace: Destination,
    #[serde(default)]
    pub debug: Destination,
    #[serde(default)]
    pub info: Destination,
    #[serde(default = "default_stderr")]
    pub warning: Destination,
    #[serde(default = "default_stderr")]
    pub error: Destination,
    #[serde(default)]
    pub append_to_file: bool,
    #[serde(default)]
    pub qualified_names: bool,
}

fn default_stderr() -> Destination {
    Destination::Stderr
}

impl Default for ChannelsConfig {
    fn default() -> Self {
        Self {
            trace: Destination::Disabled,
            debug: Destination::Disabled,
            info: Destination::Disabled,
            warning: default_stderr(),
            error: default_stderr(),
            append_to_file: false,
            qualified_names: false,
        }
    }
}

impl ChannelsConfig {
    pub fn destination(&self, level: Level) -> &Destination {
        match level {
            Level::Trace => &self.trace,
            Level::Debug => &self.debug,
            Level::Info => &self.info,
            Level::Warning => &self.warning,
            Level::Error => &self.error,
        }
    }

    pub fn set_destination(&mut self, level: Level, destination: Destination) {
        let slot = match level {
            Level::Trace => &mut self.trace,
            Level::Debug => &mut self.debug,
            Level::Info => &mut self.info,
            Level::Warning => &mut self.warning,
            Level::Error => &mut self.error,
        };
        *slot = destination;
    }
}

/// Settings for the crate's own `tracing` diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    #[serde(default = "default_diagnostics_level")]
    pub level: String,
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default)]
    pub output_path: Option<String>,
}

fn default_diagnostics_level() -> String {
    "warn".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            level: default_diagnostics_level(),
            color: true,
            output_path: None,
        }
    }
}

/// Workload run by the demo binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_depth")]
    pub depth: usize,
    #[serde(default = "default_workers")]
    pub workers: usize,
    #[serde(default)]
    pub stack_dump: bool,
    #[serde(default)]
    pub all_threads: bool,
}

fn default_depth() -> usize {
    3
}
fn default_workers() -> usize {
    2
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            depth: default_depth(),
            workers: default_workers(),
            stack_dump: false,
            all_threads: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub channels: ChannelsConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

impl AppConfig {
    /// Load configuration from the standard locations, an optional explicit
    /// file, and `CHANLOG_` environment variables, in increasing precedence.
    ///
    /// Environment keys nest with `__`, e.g. `CHANLOG_CHANNELS__TRACE=stderr`.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::with_name("/etc/chanlog/chanlog").required(false))
            .add_source(File::with_name("chanlog").required(false));

        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix("CHANLOG")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;

        if app_config.demo.workers == 0 {
            return Err(ConfigError::Message(
                "demo.workers must be at least 1".to_string(),
            ));
        }

        Ok(app_config)
    }
}
