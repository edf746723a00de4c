// src/internal/diagnostics/mod.rs
//
// `tracing` setup for the crate's own diagnostics (dropped records,
// channel reconfiguration, truncated stack dumps). Channel output never
// goes through here.

use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::internal::config::DiagnosticsConfig;
use crate::internal::sink::{Sink, SinkWriter};

/// Install the global diagnostics subscriber.
///
/// `RUST_LOG` wins over the configured level. Fails if a subscriber is
/// already installed or the output file cannot be opened.
pub fn init_diagnostics(cfg: &DiagnosticsConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.level.clone()));

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(cfg.color)
        .with_level(true)
        .with_target(true);

    match &cfg.output_path {
        Some(output_path) => {
            let file = DiagnosticsFile(Sink::file(output_path, true)?);
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(
                    fmt::layer()
                        .with_writer(file)
                        .with_ansi(false)
                        .with_level(true)
                        .with_target(true),
                )
                .try_init()?;
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .try_init()?;
        }
    }

    Ok(())
}

/// File sink shared across the subscriber's writer handles.
#[derive(Clone)]
struct DiagnosticsFile(Sink);

impl<'a> MakeWriter<'a> for DiagnosticsFile {
    type Writer = SinkWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SinkWriter::new(self.0.clone())
    }
}
