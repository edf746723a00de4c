use tracing::{error, info};
use chanlog::cli::{build_cli, parse_config};
use chanlog::internal::demo;
use chanlog::internal::diagnostics::init_diagnostics;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments first
    let matches = build_cli().get_matches();
    let config = match parse_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_diagnostics(&config.diagnostics) {
        eprintln!("Failed to initialize diagnostics: {}", e);
        std::process::exit(1);
    }

    info!("Starting chanlog demo");
    info!("Version: {}", chanlog::internal::config::get_version_info());

    if let Err(e) = chanlog::configure(&config.channels) {
        error!("Failed to configure channels: {}", e);
        std::process::exit(1);
    }
    for channel in chanlog::channels().iter() {
        info!(
            "Channel {}: {}",
            channel.level(),
            channel
                .sink()
                .map(|sink| sink.kind().to_string())
                .unwrap_or_else(|| "disabled".to_string())
        );
    }

    let summary = demo::run(&config.demo, chanlog::channels());
    if summary.workers_completed < summary.workers_started {
        error!(
            "{} of {} workers failed",
            summary.workers_started - summary.workers_completed,
            summary.workers_started
        );
        std::process::exit(1);
    }

    info!("Demo complete");
    Ok(())
}
