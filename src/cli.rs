use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::internal::config::AppConfig;
use crate::internal::level::Level;
use crate::internal::sink::Destination;

pub fn build_cli() -> Command {
    // Leak the version string to get a 'static lifetime
    let version: &'static str =
        Box::leak(crate::internal::config::get_version_info().into_boxed_str());

    let mut command = Command::new("chanlog-demo")
        .version(version)
        .about("Exercise leveled log channels with a multi-threaded workload")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to config file (default: ./chanlog.*, /etc/chanlog/chanlog.*)"),
        );

    for level in Level::ALL {
        command = command.arg(
            Arg::new(level.name())
                .long(level.name())
                .value_name("DEST")
                .help(format!(
                    "Destination of the {} channel (none|stderr|stdout|<file>)",
                    level.name()
                )),
        );
    }

    command
        .arg(
            Arg::new("append")
                .long("append")
                .action(ArgAction::SetTrue)
                .help("Append to file destinations instead of truncating them"),
        )
        .arg(
            Arg::new("qualified-names")
                .long("qualified-names")
                .action(ArgAction::SetTrue)
                .help("Print full module paths in enter/leave lines"),
        )
        .arg(
            Arg::new("depth")
                .long("depth")
                .short('d')
                .value_parser(clap::value_parser!(usize))
                .help("Recursion depth of each worker"),
        )
        .arg(
            Arg::new("workers")
                .long("workers")
                .short('w')
                .value_parser(clap::value_parser!(u16).range(1..))
                .help("Number of worker threads"),
        )
        .arg(
            Arg::new("stack")
                .long("stack")
                .action(ArgAction::SetTrue)
                .help("Dump the stack on the debug channel at the deepest point"),
        )
        .arg(
            Arg::new("all-threads")
                .long("all-threads")
                .action(ArgAction::SetTrue)
                .help("Include the other live threads in stack dumps"),
        )
        .arg(
            Arg::new("diagnostics")
                .long("diagnostics")
                .help("Level filter for chanlog's own diagnostics (overridden by RUST_LOG)"),
        )
}

pub fn parse_config(matches: &ArgMatches) -> anyhow::Result<AppConfig> {
    let config_path = matches.get_one::<String>("config").map(|s| s.as_str());

    // An explicit config file must load; the default locations are optional.
    let mut config = match AppConfig::load(config_path) {
        Ok(config) => config,
        Err(e) if config_path.is_some() => return Err(e.into()),
        Err(_) => AppConfig::default(),
    };

    for level in Level::ALL {
        if let Some(dest) = matches.get_one::<String>(level.name()) {
            config
                .channels
                .set_destination(level, Destination::from(dest.clone()));
        }
    }
    if matches.get_flag("append") {
        config.channels.append_to_file = true;
    }
    if matches.get_flag("qualified-names") {
        config.channels.qualified_names = true;
    }

    if let Some(depth) = matches.get_one::<usize>("depth") {
        config.demo.depth = *depth;
    }
    if let Some(workers) = matches.get_one::<u16>("workers") {
        config.demo.workers = usize::from(*workers);
    }
    if matches.get_flag("stack") {
        config.demo.stack_dump = true;
    }
    if matches.get_flag("all-threads") {
        config.demo.all_threads = true;
    }

    if let Some(level) = matches.get_one::<String>("diagnostics") {
        config.diagnostics.level = level.clone();
    }

    Ok(config)
}
