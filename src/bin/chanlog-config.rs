use clap::{Arg, Command};
use chanlog::internal::config::{self, AppConfig};

fn main() -> anyhow::Result<()> {
    // Leak the version string to get a 'static lifetime
    let version: &'static str = Box::leak(config::get_version_info().into_boxed_str());

    let matches = Command::new("chanlog-config")
        .version(version)
        .about("Print the effective chanlog configuration as YAML")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to config file"),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .action(clap::ArgAction::SetTrue)
                .help("Also open every channel destination"),
        )
        .get_matches();

    let config = AppConfig::load(matches.get_one::<String>("config").map(|s| s.as_str()))?;
    print!("{}", serde_yaml::to_string(&config)?);

    if matches.get_flag("check") {
        chanlog::LogChannels::from_config(&config.channels)?;
        eprintln!("all channel destinations opened");
    }

    Ok(())
}
