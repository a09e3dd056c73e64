use anyhow::Context as _;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use swaystatus::protocol::{self, StatusBar};
use swaystatus::{config, core};

/// swaystatus - a status-line generator for the swaybar/i3bar JSON protocol
#[derive(Parser, Debug)]
#[command(name = "swaystatus")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the module configuration file (a JSON array of descriptors)
    #[arg(value_name = "CONFIG_FILE")]
    config: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Diagnostics must stay off stdout; the bar host owns it.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let descriptors = config::load(&cli.config)?;
    let modules = core::build_all(descriptors)
        .with_context(|| format!("invalid config {}", cli.config.display()))?;
    info!("loaded {} modules from {}", modules.len(), cli.config.display());

    protocol::run(StatusBar::new(modules)).await
}
