// src/main.rs
use clap::Parser;

use passforge::cli::{handlers, Args};
use passforge::config::Config;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load();

    // Configured level as the default, RUST_LOG still wins
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .parse_default_env()
        .init();

    log::debug!("loaded config: {:?}", config);

    handlers::dispatch(args.command, &config, args.json)
}
