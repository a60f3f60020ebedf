use anyhow::Result;
use clap::Parser;
use vidkeys::cli::{self, Cli};
use vidkeys_config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // CLI --log-level takes precedence, then RUST_LOG, then config (applied below)
    vidkeys::debug::init_log_bridge(cli.log_level);
    log::info!("Starting vidkeys {}", vidkeys::VERSION);

    let config = if cli.command.needs_config() {
        cli.load_config()?
    } else {
        Config::default()
    };
    vidkeys::debug::apply_config_level(config.log_level);

    let code = cli::run(cli.command, &config)?;
    log::logger().flush();

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
