use anyhow::Context;
use clap::Parser;
use scorepad::cli::Cli;
use scorepad::config::Config;
use scorepad::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading configuration from {}", config_path.display()))?;
    cli.apply_overrides(&mut config);
    config.validate().context("validating command-line overrides")?;

    if cli.print_config {
        let rendered = config.to_toml().context("rendering configuration")?;
        print!("{rendered}");
        return Ok(());
    }

    let log_file = init_tracing(&config.logging);
    tracing::info!(
        config = %config_path.display(),
        log_file = ?log_file,
        "Starting scorepad v{}",
        env!("CARGO_PKG_VERSION")
    );

    scorepad::ui::run(&config).context("terminal UI failed")?;
    Ok(())
}
