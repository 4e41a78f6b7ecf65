//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Single-screen score keeper for the terminal
#[derive(Debug, Parser)]
#[command(name = "scorepad")]
#[command(version)]
#[command(about = "Single-screen score keeper for the terminal", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the header title
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Override the log filter (e.g. "debug", "scorepad=trace")
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Path of the config file this run should read.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Fold command-line overrides into a loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(title) = &self.title {
            config.ui.title = title.clone();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_without_arguments() {
        let cli = Cli::try_parse_from(["scorepad"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.print_config);
    }

    #[test]
    fn overrides_replace_config_values() {
        let cli = Cli::try_parse_from([
            "scorepad",
            "--title",
            "Finals",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.ui.title, "Finals");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.ui.subtitle, "Track your fitness goals");
    }

    #[test]
    fn explicit_config_path_wins() {
        let cli = Cli::try_parse_from(["scorepad", "--config", "/tmp/x.toml"]).unwrap();
        assert_eq!(cli.config_path(), PathBuf::from("/tmp/x.toml"));
    }

    #[test]
    fn config_path_defaults_to_platform_location() {
        let cli = Cli::try_parse_from(["scorepad"]).unwrap();
        assert_eq!(cli.config_path(), Config::config_path());
    }
}
