//! Command-line interface definitions.
//!
//! Everything required comes from the environment; flags only adjust a
//! single run.

use clap::Parser;
use std::path::PathBuf;

use crate::infrastructure::config::settings::Config;

/// Immobot - new-ad alerts for an Immobiliare saved search.
#[derive(Parser, Debug, Default)]
#[command(name = "immobot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Fetch and diff, but do not update the database or send a message
    #[arg(long)]
    pub dry_run: bool,

    /// Path to the ads database (overrides IMMOBOT_DB_PATH)
    #[arg(long, value_name = "PATH")]
    pub state_file: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of the environment config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.state_file {
            config.store_path.clone_from(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["immobot", "--dry-run", "--state-file", "/tmp/ads.json"])
            .unwrap();
        assert!(cli.dry_run);
        assert_eq!(cli.state_file, Some(PathBuf::from("/tmp/ads.json")));
    }

    #[test]
    fn no_flags_means_live_run() {
        let cli = Cli::try_parse_from(["immobot"]).unwrap();
        assert!(!cli.dry_run);
        assert!(cli.state_file.is_none());
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["immobot", "--loop"]).is_err());
    }
}
