//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Monthly SEO report generator
#[derive(Parser, Debug)]
#[command(name = "seoreport")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the form server
    Serve {
        /// Address to bind, overriding `server.host`
        #[arg(long)]
        host: Option<String>,
        /// Port to bind, overriding `server.port`
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Render a report from a TOML submission file
    Render {
        /// Submission file
        submission: PathBuf,
        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },

    /// Show the reporting period for a month
    Period {
        /// Month name, e.g. "April" or "apr"
        month: String,
        /// Year, overriding `report.year`
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Configuration file operations
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,
    /// Print a value by dotted key, e.g. `server.port`
    Get {
        /// Dotted key
        key: String,
    },
    /// Set a value by dotted key in the config file
    Set {
        /// Dotted key
        key: String,
        /// New value
        value: String,
    },
    /// Write a default config file
    Init {
        /// Target file instead of the default location
        #[arg(short, long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the configuration as environment variables
    Export {
        /// Format as `--env KEY=VALUE` for `docker run`
        #[arg(long)]
        docker_env: bool,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let args = Args::try_parse_from(["seoreport", "render", "acme.toml", "--out", "out"]).unwrap();
        match args.command {
            Command::Render { submission, out } => {
                assert_eq!(submission, PathBuf::from("acme.toml"));
                assert_eq!(out, PathBuf::from("out"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_serve_overrides() {
        let args = Args::try_parse_from(["seoreport", "-v", "serve", "--port", "9000"]).unwrap();
        assert!(args.verbose);
        assert!(matches!(
            args.command,
            Command::Serve {
                host: None,
                port: Some(9000)
            }
        ));
    }

    #[test]
    fn test_parse_config_set() {
        let args =
            Args::try_parse_from(["seoreport", "config", "set", "report.year", "2026"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Config {
                action: ConfigAction::Set { .. }
            }
        ));
    }
}
