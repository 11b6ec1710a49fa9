//! Command-line interface and the validated run configuration.
//!
//! [`Cli`] is what clap parses; [`Config`] is what the rest of the program
//! consumes. The conversion happens once at startup and rejects values clap
//! alone cannot catch.

use crate::error::NprError;
use crate::npr::DEFAULT_BATCH_SIZE;
use clap::Parser;
use std::path::PathBuf;

/// Export every episode of an NPR show to a CSV file.
///
/// # Examples
///
/// ```sh
/// npr_show_export -k YOUR_KEY -s "fresh air" -f fresh_air.csv
///
/// # key from the environment, smaller pages
/// NPR_API_KEY=YOUR_KEY npr_show_export -s "car talk" -f car_talk.csv -b 10
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// NPR API key
    #[arg(short = 'k', long, env = "NPR_API_KEY")]
    pub api_key: String,

    /// Show name (partial, case-insensitive match)
    #[arg(short, long)]
    pub show_name: String,

    /// Output CSV filename
    #[arg(short, long)]
    pub filename: PathBuf,

    /// Number of stories requested per page
    #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: u32,

    /// Log and skip stories missing a required element instead of aborting
    #[arg(long)]
    pub skip_malformed: bool,
}

/// Settings for one export run.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub show_name: String,
    pub filename: PathBuf,
    pub batch_size: u32,
    pub skip_malformed: bool,
}

impl TryFrom<Cli> for Config {
    type Error = NprError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if cli.api_key.trim().is_empty() {
            return Err(NprError::Config("api_key must not be empty".into()));
        }
        if cli.show_name.trim().is_empty() {
            return Err(NprError::Config("show_name must not be empty".into()));
        }
        if cli.filename.as_os_str().is_empty() {
            return Err(NprError::Config("filename must not be empty".into()));
        }
        if cli.batch_size == 0 {
            return Err(NprError::Config("batch_size must be at least 1".into()));
        }

        Ok(Self {
            api_key: cli.api_key,
            show_name: cli.show_name,
            filename: cli.filename,
            batch_size: cli.batch_size,
            skip_malformed: cli.skip_malformed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "npr_show_export",
            "--api-key",
            "KEY",
            "--show-name",
            "fresh",
            "--filename",
            "out.csv",
        ]);

        assert_eq!(cli.api_key, "KEY");
        assert_eq!(cli.show_name, "fresh");
        assert_eq!(cli.filename, PathBuf::from("out.csv"));
        assert_eq!(cli.batch_size, 20);
        assert!(!cli.skip_malformed);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "npr_show_export",
            "-k",
            "KEY",
            "-s",
            "Car Talk",
            "-f",
            "/tmp/car.csv",
            "-b",
            "5",
        ]);

        assert_eq!(cli.show_name, "Car Talk");
        assert_eq!(cli.filename, PathBuf::from("/tmp/car.csv"));
        assert_eq!(cli.batch_size, 5);
    }

    #[test]
    fn test_cli_missing_show_name_is_named() {
        let err = Cli::try_parse_from(["npr_show_export", "-k", "KEY", "-f", "out.csv"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.to_string().contains("--show-name"));
    }

    #[test]
    fn test_cli_missing_filename_is_named() {
        let err = Cli::try_parse_from(["npr_show_export", "-k", "KEY", "-s", "fresh"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.to_string().contains("--filename"));
    }

    fn cli(batch_size: u32, show_name: &str) -> Cli {
        Cli {
            api_key: "KEY".into(),
            show_name: show_name.into(),
            filename: PathBuf::from("out.csv"),
            batch_size,
            skip_malformed: false,
        }
    }

    #[test]
    fn test_config_accepts_valid_cli() {
        let config = Config::try_from(cli(20, "fresh")).unwrap();
        assert_eq!(config.batch_size, 20);
        assert_eq!(config.show_name, "fresh");
    }

    #[test]
    fn test_config_rejects_zero_batch_size() {
        let err = Config::try_from(cli(0, "fresh")).unwrap_err();
        assert!(matches!(err, NprError::Config(msg) if msg.contains("batch_size")));
    }

    #[test]
    fn test_config_rejects_blank_show_name() {
        let err = Config::try_from(cli(20, "   ")).unwrap_err();
        assert!(matches!(err, NprError::Config(msg) if msg.contains("show_name")));
    }
}
