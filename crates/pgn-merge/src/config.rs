//! Command-line and environment configuration

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::chapter::Splitter;
use crate::error::MergeError;
use crate::writer::default_output_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// PGN chapters with placeholder headers
    Text,
    /// JSON array of chapter trees
    Json,
}

/// Strip commentary from a PGN file and merge its games into chapters of
/// variation trees.
#[derive(Debug, Parser)]
#[command(name = "pgn-merge", version, about)]
pub struct Cli {
    /// Source PGN file
    pub input: PathBuf,

    /// Grouping rule: 'w' (by White), 'b' (by Black), 'a' (all games) or
    /// counts such as '5:2:4'
    #[arg(short, long, env = "PGN_MERGE_SPLITTER", default_value = "w")]
    pub splitter: String,

    /// Destination file [default: <input stem>_edited.pgn, or .json with --format json]
    #[arg(short, long, env = "PGN_MERGE_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Also write the cleaned games and per-chapter files into this directory
    #[arg(long, env = "PGN_MERGE_CLEANED_DIR")]
    pub cleaned_dir: Option<PathBuf>,

    /// Reject variations that are opened but never closed
    #[arg(long, env = "PGN_MERGE_STRICT")]
    pub strict: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Debug)]
pub struct MergeConfig {
    pub input: PathBuf,
    pub splitter: Splitter,
    pub output: PathBuf,
    pub cleaned_dir: Option<PathBuf>,
    pub strict: bool,
    pub format: OutputFormat,
}

impl MergeConfig {
    pub fn from_cli(cli: Cli) -> Result<Self, MergeError> {
        let splitter = cli.splitter.parse()?;
        let output = cli.output.unwrap_or_else(|| match cli.format {
            OutputFormat::Text => default_output_name(&cli.input),
            OutputFormat::Json => default_output_name(&cli.input).with_extension("json"),
        });

        Ok(Self {
            input: cli.input,
            splitter,
            output,
            cleaned_dir: cli.cleaned_dir,
            strict: cli.strict,
            format: cli.format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let cli = Cli::try_parse_from(["pgn-merge", "games/club.pgn"]).unwrap();
        let config = MergeConfig::from_cli(cli).unwrap();
        assert_eq!(config.splitter, Splitter::White);
        assert_eq!(config.output, PathBuf::from("club_edited.pgn"));
        assert!(!config.strict);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_config_overrides() {
        let cli = Cli::try_parse_from([
            "pgn-merge",
            "club.pgn",
            "--splitter",
            "2:3",
            "--output",
            "out/merged.pgn",
            "--strict",
            "--format",
            "json",
        ])
        .unwrap();
        let config = MergeConfig::from_cli(cli).unwrap();
        assert_eq!(config.splitter, Splitter::Counts(vec![2, 3]));
        assert_eq!(config.output, PathBuf::from("out/merged.pgn"));
        assert!(config.strict);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_config_json_default_output() {
        let cli = Cli::try_parse_from(["pgn-merge", "club.pgn", "--format", "json"]).unwrap();
        let config = MergeConfig::from_cli(cli).unwrap();
        assert_eq!(config.output, PathBuf::from("club_edited.json"));

        // An explicit name is left alone.
        let cli = Cli::try_parse_from(["pgn-merge", "club.pgn", "--format", "json", "-o", "x.pgn"])
            .unwrap();
        assert_eq!(MergeConfig::from_cli(cli).unwrap().output, PathBuf::from("x.pgn"));
    }

    #[test]
    fn test_config_rejects_bad_splitter() {
        let cli = Cli::try_parse_from(["pgn-merge", "club.pgn", "-s", "nope"]).unwrap();
        assert!(matches!(
            MergeConfig::from_cli(cli),
            Err(MergeError::InvalidSplitter(_))
        ));
    }
}
