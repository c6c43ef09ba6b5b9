//! Command-line argument parsing for the sketchbook.
//!
//! Uses clap to parse CLI arguments. The one positional argument carries the
//! command string, either as a full URL with a fragment or as the fragment
//! itself.

use clap::Parser;
use std::path::PathBuf;
use url::Url;

/// Output format for registry listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text, one sketch per line.
    #[default]
    Text,
    /// JSON output with the full registry entries.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {s}. Expected: text or json")),
        }
    }
}

/// Runs sketches named by URL-fragment command strings.
#[derive(Parser, Debug)]
#[command(name = "sketchbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// URL or fragment carrying the command string (e.g., '#initial' or a full URL)
    #[arg(value_name = "INPUT", required_unless_present = "list")]
    pub input: Option<String>,

    /// Config file path
    #[arg(long, value_name = "PATH", env = "SKETCHBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// List the registered sketches and exit
    #[arg(long)]
    pub list: bool,

    /// Output format for --list
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub output: String,

    /// Print the page title to stdout instead of retitling the terminal
    #[arg(long)]
    pub plain: bool,
}

/// Extracts the fragment from the CLI input.
///
/// A full URL yields its fragment (empty when it has none); anything that is
/// not a URL is taken to be the fragment itself, with or without the leading
/// `#`. Inputs starting with `#` are never URLs, so a `#` prefix forces
/// fragment interpretation.
pub fn fragment_from_input(input: &str) -> String {
    match Url::parse(input) {
        Ok(url) => url.fragment().unwrap_or_default().to_string(),
        Err(_) => input.to_string(),
    }
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::config::Config::default_path)
    }

    /// The fragment to dispatch, extracted from the positional input.
    pub fn fragment(&self) -> Option<String> {
        self.input.as_deref().map(fragment_from_input)
    }

    /// Parses the output format from the --output argument.
    pub fn parse_output_format(&self) -> std::result::Result<OutputFormat, String> {
        self.output.parse()
    }
}
