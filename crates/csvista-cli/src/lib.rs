//! Shared CLI definitions for csvista.
//!
//! Used by the main application and by the build script (manpage) and
//! gen_docs binary (command-line-options markdown).

use clap::{CommandFactory, Parser};
use std::path::PathBuf;

const LONG_ABOUT: &str = "\
csvista renders an interactive insights dashboard for a CSV file: a row \
preview with per-column null counts and summary statistics, plus \
distribution, correlation, frequency, and time-series panels driven by \
automatic column-role detection. Text columns whose values all parse as \
dates are promoted to datetimes, so time-series plotting works on plain \
CSV exports without any schema hints.";

/// Command-line arguments for csvista
#[derive(Clone, Parser, Debug)]
#[command(
    name = "csvista",
    version,
    about = "CSV Insights in the Terminal",
    long_about = LONG_ABOUT
)]
pub struct Args {
    /// Path to the CSV file to open (plain or gzip-compressed).
    /// When omitted, the dashboard starts on a prompt asking for one
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Specify the delimiter to use when reading the file
    #[arg(long = "delimiter")]
    pub delimiter: Option<u8>,

    /// Specify that the file has no header row
    #[arg(long = "no-header", action)]
    pub no_header: bool,

    /// Skip this many lines before reading the header
    #[arg(long = "skip-lines")]
    pub skip_lines: Option<usize>,

    /// Skip this many rows after the header
    #[arg(long = "skip-rows")]
    pub skip_rows: Option<usize>,

    /// Number of rows to use when inferring the schema (default: 1000). Larger values reduce risk of wrong type (e.g. int then N/A)
    #[arg(long = "infer-schema-length", value_name = "N")]
    pub infer_schema_length: Option<usize>,

    /// Write a JSON profile of the file (shape, column roles, statistics, active panels) to this path and exit without starting the dashboard
    #[arg(long = "profile", value_name = "OUT", requires = "path")]
    pub profile: Option<PathBuf>,

    /// Enable debug mode to show operational information
    #[arg(long = "debug", action)]
    pub debug: bool,

    /// Generate default configuration file at ~/.config/csvista/config.toml
    #[arg(long = "generate-config", action)]
    pub generate_config: bool,

    /// Force overwrite existing config file when using --generate-config
    #[arg(long = "force", requires = "generate_config", action)]
    pub force: bool,
}

/// Escape `|` and newlines for use in markdown table cells.
fn escape_table_cell(s: &str) -> String {
    s.replace('|', "\\|").replace(['\n', '\r'], " ")
}

fn value_placeholder(arg: &clap::Arg) -> String {
    arg.get_value_names()
        .map(|names| {
            names
                .iter()
                .map(|n: &clap::builder::Str| format!("<{}>", n.as_ref() as &str))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}

/// Render command-line options as markdown.
///
/// Used by the gen_docs binary; the docs build writes the output to
/// `docs/reference/command-line-options.md` before mdbook runs.
pub fn render_options_markdown() -> String {
    let mut cmd = Args::command();
    cmd.build();

    let mut out = String::from("# Command Line Options\n\n");

    out.push_str("## Usage\n\n```\n");
    out.push_str(&cmd.render_usage().to_string());
    out.push_str("\n```\n\n");

    out.push_str("## Options\n\n");
    out.push_str("| Option | Description |\n");
    out.push_str("|--------|-------------|\n");

    for arg in cmd.get_arguments() {
        let id = arg.get_id().as_ref().to_string();
        if id == "help" || id == "version" {
            continue;
        }

        let option_str = if arg.is_positional() {
            let placeholder = value_placeholder(arg);
            if arg.is_required_set() {
                placeholder
            } else {
                format!("[{placeholder}]")
            }
        } else {
            let flag = arg
                .get_long()
                .map(|l| format!("--{l}"))
                .unwrap_or_else(|| id.clone());
            if arg.get_action().takes_values() {
                format!("{flag} {}", value_placeholder(arg))
            } else {
                flag
            }
        };

        let help = arg
            .get_help()
            .map(|h| escape_table_cell(&h.to_string()))
            .unwrap_or_else(|| "-".to_string());

        out.push_str(&format!("| `{option_str}` | {help} |\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_arguments() {
        let args = Args::try_parse_from(["csvista"]).unwrap();
        assert!(args.path.is_none());
        assert!(!args.no_header);
        assert!(args.profile.is_none());
    }

    #[test]
    fn test_parse_open_options() {
        let args = Args::try_parse_from([
            "csvista",
            "data.csv",
            "--delimiter",
            "59",
            "--no-header",
            "--skip-rows",
            "2",
            "--infer-schema-length",
            "500",
        ])
        .unwrap();
        assert_eq!(args.path.unwrap().to_str(), Some("data.csv"));
        assert_eq!(args.delimiter, Some(59));
        assert!(args.no_header);
        assert_eq!(args.skip_rows, Some(2));
        assert_eq!(args.infer_schema_length, Some(500));
    }

    #[test]
    fn test_profile_requires_path() {
        let result = Args::try_parse_from(["csvista", "--profile", "out.json"]);
        assert!(result.is_err());

        let args =
            Args::try_parse_from(["csvista", "data.csv", "--profile", "out.json"]).unwrap();
        assert_eq!(args.profile.unwrap().to_str(), Some("out.json"));
    }

    #[test]
    fn test_force_requires_generate_config() {
        let result = Args::try_parse_from(["csvista", "--force"]);
        assert!(result.is_err());

        let args = Args::try_parse_from(["csvista", "--generate-config", "--force"]).unwrap();
        assert!(args.generate_config);
        assert!(args.force);
    }

    #[test]
    fn test_options_markdown_lists_flags() {
        let md = render_options_markdown();
        assert!(md.contains("# Command Line Options"));
        assert!(md.contains("`--delimiter <DELIMITER>`"));
        assert!(md.contains("`--profile <OUT>`"));
        assert!(md.contains("`--generate-config`"));
        assert!(!md.contains("--help"));
    }
}
