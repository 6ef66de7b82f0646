//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// PromptMatrix - style-preset prompt composer
#[derive(Parser, Debug)]
#[command(
    name = "pm",
    version,
    about = "Compose prompts from style presets and section overrides",
    after_help = "Logs are written to: ~/.local/share/promptmatrix/logs/promptmatrix.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available styles
    Styles,

    /// Show the defaults of one style
    Show {
        /// Style id
        #[arg(required = true)]
        style: String,
    },

    /// Compose a prompt
    Compose(ComposeArgs),

    /// Show or set the display theme
    Theme {
        /// Theme to apply (omit to show the current one)
        name: Option<String>,
    },
}

/// Field values and actions for `compose`
///
/// Flags win over values read from `--input`.
#[derive(clap::Args, Debug, Default)]
pub struct ComposeArgs {
    /// Style id (unknown ids are ignored)
    #[arg(short, long)]
    pub style: Option<String>,

    /// YAML file with a style and field values
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Short description of the task
    #[arg(short, long)]
    pub task: Option<String>,

    #[arg(long)]
    pub tone: Option<String>,

    #[arg(long)]
    pub audience: Option<String>,

    /// Replaces the style's system instruction
    #[arg(long)]
    pub system: Option<String>,

    /// Added to the User section
    #[arg(long)]
    pub user: Option<String>,

    #[arg(long, conflicts_with = "examples_file")]
    pub examples: Option<String>,

    /// Read examples from a file
    #[arg(long)]
    pub examples_file: Option<PathBuf>,

    /// Replaces the style's constraints
    #[arg(long)]
    pub constraints: Option<String>,

    /// Replaces the style's output-format hints
    #[arg(long)]
    pub output_format: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "plain")]
    pub format: OutputFormat,

    /// Copy the plain prompt to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Export the Markdown document (to DIR, or the configured export dir)
    #[arg(long, value_name = "DIR", num_args = 0..=1)]
    pub export: Option<Option<PathBuf>>,

    /// Print the active style and character count to stderr
    #[arg(long)]
    pub stats: bool,
}

/// Output format for `compose`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Plain,
    Markdown,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: plain, markdown, or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
        }
    }
}
