//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Extract strings from the given resource scripts
//! - `scan`: Find resource scripts in a project and extract from all of them
//! - `init`: Initialize rcstrings configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's output args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.output.verbose,
            Some(Command::Scan(cmd)) => cmd.output.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Text,
    /// JSON output for tooling
    Json,
}

/// Output arguments shared by extracting commands.
#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Report each distinct string once (overrides config file)
    #[arg(long)]
    pub unique: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Resource script files to read
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Show line number, id and hint for every string
    #[arg(long)]
    pub context: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    /// Project root directory
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable strings from resource script files
    Extract(ExtractCommand),
    /// Find resource scripts in a project and extract their strings
    Scan(ScanCommand),
    /// Initialize a new .rcstringsrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
