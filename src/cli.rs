use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "autoload-cache-generator")]
#[command(author, version, about = "Build a class-to-file cache for PHP autoloading")]
#[command(long_about = "Scan a PHP source tree for class, interface and trait declarations \
    and keep a JSON cache mapping each fully-qualified name to its file.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Generation or resolution failed\n  \
    2 - Configuration error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a directory and update the cache
    Generate(GenerateArgs),

    /// Look up the file declaring a type in an existing cache
    Resolve(ResolveArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Directory of class files
    // Optional here so a missing directory is reported with the other
    // validation errors.
    pub directory: Option<PathBuf>,

    /// Use <FILE> for the cache [default: classes.cache.json]
    #[arg(short, long, value_name = "FILE")]
    pub filename: Option<String>,

    /// Use <REGEX> to select files [default: /^.+\.php$/i]
    #[arg(short, long = "regexfilter", value_name = "REGEX")]
    pub regex_filter: Option<String>,

    /// Path to configuration file (defaults to <DIRECTORY>/.autoload-cache.toml)
    #[arg(long, value_name = "FILE", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Print the resulting cache to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Fully-qualified type name, e.g. App\Model\User
    pub name: String,

    /// Cache file to read
    #[arg(short, long, value_name = "FILE", default_value = crate::store::DEFAULT_CACHE_FILENAME)]
    pub filename: PathBuf,

    /// Fail when the name is unknown or its file is missing
    #[arg(long)]
    pub strict: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
