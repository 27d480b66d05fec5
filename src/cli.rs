use std::path::PathBuf;

use clap::Parser;

/// Generate base16 Vim and shell color schemes from a terminal.sexy export.
#[derive(Parser, Debug)]
#[command(name = "base16-themer", version, about)]
pub struct Args {
    /// base16 JSON file exported from https://terminal.sexy
    #[arg(short, long)]
    pub file: PathBuf,

    /// Neovim color scheme directory (relative to the home directory)
    #[arg(long)]
    pub neovim_out: Option<PathBuf>,

    /// base16-shell scripts directory (relative to the home directory)
    #[arg(long)]
    pub terminal_out: Option<PathBuf>,

    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print one generated script to stdout instead of writing files
    #[arg(long, value_enum)]
    pub print: Option<Target>,

    /// Print a colored terminal preview of the palette to stderr
    #[arg(long)]
    pub preview: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Target {
    Vim,
    Shell,
}
