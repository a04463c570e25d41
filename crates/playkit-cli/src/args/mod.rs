// Commands are namespaced by tool (shape, dice) so each widget keeps its
// own controls in --help.

mod commands;

pub use commands::*;

use crate::types::{ColorChoice, LogLevel, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "playkit")]
#[command(about = "Explore shape geometry and roll dice from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Path to config.toml (overrides PLAYKIT_CONFIG)")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Colorize output [default: from config]")]
    pub color: Option<ColorChoice>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
