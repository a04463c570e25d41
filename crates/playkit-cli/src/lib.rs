// playkit: two small classroom widgets behind one CLI.
//
// `shape` measures and draws a triangle, rectangle or circle.
// `dice` rolls dice, keeps a newest-first history for the session and
// exports it as CSV. The two share nothing but the config file.

mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, DiceCommand, ShapeCommand};
pub use commands::run;
