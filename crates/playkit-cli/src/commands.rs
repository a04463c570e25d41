use super::args::{Cli, Commands, ConfigCommand, DiceCommand, ShapeCommand};
use super::handlers;
use crate::config::{Config, resolve_config_path};
use crate::context::ExecutionContext;
use crate::logging;
use anyhow::Result;
use is_terminal::IsTerminal;
use playkit_types::Shape;

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;

    // Logging comes up before the config is parsed so load failures are
    // reported; its color follows the flag or stderr alone.
    let stderr_color = cli
        .color
        .unwrap_or_default()
        .enabled(std::io::stderr().is_terminal());
    logging::init(cli.log_level, stderr_color);

    log::debug!("using config path {}", config_path.display());
    let config = Config::load_from(&config_path)?;

    let color = cli
        .color
        .unwrap_or(config.display.color)
        .enabled(std::io::stdout().is_terminal());
    let ctx = ExecutionContext::new(config_path, config, cli.format, color);

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    match command {
        Commands::Shape { command } => match command {
            ShapeCommand::Triangle { a, b, c, svg } => {
                handlers::shape::handle(&ctx, Shape::Triangle { a, b, c }, svg)
            }
            ShapeCommand::Rectangle { width, height, svg } => {
                handlers::shape::handle(&ctx, Shape::Rectangle { width, height }, svg)
            }
            ShapeCommand::Circle { radius, svg } => {
                handlers::shape::handle(&ctx, Shape::Circle { radius }, svg)
            }
        },

        Commands::Dice { command } => match command {
            DiceCommand::Roll {
                count,
                sides,
                times,
                seed,
                no_save,
                export,
            } => handlers::dice_roll::handle(&ctx, count, sides, times, seed, no_save, export),
            DiceCommand::Session {
                count,
                sides,
                seed,
                no_save,
            } => handlers::dice_session::handle(&ctx, count, sides, seed, no_save),
        },

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config_show::handle(&ctx),
            ConfigCommand::Init { force } => handlers::config_init::handle(&ctx, force),
        },
    }
}

fn show_guidance() {
    println!("playkit - shape geometry explorer and dice roller\n");
    println!("Quick commands:");
    println!("  playkit shape triangle --a 3 --b 4 --c 5   # Area and perimeter via Heron's formula");
    println!("  playkit shape circle --radius 3 --svg c.svg  # Draw a circle to an SVG file");
    println!("  playkit dice roll --count 2 --sides 6      # Roll two six-sided dice");
    println!("  playkit dice session                       # Interactive roll history\n");
    println!("For more commands:");
    println!("  playkit --help");
}
