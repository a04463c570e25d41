use clap::Subcommand;
use playkit_types::range::{
    CIRCLE_RADIUS, RECTANGLE_HEIGHT, RECTANGLE_WIDTH, TRIANGLE_SIDE_A, TRIANGLE_SIDE_B,
    TRIANGLE_SIDE_C,
};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Compute area and perimeter of a shape and draw it")]
    Shape {
        #[command(subcommand)]
        command: ShapeCommand,
    },

    #[command(about = "Roll dice and track the session history")]
    Dice {
        #[command(subcommand)]
        command: DiceCommand,
    },

    #[command(about = "Inspect or create the configuration file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ShapeCommand {
    #[command(about = "Triangle from three side lengths (Heron's formula)")]
    Triangle {
        #[arg(long, default_value_t = TRIANGLE_SIDE_A.default, help = "Side a (BC), 0.5 to 20")]
        a: f64,

        #[arg(long, default_value_t = TRIANGLE_SIDE_B.default, help = "Side b (CA), 0.5 to 20")]
        b: f64,

        #[arg(long, default_value_t = TRIANGLE_SIDE_C.default, help = "Side c (AB), 0.5 to 20")]
        c: f64,

        #[arg(long, help = "Write the drawing to an SVG file")]
        svg: Option<PathBuf>,
    },

    #[command(about = "Axis-aligned rectangle")]
    Rectangle {
        #[arg(long, default_value_t = RECTANGLE_WIDTH.default, help = "Width, 0.5 to 30")]
        width: f64,

        #[arg(long, default_value_t = RECTANGLE_HEIGHT.default, help = "Height, 0.5 to 30")]
        height: f64,

        #[arg(long, help = "Write the drawing to an SVG file")]
        svg: Option<PathBuf>,
    },

    #[command(about = "Circle centred at the origin")]
    Circle {
        #[arg(long, default_value_t = CIRCLE_RADIUS.default, help = "Radius, 0.1 to 15")]
        radius: f64,

        #[arg(long, help = "Write the drawing to an SVG file")]
        svg: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum DiceCommand {
    #[command(about = "Roll one or more times and print the history")]
    Roll {
        #[arg(long, help = "Number of dice, 1 to 20 [default: from config]")]
        count: Option<u32>,

        #[arg(long, help = "Faces per die, 2 to 100 [default: from config]")]
        sides: Option<u32>,

        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..=1000))]
        times: u32,

        #[arg(long, help = "Seed for a reproducible sequence")]
        seed: Option<u64>,

        #[arg(long, help = "Do not record rolls in the history")]
        no_save: bool,

        #[arg(long, help = "Write the history to a CSV file")]
        export: Option<PathBuf>,
    },

    #[command(about = "Interactive session reading commands from stdin")]
    Session {
        #[arg(long, help = "Number of dice, 1 to 20 [default: from config]")]
        count: Option<u32>,

        #[arg(long, help = "Faces per die, 2 to 100 [default: from config]")]
        sides: Option<u32>,

        #[arg(long, help = "Seed for a reproducible sequence")]
        seed: Option<u64>,

        #[arg(long, help = "Start with history saving turned off")]
        no_save: bool,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write a config file with default values")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
