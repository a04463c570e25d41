pub mod config;
pub mod dice;
pub mod shape;

pub use config::present_config;
pub use dice::{present_dice_roll, present_export, present_history, present_notice, present_roll};
pub use shape::{present_invalid_shape, present_shape_report};
