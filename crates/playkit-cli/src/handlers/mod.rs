pub mod config_init;
pub mod config_show;
pub mod dice_roll;
pub mod dice_session;
pub mod shape;
