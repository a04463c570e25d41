pub mod config;
pub mod dice;
pub mod shape;

pub use config::ConfigView;
pub use dice::{DiceRollView, ExportView, HistoryView, RollResultView, SessionNoticeView};
pub use shape::ShapeResultView;
