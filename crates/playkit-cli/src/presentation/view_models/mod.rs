pub mod common;
pub mod config;
pub mod dice;
pub mod result;
pub mod shape;

pub use common::{DisplayOptions, Guidance, StatusBadge, StatusLevel};
pub use config::ConfigViewModel;
pub use dice::{
    DiceRollViewModel, ExportViewModel, HistoryViewModel, RollResultViewModel,
    SessionNoticeViewModel,
};
pub use result::CommandResultViewModel;
pub use shape::ShapeResultViewModel;

use std::fmt;

/// Bridges a ViewModel to the text view that lays it out
pub trait CreateView {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a>;
}
