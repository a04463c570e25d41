use playkit_engine::{FaceCount, HistoryStats};
use playkit_types::RollEntry;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::{CreateView, DisplayOptions};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct RollResultViewModel {
    pub entry: RollEntry,
    pub distribution: Vec<FaceCount>,
    pub saved: bool,
    pub history_len: usize,
}

#[derive(Debug, Serialize)]
pub struct HistoryViewModel {
    pub save_enabled: bool,
    pub entries: Vec<RollEntry>,
    pub stats: HistoryStats,
}

#[derive(Debug, Serialize)]
pub struct ExportViewModel {
    pub path: PathBuf,
    pub rows: usize,
}

#[derive(Debug, Serialize)]
pub struct DiceRollViewModel {
    pub rolled: usize,
    pub latest: RollResultViewModel,
    pub history: HistoryViewModel,
    pub export: Option<ExportViewModel>,
}

#[derive(Debug, Serialize)]
pub struct SessionNoticeViewModel {
    pub message: String,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for RollResultViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::dice::RollResultView;
        Box::new(RollResultView::new(self, options))
    }
}

impl CreateView for HistoryViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::dice::HistoryView;
        Box::new(HistoryView::new(self, options))
    }
}

impl CreateView for ExportViewModel {
    fn create_view<'a>(&'a self, _options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::dice::ExportView;
        Box::new(ExportView::new(self))
    }
}

impl CreateView for DiceRollViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::dice::DiceRollView;
        Box::new(DiceRollView::new(self, options))
    }
}

impl CreateView for SessionNoticeViewModel {
    fn create_view<'a>(&'a self, _options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::dice::SessionNoticeView;
        Box::new(SessionNoticeView::new(self))
    }
}
