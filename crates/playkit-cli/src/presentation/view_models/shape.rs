use playkit_engine::Plot;
use playkit_types::{Shape, ShapeMetrics};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::{CreateView, DisplayOptions};

#[derive(Debug, Serialize)]
pub struct ShapeResultViewModel {
    pub shape: Shape,
    pub valid: bool,
    pub metrics: Option<ShapeMetrics>,
    pub plot: Option<Plot>,
    pub svg_path: Option<PathBuf>,
}

impl CreateView for ShapeResultViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::shape::ShapeResultView;
        Box::new(ShapeResultView::new(self, options))
    }
}
