use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::{CreateView, DisplayOptions};
use crate::config::Config;

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: PathBuf,
    pub exists: bool,
    pub config: Config,
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, _options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::config::ConfigView;
        Box::new(ConfigView::new(self))
    }
}
