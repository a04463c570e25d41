use crate::config::Config;
use crate::presentation::{ConsoleRenderer, DisplayOptions};
use crate::types::OutputFormat;
use std::path::{Path, PathBuf};

/// Everything a handler needs besides its own arguments
pub struct ExecutionContext {
    config_path: PathBuf,
    config: Config,
    pub format: OutputFormat,
    pub color: bool,
}

impl ExecutionContext {
    pub fn new(config_path: PathBuf, config: Config, format: OutputFormat, color: bool) -> Self {
        Self {
            config_path,
            config,
            format,
            color,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            color: self.color,
            precision: self.config.display.precision,
        }
    }

    pub fn renderer(&self) -> ConsoleRenderer {
        ConsoleRenderer::new(self.format == OutputFormat::Json, self.display_options())
    }
}
