use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use super::traits::Renderer;
use crate::presentation::formatters::Painter;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, DisplayOptions};

pub struct ConsoleRenderer {
    json_mode: bool,
    options: DisplayOptions,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, options: DisplayOptions) -> Self {
        Self { json_mode, options }
    }

    /// Renders into a string instead of stdout
    pub fn render_to_string<T>(&self, result: &CommandResultViewModel<T>) -> Result<String>
    where
        T: Serialize + CreateView,
    {
        if self.json_mode {
            return Ok(format!("{}\n", serde_json::to_string_pretty(result)?));
        }

        let paint = Painter::new(self.options.color);
        let mut out = String::new();

        if let Some(badge) = &result.badge {
            out.push_str(&format!("{} {}\n\n", badge.icon(), paint.bold(&badge.label)));
        }

        out.push_str(&result.content.create_view(self.options).to_string());

        if !result.suggestions.is_empty() {
            out.push_str(&format!("\n{}\n", paint.warn("💡 Tips:")));
            for tip in &result.suggestions {
                out.push_str(&format!("  • {}", tip.description));
                if let Some(cmd) = &tip.command {
                    out.push_str(&format!(": {}", paint.accent(cmd)));
                }
                out.push('\n');
            }
        }

        Ok(out)
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let text = self.render_to_string(&result)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
