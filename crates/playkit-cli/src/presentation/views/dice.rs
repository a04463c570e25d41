use std::fmt;

use crate::presentation::formatters::{Painter, format_mean, format_timestamp};
use crate::presentation::view_models::{
    DiceRollViewModel, DisplayOptions, ExportViewModel, HistoryViewModel, RollResultViewModel,
    SessionNoticeViewModel,
};

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{} {}", n, word)
    } else {
        format!("{} {}s", n, word)
    }
}

// --------------------------------------------------------
// Single Roll View
// --------------------------------------------------------

pub struct RollResultView<'a> {
    data: &'a RollResultViewModel,
    options: DisplayOptions,
}

impl<'a> RollResultView<'a> {
    pub fn new(data: &'a RollResultViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for RollResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let paint = Painter::new(self.options.color);
        let entry = &self.data.entry;

        writeln!(
            f,
            "Rolled {}d{}: {}",
            entry.dice_count,
            entry.sides,
            paint.value(&entry.results_label())
        )?;
        writeln!(f, "  {:<8} {}", "Total", entry.total)?;
        writeln!(f, "  {:<8} {}", "Average", format_mean(entry.average))?;

        writeln!(f, "{}", paint.heading("Distribution"))?;
        let width = entry.sides.to_string().len();
        for fc in self.data.distribution.iter().filter(|fc| fc.count > 0) {
            writeln!(
                f,
                "  {:>width$} | {} {}",
                fc.face,
                paint.accent(&"█".repeat(fc.count)),
                fc.count,
                width = width
            )?;
        }

        if self.data.saved {
            writeln!(
                f,
                "{}",
                paint.muted(&format!(
                    "Saved to history ({})",
                    plural(self.data.history_len, "roll")
                ))
            )?;
        } else {
            writeln!(f, "{}", paint.muted("Not saved (history saving is off)"))?;
        }

        Ok(())
    }
}

// --------------------------------------------------------
// History Table View
// --------------------------------------------------------

pub struct HistoryView<'a> {
    data: &'a HistoryViewModel,
    options: DisplayOptions,
}

impl<'a> HistoryView<'a> {
    pub fn new(data: &'a HistoryViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for HistoryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let paint = Painter::new(self.options.color);

        if self.data.entries.is_empty() {
            if self.data.save_enabled {
                writeln!(f, "History is empty.")?;
            } else {
                writeln!(f, "History is empty (saving is off).")?;
            }
            return Ok(());
        }

        let labels: Vec<String> = self.data.entries.iter().map(|e| e.results_label()).collect();
        let results_width = labels.iter().map(|l| l.len()).max().unwrap_or(0).max(7);

        writeln!(
            f,
            "{}",
            paint.heading(&format!(
                "History ({}, newest first)",
                plural(self.data.entries.len(), "roll")
            ))
        )?;
        writeln!(
            f,
            "{:<19}  {:<4}  {:<5}  {:<rw$}  {:<5}  AVERAGE",
            "TIMESTAMP",
            "DICE",
            "SIDES",
            "RESULTS",
            "TOTAL",
            rw = results_width
        )?;

        for (entry, label) in self.data.entries.iter().zip(&labels) {
            writeln!(
                f,
                "{:<19}  {:<4}  {:<5}  {:<rw$}  {:<5}  {}",
                format_timestamp(&entry.timestamp),
                entry.dice_count,
                entry.sides,
                label,
                entry.total,
                format_mean(entry.average),
                rw = results_width
            )?;
        }

        let stats = &self.data.stats;
        writeln!(
            f,
            "Rolls: {}  Dice: {}  Grand total: {}  Mean per die: {}",
            stats.rolls,
            stats.dice_thrown,
            stats.grand_total,
            format_mean(stats.mean_per_die)
        )?;

        Ok(())
    }
}

// --------------------------------------------------------
// Export View
// --------------------------------------------------------

pub struct ExportView<'a> {
    data: &'a ExportViewModel,
}

impl<'a> ExportView<'a> {
    pub fn new(data: &'a ExportViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ExportView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Exported {} to {}",
            plural(self.data.rows, "roll"),
            self.data.path.display()
        )
    }
}

// --------------------------------------------------------
// One-shot Roll View (roll + history + export)
// --------------------------------------------------------

pub struct DiceRollView<'a> {
    data: &'a DiceRollViewModel,
    options: DisplayOptions,
}

impl<'a> DiceRollView<'a> {
    pub fn new(data: &'a DiceRollViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for DiceRollView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", RollResultView::new(&self.data.latest, self.options))?;
        writeln!(f)?;
        write!(f, "{}", HistoryView::new(&self.data.history, self.options))?;

        if let Some(export) = &self.data.export {
            write!(f, "{}", ExportView::new(export))?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Session Notice View
// --------------------------------------------------------

pub struct SessionNoticeView<'a> {
    data: &'a SessionNoticeViewModel,
}

impl<'a> SessionNoticeView<'a> {
    pub fn new(data: &'a SessionNoticeViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for SessionNoticeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.message)
    }
}
