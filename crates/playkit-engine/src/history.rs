use chrono::{DateTime, Utc};
use playkit_types::{DiceSpec, RollEntry};
use rand::Rng;
use serde::Serialize;

use crate::dice::roll_entry;

/// Roll log of one session, newest entry first
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RollHistory {
    entries: Vec<RollEntry>,
}

impl RollHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: RollEntry) {
        self.entries.insert(0, entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[RollEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&RollEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> HistoryStats {
        HistoryStats::from_entries(&self.entries)
    }
}

/// Aggregates across every entry of a history
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HistoryStats {
    pub rolls: usize,
    pub dice_thrown: usize,
    pub grand_total: u64,
    pub mean_per_die: f64,
}

impl HistoryStats {
    pub fn from_entries(entries: &[RollEntry]) -> Self {
        let rolls = entries.len();
        let dice_thrown: usize = entries.iter().map(|e| e.results.len()).sum();
        let grand_total: u64 = entries.iter().map(|e| e.total as u64).sum();
        let mean_per_die = if dice_thrown == 0 {
            0.0
        } else {
            grand_total as f64 / dice_thrown as f64
        };

        Self {
            rolls,
            dice_thrown,
            grand_total,
            mean_per_die,
        }
    }
}

/// Interactive dice state: the current settings, the save toggle and the
/// history they feed
#[derive(Debug, Clone)]
pub struct DiceSession {
    pub spec: DiceSpec,
    pub save_enabled: bool,
    history: RollHistory,
}

impl DiceSession {
    pub fn new(spec: DiceSpec, save_enabled: bool) -> Self {
        Self {
            spec,
            save_enabled,
            history: RollHistory::new(),
        }
    }

    pub fn history(&self) -> &RollHistory {
        &self.history
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Rolls with the current settings. The entry is always returned and
    /// only recorded when saving is enabled.
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R, now: DateTime<Utc>) -> RollEntry {
        let entry = roll_entry(self.spec, rng, now);
        if self.save_enabled {
            self.history.record(entry.clone());
        }
        entry
    }
}
