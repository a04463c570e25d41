use playkit_engine::{RollHistory, distribution};
use playkit_types::RollEntry;
use std::path::Path;

use crate::presentation::view_models::{
    CommandResultViewModel, DiceRollViewModel, ExportViewModel, Guidance, HistoryViewModel,
    RollResultViewModel, SessionNoticeViewModel, StatusBadge,
};

fn roll_result(entry: RollEntry, saved: bool, history_len: usize) -> RollResultViewModel {
    RollResultViewModel {
        distribution: distribution(&entry.results, entry.sides),
        entry,
        saved,
        history_len,
    }
}

fn history_view_model(history: &RollHistory, save_enabled: bool) -> HistoryViewModel {
    HistoryViewModel {
        save_enabled,
        entries: history.entries().to_vec(),
        stats: history.stats(),
    }
}

pub fn present_roll(
    entry: RollEntry,
    saved: bool,
    history_len: usize,
) -> CommandResultViewModel<RollResultViewModel> {
    CommandResultViewModel::new(roll_result(entry, saved, history_len))
}

pub fn present_history(
    history: &RollHistory,
    save_enabled: bool,
) -> CommandResultViewModel<HistoryViewModel> {
    CommandResultViewModel::new(history_view_model(history, save_enabled))
}

pub fn present_dice_roll(
    latest: RollEntry,
    rolled: usize,
    history: &RollHistory,
    save_enabled: bool,
    export: Option<(&Path, usize)>,
) -> CommandResultViewModel<DiceRollViewModel> {
    let content = DiceRollViewModel {
        rolled,
        latest: roll_result(latest, save_enabled, history.len()),
        history: history_view_model(history, save_enabled),
        export: export.map(|(path, rows)| ExportViewModel {
            path: path.to_path_buf(),
            rows,
        }),
    };

    let mut result = CommandResultViewModel::new(content);

    if result.content.export.is_none() && !history.is_empty() {
        result = result.with_suggestion(
            Guidance::new("Save the history as CSV").with_command("playkit dice roll --export rolls.csv"),
        );
    }
    if !save_enabled {
        result = result.with_badge(StatusBadge::info("History saving is off"));
    }

    result
}

pub fn present_export(path: &Path, rows: usize) -> CommandResultViewModel<ExportViewModel> {
    CommandResultViewModel::new(ExportViewModel {
        path: path.to_path_buf(),
        rows,
    })
    .with_badge(StatusBadge::success("Export complete"))
}

pub fn present_notice(message: impl Into<String>) -> CommandResultViewModel<SessionNoticeViewModel> {
    CommandResultViewModel::new(SessionNoticeViewModel {
        message: message.into(),
    })
}
