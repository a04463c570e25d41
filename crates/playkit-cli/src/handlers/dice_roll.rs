use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use chrono::Utc;
use playkit_engine::{DiceSession, create_rng, write_csv_file};
use playkit_types::DiceSpec;
use std::path::PathBuf;

/// Dice settings from the flags, falling back to the `[dice]` config table
pub fn resolve_spec(
    ctx: &ExecutionContext,
    count: Option<u32>,
    sides: Option<u32>,
) -> Result<DiceSpec> {
    let defaults = ctx.config().default_dice()?;
    let spec = DiceSpec::new(
        count.unwrap_or(defaults.count),
        sides.unwrap_or(defaults.sides),
    )?;
    Ok(spec)
}

pub fn handle(
    ctx: &ExecutionContext,
    count: Option<u32>,
    sides: Option<u32>,
    times: u32,
    seed: Option<u64>,
    no_save: bool,
    export: Option<PathBuf>,
) -> Result<()> {
    let spec = resolve_spec(ctx, count, sides)?;
    let save_enabled = ctx.config().dice.save_history && !no_save;
    log::debug!(
        "rolling {}d{} x{} (seed: {:?}, saving: {})",
        spec.count,
        spec.sides,
        times,
        seed,
        save_enabled
    );

    let mut rng = create_rng(seed);
    let mut session = DiceSession::new(spec, save_enabled);

    let mut latest = session.roll(&mut rng, Utc::now());
    for _ in 1..times {
        latest = session.roll(&mut rng, Utc::now());
    }

    let history = session.history();
    let export_info = match &export {
        Some(path) => {
            if !save_enabled {
                log::warn!("history saving is off; {} will only hold the header", path.display());
            }
            write_csv_file(path, history.entries())
                .with_context(|| format!("Failed to export CSV to {}", path.display()))?;
            log::info!("exported {} rows to {}", history.len(), path.display());
            Some((path.as_path(), history.len()))
        }
        None => None,
    };

    ctx.renderer().render(presenters::present_dice_roll(
        latest,
        times as usize,
        history,
        save_enabled,
        export_info,
    ))
}
