use crate::config::Config;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{Renderer, StatusBadge};
use anyhow::{Result, bail};

pub fn handle(ctx: &ExecutionContext, force: bool) -> Result<()> {
    let path = ctx.config_path();

    if path.exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let overwritten = path.exists();
    Config::default().save_to(path)?;
    log::info!("wrote default config to {}", path.display());

    let label = if overwritten {
        "Config overwritten with defaults"
    } else {
        "Config created"
    };
    let result = presenters::present_notice(format!("Wrote {}", path.display()))
        .with_badge(StatusBadge::success(label));
    ctx.renderer().render(result)
}
