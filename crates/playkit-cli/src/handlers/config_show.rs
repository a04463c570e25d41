use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    ctx.renderer()
        .render(presenters::present_config(ctx.config_path(), ctx.config().clone()))
}
