use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use playkit_engine::{analyze_shape, write_svg};
use playkit_types::Shape;
use std::path::PathBuf;

pub fn handle(ctx: &ExecutionContext, shape: Shape, svg: Option<PathBuf>) -> Result<()> {
    let renderer = ctx.renderer();

    match analyze_shape(shape) {
        Ok(report) => {
            if let Some(path) = &svg {
                write_svg(path, &report.plot)
                    .with_context(|| format!("Failed to write SVG to {}", path.display()))?;
                log::info!("wrote {} drawing to {}", shape.kind(), path.display());
            }
            renderer.render(presenters::present_shape_report(report, svg.as_deref()))
        }
        Err(err) if err.is_invalid_triangle() => {
            log::warn!("{}", err);
            if let Some(path) = &svg {
                log::warn!("skipping SVG output {}", path.display());
            }
            renderer.render(presenters::present_invalid_shape(shape))
        }
        Err(err) => Err(err.into()),
    }
}
