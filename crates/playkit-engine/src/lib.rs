// Engine module - Core processing logic (geometry, plotting, dice, export)
// This layer sits between the domain types and CLI presentation

pub mod dice;
pub mod error;
pub mod export;
pub mod geometry;
pub mod history;
pub mod plot;
pub mod svg;

pub use dice::{FaceCount, create_rng, distribution, roll, roll_entry};
pub use error::{Error, Result};
pub use export::{to_csv_string, write_csv, write_csv_file};
pub use geometry::compute;
pub use history::{DiceSession, HistoryStats, RollHistory};
pub use plot::{Plot, Point, Primitive, Viewport, plot_for, title_for};
pub use svg::{SvgDocument, render_svg, write_svg};

use playkit_types::{Shape, ShapeMetrics};

// Façade API - Stable public interface for CLI layer

/// Metrics and drawing of one shape, both or neither
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeReport {
    pub shape: Shape,
    pub metrics: ShapeMetrics,
    pub plot: Plot,
}

/// Validates, measures and plots a shape in one pass
pub fn analyze_shape(shape: Shape) -> Result<ShapeReport> {
    let metrics = compute(&shape)?;
    let plot = plot_for(&shape)?;
    Ok(ShapeReport {
        shape,
        metrics,
        plot,
    })
}
