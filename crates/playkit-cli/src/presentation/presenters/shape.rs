use playkit_engine::ShapeReport;
use playkit_types::{Shape, ShapeKind};
use std::path::Path;

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, ShapeResultViewModel, StatusBadge,
};

fn command_for(shape: &Shape) -> String {
    match *shape {
        Shape::Triangle { a, b, c } => {
            format!("playkit shape triangle --a {} --b {} --c {}", a, b, c)
        }
        Shape::Rectangle { width, height } => {
            format!("playkit shape rectangle --width {} --height {}", width, height)
        }
        Shape::Circle { radius } => format!("playkit shape circle --radius {}", radius),
    }
}

pub fn present_shape_report(
    report: ShapeReport,
    svg_path: Option<&Path>,
) -> CommandResultViewModel<ShapeResultViewModel> {
    let shape = report.shape;
    let content = ShapeResultViewModel {
        shape,
        valid: true,
        metrics: Some(report.metrics),
        plot: Some(report.plot),
        svg_path: svg_path.map(Path::to_path_buf),
    };

    let mut result = CommandResultViewModel::new(content);

    if svg_path.is_none() {
        let kind = shape.kind();
        result = result.with_suggestion(
            Guidance::new("Draw the shape as an SVG image")
                .with_command(format!("{} --svg {}.svg", command_for(&shape), kind)),
        );
    }

    result
}

/// Only triangles can fail validation once ranges pass, so the tip names
/// the longest side and what the other two add up to.
pub fn present_invalid_shape(shape: Shape) -> CommandResultViewModel<ShapeResultViewModel> {
    let content = ShapeResultViewModel {
        shape,
        valid: false,
        metrics: None,
        plot: None,
        svg_path: None,
    };

    let mut result = CommandResultViewModel::new(content).with_badge(StatusBadge::warning(
        "These lengths cannot form a triangle. Adjust the three values.",
    ));

    if let Shape::Triangle { a, b, c } = shape {
        let longest = a.max(b).max(c);
        let rest = a + b + c - longest;
        result = result.with_suggestion(
            Guidance::new(format!(
                "The longest side ({}) must be shorter than the other two combined ({})",
                longest, rest
            ))
            .with_command(command_for(&Shape::default_for(ShapeKind::Triangle))),
        );
    }

    result
}
