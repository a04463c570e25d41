use std::fmt;

use playkit_engine::{Plot, Point, Primitive};

use crate::presentation::formatters::{Painter, format_fixed};
use crate::presentation::view_models::{DisplayOptions, ShapeResultViewModel};

/// Plot coordinates always use two decimals, like the titles
fn coord(p: Point) -> String {
    format!("({}, {})", format_fixed(p.x, 2), format_fixed(p.y, 2))
}

fn write_plot(f: &mut fmt::Formatter, paint: &Painter, plot: &Plot) -> fmt::Result {
    writeln!(f, "{}", paint.heading("Plot"))?;

    match &plot.primitive {
        Primitive::Polyline { points } => {
            // Closed outline: skip the repeated first point
            let vertices: Vec<String> = points
                .iter()
                .take(points.len().saturating_sub(1).max(1))
                .map(|p| coord(*p))
                .collect();
            writeln!(f, "  {:<10} {}", "Vertices", vertices.join(" "))?;
        }
        Primitive::Circle { center, radius } => {
            writeln!(
                f,
                "  {:<10} {}  radius {}",
                "Center",
                coord(*center),
                format_fixed(*radius, 2)
            )?;
        }
    }

    let vp = plot.viewport;
    writeln!(
        f,
        "  {:<10} x {}..{}, y {}..{}",
        "Viewport",
        format_fixed(vp.x_min, 2),
        format_fixed(vp.x_max, 2),
        format_fixed(vp.y_min, 2),
        format_fixed(vp.y_max, 2)
    )
}

// --------------------------------------------------------
// Shape Result View
// --------------------------------------------------------

pub struct ShapeResultView<'a> {
    data: &'a ShapeResultViewModel,
    options: DisplayOptions,
}

impl<'a> ShapeResultView<'a> {
    pub fn new(data: &'a ShapeResultViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for ShapeResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let paint = Painter::new(self.options.color);
        let title = playkit_engine::title_for(&self.data.shape);

        writeln!(f, "{}", paint.bold(&title))?;
        writeln!(f)?;
        writeln!(f, "{}", paint.heading("Results"))?;

        let Some(metrics) = &self.data.metrics else {
            writeln!(f, "  {}", paint.warn("Not a valid shape."))?;
            return Ok(());
        };

        let area = format_fixed(metrics.area, self.options.precision);
        let perimeter = format_fixed(metrics.perimeter, self.options.precision);

        writeln!(f, "  {:<10} {}", "Area", paint.value(&area))?;
        writeln!(f, "  {:<10} {}", "Perimeter", paint.value(&perimeter))?;
        writeln!(f)?;
        writeln!(
            f,
            "{} area = {}, perimeter = {}",
            paint.bold("Summary:"),
            area,
            perimeter
        )?;

        if let Some(plot) = &self.data.plot {
            writeln!(f)?;
            write_plot(f, &paint, plot)?;
        }

        if let Some(path) = &self.data.svg_path {
            writeln!(f, "Drawing saved to {}", paint.accent(&path.display().to_string()))?;
        }

        Ok(())
    }
}
