use std::fmt;
use std::path::Path;

use kurbo::{Affine, BezPath, Circle, Shape as _};

use crate::error::Result;
use crate::plot::{Plot, Point, Primitive};

const CANVAS: f64 = 500.0;
const TITLE_BAND: f64 = 36.0;
const STROKE: &str = "#1f77b4";
const MARKER_RADIUS: f64 = 4.0;
const TOLERANCE: f64 = 0.01;

/// Maps data space (y up) onto the canvas (y down) at equal aspect
fn data_to_canvas(plot: &Plot) -> (Affine, f64) {
    let vp = plot.viewport;
    let scale = CANVAS / vp.width().max(vp.height());
    let affine = Affine::new([
        scale,
        0.0,
        0.0,
        -scale,
        -vp.x_min * scale,
        TITLE_BAND + vp.y_max * scale,
    ]);
    (affine, scale)
}

fn to_kurbo(p: Point) -> kurbo::Point {
    kurbo::Point::new(p.x, p.y)
}

/// Standalone SVG document for one plot
pub struct SvgDocument<'a> {
    plot: &'a Plot,
}

impl<'a> SvgDocument<'a> {
    pub fn new(plot: &'a Plot) -> Self {
        Self { plot }
    }

    fn write_outline(
        f: &mut fmt::Formatter<'_>,
        affine: Affine,
        points: &[Point],
    ) -> fmt::Result {
        let mut path = BezPath::new();
        for (i, p) in points.iter().enumerate() {
            if i == 0 {
                path.move_to(to_kurbo(*p));
            } else {
                path.line_to(to_kurbo(*p));
            }
        }
        path.apply_affine(affine);
        writeln!(
            f,
            r#"  <path d="{}" stroke="{}" stroke-width="2" fill="none" />"#,
            path.to_svg(),
            STROKE
        )?;

        // Polylines are closed, so the last point repeats the first
        let vertices = points.len().saturating_sub(1).max(1);
        for p in points.iter().take(vertices) {
            let marker = Circle::new(affine * to_kurbo(*p), MARKER_RADIUS);
            writeln!(
                f,
                r#"  <path d="{}" fill="{}" />"#,
                marker.to_path(TOLERANCE).to_svg(),
                STROKE
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plot = self.plot;
        let (affine, scale) = data_to_canvas(plot);
        let vp = plot.viewport;
        let width = vp.width() * scale;
        let height = vp.height() * scale + TITLE_BAND;

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.2} {h:.2}">"#,
            w = width,
            h = height,
        )?;
        writeln!(
            f,
            r#"  <rect x="0" y="0" width="{:.2}" height="{:.2}" fill="white" />"#,
            width, height
        )?;
        writeln!(
            f,
            r#"  <text x="{:.2}" y="{:.2}" text-anchor="middle" font-family="sans-serif" font-size="16">{}</text>"#,
            width / 2.0,
            TITLE_BAND * 0.65,
            plot.title
        )?;

        match &plot.primitive {
            Primitive::Polyline { points } => Self::write_outline(f, affine, points)?,
            Primitive::Circle { center, radius } => {
                let circle = Circle::new(affine * to_kurbo(*center), radius * scale);
                writeln!(
                    f,
                    r#"  <path d="{}" stroke="{}" stroke-width="2" fill="none" />"#,
                    circle.to_path(TOLERANCE).to_svg(),
                    STROKE
                )?;
            }
        }

        writeln!(f, "</svg>")
    }
}

pub fn render_svg(plot: &Plot) -> String {
    SvgDocument::new(plot).to_string()
}

pub fn write_svg(path: &Path, plot: &Plot) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_svg(plot))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::plot_for;
    use playkit_types::Shape;

    #[test]
    fn test_rectangle_svg_has_outline_and_markers() {
        let plot = plot_for(&Shape::Rectangle {
            width: 6.0,
            height: 4.0,
        })
        .unwrap();
        let svg = render_svg(&plot);

        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Rectangle: width=6.00, height=4.00"));
        // one outline plus four vertex markers
        assert_eq!(svg.matches("<path ").count(), 5);
    }

    #[test]
    fn test_circle_svg_has_single_path() {
        let plot = plot_for(&Shape::Circle { radius: 3.0 }).unwrap();
        let svg = render_svg(&plot);
        assert_eq!(svg.matches("<path ").count(), 1);
        assert!(svg.contains(r#"width="500""#));
    }

    #[test]
    fn test_origin_maps_inside_canvas() {
        let plot = plot_for(&Shape::Rectangle {
            width: 6.0,
            height: 4.0,
        })
        .unwrap();
        let (affine, scale) = data_to_canvas(&plot);
        let origin = affine * kurbo::Point::new(0.0, 0.0);

        assert!((origin.x - 1.2 * scale).abs() < 1e-9);
        assert!((origin.y - (TITLE_BAND + 5.2 * scale)).abs() < 1e-9);
    }

    #[test]
    fn test_document_streams_into_any_writer() {
        use std::io::Write as _;

        let plot = plot_for(&Shape::Triangle {
            a: 3.0,
            b: 4.0,
            c: 5.0,
        })
        .unwrap();
        let mut buf = Vec::new();
        write!(buf, "{}", SvgDocument::new(&plot)).unwrap();

        let streamed = String::from_utf8(buf).unwrap();
        assert_eq!(streamed, render_svg(&plot));
        // outline plus three vertex markers
        assert_eq!(streamed.matches("<path ").count(), 4);
    }

    #[test]
    fn test_write_svg_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.svg");
        let plot = plot_for(&Shape::Circle { radius: 1.0 }).unwrap();

        write_svg(&path, &plot).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Circle: radius=1.00"));
    }
}
