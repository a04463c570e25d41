use playkit_types::Shape;
use serde::Serialize;

use crate::error::Result;
use crate::geometry::validate_triangle;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// What gets drawn
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    /// Closed outline; the first point is repeated at the end
    Polyline { points: Vec<Point> },
    Circle { center: Point, radius: f64 },
}

/// Visible data-space window, `min` inclusive on both axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Viewport {
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plot {
    pub title: String,
    pub primitive: Primitive,
    pub viewport: Viewport,
}

/// Builds the drawing for a shape. Triangles that fail the inequality
/// produce an error instead of a plot.
pub fn plot_for(shape: &Shape) -> Result<Plot> {
    match *shape {
        Shape::Triangle { a, b, c } => {
            validate_triangle(a, b, c)?;
            Ok(triangle_plot(a, b, c))
        }
        Shape::Rectangle { width, height } => Ok(rectangle_plot(width, height)),
        Shape::Circle { radius } => Ok(circle_plot(radius)),
    }
}

/// Heading shown above the drawing and in the text output
pub fn title_for(shape: &Shape) -> String {
    match *shape {
        Shape::Triangle { a, b, c } => format!("Triangle: a={:.2}, b={:.2}, c={:.2}", a, b, c),
        Shape::Rectangle { width, height } => {
            format!("Rectangle: width={:.2}, height={:.2}", width, height)
        }
        Shape::Circle { radius } => format!("Circle: radius={:.2}", radius),
    }
}

/// Places A at the origin and B on the x axis, then finds C from the
/// law of cosines.
pub fn triangle_vertices(a: f64, b: f64, c: f64) -> [Point; 3] {
    let x = (b * b + c * c - a * a) / (2.0 * c);
    let y = (b * b - x * x).max(0.0).sqrt();
    [Point::ORIGIN, Point::new(c, 0.0), Point::new(x, y)]
}

fn triangle_plot(a: f64, b: f64, c: f64) -> Plot {
    let [pa, pb, pc] = triangle_vertices(a, b, c);
    let points = vec![pa, pb, pc, pa];
    let pad = a.max(b).max(c) * 0.2;

    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in &points {
        x_min = x_min.min(p.x);
        x_max = x_max.max(p.x);
        y_min = y_min.min(p.y);
        y_max = y_max.max(p.y);
    }

    Plot {
        title: title_for(&Shape::Triangle { a, b, c }),
        primitive: Primitive::Polyline { points },
        viewport: Viewport {
            x_min: x_min - pad,
            x_max: x_max + pad,
            y_min: y_min - pad,
            y_max: y_max + pad,
        },
    }
}

fn rectangle_plot(width: f64, height: f64) -> Plot {
    let pad = width.max(height) * 0.2;
    let points = vec![
        Point::ORIGIN,
        Point::new(width, 0.0),
        Point::new(width, height),
        Point::new(0.0, height),
        Point::ORIGIN,
    ];

    Plot {
        title: title_for(&Shape::Rectangle { width, height }),
        primitive: Primitive::Polyline { points },
        viewport: Viewport {
            x_min: -pad,
            x_max: width + pad,
            y_min: -pad,
            y_max: height + pad,
        },
    }
}

fn circle_plot(radius: f64) -> Plot {
    let pad = radius * 0.3;
    let reach = radius + pad;

    Plot {
        title: title_for(&Shape::Circle { radius }),
        primitive: Primitive::Circle {
            center: Point::ORIGIN,
            radius,
        },
        viewport: Viewport {
            x_min: -reach,
            x_max: reach,
            y_min: -reach,
            y_max: reach,
        },
    }
}
