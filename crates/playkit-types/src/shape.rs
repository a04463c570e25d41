use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::range::{
    CIRCLE_RADIUS, RECTANGLE_HEIGHT, RECTANGLE_WIDTH, TRIANGLE_SIDE_A, TRIANGLE_SIDE_B,
    TRIANGLE_SIDE_C,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Triangle,
    Rectangle,
    Circle,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Triangle => write!(f, "triangle"),
            ShapeKind::Rectangle => write!(f, "rectangle"),
            ShapeKind::Circle => write!(f, "circle"),
        }
    }
}

/// Dimensions of one shape.
///
/// Triangle sides follow the usual labelling: `a` is BC, `b` is CA and
/// `c` is AB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Triangle { a: f64, b: f64, c: f64 },
    Rectangle { width: f64, height: f64 },
    Circle { radius: f64 },
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Triangle { .. } => ShapeKind::Triangle,
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
            Shape::Circle { .. } => ShapeKind::Circle,
        }
    }

    /// Shape built from the default value of every input control
    pub fn default_for(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Triangle => Shape::Triangle {
                a: TRIANGLE_SIDE_A.default,
                b: TRIANGLE_SIDE_B.default,
                c: TRIANGLE_SIDE_C.default,
            },
            ShapeKind::Rectangle => Shape::Rectangle {
                width: RECTANGLE_WIDTH.default,
                height: RECTANGLE_HEIGHT.default,
            },
            ShapeKind::Circle => Shape::Circle {
                radius: CIRCLE_RADIUS.default,
            },
        }
    }

    /// Checks every dimension against the bounds of its input control.
    /// This does not check the triangle inequality.
    pub fn validate_ranges(&self) -> Result<()> {
        match *self {
            Shape::Triangle { a, b, c } => {
                TRIANGLE_SIDE_A.check("a", a)?;
                TRIANGLE_SIDE_B.check("b", b)?;
                TRIANGLE_SIDE_C.check("c", c)?;
            }
            Shape::Rectangle { width, height } => {
                RECTANGLE_WIDTH.check("width", width)?;
                RECTANGLE_HEIGHT.check("height", height)?;
            }
            Shape::Circle { radius } => {
                CIRCLE_RADIUS.check("radius", radius)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeMetrics {
    pub area: f64,
    pub perimeter: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_defaults_match_controls() {
        assert_eq!(
            Shape::default_for(ShapeKind::Triangle),
            Shape::Triangle {
                a: 3.0,
                b: 4.0,
                c: 5.0
            }
        );
        assert_eq!(
            Shape::default_for(ShapeKind::Rectangle),
            Shape::Rectangle {
                width: 6.0,
                height: 4.0
            }
        );
        assert_eq!(
            Shape::default_for(ShapeKind::Circle),
            Shape::Circle { radius: 3.0 }
        );
    }

    #[test]
    fn test_validate_ranges_names_offending_field() {
        let shape = Shape::Rectangle {
            width: 6.0,
            height: 31.0,
        };
        match shape.validate_ranges() {
            Err(Error::OutOfRange { field, .. }) => assert_eq!(field, "height"),
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_triangle_passes_range_check() {
        let shape = Shape::Triangle {
            a: 1.0,
            b: 1.0,
            c: 3.0,
        };
        assert!(shape.validate_ranges().is_ok());
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let json = serde_json::to_value(Shape::Circle { radius: 2.5 }).unwrap();
        assert_eq!(json["kind"], "circle");
        assert_eq!(json["radius"], 2.5);
    }
}
