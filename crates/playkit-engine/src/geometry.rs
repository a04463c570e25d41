use std::f64::consts::PI;

use playkit_types::{Error as DomainError, Shape, ShapeMetrics};

use crate::error::Result;

/// Triangle inequality on all three pairs of sides.
///
/// Equality counts as a failure: a flat triangle has no interior.
pub fn validate_triangle(a: f64, b: f64, c: f64) -> Result<()> {
    if a + b > c && b + c > a && c + a > b {
        Ok(())
    } else {
        Err(DomainError::InvalidTriangle { a, b, c }.into())
    }
}

/// Heron's formula. Call after [`validate_triangle`].
pub fn triangle_metrics(a: f64, b: f64, c: f64) -> ShapeMetrics {
    let s = 0.5 * (a + b + c);
    // Rounding can push a near-flat product slightly below zero
    let product = (s * (s - a) * (s - b) * (s - c)).max(0.0);

    ShapeMetrics {
        area: product.sqrt(),
        perimeter: a + b + c,
    }
}

pub fn rectangle_metrics(width: f64, height: f64) -> ShapeMetrics {
    ShapeMetrics {
        area: width * height,
        perimeter: 2.0 * (width + height),
    }
}

pub fn circle_metrics(radius: f64) -> ShapeMetrics {
    ShapeMetrics {
        area: PI * radius * radius,
        perimeter: 2.0 * PI * radius,
    }
}

/// Validates the shape and returns its area and perimeter.
///
/// Range checks come first, then the triangle inequality; nothing is
/// computed for a shape that fails either.
pub fn compute(shape: &Shape) -> Result<ShapeMetrics> {
    shape.validate_ranges()?;

    match *shape {
        Shape::Triangle { a, b, c } => {
            validate_triangle(a, b, c)?;
            Ok(triangle_metrics(a, b, c))
        }
        Shape::Rectangle { width, height } => Ok(rectangle_metrics(width, height)),
        Shape::Circle { radius } => Ok(circle_metrics(radius)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_right_triangle_heron() {
        let metrics = compute(&Shape::Triangle {
            a: 3.0,
            b: 4.0,
            c: 5.0,
        })
        .unwrap();
        assert_eq!(metrics.area, 6.0);
        assert_eq!(metrics.perimeter, 12.0);
    }

    #[test]
    fn test_degenerate_triangle_rejected() {
        let err = compute(&Shape::Triangle {
            a: 1.0,
            b: 1.0,
            c: 3.0,
        })
        .unwrap_err();
        assert!(err.is_invalid_triangle());
    }

    #[test]
    fn test_flat_triangle_rejected() {
        assert!(validate_triangle(1.0, 2.0, 3.0).is_err());
        assert!(validate_triangle(2.0, 3.0, 1.0).is_err());
        assert!(validate_triangle(3.0, 1.0, 2.0).is_err());
    }

    #[test]
    fn test_near_flat_triangle_area_is_never_nan() {
        // Passes the inequality by a hair; Heron's product is close to zero
        let metrics = triangle_metrics(10.0, 10.0, 19.999_999_9);
        assert!(metrics.area >= 0.0);
        assert!(!metrics.area.is_nan());
    }

    #[test]
    fn test_rectangle() {
        let metrics = compute(&Shape::Rectangle {
            width: 6.0,
            height: 4.0,
        })
        .unwrap();
        assert_eq!(metrics.area, 24.0);
        assert_eq!(metrics.perimeter, 20.0);
    }

    #[test]
    fn test_circle() {
        let metrics = compute(&Shape::Circle { radius: 3.0 }).unwrap();
        approx(metrics.area, 28.274);
        approx(metrics.perimeter, 18.850);
    }

    #[test]
    fn test_out_of_range_is_not_invalid_triangle() {
        let err = compute(&Shape::Triangle {
            a: 25.0,
            b: 4.0,
            c: 5.0,
        })
        .unwrap_err();
        assert!(!err.is_invalid_triangle());
    }
}
