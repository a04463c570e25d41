use serde::Serialize;
use std::fmt::Display;

use crate::error::{Error, Result};

/// Bounds, step and default of a single input control
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputRange<T> {
    pub min: T,
    pub max: T,
    pub step: T,
    pub default: T,
}

impl<T> InputRange<T>
where
    T: PartialOrd + Copy + Display,
{
    pub const fn new(min: T, max: T, step: T, default: T) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    /// Inclusive on both ends
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn check(&self, field: &'static str, value: T) -> Result<T> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(Error::OutOfRange {
                field,
                value: value.to_string(),
                min: self.min.to_string(),
                max: self.max.to_string(),
            })
        }
    }
}

pub const TRIANGLE_SIDE_A: InputRange<f64> = InputRange::new(0.5, 20.0, 0.1, 3.0);
pub const TRIANGLE_SIDE_B: InputRange<f64> = InputRange::new(0.5, 20.0, 0.1, 4.0);
pub const TRIANGLE_SIDE_C: InputRange<f64> = InputRange::new(0.5, 20.0, 0.1, 5.0);

pub const RECTANGLE_WIDTH: InputRange<f64> = InputRange::new(0.5, 30.0, 0.1, 6.0);
pub const RECTANGLE_HEIGHT: InputRange<f64> = InputRange::new(0.5, 30.0, 0.1, 4.0);

pub const CIRCLE_RADIUS: InputRange<f64> = InputRange::new(0.1, 15.0, 0.1, 3.0);

pub const DICE_COUNT: InputRange<u32> = InputRange::new(1, 20, 1, 2);
pub const DICE_SIDES: InputRange<u32> = InputRange::new(2, 100, 1, 6);
