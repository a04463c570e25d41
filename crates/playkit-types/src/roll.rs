use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::range::{DICE_COUNT, DICE_SIDES};

/// How many dice to throw and how many faces each one has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceSpec {
    pub count: u32,
    pub sides: u32,
}

impl DiceSpec {
    pub fn new(count: u32, sides: u32) -> Result<Self> {
        Ok(Self {
            count: DICE_COUNT.check("count", count)?,
            sides: DICE_SIDES.check("sides", sides)?,
        })
    }
}

impl Default for DiceSpec {
    fn default() -> Self {
        Self {
            count: DICE_COUNT.default,
            sides: DICE_SIDES.default,
        }
    }
}

/// One roll action, as kept in the session history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollEntry {
    pub timestamp: DateTime<Utc>,
    pub dice_count: u32,
    pub sides: u32,
    pub results: Vec<u32>,
    pub total: u32,
    pub average: f64,
}

impl RollEntry {
    pub fn new(spec: DiceSpec, results: Vec<u32>, timestamp: DateTime<Utc>) -> Self {
        let total: u32 = results.iter().sum();
        let average = if results.is_empty() {
            0.0
        } else {
            total as f64 / results.len() as f64
        };

        Self {
            timestamp,
            dice_count: spec.count,
            sides: spec.sides,
            results,
            total,
            average,
        }
    }

    /// Results rendered as a bracketed list, e.g. `[3, 5]`
    pub fn results_label(&self) -> String {
        let faces: Vec<String> = self.results.iter().map(|r| r.to_string()).collect();
        format!("[{}]", faces.join(", "))
    }
}
