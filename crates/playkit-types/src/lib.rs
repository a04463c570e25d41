// Types module - Domain vocabulary shared by the engine and the CLI
// Pure data plus range validation; no I/O

pub mod error;
pub mod range;
pub mod roll;
pub mod shape;

pub use error::{Error, Result};
pub use range::InputRange;
pub use roll::{DiceSpec, RollEntry};
pub use shape::{Shape, ShapeKind, ShapeMetrics};
