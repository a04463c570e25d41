//! # Presentation Layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> Output
//!    (Controller)      (Converter)       (Data)          (Driver)  ==(Text)==> [ View ] --> Output
//! ```
//!
//! * `view_models/` hold raw data and derive `Serialize`; `--format json`
//!   dumps them whole.
//! * `presenters/` turn engine results into ViewModels and decide which
//!   badge and tips to attach.
//! * `views/` implement `fmt::Display` and own layout and color.
//! * `formatters/` are small string helpers used by views.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, DisplayOptions, Guidance, StatusBadge, StatusLevel,
};
