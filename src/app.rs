//! Application module: exposes the view model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the latest player snapshot,
//! the list cursor and the current notice line.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
