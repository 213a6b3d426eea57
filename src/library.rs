//! Track library module.
//!
//! Exposes the `Track` model, the providers that supply the library at startup
//! and helpers that turn a track into display text.

mod display;
mod model;
mod provider;

pub use display::*;
pub use model::*;
pub use provider::*;
