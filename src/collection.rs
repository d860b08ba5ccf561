//! Content store: the fixed, ordered list of artworks on display.
//!
//! The list is built once as a `static` slice and never mutated. Its order is
//! the navigation order used by the detail screens (previous/next).

mod model;
mod store;

pub use model::*;
pub use store::*;
