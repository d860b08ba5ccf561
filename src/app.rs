//! Application module: routing and the currently mounted screen.
//!
//! The `App` model lives in `app::model`; routes are parsed in `app::route`.

mod model;
mod route;

pub use model::*;
pub use route::Route;
