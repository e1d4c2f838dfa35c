//! Error types

mod api;
mod roster;

pub use api::*;
pub use roster::*;
