//! Roster admin table library
//!
//! Client-side state for an admin table over a list of members: a one-shot
//! HTTP load, search, pagination, selection, inline name edits and deletes.

pub mod error;
pub mod model;
pub mod view;

mod client;
mod loader;
mod source;

pub use client::*;
pub use loader::*;
pub use source::*;
