//! Data model types

mod member;
mod member_id;

pub use member::*;
pub use member_id::*;
