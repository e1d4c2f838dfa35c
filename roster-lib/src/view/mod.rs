//! Table view controller
//!
//! All table state lives in one owned [`TableState`]. Transitions are applied
//! either through the named methods or as [`Action`] values, and the displayed
//! page is derived on demand by the projector.
//!
//! # Example
//!
//! ```
//! use roster_lib::model::Member;
//! use roster_lib::view::{Action, PageNav, TableState};
//!
//! let mut state = TableState::default();
//! state.apply(Action::Loaded((1..=25u64).map(|i| {
//!     Member::new(i, format!("user {i}"), format!("user{i}@example.com"), "member")
//! }).collect()));
//!
//! state.apply(Action::Navigate(PageNav::Last));
//! assert_eq!(state.current_page(), 3);
//! assert_eq!(state.displayed().len(), 5);
//! ```

mod action;
mod config;
mod pager;
mod projector;
mod selection;
mod snapshot;
mod state;

pub use action::*;
pub use config::*;
pub use pager::*;
pub use projector::*;
pub use selection::*;
pub use snapshot::*;
pub use state::*;
