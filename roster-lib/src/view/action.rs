//! Table transitions as values.

use crate::model::Member;
use crate::model::MemberId;

use super::PageNav;

/// A transition of the table state.
///
/// Every operator interaction and the load result map onto one of these and
/// are applied with [`TableState::apply`](super::TableState::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The one-shot load produced the member list.
    Loaded(Vec<Member>),
    /// The one-shot load failed; the message is only logged.
    LoadFailed(String),
    /// The search input changed.
    Search(String),
    /// A pager control was activated.
    Navigate(PageNav),
    /// The select-all control was activated.
    ToggleSelectAll,
    /// A single row was clicked for selection.
    ToggleSelected(MemberId),
    /// The delete control on a row was activated.
    DeleteOne(MemberId),
    /// The delete-selected control was activated.
    DeleteSelected,
    /// The edit control (or the name cell) on a row was activated.
    ToggleEditing(MemberId),
    /// Text typed into a row's name input.
    UpdateDraftName {
        /// Row being edited.
        id: MemberId,
        /// Full current input text.
        text: String,
    },
    /// The confirm control on a row in edit mode.
    CommitName {
        /// Row being edited.
        id: MemberId,
        /// Name to store.
        name: String,
    },
    /// The cancel control on a row in edit mode.
    CancelEditing(MemberId),
}

impl Action {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loaded(_) => "loaded",
            Self::LoadFailed(_) => "load_failed",
            Self::Search(_) => "search",
            Self::Navigate(_) => "navigate",
            Self::ToggleSelectAll => "toggle_select_all",
            Self::ToggleSelected(_) => "toggle_selected",
            Self::DeleteOne(_) => "delete_one",
            Self::DeleteSelected => "delete_selected",
            Self::ToggleEditing(_) => "toggle_editing",
            Self::UpdateDraftName { .. } => "update_draft_name",
            Self::CommitName { .. } => "commit_name",
            Self::CancelEditing(_) => "cancel_editing",
        }
    }
}
