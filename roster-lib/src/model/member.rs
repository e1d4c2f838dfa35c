//! Member record type.

use serde::Deserialize;
use serde::Serialize;

use super::MemberId;

/// A single user record shown as one table row.
///
/// `editing` is view state: it is never read from or written to the payload
/// and is `false` for every freshly loaded member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Stable identifier assigned by the source data.
    pub id: MemberId,
    /// Display name, editable in place.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Role label (e.g. `admin`, `member`).
    pub role: String,
    /// Whether the row is in inline edit mode.
    #[serde(skip)]
    pub editing: bool,
}

impl Member {
    /// Creates a member that is not in edit mode.
    pub fn new(
        id: impl Into<MemberId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
            editing: false,
        }
    }

    /// Returns `true` if `needle` (already lowercased) occurs in the name,
    /// email or role, ignoring case.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.role.to_lowercase().contains(needle)
    }

    /// Returns `true` if `query` occurs in the name, email or role, ignoring case.
    ///
    /// The empty query matches every member.
    pub fn matches(&self, query: &str) -> bool {
        self.matches_lowercase(&query.to_lowercase())
    }
}
