//! Table configuration

/// Number of rows shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Which member count the pager derives its page total from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagerBasis {
    /// Count only members matching the search query.
    #[default]
    Filtered,
    /// Count the whole collection, ignoring the search query.
    Collection,
}

/// What cancelling an inline edit does to the typed draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CancelPolicy {
    /// Leave the name as last typed; only edit mode is switched off.
    #[default]
    KeepDraft,
    /// Restore the name the member had when edit mode was entered.
    Revert,
}

/// How many rows may be in edit mode at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Any number of rows can be edited at once.
    #[default]
    Multiple,
    /// Entering edit mode on a row cancels editing on every other row.
    Single,
}

/// Configuration for a [`TableState`](super::TableState).
///
/// # Example
///
/// ```
/// use roster_lib::view::{CancelPolicy, PagerBasis, TableConfig};
///
/// let config = TableConfig::default()
///     .with_page_size(25)
///     .with_pager_basis(PagerBasis::Collection)
///     .with_cancel_policy(CancelPolicy::Revert);
///
/// assert_eq!(config.page_size, 25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Rows per page. Never zero.
    ///
    /// Default: 10
    pub page_size: usize,

    /// Count the pager uses for its total.
    ///
    /// Default: [`PagerBasis::Filtered`]
    pub pager_basis: PagerBasis,

    /// Default: [`CancelPolicy::KeepDraft`]
    pub cancel_policy: CancelPolicy,

    /// Default: [`EditMode::Multiple`]
    pub edit_mode: EditMode,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            pager_basis: PagerBasis::default(),
            cancel_policy: CancelPolicy::default(),
            edit_mode: EditMode::default(),
        }
    }
}

impl TableConfig {
    /// Sets the page size. Zero is treated as one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Sets the pager basis.
    pub fn with_pager_basis(mut self, basis: PagerBasis) -> Self {
        self.pager_basis = basis;
        self
    }

    /// Sets the cancel policy.
    pub fn with_cancel_policy(mut self, policy: CancelPolicy) -> Self {
        self.cancel_policy = policy;
        self
    }

    /// Sets the edit mode.
    pub fn with_edit_mode(mut self, mode: EditMode) -> Self {
        self.edit_mode = mode;
        self
    }

    /// Settings that count pages over the whole collection, ignoring the
    /// search query.
    pub fn parity() -> Self {
        Self::default().with_pager_basis(PagerBasis::Collection)
    }
}
