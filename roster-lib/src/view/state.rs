//! Table view state container.

use std::collections::HashMap;
use std::collections::HashSet;

use crate::model::Member;
use crate::model::MemberId;

use super::Action;
use super::CancelPolicy;
use super::EditMode;
use super::PageNav;
use super::PagerBasis;
use super::PagerButton;
use super::Selection;
use super::TableConfig;
use super::pager;
use super::projector;

/// Progress of the one-shot member load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// The load has not produced a result yet.
    #[default]
    Pending,
    /// Members were loaded (possibly zero of them).
    Loaded,
    /// The load failed; the collection stays empty.
    Failed,
}

/// All state behind the admin table.
///
/// Owns the member collection, the search query, the current page, the
/// selection and the load status. The displayed page is never stored; it is
/// projected from the other fields every time it is asked for.
#[derive(Debug, Clone)]
pub struct TableState {
    config: TableConfig,
    members: Vec<Member>,
    search_query: String,
    current_page: usize,
    selection: Selection,
    load_status: LoadStatus,
    /// Name each member had when it entered edit mode.
    pre_edit_names: HashMap<MemberId, String>,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

impl TableState {
    /// Creates an empty table waiting for its load.
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            members: Vec::new(),
            search_query: String::new(),
            current_page: 1,
            selection: Selection::new(),
            load_status: LoadStatus::Pending,
            pre_edit_names: HashMap::new(),
        }
    }

    /// Creates a table that is already loaded with `members`.
    pub fn with_members(config: TableConfig, members: Vec<Member>) -> Self {
        let mut state = Self::new(config);
        state.load(members);
        state
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Table configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The full collection, in fetch order minus deletions.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Looks up a member by id.
    pub fn member(&self, id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|m| &m.id == id)
    }

    /// Current search text.
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Current page, 1-based.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Selected member ids.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Whether the member with `id` is selected.
    pub fn is_selected(&self, id: &MemberId) -> bool {
        self.selection.is_selected(id)
    }

    /// Progress of the one-shot load.
    pub fn load_status(&self) -> LoadStatus {
        self.load_status
    }

    // -------------------------------------------------------------------------
    // Derived view
    // -------------------------------------------------------------------------

    /// Members shown on the current page.
    pub fn displayed(&self) -> Vec<&Member> {
        projector::project(
            &self.members,
            &self.search_query,
            self.current_page(),
            self.config.page_size,
        )
    }

    /// Every member matching the search query, across all pages.
    pub fn filtered(&self) -> Vec<&Member> {
        projector::filter_members(&self.members, &self.search_query).collect()
    }

    /// Number of members matching the search query.
    pub fn filtered_count(&self) -> usize {
        projector::filtered_count(&self.members, &self.search_query)
    }

    /// Page total shown by the pager, per the configured [`PagerBasis`].
    pub fn total_pages(&self) -> usize {
        let count = match self.config.pager_basis {
            PagerBasis::Filtered => self.filtered_count(),
            PagerBasis::Collection => self.members.len(),
        };
        pager::total_pages(count, self.config.page_size)
    }

    /// Buttons of the pager bar for the current state.
    pub fn pager_buttons(&self) -> Vec<PagerButton> {
        pager::pager_buttons(self.current_page(), self.total_pages())
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Applies one transition.
    pub fn apply(&mut self, action: Action) {
        log::debug!("[table] apply {}", action.name());
        match action {
            Action::Loaded(members) => {
                self.load(members);
            }
            Action::LoadFailed(message) => self.load_failed(&message),
            Action::Search(query) => self.set_search(query),
            Action::Navigate(nav) => self.navigate(nav),
            Action::ToggleSelectAll => self.toggle_select_all(),
            Action::ToggleSelected(id) => {
                self.toggle_selected(&id);
            }
            Action::DeleteOne(id) => {
                self.delete_one(&id);
            }
            Action::DeleteSelected => {
                self.delete_selected();
            }
            Action::ToggleEditing(id) => self.toggle_editing(&id),
            Action::UpdateDraftName { id, text } => self.update_draft_name(&id, text),
            Action::CommitName { id, name } => self.commit_name(&id, name),
            Action::CancelEditing(id) => self.cancel_editing(&id),
        }
    }

    /// Replaces the collection with the loaded members.
    ///
    /// Only the first load result is accepted. Duplicate ids keep their first
    /// occurrence. Returns `false` if the result was ignored.
    pub fn load(&mut self, members: Vec<Member>) -> bool {
        if self.load_status != LoadStatus::Pending {
            log::warn!("[table] ignoring load result after {:?}", self.load_status);
            return false;
        }

        let fetched = members.len();
        let mut seen = HashSet::with_capacity(fetched);
        self.members = members
            .into_iter()
            .filter(|m| seen.insert(m.id.clone()))
            .map(|mut m| {
                m.editing = false;
                m
            })
            .collect();

        if self.members.len() != fetched {
            log::warn!(
                "[table] dropped {} members with duplicate ids",
                fetched - self.members.len()
            );
        }

        self.load_status = LoadStatus::Loaded;
        self.current_page = 1;
        self.selection.clear();
        self.pre_edit_names.clear();
        log::info!("[table] loaded {} members", self.members.len());
        true
    }

    /// Records a failed load. The collection stays empty.
    pub fn load_failed(&mut self, message: &str) {
        if self.load_status != LoadStatus::Pending {
            log::warn!("[table] ignoring load failure after {:?}", self.load_status);
            return;
        }
        log::error!("[table] failed to load members: {}", message);
        self.load_status = LoadStatus::Failed;
        self.members.clear();
    }

    /// Sets the search text and pulls the current page back into range.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.clamp_page();
    }

    /// Moves to another page.
    pub fn navigate(&mut self, nav: PageNav) {
        self.current_page = nav.resolve(self.current_page(), self.total_pages());
    }

    /// Selects every displayed member, or clears the selection if it already
    /// has as many entries as the displayed page has rows.
    pub fn toggle_select_all(&mut self) {
        let displayed: Vec<MemberId> = self.displayed().iter().map(|m| m.id.clone()).collect();
        if self.selection.len() == displayed.len() {
            self.selection.clear();
        } else {
            self.selection.replace(displayed);
        }
    }

    /// Flips selection of a single displayed member. Ids not on the current
    /// page (unknown, filtered out, or on another page) are ignored.
    ///
    /// Returns `true` if the member is selected afterwards.
    pub fn toggle_selected(&mut self, id: &MemberId) -> bool {
        if !self.displayed().iter().any(|m| &m.id == id) {
            return self.selection.is_selected(id);
        }
        self.selection.toggle(id.clone())
    }

    /// Removes one member. Returns `false` (and changes nothing) if no member
    /// has that id.
    pub fn delete_one(&mut self, id: &MemberId) -> bool {
        let before = self.members.len();
        self.members.retain(|m| &m.id != id);
        if self.members.len() == before {
            return false;
        }

        self.selection.remove(id);
        self.pre_edit_names.remove(id);
        self.current_page = 1;
        true
    }

    /// Removes every selected member and clears the selection.
    ///
    /// Returns the number of members removed; nothing changes if the
    /// selection is empty.
    pub fn delete_selected(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }

        let before = self.members.len();
        let selection = &self.selection;
        self.members.retain(|m| !selection.is_selected(&m.id));
        for id in self.selection.iter() {
            self.pre_edit_names.remove(id);
        }
        self.selection.clear();
        self.current_page = 1;
        before - self.members.len()
    }

    /// Enters or leaves edit mode on a member.
    ///
    /// Leaving edit mode this way is a cancel and follows the configured
    /// [`CancelPolicy`].
    pub fn toggle_editing(&mut self, id: &MemberId) {
        let Some(editing) = self.member(id).map(|m| m.editing) else {
            return;
        };

        if editing {
            self.cancel_editing(id);
            return;
        }

        if self.config.edit_mode == EditMode::Single {
            let others: Vec<MemberId> = self
                .members
                .iter()
                .filter(|m| m.editing && &m.id != id)
                .map(|m| m.id.clone())
                .collect();
            for other in &others {
                self.cancel_editing(other);
            }
        }

        if let Some(member) = self.member_mut(id) {
            member.editing = true;
            let name = member.name.clone();
            self.pre_edit_names.insert(id.clone(), name);
        }
    }

    /// Updates the name as it is typed. Ignored unless the member is in edit
    /// mode. The empty string is accepted.
    pub fn update_draft_name(&mut self, id: &MemberId, text: impl Into<String>) {
        if let Some(member) = self.member_mut(id).filter(|m| m.editing) {
            member.name = text.into();
        }
    }

    /// Stores `name` and leaves edit mode.
    pub fn commit_name(&mut self, id: &MemberId, name: impl Into<String>) {
        if let Some(member) = self.member_mut(id) {
            member.name = name.into();
            member.editing = false;
            self.pre_edit_names.remove(id);
        }
    }

    /// Leaves edit mode without committing.
    ///
    /// With [`CancelPolicy::KeepDraft`] the name keeps whatever was typed;
    /// with [`CancelPolicy::Revert`] it goes back to the pre-edit name.
    pub fn cancel_editing(&mut self, id: &MemberId) {
        let original = self.pre_edit_names.remove(id);
        let revert = self.config.cancel_policy == CancelPolicy::Revert;
        if let Some(member) = self.member_mut(id) {
            member.editing = false;
            if let Some(original) = original.filter(|_| revert) {
                member.name = original;
            }
        }
    }

    fn member_mut(&mut self, id: &MemberId) -> Option<&mut Member> {
        self.members.iter_mut().find(|m| &m.id == id)
    }

    fn clamp_page(&mut self) {
        self.current_page = self.current_page().min(self.total_pages());
    }
}
