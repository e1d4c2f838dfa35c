//! Behaviour of the table view controller: search, paging, selection and
//! in-place mutations.

use roster_lib::model::Member;
use roster_lib::model::MemberId;
use roster_lib::view::Action;
use roster_lib::view::CancelPolicy;
use roster_lib::view::EditMode;
use roster_lib::view::PageNav;
use roster_lib::view::PagerBasis;
use roster_lib::view::TableConfig;
use roster_lib::view::TableSnapshot;
use roster_lib::view::TableState;

const ROLES: [&str; 3] = ["member", "admin", "owner"];

fn members(n: u64) -> Vec<Member> {
    (1..=n)
        .map(|i| {
            Member::new(
                i,
                format!("User {i}"),
                format!("user{i}@mailinator.com"),
                ROLES[(i % 3) as usize],
            )
        })
        .collect()
}

fn table(n: u64) -> TableState {
    TableState::with_members(TableConfig::default(), members(n))
}

fn id(raw: &str) -> MemberId {
    MemberId::new(raw)
}

fn displayed_ids(state: &TableState) -> Vec<String> {
    state
        .displayed()
        .iter()
        .map(|m| m.id.to_string())
        .collect()
}

// =============================================================================
// Search
// =============================================================================

mod search {
    use super::*;

    #[test]
    fn test_case_insensitive_substring() {
        let mut state = TableState::with_members(
            TableConfig::default(),
            vec![
                Member::new("1", "Alice", "a@example.com", "member"),
                Member::new("2", "Bob", "b@example.com", "member"),
                Member::new("3", "alice2", "c@example.com", "member"),
            ],
        );

        state.set_search("ali");
        let names: Vec<&str> = state.displayed().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Alice", "alice2"]);
    }

    #[test]
    fn test_matches_email_and_role() {
        let mut state = table(12);

        state.set_search("USER7@");
        assert_eq!(displayed_ids(&state), ["7"]);

        state.set_search("Admin");
        assert!(state.filtered().iter().all(|m| m.role == "admin"));
        assert_eq!(state.filtered_count(), 4);
    }

    #[test]
    fn test_every_match_contains_query() {
        let state = table(40);
        for query in ["", "user", "1", "MAILINATOR", "own", "er 3", "zzz"] {
            let mut state = state.clone();
            state.set_search(query);
            let needle = query.to_lowercase();
            for member in state.filtered() {
                assert!(
                    member.name.to_lowercase().contains(&needle)
                        || member.email.to_lowercase().contains(&needle)
                        || member.role.to_lowercase().contains(&needle),
                    "{member:?} does not match {query:?}"
                );
            }
        }
    }

    #[test]
    fn test_narrowing_query_never_grows_matches() {
        let mut state = table(40);
        let mut previous = usize::MAX;
        for query in ["", "u", "us", "use", "user", "user ", "user 1", "user 12"] {
            state.set_search(query);
            let count = state.filtered_count();
            assert!(count <= previous, "{query:?} matched more than its prefix");
            previous = count;
        }
        assert_eq!(previous, 1);
    }

    #[test]
    fn test_query_change_pulls_page_into_range() {
        let mut state = table(35);
        state.navigate(PageNav::Last);
        assert_eq!(state.current_page(), 4);

        // "User 1" and "User 10".."User 19": 11 matches, 2 pages
        state.set_search("user 1");
        assert_eq!(state.total_pages(), 2);
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.displayed().len(), 1);

        state.set_search("nobody");
        assert_eq!(state.current_page(), 1);
        assert!(state.displayed().is_empty());
    }
}

// =============================================================================
// Paging
// =============================================================================

mod paging {
    use super::*;

    #[test]
    fn test_last_page_of_25() {
        let mut state = table(25);
        assert_eq!(state.total_pages(), 3);

        state.apply(Action::Navigate(PageNav::Last));
        assert_eq!(state.current_page(), 3);
        assert_eq!(state.displayed().len(), 5);
    }

    #[test]
    fn test_button_count() {
        for (n, expected) in [(0, 1), (1, 1), (10, 1), (11, 2), (25, 3), (100, 10), (101, 11)] {
            let snapshot = TableSnapshot::capture(&table(n));
            assert_eq!(snapshot.page_button_count(), expected, "n = {n}");
            assert_eq!(snapshot.pager.len(), expected + 4);
        }
    }

    #[test]
    fn test_pages_concatenate_to_filtered_sequence() {
        for query in ["", "admin", "user 2"] {
            let mut state = table(47);
            state.set_search(query);

            let expected: Vec<MemberId> = state.filtered().iter().map(|m| m.id.clone()).collect();
            let mut seen = Vec::new();
            for page in 1..=state.total_pages() {
                state.navigate(PageNav::Page(page));
                assert!(state.displayed().len() <= 10);
                seen.extend(state.displayed().iter().map(|m| m.id.clone()));
            }
            assert_eq!(seen, expected, "query {query:?}");
        }
    }

    #[test]
    fn test_prev_and_next_stop_at_edges() {
        let mut state = table(25);
        state.navigate(PageNav::Prev);
        assert_eq!(state.current_page(), 1);

        state.navigate(PageNav::Next);
        state.navigate(PageNav::Next);
        state.navigate(PageNav::Next);
        assert_eq!(state.current_page(), 3);

        state.navigate(PageNav::First);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_numbered_page_is_not_bounds_checked() {
        let mut state = table(25);
        state.navigate(PageNav::Page(7));
        assert_eq!(state.current_page(), 7);
        assert!(state.displayed().is_empty());

        state.navigate(PageNav::Page(0));
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_next_after_huge_page_number_stays_in_range() {
        let mut state = table(25);
        state.apply(Action::Navigate(PageNav::Page(usize::MAX)));
        state.apply(Action::Navigate(PageNav::Next));
        assert_eq!(state.current_page(), 3);
        assert_eq!(state.displayed().len(), 5);
    }

    #[test]
    fn test_pager_basis() {
        let mut filtered = table(25);
        filtered.set_search("user 2");
        // "User 2" and "User 20".."User 25"
        assert_eq!(filtered.filtered_count(), 7);
        assert_eq!(filtered.total_pages(), 1);

        let mut parity = TableState::with_members(TableConfig::parity(), members(25));
        parity.set_search("user 2");
        assert_eq!(parity.config().pager_basis, PagerBasis::Collection);
        assert_eq!(parity.total_pages(), 3);

        parity.navigate(PageNav::Last);
        assert_eq!(parity.current_page(), 3);
        assert!(parity.displayed().is_empty());
    }

    #[test]
    fn test_custom_page_size() {
        let state = TableState::with_members(TableConfig::default().with_page_size(4), members(9));
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.displayed().len(), 4);
    }
}

// =============================================================================
// Selection
// =============================================================================

mod selection {
    use super::*;

    #[test]
    fn test_select_all_is_scoped_to_page() {
        let mut state = table(25);
        state.navigate(PageNav::Next);
        state.toggle_select_all();

        assert_eq!(state.selection().len(), 10);
        for member in state.displayed() {
            assert!(state.is_selected(&member.id));
        }
        assert!(!state.is_selected(&id("1")));
        assert!(!state.is_selected(&id("21")));
    }

    #[test]
    fn test_toggle_twice_restores_empty_selection() {
        let mut state = table(25);
        state.apply(Action::ToggleSelectAll);
        assert_eq!(state.selection().len(), 10);
        state.apply(Action::ToggleSelectAll);
        assert!(state.selection().is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_full_page_selection() {
        let mut state = table(25);
        for raw in ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"] {
            state.toggle_selected(&id(raw));
        }
        let before = state.selection().clone();
        assert_eq!(before.len(), state.displayed().len());

        state.apply(Action::ToggleSelectAll);
        assert!(state.selection().is_empty());
        state.apply(Action::ToggleSelectAll);
        assert_eq!(state.selection(), &before);
    }

    #[test]
    fn test_toggle_with_partial_selection_selects_page() {
        let mut state = table(25);
        state.toggle_selected(&id("2"));
        state.toggle_selected(&id("3"));

        state.toggle_select_all();
        assert_eq!(state.selection().len(), 10);
    }

    #[test]
    fn test_selection_survives_reprojection() {
        let mut state = table(25);
        state.toggle_select_all();

        state.navigate(PageNav::Last);
        state.navigate(PageNav::First);
        state.set_search("user");
        state.set_search("");

        let snapshot = TableSnapshot::capture(&state);
        assert!(snapshot.rows.iter().all(|r| r.selected));
    }

    #[test]
    fn test_toggle_selected_ignores_rows_not_displayed() {
        let mut state = table(25);

        // on another page
        assert!(!state.toggle_selected(&id("15")));
        assert!(state.selection().is_empty());

        // filtered out by the search
        state.set_search("user 2");
        assert!(!state.toggle_selected(&id("3")));
        assert!(state.selection().is_empty());

        assert!(state.toggle_selected(&id("2")));
        state.apply(Action::DeleteSelected);
        assert!(state.member(&id("2")).is_none());
        assert_eq!(state.members().len(), 24);
    }

    #[test]
    fn test_toggle_selected_ignores_unknown_ids() {
        let mut state = table(3);
        assert!(!state.toggle_selected(&id("404")));
        assert!(state.selection().is_empty());
    }
}

// =============================================================================
// Deletes
// =============================================================================

mod deletes {
    use super::*;

    #[test]
    fn test_delete_one() {
        let mut state = table(25);
        state.navigate(PageNav::Last);
        state.toggle_selected(&id("21"));

        assert!(state.delete_one(&id("21")));
        assert_eq!(state.members().len(), 24);
        assert!(state.member(&id("21")).is_none());
        assert!(state.selection().is_empty());
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_delete_one_is_idempotent() {
        let mut once = table(15);
        once.apply(Action::DeleteOne(id("4")));

        let mut twice = table(15);
        twice.apply(Action::DeleteOne(id("4")));
        twice.apply(Action::DeleteOne(id("4")));

        assert_eq!(once.members(), twice.members());
        assert_eq!(once.current_page(), twice.current_page());
    }

    #[test]
    fn test_delete_unknown_id_changes_nothing() {
        let mut state = table(25);
        state.navigate(PageNav::Page(2));

        assert!(!state.delete_one(&id("404")));
        assert_eq!(state.members().len(), 25);
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn test_delete_selected() {
        let mut state = table(25);
        state.navigate(PageNav::Page(2));
        for raw in ["12", "15", "19"] {
            state.toggle_selected(&id(raw));
        }
        assert_eq!(state.displayed().len(), 10);

        state.apply(Action::DeleteSelected);
        assert_eq!(state.members().len(), 22);
        assert!(state.selection().is_empty());
        assert_eq!(state.current_page(), 1);
        for raw in ["12", "15", "19"] {
            assert!(state.member(&id(raw)).is_none());
        }
    }

    #[test]
    fn test_delete_selected_page() {
        let mut state = table(25);
        state.toggle_select_all();
        assert_eq!(state.delete_selected(), 10);
        assert_eq!(displayed_ids(&state)[0], "11");
        assert_eq!(state.total_pages(), 2);
    }

    #[test]
    fn test_delete_with_empty_selection_is_noop() {
        let mut state = table(25);
        state.navigate(PageNav::Last);
        assert_eq!(state.delete_selected(), 0);
        assert_eq!(state.members().len(), 25);
        assert_eq!(state.current_page(), 3);
    }
}

// =============================================================================
// Inline edits
// =============================================================================

mod editing {
    use super::*;

    #[test]
    fn test_commit_round_trip() {
        let mut state = table(3);
        state.apply(Action::ToggleEditing(id("2")));
        assert!(state.member(&id("2")).unwrap().editing);

        state.apply(Action::CommitName {
            id: id("2"),
            name: "X".to_string(),
        });
        let member = state.member(&id("2")).unwrap();
        assert_eq!(member.name, "X");
        assert!(!member.editing);
    }

    #[test]
    fn test_toggle_twice_leaves_name() {
        let mut state = table(3);
        state.toggle_editing(&id("1"));
        state.toggle_editing(&id("1"));

        let member = state.member(&id("1")).unwrap();
        assert!(!member.editing);
        assert_eq!(member.name, "User 1");
    }

    #[test]
    fn test_draft_updates_name_while_editing() {
        let mut state = table(3);
        state.update_draft_name(&id("1"), "ignored");
        assert_eq!(state.member(&id("1")).unwrap().name, "User 1");

        state.toggle_editing(&id("1"));
        state.update_draft_name(&id("1"), "");
        assert_eq!(state.member(&id("1")).unwrap().name, "");

        state.apply(Action::UpdateDraftName {
            id: id("1"),
            text: "Usr".to_string(),
        });
        let snapshot = TableSnapshot::capture(&state);
        assert_eq!(snapshot.row(&id("1")).unwrap().name, "Usr");
    }

    #[test]
    fn test_cancel_keeps_draft_by_default() {
        let mut state = table(3);
        state.toggle_editing(&id("1"));
        state.update_draft_name(&id("1"), "Draft");
        state.apply(Action::CancelEditing(id("1")));

        let member = state.member(&id("1")).unwrap();
        assert!(!member.editing);
        assert_eq!(member.name, "Draft");
    }

    #[test]
    fn test_cancel_reverts_with_revert_policy() {
        let config = TableConfig::default().with_cancel_policy(CancelPolicy::Revert);
        let mut state = TableState::with_members(config, members(3));

        state.toggle_editing(&id("1"));
        state.update_draft_name(&id("1"), "Draft");
        state.cancel_editing(&id("1"));
        assert_eq!(state.member(&id("1")).unwrap().name, "User 1");

        // toggling off is a cancel too
        state.toggle_editing(&id("1"));
        state.update_draft_name(&id("1"), "Draft");
        state.toggle_editing(&id("1"));
        assert_eq!(state.member(&id("1")).unwrap().name, "User 1");

        // committed names become the new baseline
        state.toggle_editing(&id("1"));
        state.commit_name(&id("1"), "Committed");
        state.toggle_editing(&id("1"));
        state.update_draft_name(&id("1"), "Draft");
        state.cancel_editing(&id("1"));
        assert_eq!(state.member(&id("1")).unwrap().name, "Committed");
    }

    #[test]
    fn test_multiple_rows_can_edit() {
        let mut state = table(3);
        state.toggle_editing(&id("1"));
        state.toggle_editing(&id("2"));
        assert_eq!(state.members().iter().filter(|m| m.editing).count(), 2);
    }

    #[test]
    fn test_single_edit_mode() {
        let config = TableConfig::default()
            .with_edit_mode(EditMode::Single)
            .with_cancel_policy(CancelPolicy::Revert);
        let mut state = TableState::with_members(config, members(3));

        state.toggle_editing(&id("1"));
        state.update_draft_name(&id("1"), "Draft");
        state.toggle_editing(&id("2"));

        let editing: Vec<&str> = state
            .members()
            .iter()
            .filter(|m| m.editing)
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(editing, ["2"]);
        assert_eq!(state.member(&id("1")).unwrap().name, "User 1");
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut state = table(3);
        let before = state.members().to_vec();

        state.toggle_editing(&id("404"));
        state.update_draft_name(&id("404"), "x");
        state.commit_name(&id("404"), "x");
        state.cancel_editing(&id("404"));

        assert_eq!(state.members(), before.as_slice());
    }
}

// =============================================================================
// Loading
// =============================================================================

mod loading {
    use roster_lib::view::LoadStatus;

    use super::*;

    #[test]
    fn test_only_first_load_is_accepted() {
        let mut state = TableState::default();
        assert_eq!(state.load_status(), LoadStatus::Pending);

        assert!(state.load(members(3)));
        assert!(!state.load(members(30)));
        state.apply(Action::LoadFailed("late".to_string()));

        assert_eq!(state.load_status(), LoadStatus::Loaded);
        assert_eq!(state.members().len(), 3);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let mut state = TableState::default();
        state.load(vec![
            Member::new("1", "First", "a@x", "member"),
            Member::new("2", "Other", "b@x", "member"),
            Member::new("1", "Second", "c@x", "admin"),
        ]);

        assert_eq!(state.members().len(), 2);
        assert_eq!(state.member(&id("1")).unwrap().name, "First");
    }

    #[test]
    fn test_failed_load_leaves_table_empty() {
        let mut state = TableState::default();
        state.apply(Action::LoadFailed("HTTP 500".to_string()));

        assert_eq!(state.load_status(), LoadStatus::Failed);
        assert!(state.members().is_empty());
        assert_eq!(state.total_pages(), 1);

        // operations stay total on an empty table
        state.toggle_select_all();
        state.navigate(PageNav::Last);
        state.apply(Action::DeleteSelected);
        assert!(state.selection().is_empty());
        assert_eq!(state.current_page(), 1);
    }
}
