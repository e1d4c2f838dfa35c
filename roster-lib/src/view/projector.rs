//! Derives the displayed page from the collection, query and page.

use crate::model::Member;

/// Members matching `query` (case-insensitive substring of name, email or
/// role), in collection order.
pub fn filter_members<'a>(
    members: &'a [Member],
    query: &str,
) -> impl Iterator<Item = &'a Member> + 'a {
    let needle = query.to_lowercase();
    members.iter().filter(move |m| m.matches_lowercase(&needle))
}

/// Number of members matching `query`.
pub fn filtered_count(members: &[Member], query: &str) -> usize {
    filter_members(members, query).count()
}

/// The slice of matching members shown on `page` (1-based).
///
/// A page past the end yields an empty page; nothing is clamped here.
pub fn project<'a>(
    members: &'a [Member],
    query: &str,
    page: usize,
    page_size: usize,
) -> Vec<&'a Member> {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    filter_members(members, query)
        .skip(start)
        .take(page_size)
        .collect()
}
