//! Page count and navigation.

/// A pager control the operator can activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    /// Jump to page 1.
    First,
    /// One page back, stopping at 1.
    Prev,
    /// One page forward, stopping at the last page.
    Next,
    /// Jump to the last page.
    Last,
    /// Jump to a numbered page.
    ///
    /// Only the lower bound is enforced; an out-of-range page projects to an
    /// empty slice.
    Page(usize),
}

impl PageNav {
    /// Resolves the target page from the current page and the page total.
    pub fn resolve(self, current: usize, total_pages: usize) -> usize {
        let total_pages = total_pages.max(1);
        match self {
            Self::First => 1,
            Self::Prev => current.saturating_sub(1).max(1),
            Self::Next => current.saturating_add(1).min(total_pages),
            Self::Last => total_pages,
            Self::Page(page) => page.max(1),
        }
    }
}

/// Number of pages needed for `count` rows, never less than one.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// A button in the rendered pager bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerButton {
    /// Navigation triggered by the button.
    pub nav: PageNav,
    /// Whether the button points at the page currently shown.
    pub current: bool,
}

impl PagerButton {
    /// Text shown on the button.
    pub fn label(&self) -> String {
        match self.nav {
            PageNav::First => "«".to_string(),
            PageNav::Prev => "‹".to_string(),
            PageNav::Next => "›".to_string(),
            PageNav::Last => "»".to_string(),
            PageNav::Page(n) => n.to_string(),
        }
    }
}

/// Builds the full pager bar: first, prev, one button per page, next, last.
pub fn pager_buttons(current: usize, total_pages: usize) -> Vec<PagerButton> {
    let total_pages = total_pages.max(1);
    let edge = |nav| PagerButton {
        nav,
        current: false,
    };

    let mut buttons = Vec::with_capacity(total_pages + 4);
    buttons.push(edge(PageNav::First));
    buttons.push(edge(PageNav::Prev));
    buttons.extend((1..=total_pages).map(|n| PagerButton {
        nav: PageNav::Page(n),
        current: n == current,
    }));
    buttons.push(edge(PageNav::Next));
    buttons.push(edge(PageNav::Last));
    buttons
}
