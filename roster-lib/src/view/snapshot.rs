//! Render snapshot of the visible table surface.

use std::fmt;

use crate::model::MemberId;

use super::LoadStatus;
use super::PagerButton;
use super::TableState;

/// Column headers, in display order.
pub const COLUMNS: [&str; 5] = ["ID", "Name", "Email", "Role", "Actions"];

/// Placeholder of the search input.
pub const SEARCH_PLACEHOLDER: &str = "Search";

/// Label of the select-all control.
pub const SELECT_ALL_LABEL: &str = "Select All";

/// Label of the bulk delete control.
pub const DELETE_SELECTED_LABEL: &str = "Delete Selected";

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Member id shown in the ID column.
    pub id: MemberId,
    /// Name, or the draft text while `editing`.
    pub name: String,
    /// Email column.
    pub email: String,
    /// Role column.
    pub role: String,
    /// Row is highlighted as selected.
    pub selected: bool,
    /// Row shows a name input with confirm/cancel instead of plain text.
    pub editing: bool,
}

impl RowView {
    /// Labels of the controls shown in the Actions column.
    pub fn actions(&self) -> [&'static str; 2] {
        if self.editing {
            ["save", "cancel"]
        } else {
            ["edit", "delete"]
        }
    }
}

/// Everything the table view shows at one point in time.
///
/// Front ends print it; tests assert against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSnapshot {
    /// Text in the search input.
    pub search_query: String,
    /// Rows of the current page, in display order.
    pub rows: Vec<RowView>,
    /// Pager bar, first/prev, numbered pages, next/last.
    pub pager: Vec<PagerButton>,
    /// Page being shown, 1-based.
    pub current_page: usize,
    /// Page total the pager was built from.
    pub total_pages: usize,
    /// Whether the member load has finished.
    pub load_status: LoadStatus,
}

impl TableSnapshot {
    /// Captures the current view of `state`.
    pub fn capture(state: &TableState) -> Self {
        let rows = state
            .displayed()
            .into_iter()
            .map(|m| RowView {
                id: m.id.clone(),
                name: m.name.clone(),
                email: m.email.clone(),
                role: m.role.clone(),
                selected: state.is_selected(&m.id),
                editing: m.editing,
            })
            .collect();

        Self {
            search_query: state.search_query().to_string(),
            rows,
            pager: state.pager_buttons(),
            current_page: state.current_page(),
            total_pages: state.total_pages(),
            load_status: state.load_status(),
        }
    }

    /// Finds the rendered row for `id`, if it is on the current page.
    pub fn row(&self, id: &MemberId) -> Option<&RowView> {
        self.rows.iter().find(|r| &r.id == id)
    }

    /// Number of numbered page buttons.
    pub fn page_button_count(&self) -> usize {
        self.pager
            .iter()
            .filter(|b| matches!(b.nav, super::PageNav::Page(_)))
            .count()
    }

    fn cells(row: &RowView) -> [String; 5] {
        let name = if row.editing {
            format!("[{}]", row.name)
        } else {
            row.name.clone()
        };
        [
            row.id.to_string(),
            name,
            row.email.clone(),
            row.role.clone(),
            row.actions().join(" "),
        ]
    }
}

impl fmt::Display for TableSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: [{}]  ({})  ({})",
            SEARCH_PLACEHOLDER, self.search_query, SELECT_ALL_LABEL, DELETE_SELECTED_LABEL
        )?;

        let cells: Vec<[String; 5]> = self.rows.iter().map(Self::cells).collect();
        let mut widths = COLUMNS.map(|c| c.chars().count());
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_line(f, ' ', &COLUMNS, &widths)?;
        let total: usize = widths.iter().map(|w| w + 3).sum::<usize>() + 1;
        writeln!(f, "{}", "-".repeat(total))?;

        if cells.is_empty() {
            let message = match self.load_status {
                LoadStatus::Pending => "loading...",
                LoadStatus::Loaded | LoadStatus::Failed => "no records",
            };
            writeln!(f, "  {message}")?;
        }

        for (row, values) in self.rows.iter().zip(&cells) {
            let values = values.each_ref().map(String::as_str);
            write_line(f, if row.selected { '*' } else { ' ' }, &values, &widths)?;
        }

        let pager: Vec<String> = self
            .pager
            .iter()
            .map(|b| {
                if b.current {
                    format!("[{}]", b.label())
                } else {
                    b.label()
                }
            })
            .collect();
        write!(f, "{}", pager.join(" "))
    }
}

/// Writes one table line; `marker` flags selected rows.
fn write_line(
    f: &mut fmt::Formatter<'_>,
    marker: char,
    values: &[&str; 5],
    widths: &[usize; 5],
) -> fmt::Result {
    write!(f, "{marker}")?;
    for (value, &width) in values.iter().zip(widths) {
        write!(f, " {value:<width$} |")?;
    }
    writeln!(f)
}
