//! Terminal renderer: turns a computed page view into a column-aligned
//! table plus a pagination bar.

use crate::core::view::{PageItem, PageView};
use crate::models::record;
use crate::utils::colors;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};
use chrono::Local;

/// Why a view has zero rows. "No data" and "no matches" render differently
/// so a missing data file is not mistaken for an over-narrow search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    NoData,
    NoMatches,
}

const NARROW_COL: usize = 14;
const WIDE_COL: usize = 32;

/// Render the dashboard header: title and current date.
pub fn render_header(title: &str) -> String {
    format!(
        "{}  {}{}{}\n",
        bold(title),
        colors::GREY,
        Local::now().format("%Y-%m-%d"),
        colors::RESET
    )
}

/// Render the full view: table, showing text, and pagination bar.
/// `query` is echoed back in the no-matches message.
pub fn render_view(view: &PageView, query: &str, max_display: usize) -> String {
    let mut out = String::new();

    if view.rows.is_empty() {
        let reason = if view.pagination.total_results == 0 && !query.is_empty() {
            EmptyReason::NoMatches
        } else {
            EmptyReason::NoData
        };
        out.push_str(&render_empty(reason, query));
        out.push('\n');
        out.push_str(&render_pagination(view, max_display));
        return out;
    }

    let mut table = Table::new(
        record::HEADERS
            .iter()
            .map(|h| {
                let cap = match *h {
                    "Description" | "Remarks" => WIDE_COL,
                    _ => NARROW_COL,
                };
                Column::new(h, cap)
            })
            .collect(),
    );

    for row in &view.rows {
        table.add_row(row.fields().iter().map(|f| f.to_string()).collect());
    }

    out.push_str(&table.render());
    out.push('\n');
    out.push_str(&render_pagination(view, max_display));
    out
}

pub fn render_empty(reason: EmptyReason, query: &str) -> String {
    match reason {
        EmptyReason::NoMatches => format!("No records match '{query}'."),
        EmptyReason::NoData => "No records loaded.".to_string(),
    }
}

/// Pagination bar: showing text, then `<`, the windowed page numbers with
/// the current page highlighted, then `>`.
pub fn render_pagination(view: &PageView, max_display: usize) -> String {
    let p = &view.pagination;
    let mut out = String::new();

    out.push_str(&p.showing_text());
    out.push_str("   ");

    out.push_str("< ");
    for item in p.window(max_display) {
        match item {
            PageItem::Ellipsis => out.push_str("… "),
            PageItem::Page(n) if n == p.current_page => {
                out.push_str(&colors::highlight_page(&n.to_string()));
                out.push(' ');
            }
            PageItem::Page(n) => {
                out.push_str(&n.to_string());
                out.push(' ');
            }
        }
    }
    out.push('>');
    out.push('\n');

    out
}
