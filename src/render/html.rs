//! HTML renderer: emits the table-plus-pagination fragment for embedding in
//! the dashboard page shell. Markup (class names, `?page=N` links, the
//! decorative Actions column) is kept compatible with the existing
//! stylesheet.

use crate::core::view::{PageItem, PageView};
use crate::models::record;
use crate::utils::formatting::escape_html;

fn page_link(page: usize) -> String {
    format!("?page={page}")
}

/// Render the data table for the current page's rows.
pub fn render_table(view: &PageView) -> String {
    let mut html = String::from(
        "<div class='table-container'>\n<table class='data-table'>\n    <thead>\n        <tr>\n",
    );
    for header in record::HEADERS {
        html.push_str(&format!("            <th>{header}</th>\n"));
    }
    html.push_str("            <th>Actions</th>\n        </tr>\n    </thead>\n    <tbody>\n");

    for row in &view.rows {
        html.push_str("        <tr>\n");
        for field in row.fields() {
            html.push_str(&format!("            <td>{}</td>\n", escape_html(field)));
        }
        // Inert controls, kept for visual parity with the page shell
        html.push_str(
            "            <td>\n                <button class='edit-btn'>Edit</button>\n                <button class='delete-btn'>Delete</button>\n            </td>\n",
        );
        html.push_str("        </tr>\n");
    }

    html.push_str("    </tbody>\n</table>\n");
    html
}

/// Render the pagination controls: showing text, prev link, windowed page
/// numbers with ellipsis markers, next link.
pub fn render_pagination(view: &PageView, max_display: usize) -> String {
    let p = &view.pagination;
    let mut html = String::from("<div class='pagination'>\n");
    html.push_str(&format!("    <span>{}</span>\n", p.showing_text()));
    html.push_str("    <div class='page-numbers'>\n");

    html.push_str(&format!(
        "        <a class='page-nav' href='{}'>&lt;</a>\n",
        page_link(p.prev_page)
    ));

    for item in p.window(max_display) {
        match item {
            PageItem::Ellipsis => {
                html.push_str("        <span class='ellipsis'>...</span>\n");
            }
            PageItem::Page(n) => {
                let cls = if n == p.current_page {
                    "page active"
                } else {
                    "page"
                };
                html.push_str(&format!(
                    "        <a class='{cls}' href='{}'>{n}</a>\n",
                    page_link(n)
                ));
            }
        }
    }

    html.push_str(&format!(
        "        <a class='page-nav' href='{}'>&gt;</a>\n",
        page_link(p.next_page)
    ));

    html.push_str("    </div>\n</div>\n</div>\n");
    html
}

/// Full fragment: table followed by the pagination controls.
pub fn render_fragment(view: &PageView, max_display: usize) -> String {
    let mut html = render_table(view);
    html.push_str(&render_pagination(view, max_display));
    html
}
