use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::view::{self, PageView};
use crate::errors::{AppError, AppResult};
use crate::render::{html, terminal};
use crate::store::RecordStore;
use crate::ui::messages;
use std::fs;

/// Handle the `view` subcommand: load the records, compute the page view,
/// and render it to the terminal (and optionally to an HTML file).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::View {
        search,
        page,
        page_size,
        html: html_out,
    } = cmd
    {
        let query = search.as_deref().unwrap_or("");
        let requested_page = view::parse_page(page.as_deref());
        let page_size = page_size.unwrap_or(cfg.page_size).max(1);

        let store = RecordStore::new(&cfg.data_file);

        // A missing or unparsable data file is surfaced to the user and the
        // view degrades to the empty state; the process does not abort.
        let records: &[_] = match store.load() {
            Ok(records) => records,
            Err(e @ (AppError::DataNotFound(_) | AppError::MalformedData(_))) => {
                messages::error(e);
                &[]
            }
            Err(e) => return Err(e),
        };

        let page_view = view::view(records, query, requested_page, page_size);

        print!("{}", terminal::render_header(&cfg.page_title));
        print!("{}", terminal::render_view(&page_view, query, cfg.max_page_links));

        if let Some(out) = html_out {
            write_html(out, &page_view, cfg.max_page_links)?;
        }
    }
    Ok(())
}

fn write_html(path: &str, page_view: &PageView, max_display: usize) -> AppResult<()> {
    let fragment = html::render_fragment(page_view, max_display);
    fs::write(path, fragment)?;
    messages::success(format!("HTML fragment written to {path}"));
    Ok(())
}
