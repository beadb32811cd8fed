//! `studymate search` command.

use super::block_on;
use crate::context::ServiceContext;
use crate::search::SearchView;

/// Execute the `search` command.
///
/// A failed search is logged and shown as an empty result list.
///
/// # Errors
///
/// Returns an error string if the async runtime cannot start.
pub fn run(ctx: &ServiceContext, query: &str) -> Result<(), String> {
    let mut view = SearchView::new(ctx.search.as_ref());
    if !view.begin(query) {
        println!("Type something to search for.");
        return Ok(());
    }

    if view.is_loading() {
        println!("Searching...");
    }
    let outcome = block_on(ctx.search.related_topics(view.query()))?;
    let _ = view.finish(outcome);

    if view.results().is_empty() {
        println!("No results found for \"{}\".", view.query());
        return Ok(());
    }
    for hit in view.results() {
        println!("- {}", hit.text);
        if let Some(url) = &hit.url {
            println!("  {url}");
        }
    }
    Ok(())
}
