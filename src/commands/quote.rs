//! `studymate quote` command.

use super::block_on;
use crate::context::ServiceContext;
use crate::quotes::QuoteView;

/// Execute the `quote` command: load one quote, then refresh `count - 1`
/// times, printing each.
///
/// A failed fetch still prints the local fallback quote.
///
/// # Errors
///
/// Returns an error string if the async runtime cannot start.
pub fn run(ctx: &ServiceContext, count: u32) -> Result<(), String> {
    let mut view = QuoteView::new(ctx.quotes.as_ref());
    block_on(async {
        // Failures are already logged and replaced by the fallback text.
        let _ = view.load().await;
        print_quote(&view);
        for _ in 1..count {
            let _ = view.refresh().await;
            println!();
            print_quote(&view);
        }
    })
}

fn print_quote(view: &QuoteView<'_>) {
    println!("\"{}\"", view.text());
    if let Some(author) = view.author() {
        println!("  - {author}");
    }
}
