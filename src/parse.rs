use std::{
    panic::{catch_unwind, AssertUnwindSafe},
    sync::Arc,
};

use scraper::Html;
use tokio::task::spawn_blocking;

use crate::{
    config::ReviewMarkup,
    extract::{extract_review, Extraction},
    record::PageReviews,
    Result,
};

/// Parses the page on the blocking pool, `Html` isn't `Send` and parsing is CPU bound.
pub(crate) async fn parse_html(html: String, markup: Arc<ReviewMarkup>) -> Result<PageReviews> {
    let reviews = spawn_blocking(move || parse_page(&html, &markup)).await?;
    Ok(reviews)
}

/// Extracts every review card on the page, in document order.
/// Cards missing a field are dropped and counted in `skipped`.
/// A page without any review card is simply empty.
pub fn parse_page(html: &str, markup: &ReviewMarkup) -> PageReviews {
    let doc = Html::parse_document(html);

    // Trustpilot renders 20 reviews per page.
    let mut page = PageReviews {
        records: Vec::with_capacity(20),
        skipped: 0,
    };
    for fragment in doc.select(&markup.review) {
        let extraction = catch_unwind(AssertUnwindSafe(|| extract_review(fragment, markup)));
        match extraction {
            Ok(Extraction::Complete(record)) => page.records.push(record),
            Ok(Extraction::Incomplete) => page.skipped += 1,
            Err(_) => {
                tracing::warn!("review extraction panicked, skipping the review");
                page.skipped += 1;
            }
        }
    }
    page
}
