use std::sync::Arc;

use chrono::Local;
use reqwest::Client;
use tokio::task::JoinSet;

use crate::{
    config::{ReviewMarkup, ScrapeConfig},
    info_time,
    parse::parse_html,
    record::{PageReviews, ScrapeResult},
    request::{build_client, page_requests, parse_base_url, request_page_html, PageRequest},
    Result,
};

/// What a single page task ended with.
#[derive(Debug)]
enum PageOutcome {
    Parsed(PageReviews),
    Failed,
}

/// Scrapes pages `1..=max_pages` of the listing and fails with
/// `Error::NoReviewsFound` if not a single complete review came back.
pub async fn scrape_reviews(
    base_url: &str,
    max_pages: u32,
    config: &ScrapeConfig,
) -> Result<ScrapeResult> {
    scrape(base_url, max_pages, config).await?.into_found()
}

/// Scrapes pages `1..=max_pages` of the listing.
///
/// Every page gets its own task. Launches are spaced by `config.launch_delay`,
/// the requests themselves run concurrently. A page that fails to load adds
/// nothing and is reported in `failed_pages`, its siblings keep going.
/// Records come back in page order regardless of which page finished first.
///
/// Only an invalid URL, page count or selector set fails the whole call, and
/// always before the first request goes out.
pub async fn scrape(base_url: &str, max_pages: u32, config: &ScrapeConfig) -> Result<ScrapeResult> {
    let base_url = parse_base_url(base_url)?;
    let requests = page_requests(&base_url, max_pages)?;
    let markup = config.markup()?;
    let client = build_client(config)?;

    let start_time = Local::now();
    info_time!("Started scraping {} pages of {}", max_pages, base_url);

    let mut task_set = JoinSet::new();
    for (i, request) in requests.into_iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(config.launch_delay).await;
        }
        task_set.spawn({
            // Client uses Arc so we can clone cheaply
            let client = client.clone();
            let markup = markup.clone();

            async move {
                let page_num = request.page_num;
                (page_num, process_page(client, request, markup).await)
            }
        });
    }
    info_time!(start_time, "Launched all {} page tasks", max_pages);

    // Tasks finish in any order, slot them back by page number.
    let mut outcomes: Vec<Option<PageOutcome>> = (0..max_pages).map(|_| None).collect();
    while let Some(task) = task_set.join_next().await {
        match task {
            Ok((page_num, outcome)) => outcomes[page_num as usize - 1] = Some(outcome),
            Err(e) => tracing::warn!("a page task didn't finish: {e}"),
        }
    }

    let result = collect_outcomes(outcomes);
    info_time!(
        start_time,
        "Finished scraping: {} reviews, {} skipped, {} pages failed",
        result.records.len(),
        result.skipped,
        result.failed_pages.len()
    );
    Ok(result)
}

/// Fetches and parses a single page. Errors stop here and turn into `PageOutcome::Failed`.
async fn process_page(client: Client, request: PageRequest, markup: Arc<ReviewMarkup>) -> PageOutcome {
    let html = match request_page_html(&client, &request.url).await {
        Ok(html) => html,
        Err(e) => {
            tracing::warn!(page = request.page_num, "Error fetching page {}: {e}", request.url);
            return PageOutcome::Failed;
        }
    };

    match parse_html(html, markup).await {
        Ok(page) => {
            tracing::debug!(
                page = request.page_num,
                reviews = page.records.len(),
                skipped = page.skipped,
                "parsed page"
            );
            PageOutcome::Parsed(page)
        }
        Err(e) => {
            tracing::warn!(page = request.page_num, "Error parsing page {}: {e}", request.url);
            PageOutcome::Failed
        }
    }
}

/// Concatenates the pages in page order and sums their skip counts.
/// A slot left empty belongs to a task that never reported back.
fn collect_outcomes(outcomes: Vec<Option<PageOutcome>>) -> ScrapeResult {
    let mut result = ScrapeResult::default();
    for (page_num, outcome) in (1u32..).zip(outcomes) {
        match outcome {
            Some(PageOutcome::Parsed(page)) => {
                result.records.extend(page.records);
                result.skipped += page.skipped;
            }
            Some(PageOutcome::Failed) | None => result.failed_pages.push(page_num),
        }
    }
    result
}
