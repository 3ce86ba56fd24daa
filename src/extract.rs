use scraper::{ElementRef, Selector};

use crate::{config::ReviewMarkup, record::ReviewRecord};

/// Outcome of extracting a single review card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Complete(ReviewRecord),
    /// At least one of the five fields couldn't be found.
    Incomplete,
}

/// Looks up each field of a review card independently.
/// Every field has to be present, otherwise the whole card is `Incomplete`.
pub fn extract_review(fragment: ElementRef<'_>, markup: &ReviewMarkup) -> Extraction {
    let title = select_text(fragment, &markup.title);
    let body = select_text(fragment, &markup.body);
    let date = select_text(fragment, &markup.date);
    let rating = select_rating(fragment, markup);
    let reviewer = select_text(fragment, &markup.reviewer);

    match (title, body, date, rating, reviewer) {
        (Some(title), Some(body), Some(date), Some(rating), Some(reviewer)) => {
            Extraction::Complete(ReviewRecord {
                title,
                body,
                date,
                rating,
                reviewer,
            })
        }
        _ => Extraction::Incomplete,
    }
}

/// Trimmed text of the first element matching `selector`.
fn select_text(fragment: ElementRef<'_>, selector: &Selector) -> Option<String> {
    let element = fragment.select(selector).next()?;
    Some(element.text().collect::<String>().trim().to_string())
}

/// The rating lives in the `alt` text of the star image: "Rated 4 out of 5 stars".
fn select_rating(fragment: ElementRef<'_>, markup: &ReviewMarkup) -> Option<u8> {
    let stars = fragment.select(&markup.rating).next()?;
    let alt = stars.select(&markup.rating_img).next()?.value().attr("alt")?;
    let rating = markup
        .rating_alt
        .captures(alt)?
        .get(1)?
        .as_str()
        .parse::<u8>()
        .ok()?;
    (1..=5).contains(&rating).then_some(rating)
}
