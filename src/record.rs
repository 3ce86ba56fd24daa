use std::fmt;

/// A single, fully populated review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRecord {
    pub title: String,
    pub body: String,
    /// Kept in the format the site renders it in.
    pub date: String,
    /// 1 to 5.
    pub rating: u8,
    pub reviewer: String,
}

impl ReviewRecord {
    /// Column headers of an exported review table, in field order.
    pub const COLUMNS: [&'static str; 5] = ["Title", "Body", "Date", "Rating", "Reviewer"];
}

impl fmt::Display for ReviewRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/5) by {} on {}", self.title, self.rating, self.reviewer, self.date)
    }
}

/// Everything one scrape invocation produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScrapeResult {
    /// Page order first, document order within a page.
    pub records: Vec<ReviewRecord>,
    /// Review cards that were found but missed a required field.
    pub skipped: usize,
    /// Pages whose request failed, ascending. Not counted in `skipped`.
    pub failed_pages: Vec<u32>,
}

impl ScrapeResult {
    /// Turns an empty scrape into `Error::NoReviewsFound`.
    pub fn into_found(self) -> crate::Result<Self> {
        if self.records.is_empty() {
            return Err(crate::Error::NoReviewsFound {
                skipped: self.skipped,
                failed_pages: self.failed_pages.len(),
            });
        }
        Ok(self)
    }
}

/// The records and skip count of a single parsed page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageReviews {
    pub records: Vec<ReviewRecord>,
    pub skipped: usize,
}
