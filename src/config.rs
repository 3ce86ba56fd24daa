use std::{path::Path, sync::Arc, time::Duration};

use regex::Regex;
use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result, CONNECT_TIMEOUT_SECS, LAUNCH_DELAY_MS, REQUEST_TIMEOUT_SECS, USER_AGENT,
};

/// CSS selectors describing where a review card and its fields live in the markup.
///
/// The defaults match Trustpilot's current class names. These are generated
/// class fingerprints and change whenever the site redeploys its styles, so
/// they can be replaced from a JSON file without touching the code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewSelectors {
    pub review: String,
    pub title: String,
    pub body: String,
    pub date: String,
    /// Container of the star image whose `alt` text carries the rating.
    pub rating: String,
    pub reviewer: String,
    /// Must contain one capture group with the numeric rating.
    pub rating_pattern: String,
}

impl Default for ReviewSelectors {
    fn default() -> Self {
        Self {
            review: "article.paper_paper__1PY90.paper_outline__lwsUX.card_card__lQWDv.card_noPadding__D8PcU.styles_reviewCard__hcAvl".into(),
            title: "h2.typography_heading-s__f7029.typography_appearance-default__AAY17".into(),
            body: "p.typography_body-l__KUYFJ.typography_appearance-default__AAY17.typography_color-black__5LYEn".into(),
            date: "div.typography_body-m__xgxZ_.typography_appearance-subtle__8_H2l.styles_datesWrapper__RCEKH".into(),
            rating: "div.star-rating_starRating__4rrcf.star-rating_medium__iN6Ty".into(),
            reviewer: "span.typography_heading-xxs__QKBS8.typography_appearance-default__AAY17".into(),
            rating_pattern: r"Rated (\d+) out of 5 stars".into(),
        }
    }
}

impl ReviewSelectors {
    /// Reads selectors from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Parses every selector once so pages can share them.
    pub fn compile(&self) -> Result<ReviewMarkup> {
        let rating_alt = Regex::new(&self.rating_pattern)
            .map_err(|_| Error::InvalidSelector(self.rating_pattern.clone()))?;
        if rating_alt.captures_len() < 2 {
            return Err(Error::InvalidSelector(self.rating_pattern.clone()));
        }

        Ok(ReviewMarkup {
            review: create_selector(&self.review)?,
            title: create_selector(&self.title)?,
            body: create_selector(&self.body)?,
            date: create_selector(&self.date)?,
            rating: create_selector(&self.rating)?,
            rating_img: create_selector("img")?,
            rating_alt,
            reviewer: create_selector(&self.reviewer)?,
        })
    }
}

/// Compiled form of `ReviewSelectors`.
#[derive(Debug, Clone)]
pub struct ReviewMarkup {
    pub(crate) review: Selector,
    pub(crate) title: Selector,
    pub(crate) body: Selector,
    pub(crate) date: Selector,
    pub(crate) rating: Selector,
    pub(crate) rating_img: Selector,
    pub(crate) rating_alt: Regex,
    pub(crate) reviewer: Selector,
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::InvalidSelector(sel_str.into()))
}

/// Knobs of a single scrape.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Minimum gap between two page task launches.
    pub launch_delay: Duration,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
    pub selectors: ReviewSelectors,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            launch_delay: Duration::from_millis(LAUNCH_DELAY_MS),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
            selectors: ReviewSelectors::default(),
        }
    }
}

impl ScrapeConfig {
    pub(crate) fn markup(&self) -> Result<Arc<ReviewMarkup>> {
        self.selectors.compile().map(Arc::new)
    }
}
