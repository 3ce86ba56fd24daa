//! Concurrent review scraper.
//!
//! Fetches the pages of a paginated review listing concurrently, extracts
//! every complete review card and collects them, in page order, into a single
//! dataset that can be exported as a spreadsheet.

mod error;
mod macros;

pub mod cli;
pub mod config;
pub mod export;
pub mod extract;
pub mod logging;
pub mod parse;
pub mod process;
pub mod record;
pub mod request;
pub mod stopwords;
pub mod word_count;

pub use error::{Error, Result};

/// Pause between two successive page task launches.
const LAUNCH_DELAY_MS: u64 = 100;
/// Upper bound for a single page request, connecting included.
const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = concat!("revscrap/", env!("CARGO_PKG_VERSION"));
/// Highest page count a single scrape accepts.
pub const MAX_PAGES: u32 = 100;
/// Name of the single worksheet every exported workbook contains.
pub const SHEET_NAME: &str = "Sheet1";
