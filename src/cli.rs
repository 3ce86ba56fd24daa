use std::{path::PathBuf, time::Duration};

use chrono::Local;
use clap::{Args, Parser, Subcommand};

use crate::{
    config::{ReviewSelectors, ScrapeConfig},
    export::{reviews_to_table, save_table},
    info_time,
    process::scrape_reviews,
    word_count::{count_unique_words, read_review_texts, word_counts_to_table},
    Result, MAX_PAGES,
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scrape reviews from a paginated listing into a spreadsheet.
    Scrape(ScrapeArgs),
    /// Count in how many reviews each word appears.
    Words(WordsArgs),
}

#[derive(Debug, Args)]
pub struct ScrapeArgs {
    /// Listing URL, e.g. https://www.trustpilot.com/review/www.mooney.it?languages=all
    #[arg(long)]
    pub url: String,

    /// Number of pages to scrape.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=MAX_PAGES as i64))]
    pub pages: u32,

    /// Output spreadsheet.
    #[arg(long, default_value = "reviews_output.xlsx")]
    pub output: PathBuf,

    /// JSON file overriding the review selectors.
    #[arg(long)]
    pub selectors: Option<PathBuf>,

    /// Timeout of a single page request.
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Delay between two page launches, at least 100ms.
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(100..))]
    pub delay_ms: u64,
}

#[derive(Debug, Args)]
pub struct WordsArgs {
    /// Reviews spreadsheet with `Title` and `Body` columns.
    #[arg(long)]
    pub input: PathBuf,

    /// Output spreadsheet.
    #[arg(long, default_value = "word_counts.xlsx")]
    pub output: PathBuf,
}

impl ScrapeArgs {
    fn config(&self) -> Result<ScrapeConfig> {
        let selectors = match &self.selectors {
            Some(path) => ReviewSelectors::from_json_file(path)?,
            None => ReviewSelectors::default(),
        };
        Ok(ScrapeConfig {
            launch_delay: Duration::from_millis(self.delay_ms),
            request_timeout: Duration::from_secs(self.timeout_secs),
            selectors,
            ..Default::default()
        })
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Scrape(args) => scrape(args).await,
        Command::Words(args) => words(args).await,
    }
}

async fn scrape(args: ScrapeArgs) -> Result<()> {
    let config = args.config()?;
    let result = scrape_reviews(&args.url, args.pages, &config).await?;

    let table = reviews_to_table(&result.records)?;
    save_table(&args.output, &table).await?;
    tracing::info!(
        reviews = result.records.len(),
        skipped = result.skipped,
        failed_pages = ?result.failed_pages,
        "Reviews saved to {}",
        args.output.display()
    );
    Ok(())
}

async fn words(args: WordsArgs) -> Result<()> {
    let start_time = Local::now();
    let table = tokio::fs::read(&args.input).await?;
    let texts = read_review_texts(&table)?;
    let counts = count_unique_words(&texts);

    save_table(&args.output, &word_counts_to_table(&counts)?).await?;
    info_time!(
        start_time,
        "Counted {} distinct words in {} reviews, saved to {}",
        counts.len(),
        texts.len(),
        args.output.display()
    );
    Ok(())
}
