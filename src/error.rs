use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No reviews found ({skipped} incomplete reviews skipped, {failed_pages} pages failed to load). Check the URL.")]
    NoReviewsFound { skipped: usize, failed_pages: usize },

    #[error("The selector you are trying to scrape with is invalid. Selector: {0}")]
    InvalidSelector(String),

    #[error("Request to {url} returned status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("The table is missing the column: {0}")]
    MissingColumn(&'static str),
    #[error("The workbook doesn't contain any worksheet.")]
    EmptyWorkbook,

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tokio Join Error, couldn't await a task! {0}")]
    RuntimeJoin(#[from] tokio::task::JoinError),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Xlsx write Error: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),
    #[error("Xlsx read Error: {0}")]
    XlsxRead(#[from] calamine::XlsxError),

    #[error("Couldn't initialize logging: {0}")]
    Logging(String),

    #[error("Selector file Error: {0}")]
    Json(#[from] serde_json::Error),
}
