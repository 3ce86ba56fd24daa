use reqwest::Client;
use url::Url;

use crate::{config::ScrapeConfig, Error, Result, MAX_PAGES};

/// A single page of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page_num: u32,
    pub url: Url,
}

impl PageRequest {
    /// Sets `page={page_num}` on the listing URL, replacing any `page` it already had.
    /// The other query pairs are kept exactly as written.
    pub fn new(base_url: &Url, page_num: u32) -> Self {
        let page = format!("page={page_num}");
        let query = base_url
            .query()
            .unwrap_or_default()
            .split('&')
            .filter(|pair| !pair.is_empty() && pair.split('=').next() != Some("page"))
            .chain([page.as_str()])
            .collect::<Vec<_>>()
            .join("&");

        let mut url = base_url.clone();
        url.set_query(Some(&query));
        Self { page_num, url }
    }
}

/// Checks the listing URL before anything touches the network.
pub fn parse_base_url(base_url: &str) -> Result<Url> {
    let trimmed = base_url.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput("the listing URL is empty".into()));
    }
    let url = Url::parse(trimmed)
        .map_err(|e| Error::InvalidInput(format!("'{trimmed}' is not a valid URL: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(Error::InvalidInput(format!(
            "'{trimmed}' is not an http(s) URL"
        )));
    }
    Ok(url)
}

/// Returns the page requests for pages `1..=max_pages`.
pub fn page_requests(base_url: &Url, max_pages: u32) -> Result<Vec<PageRequest>> {
    if !(1..=MAX_PAGES).contains(&max_pages) {
        return Err(Error::InvalidInput(format!(
            "page count must be between 1 and {MAX_PAGES}, got {max_pages}"
        )));
    }
    Ok((1..=max_pages)
        .map(|page_num| PageRequest::new(base_url, page_num))
        .collect())
}

/// A client shared by every page task. Requests never run without a timeout.
pub fn build_client(config: &ScrapeConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.request_timeout)
        .connect_timeout(config.connect_timeout)
        .build()?;
    Ok(client)
}

/// Requests a page and returns the HTML if the server answered with a success status.
pub async fn request_page_html(client: &Client, url: &Url) -> Result<String> {
    let res = client.get(url.clone()).send().await?;
    let status = res.status();
    if !status.is_success() {
        return Err(Error::HttpStatus {
            url: url.to_string(),
            status,
        });
    }
    let html = res.text().await?;
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn appends_page_to_existing_query() {
        let base = url("https://www.trustpilot.com/review/www.mooney.it?languages=all");
        assert_eq!(
            PageRequest::new(&base, 3).url.as_str(),
            "https://www.trustpilot.com/review/www.mooney.it?languages=all&page=3"
        );
    }

    #[test]
    fn adds_query_when_missing() {
        let base = url("https://www.trustpilot.com/review/www.mooney.it");
        assert_eq!(
            PageRequest::new(&base, 1).url.as_str(),
            "https://www.trustpilot.com/review/www.mooney.it?page=1"
        );
    }

    #[test]
    fn replaces_existing_page() {
        let base = url("https://example.com/reviews?page=7&sort=recent");
        let req = PageRequest::new(&base, 2);
        assert_eq!(req.page_num, 2);
        assert_eq!(req.url.as_str(), "https://example.com/reviews?sort=recent&page=2");
    }

    #[test]
    fn keeps_other_pairs_as_written() {
        let base = url("https://example.com/reviews?flag&path=a/b&q=a%20b&page=9&pages=3&sort=new+first");
        assert_eq!(
            PageRequest::new(&base, 4).url.as_str(),
            "https://example.com/reviews?flag&path=a/b&q=a%20b&pages=3&sort=new+first&page=4"
        );
    }

    #[test]
    fn drops_empty_query_pieces() {
        let base = url("https://example.com/reviews?&sort=recent&");
        assert_eq!(
            PageRequest::new(&base, 1).url.as_str(),
            "https://example.com/reviews?sort=recent&page=1"
        );
    }

    #[test]
    fn builds_one_request_per_page() {
        let base = url("https://example.com/reviews");
        let pages: Vec<u32> = page_requests(&base, 4)
            .unwrap()
            .iter()
            .map(|p| p.page_num)
            .collect();
        assert_eq!(pages, [1, 2, 3, 4]);
    }

    #[test]
    fn rejects_out_of_range_page_counts() {
        let base = url("https://example.com/reviews");
        assert!(matches!(page_requests(&base, 0), Err(Error::InvalidInput(_))));
        assert!(matches!(
            page_requests(&base, MAX_PAGES + 1),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_bad_base_urls() {
        for input in ["", "   ", "www.trustpilot.com/review/x", "ftp://example.com/x", "mailto:a@b.c"] {
            assert!(
                matches!(parse_base_url(input), Err(Error::InvalidInput(_))),
                "accepted {input:?}"
            );
        }
        assert!(parse_base_url(" https://example.com/reviews?x=1 ").is_ok());
    }
}
