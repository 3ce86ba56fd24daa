#![allow(dead_code)]

use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use url::Url;

/// How the stub answers a single page.
#[derive(Debug, Clone)]
pub struct PageReply {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl PageReply {
    pub fn ok(body: String) -> Self {
        Self {
            status: 200,
            body,
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: "error".into(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Local review site answering `/review/example.com?page=N`.
/// Every request gets its own thread so slow pages don't hold up the others.
pub struct ReviewSite {
    pub listing_url: String,
    requested: Arc<Mutex<Vec<(u32, Instant)>>>,
    shutdown_tx: Option<mpsc::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl ReviewSite {
    pub fn spawn<F>(reply: F) -> Self
    where
        F: Fn(u32) -> PageReply + Send + Sync + 'static,
    {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("start review stub server");
        let addr = server.server_addr();
        let listing_url = format!("http://{addr}/review/example.com?languages=all");

        let requested = Arc::new(Mutex::new(Vec::new()));
        let reply = Arc::new(reply);
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let handle = thread::spawn({
            let requested = requested.clone();
            move || loop {
                if shutdown_rx.try_recv().is_ok() {
                    break;
                }

                let request = match server.recv_timeout(Duration::from_millis(20)) {
                    Ok(Some(req)) => req,
                    Ok(None) => continue,
                    Err(_) => break,
                };

                let Some(page) = page_param(request.url()) else {
                    let _ = request.respond(
                        tiny_http::Response::from_string("missing page").with_status_code(400),
                    );
                    continue;
                };
                requested.lock().unwrap().push((page, Instant::now()));

                let reply = reply.clone();
                thread::spawn(move || {
                    let PageReply {
                        status,
                        body,
                        delay,
                    } = (*reply)(page);
                    thread::sleep(delay);
                    let header =
                        tiny_http::Header::from_bytes("Content-Type", "text/html; charset=utf-8")
                            .unwrap();
                    let _ = request.respond(
                        tiny_http::Response::from_string(body)
                            .with_status_code(status)
                            .with_header(header),
                    );
                });
            }
        });

        Self {
            listing_url,
            requested,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    /// Page numbers in the order the requests arrived.
    pub fn requested_pages(&self) -> Vec<u32> {
        self.requested.lock().unwrap().iter().map(|(page, _)| *page).collect()
    }

    /// Time between the first and the last request the site received.
    pub fn arrival_span(&self) -> Duration {
        let requested = self.requested.lock().unwrap();
        let first = requested.iter().map(|(_, at)| *at).min();
        let last = requested.iter().map(|(_, at)| *at).max();
        match (first, last) {
            (Some(first), Some(last)) => last - first,
            _ => Duration::ZERO,
        }
    }
}

impl Drop for ReviewSite {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn page_param(path: &str) -> Option<u32> {
    let url = Url::parse(&format!("http://stub{path}")).ok()?;
    let page = url
        .query_pairs()
        .find(|(key, _)| key == "page")?
        .1
        .parse()
        .ok()?;
    Some(page)
}

/// A Trustpilot style review card. `rating: None` leaves out the star image.
pub fn review_card(title: &str, rating: Option<u8>) -> String {
    let stars = rating
        .map(|n| format!(r#"<img src="stars.svg" alt="Rated {n} out of 5 stars">"#))
        .unwrap_or_default();
    format!(
        r#"<article class="paper_paper__1PY90 paper_outline__lwsUX card_card__lQWDv card_noPadding__D8PcU styles_reviewCard__hcAvl">
  <span class="typography_heading-xxs__QKBS8 typography_appearance-default__AAY17">Reviewer of {title}</span>
  <div class="star-rating_starRating__4rrcf star-rating_medium__iN6Ty">{stars}</div>
  <div class="typography_body-m__xgxZ_ typography_appearance-subtle__8_H2l styles_datesWrapper__RCEKH"><time>Sep 1, 2024</time></div>
  <h2 class="typography_heading-s__f7029 typography_appearance-default__AAY17">{title}</h2>
  <p class="typography_body-l__KUYFJ typography_appearance-default__AAY17 typography_color-black__5LYEn">Body of {title}</p>
</article>"#
    )
}

pub fn review_page(cards: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>Reviews</title></head><body><main>{}</main></body></html>",
        cards.concat()
    )
}
