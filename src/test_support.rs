//! Canned NPR responses for tests.

use crate::api::FetchText;
use crate::error::NprError;
use std::cell::{Cell, RefCell};
use std::io;
use url::Url;

/// Serves a fixed shows list for `/list` and the given pages, in order, for
/// `/query`. Once the pages run out every query gets an empty list.
/// [`StubFetcher::fail_query`] makes one query fail like a dropped connection.
pub struct StubFetcher {
    shows: String,
    pages: Vec<String>,
    failing_query: Option<usize>,
    next_page: Cell<usize>,
    calls: RefCell<Vec<Url>>,
}

impl StubFetcher {
    pub fn new(shows: String, pages: Vec<String>) -> Self {
        Self {
            shows,
            pages,
            failing_query: None,
            next_page: Cell::new(0),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Fail the `n`th query (0-based) with a transport error.
    pub fn fail_query(mut self, n: usize) -> Self {
        self.failing_query = Some(n);
        self
    }

    /// Every URL requested so far.
    pub fn calls(&self) -> Vec<Url> {
        self.calls.borrow().clone()
    }

    /// Query URLs only, as `startNum` values.
    pub fn requested_offsets(&self) -> Vec<u32> {
        self.calls
            .borrow()
            .iter()
            .filter(|url| url.path() == "/query")
            .filter_map(|url| {
                url.query_pairs()
                    .find(|(k, _)| k == "startNum")
                    .and_then(|(_, v)| v.parse().ok())
            })
            .collect()
    }
}

impl FetchText for StubFetcher {
    async fn fetch_text(&self, url: &Url) -> Result<String, NprError> {
        self.calls.borrow_mut().push(url.clone());
        if url.path() == "/list" {
            return Ok(self.shows.clone());
        }
        let n = self.next_page.get();
        self.next_page.set(n + 1);
        if self.failing_query == Some(n) {
            return Err(NprError::Io(io::Error::new(
                io::ErrorKind::ConnectionReset,
                "connection reset by peer",
            )));
        }
        Ok(self
            .pages
            .get(n)
            .cloned()
            .unwrap_or_else(|| "<nprml><list></list></nprml>".to_string()))
    }
}

/// A shows list document for `(id, title)` pairs.
pub fn shows_xml(shows: &[(&str, &str)]) -> String {
    let items: String = shows
        .iter()
        .map(|(id, title)| format!(r#"<item id="{id}"><title>{title}</title></item>"#))
        .collect();
    format!("<list><title>Programs</title>{items}</list>")
}

/// A complete story element with every field the exporter reads.
pub fn story_xml(id: u32) -> String {
    format!(
        r#"<story id="{id}">
  <link type="html">https://www.npr.org/{id}</link>
  <link type="short">https://n.pr/{id}</link>
  <title>Episode {id}</title>
  <teaser>Teaser {id}</teaser>
  <miniTeaser>Mini {id}</miniTeaser>
  <thumbnail><large>https://img.npr.org/{id}.jpg</large></thumbnail>
  <storyDate>Mon, 06 May 2024 12:00:00 -0400</storyDate>
</story>"#
    )
}

/// A query page holding `count` stories with ids starting at `first_id`.
pub fn stories_xml(first_id: u32, count: u32) -> String {
    let stories: String = (first_id..first_id + count).map(story_xml).collect();
    format!("<nprml><list><title>Show</title>{stories}</list></nprml>")
}
