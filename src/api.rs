//! NPR API plumbing: URL construction and fetching response bodies.
//!
//! The rest of the crate talks to the network only through the [`FetchText`]
//! trait, so show resolution and pagination can be driven by canned XML in
//! tests. [`HttpFetcher`] is the real implementation backed by `reqwest`.
//!
//! # Endpoints
//!
//! | Path    | Parameters                               | Returns |
//! |---------|------------------------------------------|---------|
//! | `list`  | `id`                                     | `<item id="..."><title/></item>` entries |
//! | `query` | `startNum`, `numResults`, `id`, `apiKey` | `<list><story/>...</list>` |

use crate::error::NprError;
use crate::utils::truncate_for_log;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, instrument, warn};
use url::Url;

/// Host every request is sent to. Requests always use plain HTTP.
pub const NPR_API_HOSTNAME: &str = "api.npr.org";

/// Build an API URL for `path` with the given query parameters.
///
/// Keys and values are form-urlencoded and joined with `&`; no validation of
/// the values is attempted.
///
/// # Examples
///
/// ```ignore
/// let params = BTreeMap::from([("id", "3004".to_string())]);
/// let url = build_api_url("list", &params)?;
/// assert_eq!(url.as_str(), "http://api.npr.org/list?id=3004");
/// ```
pub fn build_api_url(path: &str, query: &BTreeMap<&str, String>) -> Result<Url, NprError> {
    let mut url = Url::parse(&format!("http://{NPR_API_HOSTNAME}/"))?;
    url.set_path(path);
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }
    Ok(url)
}

/// Something that can GET a URL and hand back the body as text.
pub trait FetchText {
    /// Fetch `url` and return the complete response body.
    ///
    /// Transport failures and non-success statuses are errors; there is no
    /// retry.
    async fn fetch_text(&self, url: &Url) -> Result<String, NprError>;
}

/// [`FetchText`] over a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, NprError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl FetchText for HttpFetcher {
    #[instrument(level = "debug", skip_all, fields(path = %url.path()))]
    async fn fetch_text(&self, url: &Url) -> Result<String, NprError> {
        let t0 = Instant::now();
        let res = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(|resp| resp.error_for_status());

        let resp = match res {
            Ok(resp) => resp,
            Err(e) => {
                // the query carries the API key, so the URL is stripped
                let e = e.without_url();
                warn!(elapsed_ms = t0.elapsed().as_millis(), error = %e, "GET failed");
                return Err(e.into());
            }
        };

        let body = resp.text().await.map_err(|e| e.without_url())?;
        debug!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis(),
            body = %truncate_for_log(&body, 200),
            "GET succeeded"
        );
        Ok(body)
    }
}
