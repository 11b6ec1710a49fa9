//! Show resolution and story paging against the NPR API.
//!
//! Both calls go through a [`FetchText`] so they run the same way against the
//! live API and against stubbed XML.

use crate::api::{FetchText, build_api_url};
use crate::error::NprError;
use crate::models::{QueryResponse, ShowList, Story};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Id of the list document that enumerates every show.
pub const NPR_SHOWS_LIST_ID: &str = "3004";

/// Default number of stories requested per page.
pub const DEFAULT_BATCH_SIZE: u32 = 20;

/// Return the id of the first show whose title contains `show_name`,
/// ignoring case. Document order decides ties.
pub fn match_show<'a>(shows: &'a ShowList, show_name: &str) -> Option<&'a str> {
    let needle = show_name.to_lowercase();
    shows
        .items
        .iter()
        .find(|item| {
            item.title
                .as_deref()
                .is_some_and(|title| title.to_lowercase().contains(&needle))
        })
        .map(|item| item.id.as_str())
}

/// Fetch the shows list and resolve `show_name` to a show id.
#[instrument(level = "info", skip(fetcher))]
pub async fn find_show_id<F: FetchText>(
    fetcher: &F,
    show_name: &str,
) -> Result<Option<String>, NprError> {
    let params = BTreeMap::from([("id", NPR_SHOWS_LIST_ID.to_string())]);
    let url = build_api_url("list", &params)?;
    let body = fetcher.fetch_text(&url).await?;
    let shows: ShowList = quick_xml::de::from_str(&body)?;
    debug!(count = shows.items.len(), "Parsed shows list");

    let id = match_show(&shows, show_name).map(str::to_string);
    match &id {
        Some(id) => info!(%id, "Resolved show"),
        None => info!(shows = shows.items.len(), "No matching show"),
    }
    Ok(id)
}

/// Fetch one page of `num_results` stories for `show_id`, starting at the
/// 1-based offset `start_num`. An empty page is not an error.
#[instrument(level = "debug", skip(fetcher, api_key))]
pub async fn query_stories_for_show<F: FetchText>(
    fetcher: &F,
    show_id: &str,
    api_key: &str,
    start_num: u32,
    num_results: u32,
) -> Result<Vec<Story>, NprError> {
    let params = BTreeMap::from([
        ("startNum", start_num.to_string()),
        ("numResults", num_results.to_string()),
        ("id", show_id.to_string()),
        ("apiKey", api_key.to_string()),
    ]);
    let url = build_api_url("query", &params)?;
    let body = fetcher.fetch_text(&url).await?;
    let stories = quick_xml::de::from_str::<QueryResponse>(&body)?.into_stories();
    debug!(count = stories.len(), "Parsed story page");
    Ok(stories)
}
