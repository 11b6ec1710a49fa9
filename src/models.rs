//! Data models for NPR API documents and the rows written from them.
//!
//! - [`ShowList`] / [`ShowItem`]: the "list of shows" document
//! - [`QueryResponse`] / [`Story`]: one page of the story query endpoint
//! - [`StoryRow`]: the six CSV columns produced per story
//!
//! The XML models are deserialized with `quick-xml`'s serde support. Child
//! elements the exporter does not use are ignored. Elements are `Option`s so
//! that "absent" can be told apart from "present but empty" when rows are
//! extracted.

use serde::{Deserialize, Serialize};

/// The shows list document: `<list><item id="..."><title>..</title></item>...</list>`.
#[derive(Debug, Default, Deserialize)]
pub struct ShowList {
    #[serde(rename = "item", default)]
    pub items: Vec<ShowItem>,
}

/// One show in the shows list.
#[derive(Debug, Deserialize)]
pub struct ShowItem {
    /// Opaque show identifier passed to the query endpoint.
    #[serde(rename = "@id")]
    pub id: String,
    pub title: Option<String>,
}

/// A page of the query endpoint: `<nprml><list><story/>...</list></nprml>`.
///
/// Error documents carry no `<list>`, which reads as an empty page.
#[derive(Debug, Default, Deserialize)]
pub struct QueryResponse {
    pub list: Option<StoryList>,
}

impl QueryResponse {
    pub fn into_stories(self) -> Vec<Story> {
        self.list.map(|l| l.stories).unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct StoryList {
    #[serde(rename = "story", default)]
    pub stories: Vec<Story>,
}

/// One episode or article as returned by the query endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct Story {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "link", default)]
    pub links: Vec<Link>,
    pub teaser: Option<String>,
    #[serde(rename = "miniTeaser")]
    pub mini_teaser: Option<String>,
    pub thumbnail: Option<Thumbnail>,
    #[serde(rename = "storyDate")]
    pub story_date: Option<String>,
}

/// `<link type="short">https://n.pr/abc</link>`
#[derive(Debug, Default, Deserialize)]
pub struct Link {
    #[serde(rename = "@type")]
    pub kind: Option<String>,
    #[serde(rename = "$text")]
    pub url: Option<String>,
}

/// Thumbnail variants of a story; any of them may be missing.
#[derive(Debug, Default, Deserialize)]
pub struct Thumbnail {
    pub large: Option<String>,
    pub medium: Option<String>,
    pub small: Option<String>,
}

/// One CSV record. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryRow {
    pub title: String,
    pub link: String,
    pub short_teaser: String,
    pub teaser: String,
    pub thumbnail: String,
    pub date: String,
}
