//! Turning a [`Story`] into a six-column [`StoryRow`].

use crate::error::ExtractError;
use crate::models::{Story, StoryRow};

/// `type` attribute value of a story's canonical short URL.
pub const SHORT_LINK_TYPE: &str = "short";

/// Pick the best thumbnail URL: large, then medium, then small.
///
/// The first variant that is present wins, even if its text is empty.
pub fn find_best_thumbnail(story: &Story) -> Option<&str> {
    let thumbnail = story.thumbnail.as_ref()?;
    [&thumbnail.large, &thumbnail.medium, &thumbnail.small]
        .into_iter()
        .find_map(|variant| variant.as_deref())
}

/// The URL of the first `<link type="short">`, if the story has one.
pub fn find_short_link(story: &Story) -> Option<&str> {
    story
        .links
        .iter()
        .find(|link| link.kind.as_deref() == Some(SHORT_LINK_TYPE))
        .map(|link| link.url.as_deref().unwrap_or_default())
}

/// Absent text becomes an empty string.
///
/// Response bodies are already decoded to UTF-8 by the fetcher, so this is
/// the only normalization a field needs before it reaches the CSV writer.
pub fn normalize_text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Map a story into its CSV row.
///
/// `title`, `link[@type="short"]`, `teaser`, `miniTeaser` and `storyDate` are
/// required; a missing one is an [`ExtractError::MissingField`]. The thumbnail
/// is optional and becomes `""` when absent.
pub fn parse_story_into_row(story: &Story) -> Result<StoryRow, ExtractError> {
    let missing = |field: &'static str| ExtractError::MissingField {
        field,
        story: story.id.clone().unwrap_or_else(|| "<unknown>".to_string()),
    };

    let title = story.title.as_deref().ok_or_else(|| missing("title"))?;
    let link = find_short_link(story).ok_or_else(|| missing("link type=\"short\""))?;
    let teaser = story.teaser.as_deref().ok_or_else(|| missing("teaser"))?;
    let short_teaser = story
        .mini_teaser
        .as_deref()
        .ok_or_else(|| missing("miniTeaser"))?;
    let date = story
        .story_date
        .as_deref()
        .ok_or_else(|| missing("storyDate"))?;

    Ok(StoryRow {
        title: normalize_text(Some(title)),
        link: normalize_text(Some(link)),
        short_teaser: normalize_text(Some(short_teaser)),
        teaser: normalize_text(Some(teaser)),
        thumbnail: normalize_text(find_best_thumbnail(story)),
        date: normalize_text(Some(date)),
    })
}
