//! Error types shared by the fetch, parse and export stages.

use thiserror::Error;

/// Anything that can abort an export run.
#[derive(Error, Debug)]
pub enum NprError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("malformed XML response: {0}")]
    Xml(#[from] quick_xml::de::DeError),

    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("no show title contains {0:?}")]
    ShowNotFound(String),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// A story record that could not be turned into a row.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractError {
    #[error("story {story} is missing required element <{field}>")]
    MissingField {
        field: &'static str,
        /// Story id attribute, or `"<unknown>"`.
        story: String,
    },
}
