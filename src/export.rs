//! The export run: resolve the show, page through its stories, write rows.
//!
//! Pages are requested one after another starting at offset 1. After each
//! full page the offset advances by the batch size; the first page shorter
//! than the batch size (including an empty one) is the last.

use crate::api::FetchText;
use crate::cli::Config;
use crate::error::NprError;
use crate::extract::parse_story_into_row;
use crate::npr::{find_show_id, query_stories_for_show};
use crate::outputs::csv_file::CsvOutput;
use tracing::{debug, info, instrument, warn};

/// What a finished run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportSummary {
    pub pages: usize,
    pub stories: usize,
    pub rows_written: usize,
    pub skipped: usize,
}

/// Offset of the page after the one starting at `num`.
fn next_offset(num: u32, batch_size: u32) -> Result<u32, NprError> {
    num.checked_add(batch_size).ok_or_else(|| {
        NprError::Config(format!(
            "offset {num} + batch size {batch_size} exceeds {}",
            u32::MAX
        ))
    })
}

/// Run a full export for `config` using `fetcher` for every request.
///
/// Fails with [`NprError::ShowNotFound`] before touching the output file when
/// no show matches. Any other error stops the run; rows from earlier pages
/// stay in the file.
#[instrument(level = "info", skip_all, fields(show = %config.show_name, file = %config.filename.display()))]
pub async fn export_show<F: FetchText>(
    fetcher: &F,
    config: &Config,
) -> Result<ExportSummary, NprError> {
    let show_id = find_show_id(fetcher, &config.show_name)
        .await?
        .ok_or_else(|| NprError::ShowNotFound(config.show_name.clone()))?;

    let mut output = CsvOutput::create(&config.filename)?;
    let mut summary = ExportSummary::default();
    let batch_size = config.batch_size;
    let mut num = 1u32;

    loop {
        info!("Fetching {} items starting from offset {}", batch_size, num);

        let stories =
            query_stories_for_show(fetcher, &show_id, &config.api_key, num, batch_size).await?;
        summary.pages += 1;
        summary.stories += stories.len();

        for story in &stories {
            match parse_story_into_row(story) {
                Ok(row) => output.write_row(&row)?,
                Err(e) if config.skip_malformed => {
                    warn!(error = %e, "Skipping malformed story");
                    summary.skipped += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
        debug!(page = summary.pages, rows = output.rows(), "Page processed");

        if stories.len() < batch_size as usize {
            break;
        }
        num = next_offset(num, batch_size)?;
    }

    summary.rows_written = output.finish()?;
    info!(
        pages = summary.pages,
        rows = summary.rows_written,
        skipped = summary.skipped,
        "Export finished"
    );
    Ok(summary)
}
