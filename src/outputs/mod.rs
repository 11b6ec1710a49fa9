//! Output writers for exported stories.
//!
//! - [`csv_file`]: one CSV record per story, columns
//!   `title, link, short teaser, teaser, thumbnail, date`

pub mod csv_file;
