mod generator;
mod parser;
mod slug;
mod splicer;

pub use generator::render_toc;
pub use parser::extract_headings;
pub use slug::SlugCounter;
pub use splicer::{splice, split_regions};

use log::debug;

use crate::markdown::types::TocResult;

/// Regenerate the table of contents between the TOC markers.
///
/// Returns the full document text. Running it on its own output gives back
/// the same bytes.
pub fn generate_toc(content: &str) -> TocResult<String> {
    let regions = split_regions(content)?;

    let mut slugs = SlugCounter::new();
    let headings = extract_headings(&regions.outside, &mut slugs)?;
    debug!("found {} headings", headings.len());

    let block = render_toc(&headings, regions.line_ending);
    Ok(splice(regions.before, &block, regions.after))
}
