use crate::markdown::types::{LineEnding, TocResult};
use crate::utils::error::TocError;

/// Marker opening the generated region
pub const TOC_START: &str = "<!-- TOC:START -->";
/// Marker closing the generated region
pub const TOC_END: &str = "<!-- TOC:END -->";

/// A document split around its TOC markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regions<'a> {
    /// Everything up to and including the start marker
    pub before: &'a str,
    /// Everything from the end marker onward
    pub after: &'a str,
    /// The document with the whole TOC block, markers included, cut out.
    /// Only used as the heading source.
    pub outside: String,
    pub line_ending: LineEnding,
}

/// Locate the delimiter pair and split the document around it
pub fn split_regions(content: &str) -> TocResult<Regions<'_>> {
    let (start, end) = match (content.find(TOC_START), content.find(TOC_END)) {
        (None, None) => return Err(TocError::MissingDelimiters),
        (Some(_), None) => return Err(TocError::UnmatchedStart),
        (None, Some(_)) => return Err(TocError::UnmatchedEnd),
        (Some(start), Some(end)) => (start, end),
    };

    if content[start + TOC_START.len()..].contains(TOC_START) {
        return Err(TocError::DuplicateDelimiter(TOC_START));
    }
    if content[end + TOC_END.len()..].contains(TOC_END) {
        return Err(TocError::DuplicateDelimiter(TOC_END));
    }
    if end < start {
        return Err(TocError::DelimitersOutOfOrder);
    }

    let mut outside = String::with_capacity(content.len());
    outside.push_str(&content[..start]);
    outside.push_str(&content[end + TOC_END.len()..]);

    Ok(Regions {
        before: &content[..start + TOC_START.len()],
        after: &content[end..],
        outside,
        line_ending: LineEnding::detect(content),
    })
}

/// Put a rendered block back between the markers.
///
/// The block carries its own leading and trailing line break, so the
/// markers end up on their own lines.
pub fn splice(before: &str, block: &str, after: &str) -> String {
    let mut out = String::with_capacity(before.len() + block.len() + after.len());
    out.push_str(before);
    out.push_str(block);
    out.push_str(after);
    out
}
