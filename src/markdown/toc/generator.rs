use crate::markdown::types::{Heading, LineEnding};

/// Render headings as a nested markdown bullet list.
///
/// The shallowest heading present sits at indent zero and every level below
/// it adds two spaces. The result starts and ends with one line break so it
/// drops straight in between the TOC markers.
pub fn render_toc(headings: &[Heading], line_ending: LineEnding) -> String {
    let eol = line_ending.as_str();
    let min_level = headings.iter().map(|h| h.level).min().unwrap_or(1);

    let lines: Vec<String> = headings
        .iter()
        .map(|heading| {
            let indent = "  ".repeat(heading.level - min_level);
            format!("{}- [{}](#{})", indent, heading.title, heading.anchor)
        })
        .collect();

    format!("{}{}{}", eol, lines.join(eol), eol)
}
