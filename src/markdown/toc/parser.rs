use lazy_static::lazy_static;
use regex::Regex;

use crate::markdown::toc::slug::SlugCounter;
use crate::markdown::types::{Heading, TocResult};
use crate::utils::error::TocError;

lazy_static! {
    static ref HEADING_REGEX: Regex = Regex::new(r"^(#{1,6})\s+(.*)$").unwrap();
}

/// Extract ATX headings from markdown content, in document order.
///
/// `content` must already have the TOC region cut out. Fenced code blocks
/// are not special-cased, so `# comment` lines inside them count too.
/// Anchors are drawn from `slugs`, which should be fresh for each document.
pub fn extract_headings(content: &str, slugs: &mut SlugCounter) -> TocResult<Vec<Heading>> {
    let mut headings = Vec::new();

    // lines() also strips the \r of CRLF endings
    for line in content.lines() {
        let Some(cap) = HEADING_REGEX.captures(line) else {
            continue;
        };

        let title = cap[2].trim();
        if title.is_empty() {
            continue;
        }

        let level = cap[1].len();
        let anchor = slugs.slug(title);
        headings.push(Heading::new(level, title.to_string(), anchor));
    }

    if headings.is_empty() {
        return Err(TocError::NoHeadingsFound);
    }

    Ok(headings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(content: &str) -> TocResult<Vec<Heading>> {
        extract_headings(content, &mut SlugCounter::new())
    }

    #[test]
    fn test_extract_headings() {
        let markdown = "# Top Heading\n\nText here.\n\n## Sub Heading\n\nMore text.";
        let headings = extract(markdown).unwrap();

        assert_eq!(headings.len(), 2);
        assert_eq!(
            headings[0],
            Heading::new(1, "Top Heading".to_string(), "top-heading".to_string())
        );
        assert_eq!(
            headings[1],
            Heading::new(2, "Sub Heading".to_string(), "sub-heading".to_string())
        );
    }

    #[test]
    fn test_levels_and_limits() {
        let markdown = "###### Six\n####### Seven\n#NoSpace\n  # Indented\n#\tTabbed\n";
        let headings = extract(markdown).unwrap();

        let found: Vec<(usize, &str)> =
            headings.iter().map(|h| (h.level, h.title.as_str())).collect();
        assert_eq!(found, vec![(6, "Six"), (1, "Tabbed")]);
    }

    #[test]
    fn test_setext_headings_are_ignored() {
        let err = extract("Title\n=====\n\nSub\n---\n").unwrap_err();
        assert!(matches!(err, TocError::NoHeadingsFound));
    }

    #[test]
    fn test_title_keeps_inline_formatting() {
        let headings = extract("##   The `run()` **API**   \n").unwrap();
        assert_eq!(headings[0].title, "The `run()` **API**");
        assert_eq!(headings[0].anchor, "the-run-api");
    }

    #[test]
    fn test_crlf_titles_have_no_carriage_return() {
        let headings = extract("# One\r\n## Two\r\n").unwrap();
        assert_eq!(headings[0].title, "One");
        assert_eq!(headings[1].title, "Two");
    }

    #[test]
    fn test_code_fences_are_not_skipped() {
        let headings = extract("## Real\n```sh\n# a shell comment\n```\n").unwrap();
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[1].title, "a shell comment");
    }

    #[test]
    fn test_blank_heading_is_skipped() {
        let headings = extract("#   \n## Kept\n").unwrap();
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].title, "Kept");
    }

    #[test]
    fn test_duplicate_setup_headings() {
        let headings = extract("## Setup\ntext\n## Setup\n").unwrap();
        assert_eq!(headings[0].anchor, "setup");
        assert_eq!(headings[1].anchor, "setup-1");
    }

    #[test]
    fn test_no_headings() {
        let err = extract("just prose\n").unwrap_err();
        assert!(matches!(err, TocError::NoHeadingsFound));
    }
}
