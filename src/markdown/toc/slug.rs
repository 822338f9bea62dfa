use std::collections::HashMap;

/// Tracks anchors handed out during one document's generation pass.
///
/// Maps every produced slug to the number of times its base has collided.
/// Create one per document and drop it when the pass is over.
#[derive(Debug, Default)]
pub struct SlugCounter {
    seen: HashMap<String, usize>,
}

impl SlugCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce an anchor for `title` that has not been handed out yet.
    ///
    /// Repeats get `-1`, `-2`, ... appended. Suffixed anchors are recorded
    /// too, so a later heading whose own base equals one of them is pushed
    /// further along instead of colliding.
    pub fn slug(&mut self, title: &str) -> String {
        let base = base_slug(title);
        let mut slug = base.clone();

        if let Some(&collisions) = self.seen.get(&base) {
            let mut count = collisions;
            loop {
                count += 1;
                slug = format!("{}-{}", base, count);
                if !self.seen.contains_key(&slug) {
                    break;
                }
            }
            self.seen.insert(base, count);
        }

        self.seen.insert(slug.clone(), 0);
        slug
    }
}

/// Convert a heading title into a GitHub-style anchor, without
/// disambiguation.
///
/// Lowercases, drops everything except ASCII word characters, whitespace
/// and hyphens, turns each whitespace character into a hyphen, then trims
/// hyphens from both ends.
pub fn base_slug(title: &str) -> String {
    let slug: String = title
        .to_lowercase()
        .chars()
        .filter(|c| is_word_char(*c) || c.is_whitespace() || *c == '-')
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect();

    slug.trim_matches('-').to_string()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
