use std::sync::OnceLock;

use regex::Regex;

/// List item markers: `-`/`*` bullets and `N.` ordinals.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [char; 2] = ['-', '*'];

    /// Returns the item text when the line is an unordered list item.
    ///
    /// Callers must rule out thematic breaks first: `---` is never a bullet.
    pub fn bullet(line: &str) -> Option<&str> {
        let t = line.trim_start();
        let marker = t.chars().next()?;
        if !Self::BULLETS.contains(&marker) {
            return None;
        }
        t[marker.len_utf8()..].strip_prefix(' ')
    }

    /// Returns `(number, text)` when the line is an ordered list item.
    pub fn ordered(line: &str) -> Option<(u64, &str)> {
        static ORDERED_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = ORDERED_REGEX.get_or_init(|| {
            Regex::new(r"^\s*(\d{1,9})\. (.*)$").expect("Invalid ordered list regex")
        });

        let caps = re.captures(line)?;
        let number = caps.get(1)?.as_str().parse().ok()?;
        Some((number, caps.get(2)?.as_str()))
    }
}
