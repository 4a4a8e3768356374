/// ATX heading syntax: one to six `#` followed by whitespace.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns `(level, text)` when the line is a heading. The text is trimmed.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let t = line.trim_start();
        let level = t.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let rest = &t[level..];
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some((level as u8, rest.trim()))
    }
}
