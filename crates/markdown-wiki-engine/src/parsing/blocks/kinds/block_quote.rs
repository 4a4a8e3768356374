/// Blockquote syntax.
///
/// Only one level of quoting is modelled: a single `>` and at most one
/// following space are stripped, anything after that is the quoted text.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the quote marker, returning the quoted text when the line is a
    /// quote line.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let rest = line.trim_start().strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}
