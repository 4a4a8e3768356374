use crate::parsing::rope::span::Span;

/// A block-level node of the document tree.
///
/// Inline-bearing variants hold the raw inline source; inline scanning
/// happens at render time, when the page store is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `#`..`######` heading.
    Heading { level: u8, text: String },
    /// Consecutive plain lines joined with `\n`.
    Paragraph { text: String },
    /// `-` / `*` items, one entry per line.
    UnorderedList { items: Vec<String> },
    /// `N.` items; `start` is the first item's number.
    OrderedList { start: u64, items: Vec<String> },
    /// Consecutive `>` lines, one entry per line.
    BlockQuote { lines: Vec<String> },
    /// Fenced code. Raw zone: never inline-scanned.
    CodeBlock { lang: Option<String>, code: String },
    /// `---`
    ThematicBreak,
}

/// A parsed block together with the byte span of the lines it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub block: Block,
    /// Full byte span of the source lines, newlines included.
    pub span: Span,
}
