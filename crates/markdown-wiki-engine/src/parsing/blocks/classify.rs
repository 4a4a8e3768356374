use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::{BlockQuote, CodeFence, Heading, ListMarker, ThematicBreak};

/// What a single line looks like on its own, before any context is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    FenceOpen { lang: Option<String> },
    Heading { level: u8, text: String },
    ThematicBreak,
    Quote { text: String },
    Bullet { text: String },
    Ordered { number: u64, text: String },
    Text { text: String },
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. The builder decides what the
/// facts mean (e.g. a `---` line inside an open paragraph is just text).
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope.
    pub line: Span,
    /// Line text without its newline, kept verbatim for code blocks.
    pub raw: String,
    /// How the line classifies when it starts a block.
    pub kind: LineKind,
    /// Whether the line would close an open code fence.
    pub closes_fence: bool,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Precedence, first match wins: fence, heading, thematic break, quote,
    /// bullet, ordered item, blank, text.
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let raw = lr.content();
        LineClass {
            line: lr.span,
            raw: raw.to_string(),
            kind: Self::kind_of(raw),
            closes_fence: CodeFence::closes(raw),
        }
    }

    fn kind_of(raw: &str) -> LineKind {
        if let Some(open) = CodeFence::open(raw) {
            return LineKind::FenceOpen { lang: open.lang };
        }
        if let Some((level, text)) = Heading::parse(raw) {
            return LineKind::Heading {
                level,
                text: text.to_string(),
            };
        }
        if ThematicBreak::matches(raw) {
            return LineKind::ThematicBreak;
        }
        if let Some(text) = BlockQuote::strip_prefix(raw) {
            return LineKind::Quote {
                text: text.trim_end().to_string(),
            };
        }
        if let Some(text) = ListMarker::bullet(raw) {
            return LineKind::Bullet {
                text: text.trim().to_string(),
            };
        }
        if let Some((number, text)) = ListMarker::ordered(raw) {
            return LineKind::Ordered {
                number,
                text: text.trim().to_string(),
            };
        }
        if raw.trim().is_empty() {
            return LineKind::Blank;
        }
        LineKind::Text {
            text: raw.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kind(line: &str) -> LineKind {
        let lr = LineRef {
            span: Span::new(0, line.len()),
            text: line.to_string(),
        };
        MarkdownLineClassifier.classify(&lr).kind
    }

    #[test]
    fn classifies_each_line_kind() {
        assert_eq!(kind("```js\n"), LineKind::FenceOpen { lang: Some("js".into()) });
        assert_eq!(
            kind("## Title"),
            LineKind::Heading {
                level: 2,
                text: "Title".into()
            }
        );
        assert_eq!(kind("---"), LineKind::ThematicBreak);
        assert_eq!(kind("> quoted"), LineKind::Quote { text: "quoted".into() });
        assert_eq!(kind("* item"), LineKind::Bullet { text: "item".into() });
        assert_eq!(
            kind("7. seventh"),
            LineKind::Ordered {
                number: 7,
                text: "seventh".into()
            }
        );
        assert_eq!(kind("   \r\n"), LineKind::Blank);
        assert_eq!(kind("  just text  "), LineKind::Text { text: "just text".into() });
    }

    #[test]
    fn thematic_break_wins_over_bullet() {
        assert_eq!(kind("----"), LineKind::ThematicBreak);
    }

    #[test]
    fn raw_text_keeps_indentation() {
        let lr = LineRef {
            span: Span::new(0, 9),
            text: "    x = 1\n".to_string(),
        };
        let c = MarkdownLineClassifier.classify(&lr);
        assert_eq!(c.raw, "    x = 1");
        assert!(!c.closes_fence);
    }

    #[test]
    fn closing_fence_is_flagged() {
        let lr = LineRef {
            span: Span::new(0, 4),
            text: "```\n".to_string(),
        };
        let c = MarkdownLineClassifier.classify(&lr);
        assert!(c.closes_fence);
        assert_eq!(c.kind, LineKind::FenceOpen { lang: None });
    }
}
