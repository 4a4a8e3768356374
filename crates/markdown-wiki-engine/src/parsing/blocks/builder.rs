use crate::parsing::rope::span::Span;

use super::{
    classify::{LineClass, LineKind},
    kinds::Paragraph,
    types::{Block, BlockNode},
};

/// The block currently being accumulated.
#[derive(Debug, Default)]
enum LeafState {
    #[default]
    None,
    Paragraph {
        span: Span,
        lines: Vec<String>,
    },
    Fence {
        span: Span,
        lang: Option<String>,
        lines: Vec<String>,
    },
    Quote {
        span: Span,
        lines: Vec<String>,
    },
    Bullets {
        span: Span,
        items: Vec<String>,
    },
    Ordered {
        span: Span,
        start: u64,
        items: Vec<String>,
    },
}

/// Phase 2 of block parsing: a finite-state accumulator fed one
/// [`LineClass`] at a time, in document order.
///
/// Every input has a defined output. Unterminated fences run to the end of
/// the buffer and are still emitted as code blocks.
pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        match &c.kind {
            LineKind::Blank => self.flush(),
            LineKind::Text { text } => self.extend_paragraph(c.line, text),
            // Without a blank line in between, a rule is paragraph text.
            LineKind::ThematicBreak if self.in_paragraph() => {
                self.extend_paragraph(c.line, c.raw.trim())
            }
            LineKind::ThematicBreak => {
                self.flush();
                self.emit(Block::ThematicBreak, c.line);
            }
            LineKind::Heading { level, text } => {
                self.flush();
                self.emit(
                    Block::Heading {
                        level: *level,
                        text: text.clone(),
                    },
                    c.line,
                );
            }
            LineKind::FenceOpen { lang } => {
                self.flush();
                self.leaf = LeafState::Fence {
                    span: c.line,
                    lang: lang.clone(),
                    lines: vec![],
                };
            }
            LineKind::Quote { text } => self.extend_quote(c.line, text),
            LineKind::Bullet { text } => self.extend_bullets(c.line, text),
            LineKind::Ordered { number, text } => self.extend_ordered(c.line, *number, text),
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush, including an unterminated fence
        self.flush();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn in_paragraph(&self) -> bool {
        matches!(self.leaf, LeafState::Paragraph { .. })
    }

    fn emit(&mut self, block: Block, span: Span) {
        self.out.push(BlockNode { block, span });
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        if c.closes_fence {
            if let LeafState::Fence { span, .. } = &mut self.leaf {
                *span = span.to(c.line);
            }
            self.flush();
            return;
        }
        if let LeafState::Fence { span, lines, .. } = &mut self.leaf {
            *span = span.to(c.line);
            lines.push(c.raw.clone());
        }
    }

    fn extend_paragraph(&mut self, line: Span, text: &str) {
        if let LeafState::Paragraph { span, lines } = &mut self.leaf {
            *span = span.to(line);
            lines.push(text.to_string());
            return;
        }
        self.flush();
        self.leaf = LeafState::Paragraph {
            span: line,
            lines: vec![text.to_string()],
        };
    }

    fn extend_quote(&mut self, line: Span, text: &str) {
        if let LeafState::Quote { span, lines } = &mut self.leaf {
            *span = span.to(line);
            lines.push(text.to_string());
            return;
        }
        self.flush();
        self.leaf = LeafState::Quote {
            span: line,
            lines: vec![text.to_string()],
        };
    }

    fn extend_bullets(&mut self, line: Span, text: &str) {
        if let LeafState::Bullets { span, items } = &mut self.leaf {
            *span = span.to(line);
            items.push(text.to_string());
            return;
        }
        self.flush();
        self.leaf = LeafState::Bullets {
            span: line,
            items: vec![text.to_string()],
        };
    }

    fn extend_ordered(&mut self, line: Span, number: u64, text: &str) {
        if let LeafState::Ordered { span, items, .. } = &mut self.leaf {
            *span = span.to(line);
            items.push(text.to_string());
            return;
        }
        self.flush();
        self.leaf = LeafState::Ordered {
            span: line,
            start: number,
            items: vec![text.to_string()],
        };
    }

    /// Emits whatever is being accumulated and returns to the idle state.
    fn flush(&mut self) {
        let (block, span) = match std::mem::take(&mut self.leaf) {
            LeafState::None => return,
            LeafState::Paragraph { span, lines } => (
                Block::Paragraph {
                    text: Paragraph::join(&lines),
                },
                span,
            ),
            LeafState::Fence { span, lang, lines } => (
                Block::CodeBlock {
                    lang,
                    code: lines.join("\n"),
                },
                span,
            ),
            LeafState::Quote { span, lines } => (Block::BlockQuote { lines }, span),
            LeafState::Bullets { span, items } => (Block::UnorderedList { items }, span),
            LeafState::Ordered { span, start, items } => {
                (Block::OrderedList { start, items }, span)
            }
        };
        self.emit(block, span);
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
