pub mod blocks;
pub mod inline;
pub mod rope;

#[cfg(test)]
mod tests;

use xi_rope::Rope;

use blocks::{BlockBuilder, BlockNode, MarkdownLineClassifier};
use rope::lines_with_spans;

/// The block-level document tree of one buffer.
///
/// Transient: built on every render and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

pub fn parse_document(rope: &Rope) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}

/// Convenience: parse a plain string buffer.
pub fn parse_str(buffer: &str) -> ParsedDoc {
    parse_document(&Rope::from(buffer))
}
