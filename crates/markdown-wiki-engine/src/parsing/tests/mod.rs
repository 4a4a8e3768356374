//! Whole-document parsing tests.
//!
//! Every document parsed here is also run through [`invariants::check`].

mod invariants;

use insta::assert_debug_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;
use xi_rope::Rope;

use crate::parsing::{ParsedDoc, blocks::Block, parse_document, rope::slice_to_string};

fn parse_checked(md: &str) -> ParsedDoc {
    let rope = Rope::from(md);
    let doc = parse_document(&rope);
    invariants::check(&rope, &doc.blocks);
    doc
}

fn blocks(md: &str) -> Vec<Block> {
    parse_checked(md).blocks.into_iter().map(|b| b.block).collect()
}

#[test]
fn empty_document() {
    assert!(parse_checked("").blocks.is_empty());
}

#[rstest]
#[case("\n")]
#[case("\n\n   \n")]
#[case("\t\n")]
fn blank_lines_produce_no_blocks(#[case] md: &str) {
    assert!(parse_checked(md).blocks.is_empty());
}

#[test]
fn every_block_kind_in_one_document() {
    let md = "# Title

Some *text*
over two lines

- one
- two

3. three
4. four

> quoted
>
> more

```rust
fn main() {}
```

---
";
    assert_debug_snapshot!(blocks(md), @r#"
    [
        Heading {
            level: 1,
            text: "Title",
        },
        Paragraph {
            text: "Some *text*\nover two lines",
        },
        UnorderedList {
            items: [
                "one",
                "two",
            ],
        },
        OrderedList {
            start: 3,
            items: [
                "three",
                "four",
            ],
        },
        BlockQuote {
            lines: [
                "quoted",
                "",
                "more",
            ],
        },
        CodeBlock {
            lang: Some(
                "rust",
            ),
            code: "fn main() {}",
        },
        ThematicBreak,
    ]
    "#);
}

#[test]
fn spans_cover_source_lines() {
    let md = "# A\n\npara\nmore\n";
    let rope = Rope::from(md);
    let doc = parse_document(&rope);

    let texts: Vec<String> = doc
        .blocks
        .iter()
        .map(|b| slice_to_string(&rope, b.span))
        .collect();

    assert_eq!(texts, vec!["# A\n", "para\nmore\n"]);
}

#[test]
fn fence_content_is_verbatim() {
    let md = "```\n# not a heading\n- not a list\n  indented\n```";
    assert_eq!(
        blocks(md),
        vec![Block::CodeBlock {
            lang: None,
            code: "# not a heading\n- not a list\n  indented".to_string(),
        }]
    );
}

#[test]
fn unterminated_fence_runs_to_end() {
    assert_eq!(
        blocks("text\n```py\nx = 1\n\ny = 2"),
        vec![
            Block::Paragraph {
                text: "text".to_string()
            },
            Block::CodeBlock {
                lang: Some("py".to_string()),
                code: "x = 1\n\ny = 2".to_string(),
            },
        ]
    );
}

#[test]
fn rule_after_blank_line_is_a_break() {
    assert_eq!(
        blocks("above\n\n---\n\nbelow"),
        vec![
            Block::Paragraph {
                text: "above".to_string()
            },
            Block::ThematicBreak,
            Block::Paragraph {
                text: "below".to_string()
            },
        ]
    );
}

#[test]
fn crlf_line_endings() {
    assert_eq!(
        blocks("# Head\r\n\r\nline one\r\nline two\r\n"),
        vec![
            Block::Heading {
                level: 1,
                text: "Head".to_string()
            },
            Block::Paragraph {
                text: "line one\nline two".to_string()
            },
        ]
    );
}

#[rstest]
#[case("# a\n## b\n### c")]
#[case("- a\n1. b\n> c\ntext")]
#[case("```\n```\n```")]
#[case("---\n---\n***")]
#[case("> a\n\n> b")]
fn arbitrary_documents_hold_invariants(#[case] md: &str) {
    parse_checked(md);
}
