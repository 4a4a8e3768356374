use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::parsing::{
    blocks::{Block, BlockNode},
    inline::{
        InlineNode, parse_inline,
        kinds::{Link, WikiLink},
    },
};
use crate::store::PageLookup;

/// Writes blocks and inline spans as an HTML fragment.
///
/// The markup mirrors the node tree one-to-one: every node produces exactly
/// one element (or escaped text) and nothing is wrapped twice.
pub struct HtmlWriter<'p, L: ?Sized> {
    pages: &'p L,
    out: String,
}

impl<'p, L> HtmlWriter<'p, L>
where
    L: PageLookup + ?Sized,
{
    pub fn new(pages: &'p L) -> Self {
        Self {
            pages,
            out: String::new(),
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    pub fn write_blocks(&mut self, blocks: &[BlockNode]) {
        for (i, node) in blocks.iter().enumerate() {
            if i > 0 {
                self.out.push('\n');
            }
            self.write_block(&node.block);
        }
    }

    pub fn write_block(&mut self, block: &Block) {
        match block {
            Block::Heading { level, text } => {
                self.out.push_str(&format!("<h{level}>"));
                self.write_inline_text(text);
                self.out.push_str(&format!("</h{level}>"));
            }
            Block::Paragraph { text } => {
                self.out.push_str("<p>");
                self.write_inline_text(text);
                self.out.push_str("</p>");
            }
            Block::UnorderedList { items } => {
                self.out.push_str("<ul>");
                self.write_items(items);
                self.out.push_str("</ul>");
            }
            Block::OrderedList { start, items } => {
                if *start == 1 {
                    self.out.push_str("<ol>");
                } else {
                    self.out.push_str(&format!("<ol start=\"{start}\">"));
                }
                self.write_items(items);
                self.out.push_str("</ol>");
            }
            Block::BlockQuote { lines } => {
                self.out.push_str("<blockquote>");
                for line in lines.iter().filter(|l| !l.trim().is_empty()) {
                    self.out.push_str("<p>");
                    self.write_inline_text(line);
                    self.out.push_str("</p>");
                }
                self.out.push_str("</blockquote>");
            }
            Block::CodeBlock { lang, code } => {
                match lang {
                    Some(lang) => {
                        self.out.push_str("<pre><code class=\"language-");
                        self.out.push_str(&encode_double_quoted_attribute(lang));
                        self.out.push_str("\">");
                    }
                    None => self.out.push_str("<pre><code>"),
                }
                self.out.push_str(&encode_text(code));
                self.out.push_str("</code></pre>");
            }
            Block::ThematicBreak => self.out.push_str("<hr>"),
        }
    }

    fn write_items(&mut self, items: &[String]) {
        for item in items {
            self.out.push_str("<li>");
            self.write_inline_text(item);
            self.out.push_str("</li>");
        }
    }

    fn write_inline_text(&mut self, text: &str) {
        let nodes = parse_inline(text, self.pages);
        self.write_inlines(&nodes);
    }

    pub fn write_inlines(&mut self, nodes: &[InlineNode]) {
        for node in nodes {
            self.write_inline(node);
        }
    }

    fn write_inline(&mut self, node: &InlineNode) {
        match node {
            InlineNode::Text(text) => self.out.push_str(&encode_text(text)),
            InlineNode::Code(code) => {
                self.out.push_str("<code>");
                self.out.push_str(&encode_text(code));
                self.out.push_str("</code>");
            }
            InlineNode::Emphasis(children) => self.write_wrapped("em", children),
            InlineNode::Strong(children) => self.write_wrapped("strong", children),
            InlineNode::Strikethrough(children) => self.write_wrapped("del", children),
            InlineNode::Link { children, url } => {
                self.out.push_str(&format!(
                    "<a href=\"{}\" target=\"{}\" rel=\"{}\">",
                    encode_double_quoted_attribute(url),
                    Link::TARGET,
                    Link::REL
                ));
                self.write_inlines(children);
                self.out.push_str("</a>");
            }
            InlineNode::WikiLink { title, resolved } => {
                let class = if *resolved {
                    WikiLink::CLASS.to_string()
                } else {
                    format!("{} {}", WikiLink::CLASS, WikiLink::MISSING_CLASS)
                };
                self.out.push_str(&format!(
                    "<a href=\"#\" class=\"{class}\" {}=\"{}\">{}</a>",
                    WikiLink::DATA_ATTR,
                    encode_double_quoted_attribute(title),
                    encode_text(title)
                ));
            }
        }
    }

    fn write_wrapped(&mut self, tag: &str, children: &[InlineNode]) {
        self.out.push_str(&format!("<{tag}>"));
        self.write_inlines(children);
        self.out.push_str(&format!("</{tag}>"));
    }
}
