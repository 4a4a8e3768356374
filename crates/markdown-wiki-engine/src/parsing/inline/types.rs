/// A parsed inline span.
///
/// Spans nest (strong containing emphasis, links containing either) but
/// always through owned children, so the tree is acyclic and no deeper than
/// the text it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text, unescaped.
    Text(String),
    /// `*...*`
    Emphasis(Vec<InlineNode>),
    /// `**...**`
    Strong(Vec<InlineNode>),
    /// `~~...~~`
    Strikethrough(Vec<InlineNode>),
    /// `` `...` `` taken literally.
    Code(String),
    /// `[display](url)`
    Link {
        children: Vec<InlineNode>,
        url: String,
    },
    /// `[[Title]]`, with the result of the page store lookup.
    WikiLink { title: String, resolved: bool },
}

impl InlineNode {
    /// The visible text of this node and its children, markup removed.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            InlineNode::Text(t) | InlineNode::Code(t) => out.push_str(t),
            InlineNode::WikiLink { title, .. } => out.push_str(title),
            InlineNode::Emphasis(children)
            | InlineNode::Strong(children)
            | InlineNode::Strikethrough(children)
            | InlineNode::Link { children, .. } => {
                for c in children {
                    c.push_plain_text(out);
                }
            }
        }
    }
}

/// Concatenated visible text of a node sequence.
pub fn plain_text(nodes: &[InlineNode]) -> String {
    nodes.iter().map(InlineNode::plain_text).collect()
}
