use crate::store::PageLookup;

use super::{
    closers::Closers,
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link, WikiLink},
    types::InlineNode,
};

/// Nesting beyond this depth is kept as literal text.
const MAX_DEPTH: usize = 64;

/// Parses a block's inline text into a sequence of [`InlineNode`]s.
///
/// Wiki-link targets are looked up in `pages` while scanning, so the result
/// reflects the store at call time.
///
/// # Precedence
/// At each position the constructs are tried in this order and the first
/// that closes wins: code span, link, wiki-link, strong, emphasis,
/// strikethrough. Scanning resumes right after the matched span. Anything
/// unclosed stays literal text.
pub fn parse_inline<L>(s: &str, pages: &L) -> Vec<InlineNode>
where
    L: PageLookup + ?Sized,
{
    InlineParser { pages }.parse(s, 0)
}

struct InlineParser<'p, L: ?Sized> {
    pages: &'p L,
}

impl<L> InlineParser<'_, L>
where
    L: PageLookup + ?Sized,
{
    fn parse(&self, s: &str, depth: usize) -> Vec<InlineNode> {
        if depth > MAX_DEPTH {
            return text_nodes(s);
        }

        let closers = Closers::new(s.as_bytes());
        let mut cur = Cursor::new(s);
        let mut out = vec![];
        let mut text_start = 0;

        while !cur.eof() {
            let start = cur.pos();
            if let Some(node) = self.try_parse_at(&mut cur, &closers, depth) {
                push_text(&mut out, &s[text_start..start]);
                out.push(node);
                text_start = cur.pos();
                continue;
            }
            cur.bump();
        }

        push_text(&mut out, &s[text_start..]);
        out
    }

    fn try_parse_at(
        &self,
        cur: &mut Cursor<'_>,
        closers: &Closers,
        depth: usize,
    ) -> Option<InlineNode> {
        if let Some(node) = try_parse_code_span(cur) {
            return Some(node);
        }
        if let Some(node) = self.try_parse_link(cur, depth) {
            return Some(node);
        }
        if let Some(node) = self.try_parse_wikilink(cur) {
            return Some(node);
        }
        Emphasis::ALL
            .into_iter()
            .find_map(|kind| self.try_parse_emphasis(cur, closers, kind, depth))
    }

    /// Attempts `[display](url)` at the current position.
    ///
    /// The display text may contain nested brackets and is itself scanned.
    /// The url must be non-empty and free of whitespace. Parentheses inside
    /// it must balance, and script-bearing schemes leave the whole thing as
    /// text.
    fn try_parse_link(&self, cur: &mut Cursor<'_>, depth: usize) -> Option<InlineNode> {
        if cur.peek() != Some(Link::OPEN) {
            return None;
        }

        let s = cur.s;
        let bytes = s.as_bytes();
        let open = cur.pos();
        let close = matching_bracket(bytes, open)?;
        if close == open + 1 || bytes.get(close + 1) != Some(&Link::URL_OPEN) {
            return None;
        }

        let url_start = close + 2;
        let url_end = matching_paren(bytes, url_start)?;
        let url = &s[url_start..url_end];
        if url.is_empty() || url.contains(char::is_whitespace) || !Link::allows(url) {
            return None;
        }

        let children = self.parse(&s[open + 1..close], depth + 1);
        cur.jump_to(url_end + 1);
        Some(InlineNode::Link {
            children,
            url: url.to_string(),
        })
    }

    /// Attempts `[[Title]]` at the current position and resolves the title.
    fn try_parse_wikilink(&self, cur: &mut Cursor<'_>) -> Option<InlineNode> {
        if !cur.starts_with(WikiLink::OPEN) {
            return None;
        }

        let s = cur.s;
        let target_start = cur.pos() + WikiLink::OPEN.len();
        let target_len = s.as_bytes()[target_start..]
            .windows(WikiLink::CLOSE.len())
            .position(|w| w == WikiLink::CLOSE)?;
        let title = WikiLink::target(&s[target_start..target_start + target_len])?;

        cur.jump_to(target_start + target_len + WikiLink::CLOSE.len());
        Some(InlineNode::WikiLink {
            title: title.to_string(),
            resolved: self.pages.exists(title),
        })
    }

    /// Attempts a strong, emphasis or strikethrough span.
    ///
    /// The opener must not be followed by whitespace, the closer must not
    /// be preceded by whitespace, and the content must be non-empty.
    fn try_parse_emphasis(
        &self,
        cur: &mut Cursor<'_>,
        closers: &Closers,
        kind: Emphasis,
        depth: usize,
    ) -> Option<InlineNode> {
        let delim = kind.delim();
        if !cur.starts_with(delim) {
            return None;
        }
        let after = cur.peek_at(delim.len())?;
        if after.is_ascii_whitespace() {
            return None;
        }
        // `**` at this position is strong or nothing, never emphasis of `*...`
        if kind == Emphasis::Italic && after == b'*' {
            return None;
        }

        let s = cur.s;
        let content_start = cur.pos() + delim.len();
        let close = closers.find(kind, content_start)?;
        let children = self.parse(&s[content_start..close], depth + 1);
        cur.jump_to(close + delim.len());

        Some(match kind {
            Emphasis::Strong => InlineNode::Strong(children),
            Emphasis::Italic => InlineNode::Emphasis(children),
            Emphasis::Strikethrough => InlineNode::Strikethrough(children),
        })
    }
}

/// Attempts a code span at the current position.
///
/// Returns `None` if not at a backtick or if the span isn't closed.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let s = cur.s;
    let start = cur.pos();
    let end = CodeSpan::end(s.as_bytes(), start)?;
    cur.jump_to(end);
    Some(InlineNode::Code(s[start + 1..end - 1].to_string()))
}

/// Index of the `]` matching the `[` at `open`, skipping code spans.
fn matching_bracket(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut j = open;
    while j < bytes.len() {
        match bytes[j] {
            CodeSpan::TICK => {
                if let Some(end) = CodeSpan::end(bytes, j) {
                    j = end;
                    continue;
                }
            }
            Link::OPEN => depth += 1,
            Link::CLOSE => {
                depth -= 1;
                if depth == 0 {
                    return Some(j);
                }
            }
            _ => {}
        }
        j += 1;
    }
    None
}

/// Index of the `)` ending a url that starts at `start`.
///
/// Nested parentheses must balance. Whitespace ends the search.
fn matching_paren(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (j, &b) in bytes.iter().enumerate().skip(start) {
        match b {
            Link::URL_OPEN => depth += 1,
            Link::URL_CLOSE if depth == 0 => return Some(j),
            Link::URL_CLOSE => depth -= 1,
            b if b.is_ascii_whitespace() => return None,
            _ => {}
        }
    }
    None
}

fn push_text(out: &mut Vec<InlineNode>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(InlineNode::Text(prev)) = out.last_mut() {
        prev.push_str(text);
    } else {
        out.push(InlineNode::Text(text.to_string()));
    }
}

fn text_nodes(s: &str) -> Vec<InlineNode> {
    let mut out = vec![];
    push_text(&mut out, s);
    out
}
