//! Terminal preview: the parsed page drawn as styled ratatui lines.

use markdown_wiki_engine::{
    PageLookup, ParsedDoc,
    parsing::{
        blocks::Block,
        inline::{InlineNode, parse_inline},
    },
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const RULE_WIDTH: usize = 40;

pub fn preview_lines<L>(doc: &ParsedDoc, pages: &L) -> Vec<Line<'static>>
where
    L: PageLookup + ?Sized,
{
    let mut w = LineWriter::new(pages);
    for (i, node) in doc.blocks.iter().enumerate() {
        if i > 0 {
            w.blank();
        }
        w.block(&node.block);
    }
    w.finish()
}

struct LineWriter<'p, L: ?Sized> {
    pages: &'p L,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
}

impl<'p, L> LineWriter<'p, L>
where
    L: PageLookup + ?Sized,
{
    fn new(pages: &'p L) -> Self {
        Self {
            pages,
            lines: Vec::new(),
            current: Vec::new(),
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        if !self.current.is_empty() {
            self.end_line();
        }
        self.lines
    }

    fn end_line(&mut self) {
        self.lines
            .push(Line::from(std::mem::take(&mut self.current)));
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Appends text, breaking lines at `\n`.
    fn push(&mut self, text: &str, style: Style) {
        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                self.end_line();
            }
            if !part.is_empty() {
                self.current.push(Span::styled(part.to_string(), style));
            }
        }
    }

    fn block(&mut self, block: &Block) {
        match block {
            Block::Heading { level, text } => {
                let style = heading_style(*level);
                self.push(&format!("{} ", "#".repeat(usize::from(*level))), style);
                self.inline_text(text, style);
                self.end_line();
            }
            Block::Paragraph { text } => {
                self.inline_text(text, Style::default());
                self.end_line();
            }
            Block::UnorderedList { items } => {
                for item in items {
                    self.push("• ", Style::default().fg(Color::Yellow));
                    self.inline_text(item, Style::default());
                    self.end_line();
                }
            }
            Block::OrderedList { start, items } => {
                for (n, item) in (*start..).zip(items) {
                    self.push(&format!("{n}. "), Style::default().fg(Color::Yellow));
                    self.inline_text(item, Style::default());
                    self.end_line();
                }
            }
            Block::BlockQuote { lines } => {
                let style = Style::default().add_modifier(Modifier::ITALIC);
                for line in lines.iter().filter(|l| !l.trim().is_empty()) {
                    self.push("│ ", Style::default().fg(Color::DarkGray));
                    self.inline_text(line, style);
                    self.end_line();
                }
            }
            Block::CodeBlock { lang, code } => {
                let style = Style::default().fg(Color::Cyan);
                if let Some(lang) = lang {
                    self.push(lang, Style::default().fg(Color::DarkGray));
                    self.end_line();
                }
                for line in code.split('\n') {
                    self.push("    ", style);
                    self.push(line, style);
                    self.end_line();
                }
            }
            Block::ThematicBreak => {
                let rule = "─".repeat(RULE_WIDTH);
                self.push(&rule, Style::default().fg(Color::DarkGray));
                self.end_line();
            }
        }
    }

    fn inline_text(&mut self, text: &str, base: Style) {
        let nodes = parse_inline(text, self.pages);
        self.inlines(&nodes, base);
    }

    fn inlines(&mut self, nodes: &[InlineNode], style: Style) {
        for node in nodes {
            match node {
                InlineNode::Text(text) => self.push(text, style),
                InlineNode::Code(code) => self.push(code, style.fg(Color::Yellow)),
                InlineNode::Strong(children) => {
                    self.inlines(children, style.add_modifier(Modifier::BOLD))
                }
                InlineNode::Emphasis(children) => {
                    self.inlines(children, style.add_modifier(Modifier::ITALIC))
                }
                InlineNode::Strikethrough(children) => {
                    self.inlines(children, style.add_modifier(Modifier::CROSSED_OUT))
                }
                InlineNode::Link { children, url } => {
                    self.inlines(
                        children,
                        style.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
                    );
                    self.push(&format!(" <{url}>"), style.fg(Color::DarkGray));
                }
                InlineNode::WikiLink { title, resolved } => {
                    self.push(title, wiki_link_style(style, *resolved));
                }
            }
        }
    }
}

pub fn wiki_link_style(base: Style, resolved: bool) -> Style {
    let color = if resolved { Color::Green } else { Color::Red };
    base.fg(color).add_modifier(Modifier::UNDERLINED)
}

fn heading_style(level: u8) -> Style {
    let color = match level {
        1 => Color::Magenta,
        2 => Color::Cyan,
        _ => Color::Blue,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
