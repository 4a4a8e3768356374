//! # Render Pipeline
//!
//! `buffer -> block tree -> inline spans -> HTML`, from scratch on every
//! call. Nothing is cached between renders; the output depends only on the
//! buffer and on the page titles the store holds at call time.

pub mod html;

use xi_rope::Rope;

use crate::parsing::{ParsedDoc, parse_document};
use crate::store::{Page, PageLookup};

pub use html::HtmlWriter;

/// Renders a Markdown buffer to an HTML fragment, resolving wiki-links
/// against `pages`.
pub fn render<L>(buffer: &str, pages: &L) -> String
where
    L: PageLookup + ?Sized,
{
    let doc = parse_document(&Rope::from(buffer));
    render_document(&doc, pages)
}

/// Renders an already parsed document.
pub fn render_document<L>(doc: &ParsedDoc, pages: &L) -> String
where
    L: PageLookup + ?Sized,
{
    let mut writer = HtmlWriter::new(pages);
    writer.write_blocks(&doc.blocks);
    log::trace!("Rendered {} blocks", doc.blocks.len());
    writer.finish()
}

/// Renders a page's body.
pub fn render_page<L>(page: &Page, pages: &L) -> String
where
    L: PageLookup + ?Sized,
{
    render(&page.body, pages)
}

/// Renders a page as a complete HTML document titled after it.
pub fn render_standalone<L>(page: &Page, pages: &L) -> String
where
    L: PageLookup + ?Sized,
{
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        html_escape::encode_text(&page.title),
        render_page(page, pages)
    )
}
