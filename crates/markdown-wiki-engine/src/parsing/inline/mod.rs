//! # Inline Parsing
//!
//! Cursor-based scanning of a block's text into a tree of [`InlineNode`]s.
//!
//! Inline parsing is separate from block parsing and runs over the text of
//! inline-bearing blocks (headings, paragraphs, list items, quote lines).
//! Code blocks never reach it.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode`
//! - **`kinds`**: delimiter owners (`CodeSpan`, `Link`, `WikiLink`, `Emphasis`)
//! - **`cursor`**: byte `Cursor`
//! - **`closers`**: per-text table of emphasis closer positions
//! - **`parser`**: `parse_inline()` with `try_parse_*` helpers
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `[[not a link]]` `` parses as a single code
//! span, not as text containing a wiki-link.

pub mod closers;
pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{InlineNode, plain_text};
