//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters. The parser reads
//! these constants; it never hardcodes `[[` or `` ` `` itself.

pub mod code_span;
pub mod emphasis;
pub mod link;
pub mod wikilink;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
pub use wikilink::WikiLink;
