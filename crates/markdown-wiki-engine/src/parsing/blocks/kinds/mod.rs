//! # Block Kinds
//!
//! One type per block kind, each owning its delimiters and detector. The
//! classifier calls these; it never hardcodes `#`, `>` or backticks itself.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceOpen};
pub use heading::Heading;
pub use list::ListMarker;
pub use paragraph::Paragraph;
pub use thematic_break::ThematicBreak;
