//! # Block Parsing
//!
//! Two-phase block parsing over the lines of the buffer.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts only (what block it would open, whether
//!    it would close a fence).
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` state machine
//!    accumulates lines into the current block and emits `BlockNode`s as
//!    blocks close.
//!
//! ## Modules
//!
//! - **`types`**: `Block` and `BlockNode`
//! - **`kinds`**: block-specific types owning their delimiters
//! - **`classify`**: `MarkdownLineClassifier` producing `LineClass`
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block or inline parsing inside
//! - Block spans are in document order and never overlap
//! - There are no error states; any buffer maps to some block sequence

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use types::{Block, BlockNode};
