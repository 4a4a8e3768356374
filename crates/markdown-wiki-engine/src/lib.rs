pub mod io;
pub mod parsing;
pub mod render;
pub mod store;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::{
    ExportFormat, FileKeyValueStore, IoError, KeyValueStore, MemoryKeyValueStore, PAGES_KEY,
    export_page, load_pages, load_pages_with, save_pages,
};
pub use parsing::{ParsedDoc, parse_document, parse_str};
pub use render::{render, render_document, render_page, render_standalone};
pub use store::{Page, PageId, PageLookup, PageStore, StoreError};
