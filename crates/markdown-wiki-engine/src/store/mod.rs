//! # Page Store
//!
//! The in-memory collection of pages and the single source of truth for
//! wiki-link resolution. The renderer only sees it through [`PageLookup`],
//! and only reads it; writes happen between renders.

pub mod page;

pub use page::{Page, PageId};

use std::collections::HashSet;

use chrono::Utc;

/// Title of the page seeded into a fresh store.
pub const WELCOME_TITLE: &str = "Welcome";

/// Body of the seeded welcome page.
pub const WELCOME_BODY: &str = "# Welcome to Markdown Wiki

This is your personal wiki. Write **Markdown** on the left and see the
*live preview* on the right.

## Getting started

- Create a page with **Ctrl+N**
- Save your changes with **Ctrl+S**
- Link pages together with `[[Page Title]]`, e.g. [[Welcome]]

Links to pages that do not exist yet, like [[My First Page]], are shown as
missing until you create them.

> Tip: use `~~strikethrough~~`, `*italic*` and [external links](https://commonmark.org).
";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("A page titled \"{0}\" already exists")]
    DuplicateTitle(String),
    #[error("Page id {0} appears more than once")]
    DuplicateId(PageId),
}

/// The query the renderer needs: does a live page have exactly this title?
pub trait PageLookup {
    fn exists(&self, title: &str) -> bool;
}

/// All live pages in insertion order.
///
/// Titles are unique (exact, case-sensitive match) at every instant.
#[derive(Debug, Default, Clone)]
pub struct PageStore {
    pages: Vec<Page>,
}

impl PageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store containing only the welcome page.
    pub fn with_welcome_page() -> Self {
        let mut store = Self::new();
        store.pages.push(Page::new(
            WELCOME_TITLE.to_string(),
            WELCOME_BODY.to_string(),
        ));
        store
    }

    /// Rebuilds a store from persisted records, keeping their order.
    ///
    /// Titles and ids must both be unique.
    pub fn from_pages(pages: impl IntoIterator<Item = Page>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        let mut ids = HashSet::new();
        for page in pages {
            if store.exists(&page.title) {
                return Err(StoreError::DuplicateTitle(page.title));
            }
            if !ids.insert(page.id) {
                return Err(StoreError::DuplicateId(page.id));
            }
            store.pages.push(page);
        }
        Ok(store)
    }

    /// True iff a live page's title exactly equals `title`.
    pub fn exists(&self, title: &str) -> bool {
        self.pages.iter().any(|p| p.title == title)
    }

    pub fn get(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn get_by_title(&self, title: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.title == title)
    }

    /// Creates a page. Fails without touching the store if the title is taken.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<&Page, StoreError> {
        let title = title.into();
        if self.exists(&title) {
            log::warn!("Refusing to create duplicate page \"{title}\"");
            return Err(StoreError::DuplicateTitle(title));
        }

        let page = Page::new(title, body.into());
        log::debug!("Created page \"{}\" ({})", page.title, page.id);
        self.pages.push(page);
        Ok(&self.pages[self.pages.len() - 1])
    }

    /// Replaces a page's body and bumps its `updated_at`.
    pub fn update(&mut self, id: PageId, body: impl Into<String>) -> Option<&Page> {
        let page = self.pages.iter_mut().find(|p| p.id == id)?;
        page.body = body.into();
        page.updated_at = Utc::now();
        log::debug!("Updated page \"{}\" ({})", page.title, page.id);
        Some(&*page)
    }

    /// All pages in insertion order.
    pub fn list(&self) -> &[Page] {
        &self.pages
    }

    /// Pages whose title contains `query`, ignoring case. A blank query
    /// matches everything.
    pub fn search(&self, query: &str) -> Vec<&Page> {
        let needle = query.trim().to_lowercase();
        self.pages
            .iter()
            .filter(|p| needle.is_empty() || p.title.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl PageLookup for PageStore {
    fn exists(&self, title: &str) -> bool {
        PageStore::exists(self, title)
    }
}
