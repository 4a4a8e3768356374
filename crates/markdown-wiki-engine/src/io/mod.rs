//! Persistence and export.
//!
//! Pages are saved as one JSON array under [`PAGES_KEY`] in a
//! [`KeyValueStore`]. Export writes a single page out as Markdown or as a
//! standalone HTML document.

use relative_path::{RelativePath, RelativePathBuf};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::render_standalone;
use crate::store::{Page, PageLookup, PageStore, StoreError};

/// Key the page collection is persisted under.
pub const PAGES_KEY: &str = "markdown-wiki-pages";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid page data: {0}")]
    Store(#[from] StoreError),
}

/// String values addressed by string keys.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, IoError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), IoError>;
}

/// Volatile store, for tests and sessions that never touch disk.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    values: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, IoError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), IoError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stores each key as `<key>.json` under a root directory.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn relative_path(key: &str) -> RelativePathBuf {
        RelativePathBuf::from(format!("{}.json", sanitize_file_name(key)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, IoError> {
        match read_file(&Self::relative_path(key), &self.root) {
            Ok(value) => Ok(Some(value)),
            Err(IoError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), IoError> {
        write_file(&Self::relative_path(key), &self.root, value)
    }
}

/// Saves every page, in store order, under [`PAGES_KEY`].
pub fn save_pages<S>(kv: &mut S, store: &PageStore) -> Result<(), IoError>
where
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string_pretty(store.list())?;
    kv.set(PAGES_KEY, &json)?;
    log::info!("Saved {} pages", store.len());
    Ok(())
}

/// Loads the persisted pages, or a store holding only the welcome page when
/// nothing has been saved yet.
pub fn load_pages<S>(kv: &S) -> Result<PageStore, IoError>
where
    S: KeyValueStore + ?Sized,
{
    load_pages_with(kv, true)
}

/// Like [`load_pages`], but an empty store stays empty unless
/// `seed_welcome` is set.
pub fn load_pages_with<S>(kv: &S, seed_welcome: bool) -> Result<PageStore, IoError>
where
    S: KeyValueStore + ?Sized,
{
    match kv.get(PAGES_KEY)? {
        Some(json) => {
            let pages: Vec<Page> = serde_json::from_str(&json)?;
            let store = PageStore::from_pages(pages)?;
            log::info!("Loaded {} pages", store.len());
            Ok(store)
        }
        None if seed_welcome => {
            log::info!("No saved pages found, seeding welcome page");
            Ok(PageStore::with_welcome_page())
        }
        None => Ok(PageStore::new()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Html,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Html => "html",
        }
    }
}

/// Writes `page` into `dir` and returns the path written.
///
/// HTML export resolves wiki-links against `pages` as they are at call time.
pub fn export_page<L>(
    page: &Page,
    dir: &Path,
    format: ExportFormat,
    pages: &L,
) -> Result<PathBuf, IoError>
where
    L: PageLookup + ?Sized,
{
    let file_name = format!("{}.{}", sanitize_file_name(&page.title), format.extension());
    let relative = RelativePathBuf::from(file_name);
    let content = match format {
        ExportFormat::Markdown => page.body.clone(),
        ExportFormat::Html => render_standalone(page, pages),
    };
    write_file(&relative, dir, &content)?;
    let path = relative.to_path(dir);
    log::info!("Exported \"{}\" to {}", page.title, path.display());
    Ok(path)
}

/// Replaces characters that are unsafe in file names with `_`.
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() || trimmed.chars().all(|c| c == '.') {
        "untitled".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Read a file and return its content
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::WELCOME_TITLE;
    use crate::tests::{create_test_file, create_test_store_dir};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_load_without_saved_pages_seeds_welcome() {
        let kv = MemoryKeyValueStore::new();

        let store = load_pages(&kv).unwrap();

        assert_eq!(store.len(), 1);
        assert!(store.exists(WELCOME_TITLE));
    }

    #[test]
    fn test_load_without_seeding_is_empty() {
        let kv = MemoryKeyValueStore::new();

        let store = load_pages_with(&kv, false).unwrap();

        assert!(store.is_empty());
    }

    #[test]
    fn test_saved_pages_ignore_seed_flag() {
        let mut kv = MemoryKeyValueStore::new();
        save_pages(&mut kv, &PageStore::new()).unwrap();

        let store = load_pages(&kv).unwrap();

        assert!(store.is_empty());
    }

    #[test]
    fn test_save_then_load_keeps_order_and_ids() {
        // Given a store with three pages
        let mut store = PageStore::with_welcome_page();
        store.create("Zeta", "z").unwrap();
        store.create("Alpha", "a [[Zeta]]").unwrap();
        let mut kv = MemoryKeyValueStore::new();

        // When saving and loading back
        save_pages(&mut kv, &store).unwrap();
        let loaded = load_pages(&kv).unwrap();

        // Then the records come back in insertion order, unchanged
        assert_eq!(loaded.list(), store.list());
    }

    #[test]
    fn test_saved_value_is_json_array() {
        let store = PageStore::with_welcome_page();
        let mut kv = MemoryKeyValueStore::new();

        save_pages(&mut kv, &store).unwrap();

        let raw = kv.get(PAGES_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_load_rejects_corrupt_json() {
        let mut kv = MemoryKeyValueStore::new();
        kv.set(PAGES_KEY, "{not json").unwrap();

        let result = load_pages(&kv);

        assert!(matches!(result, Err(IoError::Serialization(_))));
    }

    #[test]
    fn test_load_rejects_duplicate_titles() {
        let mut store = PageStore::new();
        store.create("Same", "").unwrap();
        let mut records = store.list().to_vec();
        records.push(records[0].clone());
        let mut kv = MemoryKeyValueStore::new();
        kv.set(PAGES_KEY, &serde_json::to_string(&records).unwrap())
            .unwrap();

        let result = load_pages(&kv);

        assert!(matches!(
            result,
            Err(IoError::Store(StoreError::DuplicateTitle(_)))
        ));
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let mut store = PageStore::new();
        store.create("First", "").unwrap();
        let mut records = store.list().to_vec();
        let mut copy = records[0].clone();
        copy.title = "Second".to_string();
        records.push(copy);
        let mut kv = MemoryKeyValueStore::new();
        kv.set(PAGES_KEY, &serde_json::to_string(&records).unwrap())
            .unwrap();

        let result = load_pages(&kv);

        assert!(matches!(
            result,
            Err(IoError::Store(StoreError::DuplicateId(id))) if id == records[0].id
        ));
    }

    #[test]
    fn test_file_store_round_trip() {
        // Given a file-backed store in an empty directory
        let dir = create_test_store_dir();
        let mut kv = FileKeyValueStore::new(dir.path());
        assert_eq!(kv.get(PAGES_KEY).unwrap(), None);

        // When saving pages
        let mut store = PageStore::with_welcome_page();
        store.create("Notes", "- one").unwrap();
        save_pages(&mut kv, &store).unwrap();

        // Then the key lands in its own file and loads back
        assert!(dir.path().join("markdown-wiki-pages.json").exists());
        let loaded = load_pages(&FileKeyValueStore::new(dir.path())).unwrap();
        assert_eq!(loaded.list(), store.list());
    }

    #[test]
    fn test_file_store_creates_missing_root() {
        let dir = create_test_store_dir();
        let root = dir.path().join("nested").join("store");
        let mut kv = FileKeyValueStore::new(&root);

        kv.set("key", "value").unwrap();

        assert_eq!(kv.root(), root.as_path());
        assert_eq!(kv.get("key").unwrap().as_deref(), Some("value"));
        assert!(root.is_dir());
    }

    #[test]
    fn test_export_markdown_writes_body() {
        let dir = create_test_store_dir();
        let store = PageStore::with_welcome_page();
        let page = store.get_by_title(WELCOME_TITLE).unwrap();

        let path = export_page(page, dir.path(), ExportFormat::Markdown, &store).unwrap();

        assert_eq!(path, dir.path().join("Welcome.md"));
        assert_eq!(fs::read_to_string(path).unwrap(), page.body);
    }

    #[test]
    fn test_export_html_is_standalone_document() {
        let dir = create_test_store_dir();
        let mut store = PageStore::new();
        store.create("Home", "Go to [[Away]]").unwrap();
        let page = store.get_by_title("Home").unwrap();

        let path = export_page(page, dir.path(), ExportFormat::Html, &store).unwrap();

        let html = fs::read_to_string(path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Home</title>"));
        assert!(html.contains("class=\"wiki-link missing\" data-wiki=\"Away\""));
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let dir = create_test_store_dir();
        create_test_file(&dir, "Home.md", "old");
        let mut store = PageStore::new();
        store.create("Home", "new").unwrap();
        let page = store.get_by_title("Home").unwrap();

        let path = export_page(page, dir.path(), ExportFormat::Markdown, &store).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "new");
    }

    #[rstest]
    #[case("Plain Title", "Plain Title")]
    #[case("a/b\\c", "a_b_c")]
    #[case("what? <now>", "what_ _now_")]
    #[case("   ", "untitled")]
    #[case("..", "untitled")]
    fn test_sanitize_file_name(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize_file_name(input), expected);
    }

    #[test]
    fn test_read_file_not_found() {
        let dir = create_test_store_dir();
        let result = read_file(RelativePath::new("missing.json"), dir.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }
}
