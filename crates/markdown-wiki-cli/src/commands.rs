use anyhow::{Context, Result, bail};
use markdown_wiki_engine::{ExportFormat, KeyValueStore, PageStore, export_page, render, save_pages};
use std::io::Write;
use std::path::Path;

/// Prints `file` rendered as an HTML fragment.
pub fn render_file(file: &Path, store: &PageStore, out: &mut impl Write) -> Result<()> {
    let buffer = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    writeln!(out, "{}", render(&buffer, store))?;
    Ok(())
}

/// Creates a page titled `title` and saves the store.
pub fn new_page<S>(
    kv: &mut S,
    store: &mut PageStore,
    title: &str,
    out: &mut impl Write,
) -> Result<()>
where
    S: KeyValueStore + ?Sized,
{
    let page = store.create(title, format!("# {title}\n\n"))?;
    writeln!(out, "Created \"{}\" ({})", page.title, page.id)?;
    save_pages(kv, store)?;
    Ok(())
}

/// Replaces the body of the page titled `title` with the contents of
/// `file`, then saves the store.
pub fn save_page<S>(
    kv: &mut S,
    store: &mut PageStore,
    title: &str,
    file: &Path,
    out: &mut impl Write,
) -> Result<()>
where
    S: KeyValueStore + ?Sized,
{
    let body = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let Some(id) = store.get_by_title(title).map(|page| page.id) else {
        bail!("No page titled \"{title}\"");
    };
    store
        .update(id, body)
        .with_context(|| format!("Page \"{title}\" vanished during save"))?;
    save_pages(kv, store)?;
    writeln!(out, "Page saved")?;
    Ok(())
}

/// Prints every title in insertion order.
pub fn list_pages(store: &PageStore, out: &mut impl Write) -> Result<()> {
    for page in store.list() {
        writeln!(out, "{}", page.title)?;
    }
    Ok(())
}

pub fn export(
    store: &PageStore,
    title: &str,
    dir: &Path,
    format: ExportFormat,
    out: &mut impl Write,
) -> Result<()> {
    let Some(page) = store.get_by_title(title) else {
        bail!("No page titled \"{title}\"");
    };
    let path = export_page(page, dir, format, store)?;
    writeln!(out, "Exported to {}", path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use markdown_wiki_engine::{MemoryKeyValueStore, StoreError, load_pages};
    use pretty_assertions::assert_eq;

    fn output(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn render_resolves_against_store() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("note.md");
        std::fs::write(&file, "[[Welcome]] [[Nope]]").unwrap();
        let store = PageStore::with_welcome_page();
        let mut out = Vec::new();

        render_file(&file, &store, &mut out).unwrap();

        assert_eq!(
            output(out),
            "<p><a href=\"#\" class=\"wiki-link\" data-wiki=\"Welcome\">Welcome</a> \
             <a href=\"#\" class=\"wiki-link missing\" data-wiki=\"Nope\">Nope</a></p>\n"
        );
    }

    #[test]
    fn render_missing_file_is_an_error() {
        let store = PageStore::new();
        let result = render_file(Path::new("/nonexistent/note.md"), &store, &mut Vec::<u8>::new());
        assert!(result.is_err());
    }

    #[test]
    fn new_page_is_saved() {
        let mut kv = MemoryKeyValueStore::new();
        let mut store = PageStore::with_welcome_page();
        let mut out = Vec::new();

        new_page(&mut kv, &mut store, "Ideas", &mut out).unwrap();

        let reloaded = load_pages(&kv).unwrap();
        assert_eq!(reloaded.list(), store.list());
        assert_eq!(
            reloaded.get_by_title("Ideas").map(|p| p.body.as_str()),
            Some("# Ideas\n\n")
        );
        assert!(output(out).starts_with("Created \"Ideas\""));
    }

    #[test]
    fn new_page_reports_duplicate_title() {
        let mut kv = MemoryKeyValueStore::new();
        let mut store = PageStore::with_welcome_page();

        let err = new_page(&mut kv, &mut store, "Welcome", &mut Vec::<u8>::new()).unwrap_err();

        assert_eq!(
            err.downcast_ref::<StoreError>(),
            Some(&StoreError::DuplicateTitle("Welcome".to_string()))
        );
        assert_eq!(kv.get(markdown_wiki_engine::PAGES_KEY).unwrap(), None);
    }

    #[test]
    fn save_page_persists_new_body() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("ideas.md");
        std::fs::write(&file, "# Ideas\n\nSee [[Welcome]].\n").unwrap();
        let mut kv = MemoryKeyValueStore::new();
        let mut store = PageStore::with_welcome_page();
        let before = store.create("Ideas", "# Ideas\n\n").unwrap().clone();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let mut out = Vec::new();

        save_page(&mut kv, &mut store, "Ideas", &file, &mut out).unwrap();

        let reloaded = load_pages(&kv).unwrap();
        let saved = reloaded.get(before.id).unwrap();
        assert_eq!(saved.body, "# Ideas\n\nSee [[Welcome]].\n");
        assert_eq!(saved.created_at, before.created_at);
        assert!(saved.updated_at > before.updated_at);
        assert_eq!(output(out), "Page saved\n");
    }

    #[test]
    fn save_unknown_title_fails_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("ghost.md");
        std::fs::write(&file, "boo").unwrap();
        let mut kv = MemoryKeyValueStore::new();
        let mut store = PageStore::with_welcome_page();

        let err = save_page(&mut kv, &mut store, "Ghost", &file, &mut Vec::<u8>::new())
            .unwrap_err();

        assert_eq!(err.to_string(), "No page titled \"Ghost\"");
        assert_eq!(kv.get(markdown_wiki_engine::PAGES_KEY).unwrap(), None);
    }

    #[test]
    fn list_prints_titles_in_order() {
        let mut store = PageStore::with_welcome_page();
        store.create("B", "").unwrap();
        store.create("A", "").unwrap();
        let mut out = Vec::new();

        list_pages(&store, &mut out).unwrap();

        assert_eq!(output(out), "Welcome\nB\nA\n");
    }

    #[test]
    fn export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = PageStore::with_welcome_page();
        let mut out = Vec::new();

        export(&store, "Welcome", dir.path(), ExportFormat::Html, &mut out).unwrap();

        assert!(dir.path().join("Welcome.html").exists());
        assert!(output(out).starts_with("Exported to "));
    }

    #[test]
    fn export_unknown_title_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = PageStore::new();

        let err = export(&store, "Ghost", dir.path(), ExportFormat::Markdown, &mut Vec::<u8>::new())
            .unwrap_err();

        assert_eq!(err.to_string(), "No page titled \"Ghost\"");
    }
}
