// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use markdown_wiki_engine::PageStore;

#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\nSee [[Welcome]] or [[Missing Page]].\n\n- Bullet point\n- Another [link](https://example.com)\n\n1. First\n2. Second\n\n> A quote with ~~struck~~ text\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n---\n\n";
    base.repeat(size)
}

/// A paragraph-heavy document with many wiki-links per line.
#[allow(dead_code)]
pub fn generate_linked_content(lines: usize, pages: usize) -> String {
    let mut content = String::new();
    for i in 0..lines {
        content.push_str(&format!(
            "Line {i} links [[Page {}]] and [[Page {}]] with **bold *nested* text**.\n",
            i % pages,
            (i + 1) % (pages * 2)
        ));
    }
    content
}

/// A store holding the welcome page plus `count` generated pages.
#[allow(dead_code)]
pub fn generate_store(count: usize) -> PageStore {
    let mut store = PageStore::with_welcome_page();
    for i in 0..count {
        store
            .create(format!("Page {i}"), format!("Body of page {i}"))
            .expect("generated titles are unique");
    }
    store
}
