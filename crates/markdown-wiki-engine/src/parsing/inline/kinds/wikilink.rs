/// `[[Title]]` references resolved against the page store.
pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static [u8; 2] = b"[[";
    pub const CLOSE: &'static [u8; 2] = b"]]";
    /// Marker class carried by every rendered wiki-link.
    pub const CLASS: &'static str = "wiki-link";
    /// Extra marker class for links whose target page does not exist.
    pub const MISSING_CLASS: &'static str = "missing";
    /// Attribute naming the target title for the shell's click navigation.
    pub const DATA_ATTR: &'static str = "data-wiki";

    /// Normalises a raw target; `None` means the link degrades to text.
    pub fn target(raw: &str) -> Option<&str> {
        let t = raw.trim();
        if t.is_empty() || t.contains(['[', ']', '\n']) {
            return None;
        }
        Some(t)
    }
}
