/// `[display](url)` links. Rendered anchors always open in a new context.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
    pub const TARGET: &'static str = "_blank";
    pub const REL: &'static str = "noopener noreferrer";

    /// Schemes that run code when followed. Links using them stay text.
    pub const BLOCKED_SCHEMES: [&'static str; 3] = ["javascript", "vbscript", "data"];

    /// Whether `url` may become an `href`. Scheme matching ignores case and
    /// leading control bytes, as browsers do.
    pub fn allows(url: &str) -> bool {
        let Some((scheme, _)) = url.split_once(':') else {
            return true;
        };
        let scheme = scheme.trim_start_matches(|c: char| c.is_ascii_control());
        !Self::BLOCKED_SCHEMES
            .iter()
            .any(|blocked| scheme.eq_ignore_ascii_case(blocked))
    }
}
