/// Paired delimiters whose content is scanned recursively:
/// `**strong**`, `*emphasis*` and `~~strikethrough~~`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Strong,
    Italic,
    Strikethrough,
}

impl Emphasis {
    pub const STRONG: &'static [u8] = b"**";
    pub const ITALIC: &'static [u8] = b"*";
    pub const STRIKETHROUGH: &'static [u8] = b"~~";

    /// Precedence order when several could start at the same position.
    pub const ALL: [Emphasis; 3] = [Emphasis::Strong, Emphasis::Italic, Emphasis::Strikethrough];

    pub fn delim(self) -> &'static [u8] {
        match self {
            Emphasis::Strong => Self::STRONG,
            Emphasis::Italic => Self::ITALIC,
            Emphasis::Strikethrough => Self::STRIKETHROUGH,
        }
    }
}
