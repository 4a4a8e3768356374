/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: no other inline parsing occurs inside them, and
/// closing-delimiter searches for other spans step over them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Given the index of an opening backtick, returns the index just past
    /// the closing one. Empty spans do not count.
    pub fn end(s: &[u8], open: usize) -> Option<usize> {
        if s.get(open) != Some(&Self::TICK) || s.get(open + 1) == Some(&Self::TICK) {
            return None;
        }
        let close = s.get(open + 1..)?.iter().position(|&b| b == Self::TICK)?;
        Some(open + 1 + close + 1)
    }
}
