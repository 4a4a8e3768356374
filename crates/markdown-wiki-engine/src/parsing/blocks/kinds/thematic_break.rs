/// A horizontal rule: three or more `-` alone on a line.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const RULE: char = '-';
    pub const MIN_LEN: usize = 3;

    pub fn matches(line: &str) -> bool {
        let t = line.trim();
        t.len() >= Self::MIN_LEN && t.chars().all(|c| c == Self::RULE)
    }
}
