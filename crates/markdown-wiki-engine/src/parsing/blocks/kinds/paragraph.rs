/// Paragraphs have no delimiters: they are the default when no other block
/// opener matches. Continuation lines are joined with a newline before
/// inline scanning, so spans opened on one line can close on the next.
pub struct Paragraph;

impl Paragraph {
    pub const LINE_JOIN: &'static str = "\n";

    pub fn join(lines: &[String]) -> String {
        lines.join(Self::LINE_JOIN)
    }
}
