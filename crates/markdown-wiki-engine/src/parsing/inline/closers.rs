//! Closing-delimiter lookup for emphasis spans.
//!
//! One left-to-right pass collects maximal runs of `*` and `~` outside code
//! spans. Right-to-left passes then record, for every run, the next run that
//! can close each kind. A closer query is a binary search plus a table read,
//! so scanning a paragraph stays linear no matter how many openers fail.

use super::kinds::{CodeSpan, Emphasis};

const STAR: u8 = Emphasis::ITALIC[0];
const TILDE: u8 = Emphasis::STRIKETHROUGH[0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    start: usize,
    end: usize,
    /// Preceded by a non-whitespace byte.
    flanked: bool,
}

impl Run {
    fn len(&self) -> usize {
        self.end - self.start
    }

    fn closes_pair(&self) -> bool {
        self.flanked && self.len() >= 2
    }
}

#[derive(Debug)]
pub struct Closers {
    stars: Vec<Run>,
    tildes: Vec<Run>,
    /// `strong[r]`: first star run at or after `r` that can close `**`.
    strong: Vec<Option<usize>>,
    /// `strike[r]`: first tilde run at or after `r` that can close `~~`.
    strike: Vec<Option<usize>>,
    /// `italic[r]`: byte offset of the `*` closing emphasis when the search
    /// starts at run `r`, stepping over `**...**` pairs.
    italic: Vec<Option<usize>>,
}

impl Closers {
    pub fn new(bytes: &[u8]) -> Self {
        let mut stars = vec![];
        let mut tildes = vec![];
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                CodeSpan::TICK => {
                    if let Some(end) = CodeSpan::end(bytes, i) {
                        i = end;
                        continue;
                    }
                }
                b @ (STAR | TILDE) => {
                    let start = i;
                    while i < bytes.len() && bytes[i] == b {
                        i += 1;
                    }
                    let run = Run {
                        start,
                        end: i,
                        flanked: start > 0 && !bytes[start - 1].is_ascii_whitespace(),
                    };
                    if b == STAR {
                        stars.push(run);
                    } else {
                        tildes.push(run);
                    }
                    continue;
                }
                _ => {}
            }
            i += 1;
        }

        let strong = pair_table(&stars);
        let strike = pair_table(&tildes);

        let mut italic = vec![None; stars.len() + 1];
        for r in (0..stars.len()).rev() {
            let run = stars[r];
            italic[r] = if run.len() == 1 {
                if run.flanked { Some(run.start) } else { italic[r + 1] }
            } else {
                match strong[r + 1] {
                    Some(k) => italic[k + 1],
                    None => italic[r + 1],
                }
            };
        }

        Self {
            stars,
            tildes,
            strong,
            strike,
            italic,
        }
    }

    /// Byte offset of the delimiter closing `kind` for content starting at
    /// `from`. Paired delimiters close on the last two bytes of their run,
    /// so `***x***` nests emphasis inside strong.
    pub fn find(&self, kind: Emphasis, from: usize) -> Option<usize> {
        let (runs, table) = match kind {
            Emphasis::Strong => (&self.stars, &self.strong),
            Emphasis::Strikethrough => (&self.tildes, &self.strike),
            Emphasis::Italic => return self.italic[first_after(&self.stars, from)],
        };
        let r = table[first_after(runs, from)]?;
        Some(runs[r].end - kind.delim().len())
    }
}

fn first_after(runs: &[Run], from: usize) -> usize {
    runs.partition_point(|run| run.start <= from)
}

fn pair_table(runs: &[Run]) -> Vec<Option<usize>> {
    let mut next = vec![None; runs.len() + 1];
    for r in (0..runs.len()).rev() {
        next[r] = if runs[r].closes_pair() { Some(r) } else { next[r + 1] };
    }
    next
}
