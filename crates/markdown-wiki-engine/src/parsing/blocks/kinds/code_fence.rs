/// Fenced code block syntax.
///
/// Only backtick fences are recognised. The opener may carry a language
/// tag; everything up to a closing fence (or the end of the buffer) is
/// captured verbatim.
pub struct CodeFence;

/// A recognised fence opener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceOpen {
    /// Language tag following the backticks, if any.
    pub lang: Option<String>,
}

impl CodeFence {
    pub const TICK: char = '`';
    pub const BACKTICKS: &'static str = "```";

    /// Detects a fence opener on a line (leading/trailing whitespace ignored).
    ///
    /// An info string that itself contains a backtick is inline code, not a
    /// fence opener.
    pub fn open(line: &str) -> Option<FenceOpen> {
        let rest = line.trim().strip_prefix(Self::BACKTICKS)?;
        let rest = rest.trim_start_matches(Self::TICK);
        let info = rest.trim();
        if info.contains(Self::TICK) {
            return None;
        }
        Some(FenceOpen {
            lang: info
                .split_whitespace()
                .next()
                .map(ToString::to_string),
        })
    }

    /// True if the line closes an open fence: three or more backticks and
    /// nothing else.
    pub fn closes(line: &str) -> bool {
        let t = line.trim();
        t.len() >= Self::BACKTICKS.len() && t.chars().all(|c| c == Self::TICK)
    }
}
