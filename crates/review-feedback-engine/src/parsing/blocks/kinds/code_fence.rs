/// Triple-backtick fence delimiter with its owned syntax.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the trimmed language tag if `line` is a fence delimiter.
    ///
    /// The same check both opens and closes a fence, so a closing line
    /// carrying a tag (`` ```rust ``) still closes.
    pub fn language(line: &str) -> Option<&str> {
        line.strip_prefix(Self::BACKTICKS).map(str::trim)
    }
}
