/// ATX-style heading markers, levels 1 to 3 only.
pub struct Heading;

impl Heading {
    /// Checked longest first so `### x` never reads as level 1.
    pub const PREFIXES: [(&'static str, u8); 3] = [("### ", 3), ("## ", 2), ("# ", 1)];

    /// Returns `(level, text)` if `line` starts with a heading marker.
    pub fn strip(line: &str) -> Option<(u8, &str)> {
        Self::PREFIXES
            .iter()
            .find_map(|(prefix, level)| line.strip_prefix(prefix).map(|rest| (*level, rest)))
    }
}
