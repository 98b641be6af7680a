/// Bullet list item markers. `*` and `-` are interchangeable.
pub struct ListItem;

impl ListItem {
    pub const MARKERS: [&'static str; 2] = ["* ", "- "];

    /// Returns the item text if `line` starts with a bullet marker.
    pub fn strip(line: &str) -> Option<&str> {
        Self::MARKERS
            .iter()
            .find_map(|marker| line.strip_prefix(marker))
    }
}
