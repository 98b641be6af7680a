/// Bold span type: text between `**` pairs, rendered as strong emphasis.
pub struct Strong;

impl Strong {
    /// The captured text may not contain `*` at all.
    pub const PATTERN: &'static str = r"\*\*([^*]+)\*\*";
    pub const OPEN_TAG: &'static str = "<strong>";
    pub const CLOSE_TAG: &'static str = "</strong>";
}
