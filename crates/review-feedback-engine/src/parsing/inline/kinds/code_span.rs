/// Inline code span type with owned delimiter and markup constants.
///
/// A span is a single backtick, one or more non-backtick characters, and a
/// closing backtick. No escaping, no nesting.
pub struct CodeSpan;

impl CodeSpan {
    pub const PATTERN: &'static str = r"`([^`]+)`";
    pub const OPEN_TAG: &'static str = "<code>";
    pub const CLOSE_TAG: &'static str = "</code>";
}
