use super::kinds::{CodeFence, Heading, ListItem};

/// What a line looks like on its own, ignoring surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Opens or closes a code block. Carries the trimmed language tag.
    Fence { language: &'a str },
    /// A heading with its level and the text after the marker.
    Heading { level: u8, text: &'a str },
    /// A bullet item with the text after the marker.
    ListItem { text: &'a str },
    /// Empty or whitespace only.
    Blank,
    /// Anything else.
    Plain,
}

/// Classification of a single line.
///
/// This is phase 1 of block parsing: each line is classified independently.
/// The builder decides whether the class matters (inside a code fence only
/// `Fence` does).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// The line without its terminator.
    pub raw: &'a str,
    pub kind: LineKind<'a>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line. First match wins: fence, heading, list item,
    /// blank, plain.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let raw = line.trim_end_matches(['\r', '\n']);

        let kind = if let Some(language) = CodeFence::language(raw) {
            LineKind::Fence { language }
        } else if let Some((level, text)) = Heading::strip(raw) {
            LineKind::Heading { level, text }
        } else if let Some(text) = ListItem::strip(raw) {
            LineKind::ListItem { text }
        } else if raw.trim().is_empty() {
            LineKind::Blank
        } else {
            LineKind::Plain
        };

        LineClass { raw, kind }
    }
}
