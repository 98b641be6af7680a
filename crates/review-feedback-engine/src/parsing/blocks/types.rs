/// One structural unit of rendered feedback.
///
/// Blocks are built in a single pass over the response text and are never
/// mutated once emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A `#`, `##` or `###` heading.
    Heading {
        /// 1, 2 or 3.
        level: u8,
        text: String,
    },
    /// A single non-blank line of prose.
    Paragraph { text: String },
    /// Contiguous `* ` / `- ` lines, one item per line in source order.
    List { items: Vec<String> },
    /// Lines between a pair of ``` fences, verbatim.
    Code {
        /// Tag after the opening fence, trimmed. May be empty.
        language: String,
        lines: Vec<String>,
    },
    /// A blank line acting as a paragraph break.
    Spacer,
}

impl Block {
    /// Number of source lines this block was built from, fences included.
    pub fn source_lines(&self) -> usize {
        match self {
            Block::Heading { .. } | Block::Paragraph { .. } | Block::Spacer => 1,
            Block::List { items } => items.len(),
            Block::Code { lines, .. } => lines.len() + 2,
        }
    }
}
