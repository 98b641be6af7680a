use super::{
    classify::{LineClass, LineKind},
    types::Block,
};

#[derive(Debug, Clone, Default)]
enum LeafState {
    #[default]
    None,
    List {
        items: Vec<String>,
    },
    Fence {
        language: String,
        lines: Vec<String>,
    },
}

/// Block accumulator: consumes classified lines in source order and emits
/// finished [`Block`]s.
///
/// Pending list items and code lines live in `leaf` until the block closes;
/// nothing already in `out` is ever revisited.
pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        match c.kind {
            LineKind::Fence { language } => {
                self.flush_list();
                self.leaf = LeafState::Fence {
                    language: language.to_string(),
                    lines: vec![],
                };
            }
            LineKind::Heading { level, text } => {
                self.flush_list();
                self.out.push(Block::Heading {
                    level,
                    text: text.to_string(),
                });
            }
            LineKind::ListItem { text } => self.extend_list(text),
            LineKind::Blank => {
                self.flush_list();
                self.out.push(Block::Spacer);
            }
            LineKind::Plain => {
                self.flush_list();
                self.out.push(Block::Paragraph {
                    text: c.raw.to_string(),
                });
            }
        }
    }

    /// Flushes an open list. An unterminated fence is dropped along with
    /// its buffered lines.
    pub fn finish(mut self) -> Vec<Block> {
        self.flush_list();
        if let LeafState::Fence { language, lines } = &self.leaf {
            log::debug!(
                "discarding unterminated code fence (language {language:?}, {} buffered lines)",
                lines.len()
            );
        }
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn consume_fence_line(&mut self, c: &LineClass<'_>) {
        let LeafState::Fence { lines, .. } = &mut self.leaf else {
            return;
        };

        if !matches!(c.kind, LineKind::Fence { .. }) {
            lines.push(c.raw.to_string());
            return;
        }

        if let LeafState::Fence { language, lines } = std::mem::take(&mut self.leaf) {
            self.out.push(Block::Code { language, lines });
        }
    }

    fn extend_list(&mut self, text: &str) {
        match &mut self.leaf {
            LeafState::List { items } => items.push(text.to_string()),
            _ => {
                self.leaf = LeafState::List {
                    items: vec![text.to_string()],
                };
            }
        }
    }

    fn flush_list(&mut self) {
        let prev = std::mem::take(&mut self.leaf);
        if let LeafState::List { items } = prev {
            if !items.is_empty() {
                self.out.push(Block::List { items });
            }
        } else {
            self.leaf = prev; // put back non-list leaf (e.g. fence)
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
