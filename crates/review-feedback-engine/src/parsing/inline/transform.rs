use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::kinds::{CodeSpan, Strong};
use crate::parsing::blocks::Block;

fn code_span_regex() -> &'static Regex {
    static CODE_SPAN_REGEX: OnceLock<Regex> = OnceLock::new();
    CODE_SPAN_REGEX.get_or_init(|| Regex::new(CodeSpan::PATTERN).expect("Invalid code span regex"))
}

fn strong_regex() -> &'static Regex {
    static STRONG_REGEX: OnceLock<Regex> = OnceLock::new();
    STRONG_REGEX.get_or_init(|| Regex::new(Strong::PATTERN).expect("Invalid strong regex"))
}

/// Wraps every `` `text` `` span in inline code markup.
pub fn transform_code_spans(text: &str) -> String {
    code_span_regex()
        .replace_all(text, |caps: &Captures<'_>| {
            format!("{}{}{}", CodeSpan::OPEN_TAG, &caps[1], CodeSpan::CLOSE_TAG)
        })
        .into_owned()
}

/// Wraps every `**text**` span in strong markup.
pub fn transform_strong(text: &str) -> String {
    strong_regex()
        .replace_all(text, |caps: &Captures<'_>| {
            format!("{}{}{}", Strong::OPEN_TAG, &caps[1], Strong::CLOSE_TAG)
        })
        .into_owned()
}

/// Runs both passes, code spans first.
///
/// The strong pass sees the output of the code span pass, so `**` pairs
/// around or inside generated `<code>` markup still match. Callers that
/// need `**` to stay literal inside code spans cannot get that here.
pub fn transform_inline(text: &str) -> String {
    transform_strong(&transform_code_spans(text))
}

/// Applies [`transform_inline`] to the prose of a block. Code blocks and
/// spacers pass through untouched.
pub fn transform_block(block: Block) -> Block {
    match block {
        Block::Heading { level, text } => Block::Heading {
            level,
            text: transform_inline(&text),
        },
        Block::Paragraph { text } => Block::Paragraph {
            text: transform_inline(&text),
        },
        Block::List { items } => Block::List {
            items: items.iter().map(|item| transform_inline(item)).collect(),
        },
        code @ Block::Code { .. } => code,
        Block::Spacer => Block::Spacer,
    }
}
