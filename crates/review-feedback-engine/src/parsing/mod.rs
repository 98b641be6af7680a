pub mod blocks;
pub mod inline;
pub mod invariants;
pub mod lines;

#[cfg(test)]
mod tests;

use blocks::{Block, BlockBuilder, MarkdownLineClassifier};
use lines::split_lines;

/// Builds the block sequence without inline transformation.
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in split_lines(text) {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    builder.finish()
}

/// Renders model feedback into display blocks.
///
/// Pure and stateless: the same input always yields the same blocks. Inline
/// markup is emitted unescaped; use [`render_untrusted`] for text that did not
/// come from a trusted completion source.
pub fn render(text: &str) -> Vec<Block> {
    parse_blocks(text)
        .into_iter()
        .map(inline::transform_block)
        .collect()
}

/// Escapes `&`, `<` and `>` in the whole input, then renders it.
///
/// Block structure is unaffected since none of the block or span delimiters
/// are escaped. Code block lines come out entity-escaped too.
pub fn render_untrusted(text: &str) -> Vec<Block> {
    render(&html_escape::encode_text(text))
}
