//! Behaviour tests for the full render pipeline.
//!
//! Each test checks the output block sequence and the line accounting
//! invariants.

use pretty_assertions::assert_eq;

use crate::parsing::{blocks::Block, invariants, parse_blocks, render, render_untrusted};

fn checked_render(md: &str) -> Vec<Block> {
    let blocks = render(md);
    invariants::check(md, &blocks);
    blocks
}

fn heading(level: u8, text: &str) -> Block {
    Block::Heading {
        level,
        text: text.to_string(),
    }
}

fn para(text: &str) -> Block {
    Block::Paragraph {
        text: text.to_string(),
    }
}

fn list(items: &[&str]) -> Block {
    Block::List {
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

fn code(language: &str, lines: &[&str]) -> Block {
    Block::Code {
        language: language.to_string(),
        lines: lines.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn single_heading() {
    assert_eq!(checked_render("# Title"), vec![heading(1, "Title")]);
}

#[test]
fn consecutive_headings_stay_separate() {
    assert_eq!(checked_render("## A\n## B"), vec![
        heading(2, "A"),
        heading(2, "B")
    ]);
}

#[test]
fn list_then_spacer_then_paragraph() {
    assert_eq!(checked_render("* a\n* b\n\ntext"), vec![
        list(&["a", "b"]),
        Block::Spacer,
        para("text"),
    ]);
}

#[test]
fn fenced_code_with_language() {
    assert_eq!(checked_render("```py\nprint(1)\n```"), vec![code(
        "py",
        &["print(1)"]
    )]);
}

#[test]
fn unterminated_fence_produces_nothing() {
    assert!(checked_render("```py\nprint(1)").is_empty());
}

#[test]
fn inline_code_and_strong_on_one_paragraph() {
    assert_eq!(checked_render("Use `x` and **bold**"), vec![para(
        "Use <code>x</code> and <strong>bold</strong>"
    )]);
}

#[test]
fn mixed_markers_merge_into_one_list() {
    assert_eq!(checked_render("- item\n* item2"), vec![list(&[
        "item", "item2"
    ])]);
}

#[test]
fn empty_input_renders_nothing() {
    assert!(checked_render("").is_empty());
}

#[test]
fn trailing_newline_adds_spacer() {
    assert_eq!(checked_render("text\n"), vec![para("text"), Block::Spacer]);
}

#[test]
fn heading_without_space_is_paragraph() {
    assert_eq!(checked_render("#text"), vec![para("#text")]);
}

#[test]
fn code_block_lines_are_never_inline_transformed() {
    assert_eq!(checked_render("```md\n**x** `y`\n```"), vec![code(
        "md",
        &["**x** `y`"]
    )]);
}

#[test]
fn heading_and_list_text_are_inline_transformed() {
    assert_eq!(checked_render("### **Issues**\n- fix `main`"), vec![
        heading(3, "<strong>Issues</strong>"),
        list(&["fix <code>main</code>"]),
    ]);
}

#[test]
fn parse_blocks_leaves_inline_syntax_raw() {
    assert_eq!(parse_blocks("Use `x`"), vec![para("Use `x`")]);
}

#[test]
fn typical_review_response() {
    let md = "\
## Summary
The code is **mostly** correct.

### Issues
* `unwrap` on user input
- missing tests

```rust
let x = input.parse()?;
```
Done.";

    assert_eq!(checked_render(md), vec![
        heading(2, "Summary"),
        para("The code is <strong>mostly</strong> correct."),
        Block::Spacer,
        heading(3, "Issues"),
        list(&["<code>unwrap</code> on user input", "missing tests"]),
        Block::Spacer,
        code("rust", &["let x = input.parse()?;"]),
        para("Done."),
    ]);
}

#[test]
fn crlf_line_endings_are_tolerated() {
    assert_eq!(checked_render("# T\r\n- a\r\n- b"), vec![
        heading(1, "T"),
        list(&["a", "b"]),
    ]);
}

#[test]
fn crlf_is_stripped_inside_code_blocks() {
    assert_eq!(checked_render("```sh\r\n  x \r\n\r\n```\r\n"), vec![
        code("sh", &["  x ", ""]),
        Block::Spacer,
    ]);
}

#[test]
fn render_is_deterministic() {
    let md = "# A\n- b\n```\nc\n```\n\nd";
    assert_eq!(render(md), render(md));
}

#[test]
fn untrusted_render_escapes_markup_but_keeps_structure() {
    assert_eq!(render_untrusted("# <b>\n`<i>`\n```\na < b\n```"), vec![
        heading(1, "&lt;b&gt;"),
        para("<code>&lt;i&gt;</code>"),
        code("", &["a &lt; b"]),
    ]);
}

#[test]
fn trusted_render_passes_markup_through() {
    assert_eq!(render("<b>hi</b>"), vec![para("<b>hi</b>")]);
}
