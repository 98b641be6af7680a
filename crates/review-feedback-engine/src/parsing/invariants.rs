use super::{blocks::Block, blocks::kinds::CodeFence, lines::split_lines};

/// Validates renderer output against the input it came from.
///
/// Asserts that:
/// - Every source line is accounted for by exactly one block, except the
///   lines of a fence left open at end of input
/// - List blocks are never empty
/// - Heading levels are 1 to 3
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(text: &str, blocks: &[Block]) {
    let lines: Vec<&str> = split_lines(text).collect();
    let dropped = unterminated_fence_lines(&lines);
    let accounted: usize = blocks.iter().map(Block::source_lines).sum();
    assert_eq!(
        accounted,
        lines.len() - dropped,
        "line accounting mismatch: {} lines, {} dropped by open fence, blocks cover {}",
        lines.len(),
        dropped,
        accounted
    );

    for b in blocks {
        match b {
            Block::List { items } => assert!(!items.is_empty(), "empty list block"),
            Block::Heading { level, .. } => {
                assert!((1..=3).contains(level), "heading level out of range: {level}")
            }
            _ => {}
        }
    }
}

/// Lines from the last fence to the end, if that fence never closed.
fn unterminated_fence_lines(lines: &[&str]) -> usize {
    let fences: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| CodeFence::language(line).is_some())
        .map(|(i, _)| i)
        .collect();

    match fences.last() {
        Some(last) if fences.len() % 2 == 1 => lines.len() - last,
        _ => 0,
    }
}
