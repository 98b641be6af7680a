/// Splits response text into lines on `\n`.
///
/// A trailing newline yields a final empty line, so `"a\n"` is two lines.
/// Empty input has no lines at all.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut lines = text.split('\n');
    if text.is_empty() {
        lines.next();
    }
    lines
}
