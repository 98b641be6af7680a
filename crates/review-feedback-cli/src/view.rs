use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use review_feedback_engine::{
    Block,
    html::DEFAULT_CODE_LABEL,
    parsing::inline::kinds::{CodeSpan, Strong},
};

fn heading_style(level: u8) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match level {
        1 => base.fg(Color::Magenta).add_modifier(Modifier::UNDERLINED),
        2 => base.fg(Color::Cyan),
        _ => base.fg(Color::Yellow),
    }
}

fn code_span_style() -> Style {
    Style::default().fg(Color::Yellow).bg(Color::DarkGray)
}

fn code_block_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Lays out rendered blocks as terminal lines.
pub fn blocks_to_lines(blocks: &[Block]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for block in blocks {
        match block {
            Block::Heading { level, text } => {
                lines.push(Line::from(markup_spans(text, heading_style(*level))));
            }
            Block::Paragraph { text } => {
                lines.push(Line::from(markup_spans(text, Style::default())));
            }
            Block::List { items } => {
                for item in items {
                    let mut spans = vec![Span::raw("  • ")];
                    spans.extend(markup_spans(item, Style::default()));
                    lines.push(Line::from(spans));
                }
            }
            Block::Code { language, lines: code } => {
                let label = if language.is_empty() {
                    DEFAULT_CODE_LABEL
                } else {
                    language.as_str()
                };
                lines.push(Line::from(Span::styled(
                    format!("┌─ {label}"),
                    Style::default().fg(Color::DarkGray),
                )));
                for code_line in code {
                    lines.push(Line::from(vec![
                        Span::styled("│ ", Style::default().fg(Color::DarkGray)),
                        Span::styled(code_line.clone(), code_block_style()),
                    ]));
                }
                lines.push(Line::from(Span::styled(
                    "└─",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            Block::Spacer => lines.push(Line::default()),
        }
    }

    lines
}

/// Splits inline-transformed text on the code and strong tags the renderer
/// emits, styling each run. Any other markup stays literal.
pub fn markup_spans(text: &str, base: Style) -> Vec<Span<'static>> {
    let tags = [
        (CodeSpan::OPEN_TAG, Tag::Code, true),
        (CodeSpan::CLOSE_TAG, Tag::Code, false),
        (Strong::OPEN_TAG, Tag::Strong, true),
        (Strong::CLOSE_TAG, Tag::Strong, false),
    ];

    let mut spans = Vec::new();
    let mut in_code = false;
    let mut in_strong = false;
    let mut rest = text;

    loop {
        let next = tags
            .iter()
            .filter_map(|(tag, kind, open)| rest.find(tag).map(|pos| (pos, *tag, *kind, *open)))
            .min_by_key(|(pos, ..)| *pos);

        let Some((pos, tag, kind, open)) = next else {
            break;
        };

        push_run(&mut spans, &rest[..pos], base, in_code, in_strong);
        match kind {
            Tag::Code => in_code = open,
            Tag::Strong => in_strong = open,
        }
        rest = &rest[pos + tag.len()..];
    }

    push_run(&mut spans, rest, base, in_code, in_strong);
    spans
}

#[derive(Clone, Copy)]
enum Tag {
    Code,
    Strong,
}

fn push_run(spans: &mut Vec<Span<'static>>, run: &str, base: Style, code: bool, strong: bool) {
    if run.is_empty() {
        return;
    }
    let mut style = base;
    if code {
        style = style.patch(code_span_style());
    }
    if strong {
        style = style.add_modifier(Modifier::BOLD);
    }
    spans.push(Span::styled(run.to_string(), style));
}
