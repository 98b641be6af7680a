use crate::parsing::{blocks::Block, render};

/// Label shown on code blocks that have no language tag.
pub const DEFAULT_CODE_LABEL: &str = "code";

/// Maps rendered blocks to HTML, one element per block, newline separated.
///
/// Prose text is inserted as is since it already carries inline markup.
/// Code lines and the language label are escaped.
pub fn to_html(blocks: &[Block]) -> String {
    blocks.iter().map(block_to_html).collect::<Vec<_>>().join("\n")
}

/// Renders feedback text straight to HTML.
pub fn render_html(text: &str) -> String {
    to_html(&render(text))
}

fn block_to_html(block: &Block) -> String {
    match block {
        Block::Heading { level, text } => format!("<h{level}>{text}</h{level}>"),
        Block::Paragraph { text } => format!("<p>{text}</p>"),
        Block::List { items } => {
            let mut out = String::from("<ul>");
            for item in items {
                out.push_str("<li>");
                out.push_str(item);
                out.push_str("</li>");
            }
            out.push_str("</ul>");
            out
        }
        Block::Code { language, lines } => {
            let label = if language.is_empty() {
                DEFAULT_CODE_LABEL
            } else {
                language.as_str()
            };
            format!(
                "<div class=\"code-block\"><div class=\"code-lang\">{}</div><pre><code>{}</code></pre></div>",
                html_escape::encode_text(label),
                html_escape::encode_text(&lines.join("\n"))
            )
        }
        Block::Spacer => "<div class=\"spacer\"></div>".to_string(),
    }
}
