//! Escaped HTML projection of a rendered document.
//!
//! One concrete mapping of the node tree; the core is agnostic to it. All
//! text passes through [`escape`], so input can never inject markup.

use crate::application::render::{Block, Document, Inline, ListKind};

/// Render a full document to an HTML fragment, one block per line.
pub fn document(document: &Document) -> String {
    document
        .blocks
        .iter()
        .map(block)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn block(block: &Block) -> String {
    match block {
        Block::Heading { level, spans } => {
            format!("<h{level}>{}</h{level}>", spans_html(spans))
        }
        Block::Paragraph { spans } => format!("<p>{}</p>", spans_html(spans)),
        Block::Code { language, code } => match language {
            Some(language) => format!(
                "<pre><code class=\"language-{}\">{}</code></pre>",
                escape(language),
                escape(code)
            ),
            None => format!("<pre><code>{}</code></pre>", escape(code)),
        },
        Block::List { kind, items } => {
            let tag = match kind {
                ListKind::Bulleted => "ul",
                ListKind::Numbered => "ol",
            };
            let body: String = items
                .iter()
                .map(|item| format!("<li>{}</li>", escape(item)))
                .collect();
            format!("<{tag}>{body}</{tag}>")
        }
    }
}

fn spans_html(spans: &[Inline]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Inline::Text(text) => escape(text),
            Inline::Bold(text) => format!("<strong>{}</strong>", escape(text)),
            Inline::Italic(text) => format!("<em>{}</em>", escape(text)),
            Inline::Code(text) => format!("<code>{}</code>", escape(text)),
        })
        .collect()
}

/// Escape text for HTML element and attribute positions.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
