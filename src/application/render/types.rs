use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One structural unit of rendered content. The grammar produces no node
/// type outside this fixed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Block {
    /// Heading with depth 1–3.
    Heading { level: u8, spans: Vec<Inline> },
    Paragraph { spans: Vec<Inline> },
    /// Fenced code, contents verbatim. The text after the opening fence, if
    /// any, is kept as a language tag.
    Code {
        language: Option<String>,
        code: String,
    },
    List { kind: ListKind, items: Vec<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Bulleted,
    Numbered,
}

/// A formatted sub-range of paragraph or heading text. Spans never nest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
}

impl Inline {
    pub fn text(&self) -> &str {
        match self {
            Inline::Text(text)
            | Inline::Bold(text)
            | Inline::Italic(text)
            | Inline::Code(text) => text,
        }
    }
}

/// Content-level metrics derived from the node tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMetrics {
    pub word_count: u32,
    /// Estimated minutes at ~200 words/minute, floored at 1 for any
    /// non-empty document.
    pub reading_time_minutes: u32,
    pub code_blocks: u32,
}

const WORDS_PER_MINUTE: u32 = 200;

impl ContentMetrics {
    pub fn from_blocks(blocks: &[Block]) -> Self {
        let mut word_count: u32 = 0;
        let mut code_blocks: u32 = 0;

        for block in blocks {
            match block {
                Block::Heading { spans, .. } | Block::Paragraph { spans } => {
                    for span in spans {
                        word_count += words_in(span.text());
                    }
                }
                Block::List { items, .. } => {
                    for item in items {
                        word_count += words_in(item);
                    }
                }
                Block::Code { .. } => code_blocks += 1,
            }
        }

        let reading_time_minutes = if blocks.is_empty() {
            0
        } else {
            word_count.div_ceil(WORDS_PER_MINUTE).max(1)
        };

        Self {
            word_count,
            reading_time_minutes,
            code_blocks,
        }
    }
}

fn words_in(text: &str) -> u32 {
    text.split_whitespace().count() as u32
}

/// Structured result of rendering one markup document: an ordered block
/// sequence plus derived metrics. Never raw markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
    pub metrics: ContentMetrics,
}

impl Document {
    /// Prose content with formatting stripped: heading and paragraph span
    /// text plus list items, blocks separated by newlines. Code is omitted.
    pub fn plain_text(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        for block in &self.blocks {
            match block {
                Block::Heading { spans, .. } | Block::Paragraph { spans } => {
                    parts.push(spans.iter().map(Inline::text).collect());
                }
                Block::List { items, .. } => parts.push(items.join("\n")),
                Block::Code { .. } => {}
            }
        }
        parts.join("\n")
    }
}

/// The input violated the markup grammar. Recoverable: the caller surfaces a
/// message and retries with corrected input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MalformedInput {
    #[error("code fence opened on line {opened_at} is never closed")]
    UnterminatedFence { opened_at: usize },
}
