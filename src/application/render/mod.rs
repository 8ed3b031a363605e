//! Strict lightweight-markup rendering: markup text in, typed block nodes out.
//!
//! The pipeline is pure and deterministic: the same input yields the same
//! `Document` or the same error. No embedded content is executed or trusted;
//! the output is a node tree, never assembled markup, so nothing the input
//! says can smuggle raw markup into a consumer.

mod blocks;
mod inline;
mod types;

pub use types::{Block, ContentMetrics, Document, Inline, ListKind, MalformedInput};

use tracing::debug;

/// Convert a markup text block into its structured representation.
///
/// Empty input is an empty document, not an error. An unterminated code
/// fence is rejected rather than swallowing the rest of the document as code.
pub fn render(input: &str) -> Result<Document, MalformedInput> {
    let blocks = blocks::parse(input)?;
    let metrics = ContentMetrics::from_blocks(&blocks);
    debug!(
        blocks = blocks.len(),
        words = metrics.word_count,
        "markup rendered"
    );
    Ok(Document { blocks, metrics })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_and_formatted_paragraph() {
        let document = render("# Title\n\nSome **bold** text.").expect("rendered");
        assert_eq!(
            document.blocks,
            vec![
                Block::Heading {
                    level: 1,
                    spans: vec![Inline::Text("Title".to_string())],
                },
                Block::Paragraph {
                    spans: vec![
                        Inline::Text("Some ".to_string()),
                        Inline::Bold("bold".to_string()),
                        Inline::Text(" text.".to_string()),
                    ],
                },
            ]
        );
    }

    #[test]
    fn empty_input_is_an_empty_document() {
        let document = render("").expect("rendered");
        assert!(document.blocks.is_empty());
        assert_eq!(document.metrics, ContentMetrics::default());
    }

    #[test]
    fn unterminated_fence_surfaces_malformed_input() {
        let err = render("```\nnever closed").expect_err("rejected");
        assert!(matches!(err, MalformedInput::UnterminatedFence { opened_at: 1 }));
    }

    #[test]
    fn rendering_is_deterministic() {
        let input = "# A\n\n- one\n- two\n\n```\ncode\n```\n\n*tail*";
        assert_eq!(render(input), render(input));
    }
}
