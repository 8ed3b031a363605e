//! Inline span grammar over paragraph and heading text.
//!
//! Scanning is leftmost with rule precedence bold > italic > code at equal
//! positions, matching each opener to its nearest closing delimiter. Spans
//! never nest; unmatched markers stay literal.

use super::types::Inline;

pub(super) fn parse(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut literal = String::new();
    let mut rest = text;

    while !rest.is_empty() {
        if let Some((span, consumed)) = match_span(rest) {
            if !literal.is_empty() {
                spans.push(Inline::Text(std::mem::take(&mut literal)));
            }
            spans.push(span);
            rest = &rest[consumed..];
            continue;
        }

        let Some(ch) = rest.chars().next() else { break };
        literal.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    if !literal.is_empty() {
        spans.push(Inline::Text(literal));
    }

    spans
}

/// Try each span rule at the current position; returns the span and the
/// number of input bytes it consumed.
fn match_span(rest: &str) -> Option<(Inline, usize)> {
    if let Some(body) = rest.strip_prefix("**") {
        if let Some(end) = body.find("**") {
            return Some((Inline::Bold(body[..end].to_string()), end + 4));
        }
    }

    if let Some(body) = rest.strip_prefix('*') {
        if let Some(end) = body.find('*') {
            return Some((Inline::Italic(body[..end].to_string()), end + 2));
        }
    }

    if let Some(body) = rest.strip_prefix('`') {
        if let Some(end) = body.find('`') {
            return Some((Inline::Code(body[..end].to_string()), end + 2));
        }
    }

    None
}
