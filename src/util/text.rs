//! Text helpers for listing cards and CLI output.

/// Truncate to at most `max_chars` characters, appending an ellipsis when
/// anything was cut. Operates on characters, never mid-codepoint.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_chars).collect();
    format!("{}…", truncated.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_passes_through() {
        assert_eq!(excerpt("short", 150), "short");
        assert_eq!(excerpt("", 10), "");
    }

    #[test]
    fn long_text_is_cut_with_an_ellipsis() {
        assert_eq!(excerpt("abcdefgh", 5), "abcde…");
    }

    #[test]
    fn trailing_whitespace_is_trimmed_before_the_ellipsis() {
        assert_eq!(excerpt("one two three", 4), "one…");
    }

    #[test]
    fn multibyte_boundaries_are_respected() {
        assert_eq!(excerpt("héllo wörld", 6), "héllo…");
    }
}
