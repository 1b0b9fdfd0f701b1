//! Text helpers for generated coaching copy

/// Count whitespace-separated words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Truncate text to a word limit, keeping complete sentences where possible.
///
/// If a sentence-ending punctuation mark falls past the midpoint of the
/// truncated text, the cut happens there; otherwise an ellipsis is appended.
pub fn truncate_to_word_limit(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return text.to_string();
    }

    let truncated = words[..max_words].join(" ");
    for punct in ['.', '!', '?'] {
        if let Some(pos) = truncated.rfind(punct) {
            if pos > truncated.len() / 2 {
                return truncated[..=pos].to_string();
            }
        }
    }

    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("keep those arms up"), 4);
        assert_eq!(count_words("  spaced   out  "), 2);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        let text = "Great job today!";
        assert_eq!(truncate_to_word_limit(text, 15), text);
    }

    #[test]
    fn test_truncate_at_exact_limit_unchanged() {
        let text = "one two three four five";
        assert_eq!(truncate_to_word_limit(text, 5), text);
    }

    #[test]
    fn test_truncate_keeps_sentence_boundary() {
        let text = "You nailed the chorus today. Your arms were sharp and your timing held up well through the bridge section";
        let truncated = truncate_to_word_limit(text, 10);
        assert_eq!(truncated, "You nailed the chorus today.");
    }

    #[test]
    fn test_truncate_appends_ellipsis_without_boundary() {
        let text = "keep moving keep moving keep moving keep moving keep moving keep moving";
        let truncated = truncate_to_word_limit(text, 5);
        assert_eq!(truncated, "keep moving keep moving keep...");
    }
}
