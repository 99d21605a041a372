//! Text primitives shared by the extractors and the matcher: word tokens,
//! sentence segmentation and person-entity recognition.

pub mod entities;

use std::sync::LazyLock;

use regex::Regex;

/// Word tokens keep inner `.`/`-` joins and trailing `+`/`#`, so `C++`, `C#`,
/// `Node.js` and `scikit-learn` come out as single tokens.
static WORD_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\w[\w+#]*(?:[.\-]\w[\w+#]*)*").expect("word token pattern should compile")
});

/// Splits text into word-level tokens in document order.
pub fn words(text: &str) -> Vec<&str> {
    WORD_TOKEN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Splits text into sentences.
///
/// A sentence ends at `.`, `!` or `?` followed by whitespace, or at a line
/// break. Sentences are trimmed and empty ones dropped.
pub fn sentences(text: &str) -> Vec<String> {
    let mut out = Vec::new();

    for line in text.lines() {
        let mut start = 0;
        let mut chars = line.char_indices().peekable();

        while let Some((idx, c)) = chars.next() {
            if !matches!(c, '.' | '!' | '?') {
                continue;
            }
            let at_boundary = match chars.peek() {
                Some((_, next)) => next.is_whitespace(),
                None => false,
            };
            if at_boundary {
                let end = idx + c.len_utf8();
                push_sentence(&mut out, &line[start..end]);
                start = end;
            }
        }

        push_sentence(&mut out, &line[start..]);
    }

    out
}

fn push_sentence(out: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_keeps_language_names_intact() {
        let tokens = words("Skilled in C++, C#, Node.js and scikit-learn.");
        assert_eq!(
            tokens,
            vec!["Skilled", "in", "C++", "C#", "Node.js", "and", "scikit-learn"]
        );
    }

    #[test]
    fn test_words_strips_trailing_punctuation() {
        assert_eq!(words("Python, SQL."), vec!["Python", "SQL"]);
    }

    #[test]
    fn test_words_splits_on_slashes() {
        assert_eq!(words("Python/SQL"), vec!["Python", "SQL"]);
    }

    #[test]
    fn test_words_empty_input() {
        assert!(words("").is_empty());
        assert!(words("  -- !! ").is_empty());
    }

    #[test]
    fn test_sentences_split_on_terminators() {
        let s = sentences("Worked at Acme. Built things! Really? Yes");
        assert_eq!(s, vec!["Worked at Acme.", "Built things!", "Really?", "Yes"]);
    }

    #[test]
    fn test_sentences_split_on_line_breaks() {
        let s = sentences("Intern at Acme\n\nB.Sc. in Physics\n");
        assert_eq!(s, vec!["Intern at Acme", "B.Sc.", "in Physics"]);
    }

    #[test]
    fn test_sentences_keep_inline_dots() {
        let s = sentences("Used Node.js daily");
        assert_eq!(s, vec!["Used Node.js daily"]);
    }

    #[test]
    fn test_sentences_handle_multibyte_text() {
        let s = sentences("Résumé é. Ünïcode ok");
        assert_eq!(s, vec!["Résumé é.", "Ünïcode ok"]);
    }
}
