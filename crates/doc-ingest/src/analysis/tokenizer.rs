//! Word tokenizer shared by entity recognition and word counting

use unicode_segmentation::UnicodeSegmentation;

/// A non-whitespace word-boundary segment with char offsets into its source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Char offset of the first character
    pub start: usize,
    /// Char offset one past the last character
    pub end: usize,
}

impl<'a> Token<'a> {
    /// Contains at least one alphanumeric character
    pub fn is_word(&self) -> bool {
        self.text.chars().any(char::is_alphanumeric)
    }

    /// Starts with an upper-case letter
    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }

    /// Two or more letters, all upper case
    pub fn is_acronym(&self) -> bool {
        let mut letters = 0;
        for c in self.text.chars() {
            if c.is_alphabetic() {
                if !c.is_uppercase() {
                    return false;
                }
                letters += 1;
            }
        }
        letters >= 2
    }

    /// Digits with optional `,` or `.` separators
    pub fn is_numeric(&self) -> bool {
        self.text.chars().next().is_some_and(|c| c.is_ascii_digit())
            && self
                .text
                .chars()
                .all(|c| c.is_ascii_digit() || c == ',' || c == '.')
    }

    /// Sentence-final punctuation
    pub fn is_terminal(&self) -> bool {
        matches!(self.text, "." | "!" | "?")
    }
}

/// Split text into UAX-29 word segments, dropping whitespace.
///
/// Punctuation marks are tokens of their own.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars_seen = 0usize;

    for segment in text.split_word_bounds() {
        let len = segment.chars().count();
        if !segment.chars().all(char::is_whitespace) {
            tokens.push(Token {
                text: segment,
                start: chars_seen,
                end: chars_seen + len,
            });
        }
        chars_seen += len;
    }

    tokens
}

/// Byte offset of every char in `text`, plus `text.len()` at the end
pub(crate) fn char_byte_offsets(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(b, _)| b)
        .chain(std::iter::once(text.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_offsets() {
        let tokens = tokenize("Café opens, at 9.");
        let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["Café", "opens", ",", "at", "9", "."]);
        assert_eq!((tokens[0].start, tokens[0].end), (0, 4));
        assert_eq!((tokens[1].start, tokens[1].end), (5, 10));
        assert_eq!(tokens[5].start, 16);
    }

    #[test]
    fn test_numbers_stay_whole() {
        let tokens = tokenize("1,200.50 and 3rd");
        assert_eq!(tokens[0].text, "1,200.50");
        assert!(tokens[0].is_numeric());
        assert_eq!(tokens[2].text, "3rd");
        assert!(!tokens[2].is_numeric());
    }

    #[test]
    fn test_token_shape() {
        let tokens = tokenize("NASA and Paris");
        assert!(tokens[0].is_acronym());
        assert!(!tokens[1].is_capitalized());
        assert!(tokens[2].is_capitalized());
        assert!(!tokens[2].is_acronym());
    }
}
