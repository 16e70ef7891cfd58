//! Sentence segmentation

use unicode_segmentation::UnicodeSegmentation;

use super::lexicon::lexicon;

/// Split text into trimmed, non-empty sentences in document order.
///
/// UAX-29 sentence boundaries, then a boundary right after a known
/// abbreviation or a single-letter initial is undone. Each sentence is a
/// substring of `text`.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut spans: Vec<(usize, usize)> = Vec::new();
    let mut previous: Option<&str> = None;

    for (offset, piece) in text.split_sentence_bound_indices() {
        let trimmed = piece.trim();
        if trimmed.is_empty() {
            continue;
        }
        let start = offset + (piece.len() - piece.trim_start().len());
        let end = start + trimmed.len();

        let joined = previous.is_some_and(|prev| joins(prev, trimmed));
        match spans.last_mut() {
            Some(last) if joined => last.1 = end,
            _ => spans.push((start, end)),
        }
        previous = Some(trimmed);
    }

    spans
        .into_iter()
        .map(|(start, end)| text[start..end].to_string())
        .collect()
}

/// Whether the period ending `piece` belongs to an abbreviation, so that
/// `next` continues the same sentence
fn joins(piece: &str, next: &str) -> bool {
    let Some(body) = piece.strip_suffix('.') else {
        return false;
    };
    let mut words = body.rsplit(|c: char| c.is_whitespace() || c == '(');
    let last_word = words.next().unwrap_or(body);

    let mut chars = last_word.chars();
    match (chars.next(), chars.next()) {
        // "J. Doe", but not the pronoun
        (Some(c), None) => c.is_uppercase() && c != 'I',
        (Some(_), Some(_)) => match last_word.to_lowercase().as_str() {
            "no" | "nos" | "ca" => next.starts_with(|c: char| c.is_ascii_digit()),
            "al" => words.next().is_some_and(|w| w.eq_ignore_ascii_case("et")),
            _ => lexicon().is_abbreviation(last_word),
        },
        _ => false,
    }
}
