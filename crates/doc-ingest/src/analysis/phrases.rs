//! Noun-phrase spans and key-phrase selection

use std::collections::BTreeSet;

use super::lexicon::{lexicon, Lexicon};
use super::tokenizer::{char_byte_offsets, tokenize, Token};
use crate::types::Entity;

/// Noun-phrase-like spans of a sentence, in order.
///
/// A span is an optional determiner followed by the longest run of content
/// words: alphanumeric, not a stop word, and not an `-ly` adverb. A verb-like
/// word ends the run, and cannot open one without a determiner.
pub fn noun_phrases(sentence: &str) -> Vec<String> {
    let lex = lexicon();
    let tokens = tokenize(sentence);
    let byte_at = char_byte_offsets(sentence);

    let mut phrases = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let start = i;
        let mut j = i;
        let determined = lex.is_determiner(tokens[j].text);
        if determined {
            j += 1;
        }
        let content_start = j;
        while j < tokens.len() && is_content_word(lex, &tokens[j]) {
            if is_verb_like(lex, tokens[j].text) && (j > content_start || !determined) {
                break;
            }
            j += 1;
        }

        if j == content_start {
            i = start + 1;
            continue;
        }

        let from = byte_at[tokens[start].start];
        let to = byte_at[tokens[j - 1].end];
        phrases.push(sentence[from..to].to_string());
        i = j;
    }

    phrases
}

fn is_content_word(lex: &Lexicon, token: &Token<'_>) -> bool {
    if !token.is_word() || !token.text.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return false;
    }
    if lex.is_stop_word(token.text) {
        return false;
    }
    let lower = token.text.to_lowercase();
    !(lower.chars().count() > 4 && lower.ends_with("ly"))
}

/// Listed verb or a long `-ed` form. Gerunds stay ("machine learning").
fn is_verb_like(lex: &Lexicon, word: &str) -> bool {
    if lex.is_verb(word) {
        return true;
    }
    let lower = word.to_lowercase();
    lower.chars().count() > 5 && lower.ends_with("ed") && !lex.is_number_word(&lower)
}

/// Key-phrase set: multi-word noun phrases that are not stop words, plus the
/// text of every high-value entity
pub fn extract_key_phrases<S: AsRef<str>>(sentences: &[S], entities: &[Entity]) -> BTreeSet<String> {
    let lex = lexicon();

    let from_phrases = sentences
        .iter()
        .flat_map(|sentence| noun_phrases(sentence.as_ref()))
        .filter(|phrase| phrase.split_whitespace().count() > 1 && !lex.is_stop_word(phrase));

    let from_entities = entities
        .iter()
        .filter(|entity| entity.label.is_high_value())
        .map(|entity| entity.text.clone());

    from_phrases.chain(from_entities).collect()
}
