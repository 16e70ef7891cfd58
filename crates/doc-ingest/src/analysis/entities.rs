//! Named-entity recognition.
//!
//! [`EntityRecognizer`] is the seam for plugging in a statistical model. The
//! default [`RuleBasedRecognizer`] combines gazetteers with orthographic rules
//! and is fully deterministic.

use super::lexicon::{lexicon, Lexicon};
use super::tokenizer::{char_byte_offsets, Token};
use crate::error::{Error, Result};
use crate::types::{Entity, EntityLabel};

/// Finds labeled spans in cleaned text
pub trait EntityRecognizer: Send + Sync {
    /// Recognize entities in `text`, given its tokens from [`super::tokenizer::tokenize`].
    ///
    /// Entities come back in text order and are not deduplicated.
    fn recognize(&self, text: &str, tokens: &[Token<'_>]) -> Result<Vec<Entity>>;

    /// Recognizer name for logging
    fn name(&self) -> &'static str;
}

/// Gazetteer and capitalization based recognizer
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedRecognizer;

impl EntityRecognizer for RuleBasedRecognizer {
    fn recognize(&self, text: &str, tokens: &[Token<'_>]) -> Result<Vec<Entity>> {
        let byte_at = char_byte_offsets(text);

        let scanner = Scanner {
            tokens,
            lex: lexicon(),
        };

        scanner
            .scan()
            .into_iter()
            .map(|span| -> Result<Entity> {
                let start_pos = tokens[span.start].start;
                let end_pos = tokens[span.end - 1].end;
                let slice = byte_at
                    .get(start_pos)
                    .zip(byte_at.get(end_pos))
                    .and_then(|(&from, &to)| text.get(from..to))
                    .ok_or_else(|| {
                        Error::preprocessing(format!(
                            "token offsets {}..{} outside text of {} chars",
                            start_pos,
                            end_pos,
                            byte_at.len() - 1
                        ))
                    })?;

                Ok(Entity {
                    text: slice.to_string(),
                    label: span.label,
                    start_pos,
                    end_pos,
                })
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "rule-based"
    }
}

/// Token range `[start, end)` with its label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
    label: EntityLabel,
}

impl Span {
    fn new(start: usize, end: usize, label: EntityLabel) -> Self {
        Self { start, end, label }
    }
}

/// Longest capitalized run considered as one name
const MAX_NAME_TOKENS: usize = 8;

/// Lower-case words allowed inside a multi-word name
const NAME_CONNECTORS: &[&str] = &["of", "the", "for", "de", "del", "da", "la", "van", "von"];

struct Scanner<'t, 'a> {
    tokens: &'t [Token<'a>],
    lex: &'static Lexicon,
}

impl<'t, 'a> Scanner<'t, 'a> {
    fn scan(&self) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut i = 0;

        while i < self.tokens.len() {
            match self.match_at(i) {
                Some(span) => {
                    i = span.end;
                    spans.push(span);
                }
                None => i += 1,
            }
        }

        spans
    }

    fn match_at(&self, i: usize) -> Option<Span> {
        self.numeric_expression(i)
            .or_else(|| self.temporal_expression(i))
            .or_else(|| self.ordinal(i))
            .or_else(|| self.name(i))
    }

    fn token(&self, i: usize) -> Option<&Token<'a>> {
        self.tokens.get(i)
    }

    fn is_number(&self, token: &Token<'_>) -> bool {
        token.is_numeric() || self.lex.is_number_word(token.text)
    }

    /// Numbers, optionally followed by a unit that decides the label
    fn numeric_expression(&self, i: usize) -> Option<Span> {
        if !self.is_number(self.token(i)?) {
            return None;
        }

        let mut j = i + 1;
        while self.token(j).is_some_and(|t| self.is_number(t)) {
            j += 1;
        }

        let Some(next) = self.token(j) else {
            return Some(self.bare_number(i, j));
        };
        let lower = next.text.to_lowercase();

        let span = if self.lex.is_percent_word(&lower) {
            Span::new(i, j + 1, EntityLabel::Percent)
        } else if lower == "per" && self.token(j + 1).is_some_and(|t| t.text.eq_ignore_ascii_case("cent")) {
            Span::new(i, j + 2, EntityLabel::Percent)
        } else if self.lex.is_currency_word(&lower) {
            Span::new(i, j + 1, EntityLabel::Money)
        } else if self.lex.is_time_word(&lower) {
            Span::new(i, j + 1, EntityLabel::Time)
        } else if self.lex.is_date_word(&lower) {
            Span::new(i, j + 1, EntityLabel::Date)
        } else if next.is_capitalized() && self.lex.is_month(&lower) {
            // "5 March 2024"
            let end = if self.token(j + 1).is_some_and(is_year) { j + 2 } else { j + 1 };
            Span::new(i, end, EntityLabel::Date)
        } else if self.lex.is_unit_word(&lower) {
            Span::new(i, j + 1, EntityLabel::Quantity)
        } else {
            self.bare_number(i, j)
        };

        Some(span)
    }

    fn bare_number(&self, i: usize, j: usize) -> Span {
        if j == i + 1 && is_year(&self.tokens[i]) {
            Span::new(i, j, EntityLabel::Date)
        } else {
            Span::new(i, j, EntityLabel::Cardinal)
        }
    }

    /// Month and weekday names, relative dates, named times of day
    fn temporal_expression(&self, i: usize) -> Option<Span> {
        let token = self.token(i)?;
        let lower = token.text.to_lowercase();

        if token.is_capitalized() && self.lex.is_month(&lower) {
            let day_follows = self
                .token(i + 1)
                .is_some_and(|t| t.is_numeric() || is_ordinal_number(t));
            // "May" and "March" are also ordinary words
            if !day_follows && matches!(lower.as_str(), "may" | "march") {
                return None;
            }

            let mut end = i + 1;
            if day_follows {
                end += 1;
                if self.token(end).is_some_and(|t| t.text == ",")
                    && self.token(end + 1).is_some_and(is_year)
                {
                    end += 2;
                }
            }
            return Some(Span::new(i, end, EntityLabel::Date));
        }

        if token.is_capitalized() && self.lex.is_weekday(&lower) {
            return Some(Span::new(i, i + 1, EntityLabel::Date));
        }

        match lower.as_str() {
            "today" | "yesterday" | "tomorrow" => Some(Span::new(i, i + 1, EntityLabel::Date)),
            "noon" | "midnight" | "tonight" => Some(Span::new(i, i + 1, EntityLabel::Time)),
            "last" | "next" | "this" | "past" | "coming" => {
                let unit = self.token(i + 1)?;
                (self.lex.is_date_word(unit.text) && !matches!(unit.text, "today" | "tomorrow"))
                    .then(|| Span::new(i, i + 2, EntityLabel::Date))
            }
            _ => None,
        }
    }

    fn ordinal(&self, i: usize) -> Option<Span> {
        let token = self.token(i)?;
        (self.lex.is_ordinal_word(token.text) || is_ordinal_number(token))
            .then(|| Span::new(i, i + 1, EntityLabel::Ordinal))
    }

    /// Capitalized spans classified by gazetteers and suffix words
    fn name(&self, i: usize) -> Option<Span> {
        let first = self.token(i)?;
        if !first.is_capitalized() {
            return None;
        }

        if self.lex.is_honorific(first.text) {
            let mut k = i + 1;
            if self.token(k).is_some_and(|t| t.text == ".") {
                k += 1;
            }
            let end = self.capitalized_run(k, false);
            return (end > k).then(|| Span::new(k, end, EntityLabel::Person));
        }

        // Capitalized function words never start a name; acronyms such as "US" may
        if !first.is_acronym() && self.lex.is_stop_word(first.text) {
            return None;
        }

        let end = self.capitalized_run(i, true);
        let span = self.classify(i, end)?;

        // "Visit Paris": a capitalized sentence opener is not part of the name
        if span.label == EntityLabel::Person && self.is_sentence_start(i) {
            let rest = self.classify(i + 1, end);
            if rest.is_some_and(|r| r.label != EntityLabel::Person) {
                return None;
            }
        }

        Some(span)
    }

    fn is_sentence_start(&self, i: usize) -> bool {
        i == 0 || self.tokens[i - 1].is_terminal() || self.tokens[i - 1].text == ":"
    }

    /// End of the run of capitalized tokens starting at `i`, at most
    /// [`MAX_NAME_TOKENS`] long
    ///
    /// An all-caps token and a title-case token never share a run, so a
    /// shouted heading does not swallow the name that follows it.
    fn capitalized_run(&self, i: usize, allow_connectors: bool) -> usize {
        let shouting = self.token(i).is_some_and(Token::is_acronym);
        let limit = i + MAX_NAME_TOKENS;
        let mut j = i;
        while j < limit {
            let Some(token) = self.token(j) else {
                break;
            };
            if token.is_capitalized() && token.is_acronym() == shouting {
                j += 1;
            } else if allow_connectors
                && j > i
                && NAME_CONNECTORS.contains(&token.text)
                && self.token(j + 1).is_some_and(Token::is_capitalized)
            {
                j += 1;
            } else {
                break;
            }
        }
        j
    }

    fn phrase(&self, start: usize, end: usize) -> String {
        self.tokens[start..end]
            .iter()
            .map(|t| t.text.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Longest prefix of `[start, end)` accepted by `known`
    fn longest_known_prefix(&self, start: usize, end: usize, known: impl Fn(&str) -> bool) -> Option<usize> {
        let limit = end.min(start + self.lex.longest_name());
        (start + 1..=limit)
            .rev()
            .find(|&k| known(&self.phrase(start, k)))
    }

    fn classify(&self, start: usize, end: usize) -> Option<Span> {
        let run = &self.tokens[start..end];
        let last = run.last()?;
        let lex = self.lex;

        if run.len() > 1 && lex.is_law_word(last.text) {
            return Some(Span::new(start, end, EntityLabel::Law));
        }
        if run.iter().any(|t| lex.is_event_word(t.text)) && run.len() > 1 {
            return Some(Span::new(start, end, EntityLabel::Event));
        }
        if run.iter().any(|t| lex.is_org_word(t.text)) {
            return Some(Span::new(start, end, EntityLabel::Org));
        }
        if run.len() > 1 && lex.is_facility_word(last.text) {
            return Some(Span::new(start, end, EntityLabel::Fac));
        }
        if lex.is_location_word(last.text) {
            return Some(Span::new(start, end, EntityLabel::Loc));
        }
        if start > 0 && lex.is_work_of_art_cue(self.tokens[start - 1].text) {
            return Some(Span::new(start, end, EntityLabel::WorkOfArt));
        }
        if let Some(k) = self.longest_known_prefix(start, end, |p| lex.is_gpe(p)) {
            return Some(Span::new(start, k, EntityLabel::Gpe));
        }
        if let Some(k) = self.longest_known_prefix(start, end, |p| lex.is_product(p)) {
            // "Windows 11"
            let k = if k == end && self.token(k).is_some_and(Token::is_numeric) { k + 1 } else { k };
            return Some(Span::new(start, k, EntityLabel::Product));
        }

        if run.len() == 1 {
            return self.classify_single(start);
        }

        (run.len() <= 3 && run.iter().all(|t| t.is_capitalized() && !t.is_acronym()))
            .then(|| Span::new(start, end, EntityLabel::Person))
    }

    fn classify_single(&self, i: usize) -> Option<Span> {
        let token = &self.tokens[i];
        let lex = self.lex;

        if lex.is_language(token.text) {
            let cue_before = i > 0 && lex.is_language_cue(self.tokens[i - 1].text);
            let cue_after = self
                .token(i + 1)
                .is_some_and(|t| t.text.eq_ignore_ascii_case("language"));
            if cue_before || cue_after || !lex.is_norp(token.text) {
                return Some(Span::new(i, i + 1, EntityLabel::Language));
            }
        }
        if lex.is_norp(token.text) {
            return Some(Span::new(i, i + 1, EntityLabel::Norp));
        }

        let letters = token.text.chars().filter(|c| c.is_alphabetic()).count();
        if token.is_acronym() && (2..=6).contains(&letters) {
            return Some(Span::new(i, i + 1, EntityLabel::Org));
        }

        None
    }
}

/// Four digits between 1000 and 2100
fn is_year(token: &Token<'_>) -> bool {
    token.text.len() == 4
        && token.text.bytes().all(|b| b.is_ascii_digit())
        && token
            .text
            .parse::<u32>()
            .is_ok_and(|year| (1000..=2100).contains(&year))
}

/// "1st", "22nd", "3rd", "4th"
fn is_ordinal_number(token: &Token<'_>) -> bool {
    let lower = token.text.to_ascii_lowercase();
    ["st", "nd", "rd", "th"].iter().any(|suffix| {
        lower
            .strip_suffix(suffix)
            .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
    })
}
