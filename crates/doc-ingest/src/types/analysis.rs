//! Preprocessing output types

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Named-entity label taxonomy (OntoNotes style)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    /// People, including fictional
    Person,
    /// Nationalities, religious or political groups
    Norp,
    /// Buildings, airports, highways, bridges
    Fac,
    /// Companies, agencies, institutions
    Org,
    /// Countries, cities, states
    Gpe,
    /// Non-GPE locations: mountain ranges, bodies of water
    Loc,
    /// Objects, vehicles, software, devices
    Product,
    /// Named hurricanes, battles, wars, sports events
    Event,
    /// Titles of books, songs
    WorkOfArt,
    /// Named documents made into laws
    Law,
    /// Any named language
    Language,
    /// Absolute or relative dates or periods
    Date,
    /// Times smaller than a day
    Time,
    /// Percentage
    Percent,
    /// Monetary values
    Money,
    /// Measurements
    Quantity,
    /// "first", "2nd"
    Ordinal,
    /// Numerals that do not fall under another type
    Cardinal,
}

impl EntityLabel {
    /// Labels promoted into key-phrase candidates
    pub fn is_high_value(&self) -> bool {
        matches!(
            self,
            Self::Person | Self::Org | Self::Gpe | Self::Product | Self::Event
        )
    }

    /// Upper-case label string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Norp => "NORP",
            Self::Fac => "FAC",
            Self::Org => "ORG",
            Self::Gpe => "GPE",
            Self::Loc => "LOC",
            Self::Product => "PRODUCT",
            Self::Event => "EVENT",
            Self::WorkOfArt => "WORK_OF_ART",
            Self::Law => "LAW",
            Self::Language => "LANGUAGE",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Percent => "PERCENT",
            Self::Money => "MONEY",
            Self::Quantity => "QUANTITY",
            Self::Ordinal => "ORDINAL",
            Self::Cardinal => "CARDINAL",
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled span of cleaned text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entity {
    /// Span text
    pub text: String,
    /// Entity label
    pub label: EntityLabel,
    /// Start position in cleaned text (chars)
    pub start_pos: usize,
    /// End position in cleaned text (chars, exclusive)
    pub end_pos: usize,
}

/// A heading-delimited span of document content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub content: String,
}

/// An overlapping window of consecutive sentences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chunk {
    /// Zero-based chunk index
    pub id: usize,
    /// Space-joined sentence texts
    pub text: String,
    /// First sentence index (inclusive)
    pub start_sentence: usize,
    /// Last sentence index (inclusive)
    pub end_sentence: usize,
    /// Number of sentences in the window
    pub sentence_count: usize,
}

/// Output of the preprocessing stage
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreprocessResult {
    pub cleaned_text: String,
    pub sentences: Vec<String>,
    pub sections: Vec<Section>,
    pub entities: Vec<Entity>,
    pub key_phrases: BTreeSet<String>,
    pub chunks: Vec<Chunk>,
    pub word_count: usize,
    pub sentence_count: usize,
}
