use serde::{Deserialize, Serialize};

/// Remote document shape: `{ "vocabulary": { "words": [ {"gr", "en"} ] } }`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VocabularyFile {
    pub vocabulary: Vocabulary,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Vocabulary {
    pub words: Vec<RawEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RawEntry {
    pub gr: String,
    pub en: String,
}

impl VocabularyFile {
    pub fn into_entries(self) -> Vec<VocabularyEntry> {
        self.vocabulary
            .words
            .into_iter()
            .map(VocabularyEntry::from_raw)
            .collect()
    }
}

/// A word as the puzzle sees it. `greek_trimmed` is the form the player spells.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VocabularyEntry {
    #[serde(rename = "gr")]
    greek_trimmed: String,
    #[serde(rename = "en")]
    english: String,
    #[serde(rename = "fullGr")]
    greek_full: String,
}

impl VocabularyEntry {
    pub fn new(greek_trimmed: String, english: String, greek_full: String) -> Self {
        Self {
            greek_trimmed,
            english,
            greek_full,
        }
    }

    pub fn from_raw(raw: RawEntry) -> Self {
        Self {
            greek_trimmed: trim_greek(&raw.gr),
            english: raw.en,
            greek_full: raw.gr,
        }
    }

    pub fn greek_trimmed(&self) -> &str {
        &self.greek_trimmed
    }

    pub fn english(&self) -> &str {
        &self.english
    }

    pub fn greek_full(&self) -> &str {
        &self.greek_full
    }
}

/// Drops the leading article token ("ο", "η", "το", ...) when there is more than one token.
pub fn trim_greek(value: &str) -> String {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    if tokens.len() > 1 {
        tokens[1..].join(" ")
    } else {
        value.trim().to_string()
    }
}
