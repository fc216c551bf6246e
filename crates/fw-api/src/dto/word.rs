//! Word record API types.

use chrono::NaiveDate;
use fw_model::Word;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for recording a word.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWordRequest {
    /// The word as the child said it.
    pub word: String,
    /// Date the word was first said.
    pub date_achieve: NaiveDate,
}

impl CreateWordRequest {
    /// Builds the domain record for the given child.
    #[must_use]
    pub fn into_word(self, child_id: Uuid) -> Word {
        Word::new(child_id, self.word, self.date_achieve)
    }
}

/// Word representation returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRepresentation {
    /// Unique identifier.
    pub id: Uuid,
    /// Child the word belongs to.
    pub child_id: Uuid,
    /// The recorded word.
    pub word: String,
    /// Date the word was first said.
    pub date_achieve: NaiveDate,
}

impl From<Word> for WordRepresentation {
    fn from(word: Word) -> Self {
        Self {
            id: word.id,
            child_id: word.child_id,
            word: word.word,
            date_achieve: word.date_achieve,
        }
    }
}

/// Wrapper for word listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordsResponse {
    /// The matching words, oldest first.
    pub words: Vec<WordRepresentation>,
}

impl From<Vec<Word>> for WordsResponse {
    fn from(words: Vec<Word>) -> Self {
        Self {
            words: words.into_iter().map(WordRepresentation::from).collect(),
        }
    }
}
