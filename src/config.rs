//! Engine configuration.
//!
//! The weighting formula itself is chosen through the `TFIDFEngine` type
//! parameter of [`crate::TFIDF`]; this module holds the plain values.

use serde::{Deserialize, Serialize};

/// How dense ids are assigned to document names and word tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdOrder {
    /// Sort names and tokens lexicographically before numbering them.
    /// Rank ties then resolve the same way on every run.
    #[default]
    Lexicographic,
    /// Number names and tokens in the order the corpus yields them
    FirstSeen,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// id assignment rule for both vocabularies
    pub id_order: IdOrder,
    /// document frequency assumed for a word the corpus never saw
    pub oov_document_frequency: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            id_order: IdOrder::Lexicographic,
            oov_document_frequency: 1,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_order(mut self, id_order: IdOrder) -> Self {
        self.id_order = id_order;
        self
    }

    pub fn with_oov_document_frequency(mut self, df: u32) -> Self {
        self.oov_document_frequency = df;
        self
    }

    /// OOV document frequency, never below 1
    #[inline]
    pub fn effective_oov_df(&self) -> u32 {
        self.oov_document_frequency.max(1)
    }
}
