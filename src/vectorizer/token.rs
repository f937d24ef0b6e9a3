use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

///  TokenFrequency
/// Counts token occurrences of a document that is not in the matrix.
///
/// # Examples
/// ```
/// use tfidf_retrieval::TokenFrequency;
/// let freq = TokenFrequency::from_tokens(&["cat", "dog", "cat"]);
/// assert_eq!(freq.token_count("cat"), 2);
/// assert_eq!(freq.token_total_count(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TokenFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    token_count: IndexMap<String, u32>,
    total_token_count: u64,
}

impl TokenFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens<T>(tokens: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        let mut freq = Self::new();
        freq.add_tokens(tokens);
        freq
    }

    #[inline]
    pub fn add_token(&mut self, token: &str) -> &mut Self {
        if let Some(count) = self.token_count.get_mut(token) {
            *count += 1;
        } else {
            self.token_count.insert(token.to_string(), 1);
        }
        self.total_token_count += 1;
        self
    }

    #[inline]
    pub fn add_tokens<T>(&mut self, tokens: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for token in tokens {
            self.add_token(token.as_ref());
        }
        self
    }

    /// Occurrences of `token`, 0 if absent
    #[inline]
    pub fn token_count(&self, token: &str) -> u32 {
        self.token_count.get(token).copied().unwrap_or(0)
    }

    #[inline]
    pub fn token_total_count(&self) -> u64 {
        self.total_token_count
    }

    /// (token, count) in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.token_count.iter().map(|(t, &c)| (t.as_str(), c))
    }
}
