use indexmap::IndexSet;

use crate::config::IdOrder;

/// Bijection between strings and dense ids in `[0, len)`.
///
/// Backed by an `IndexSet`, so both directions are a single lookup and a
/// document literally named "3" can never be confused with id 3.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    entries: IndexSet<String>,
}

impl Vocabulary {
    /// Build from an iterator; duplicates keep their first id.
    pub fn from_iter_ordered<I, S>(iter: I, order: IdOrder) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: IndexSet<String> = iter.into_iter().map(Into::into).collect();
        if order == IdOrder::Lexicographic {
            entries.sort_unstable();
        }
        Self { entries }
    }

    #[inline]
    pub fn to_id(&self, key: &str) -> Option<usize> {
        self.entries.get_index_of(key)
    }

    #[inline]
    pub fn from_id(&self, id: usize) -> Option<&str> {
        self.entries.get_index(id).map(String::as_str)
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (id, key) pairs in id order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries.iter().enumerate().map(|(id, key)| (id, key.as_str()))
    }
}
