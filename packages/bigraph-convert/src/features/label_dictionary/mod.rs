//! Shared label dictionary
//!
//! Two graphs prepared for comparison must number their vertex labels the
//! same way, so the dictionary is built once from the union of both label
//! sets: duplicates collapse, the union is sorted lexicographically (byte
//! order of the UTF-8 text) and ids are assigned in that order.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::shared::models::Graph;

/// Label text → dense id, ordered by label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelDictionary {
    ids: BTreeMap<String, usize>,
}

impl LabelDictionary {
    /// Build from any collection of labels
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sorted: BTreeSet<String> = labels.into_iter().map(Into::into).collect();
        let ids = sorted
            .into_iter()
            .enumerate()
            .map(|(id, label)| (label, id))
            .collect();
        Self { ids }
    }

    /// One numbering covering both graphs' labels
    pub fn unify(a: &Graph, b: &Graph) -> Self {
        let dictionary = Self::from_labels(a.labels().iter().chain(b.labels()).cloned());
        debug!(
            labels = dictionary.len(),
            left = a.n(),
            right = b.n(),
            "unified label dictionary"
        );
        dictionary
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.ids.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.ids.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Entries in id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.ids.iter().map(|(label, &id)| (label.as_str(), id))
    }
}
