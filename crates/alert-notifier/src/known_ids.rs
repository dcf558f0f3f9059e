//! Record of alert ids that must never be announced (again).

use std::collections::HashSet;

/// Insert-only set of alert ids seen at priming or already toasted.
#[derive(Debug, Default)]
pub struct KnownIds {
    ids: HashSet<String>,
}

impl KnownIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an id. Returns `true` if it was not known before.
    pub fn insert(&mut self, id: String) -> bool {
        self.ids.insert(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Extend<String> for KnownIds {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.ids.extend(iter);
    }
}
