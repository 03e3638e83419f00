use std::collections::HashMap;

/// Counter that remembers the order in which keys were first seen, so a stable
/// sort of its entries keeps ties in scan order.
#[derive(Debug, Default)]
pub(super) struct Tally<V> {
    index: HashMap<String, usize>,
    entries: Vec<(String, V)>,
}

impl<V: Default> Tally<V> {
    pub fn new() -> Tally<V> {
        Tally {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub fn entry(&mut self, key: &str) -> &mut V {
        let position = match self.index.get(key) {
            Some(position) => *position,
            None => {
                self.entries.push((key.to_owned(), V::default()));
                self.index.insert(key.to_owned(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[position].1
    }

    pub fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }
}

impl Tally<usize> {
    /// Entries sorted by descending count, ties in first-seen order.
    pub fn into_ranked(self) -> Vec<(String, usize)> {
        let mut entries = self.into_entries();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}
