use derive_more::derive::{Constructor, Deref, IntoIterator};
use indexmap::IndexMap;

/// Ordered table of decoded key/value entries.
///
/// Entries keep the order in which their keys were first seen. Inserting a key that is already
/// present replaces its value but not its position, which is also the duplicate policy applied
/// while parsing.
#[derive(Constructor, Clone, Debug, Default, PartialEq, Eq, Deref, IntoIterator)]
pub struct PropertyTable(IndexMap<String, String>);

impl PropertyTable {
    /// Insert or overwrite an entry, keeping the first-seen position of the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Remove an entry by key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
    }

    /// Iterate over entries in stored order as string slices.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for PropertyTable {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for PropertyTable {
    fn from(value: [(&str, &str); N]) -> Self {
        value
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::types::PropertyTable;

    #[test]
    fn insert_keeps_first_seen_position() {
        let mut table = PropertyTable::from([("a", "1"), ("b", "2"), ("c", "3")]);

        table.insert("a", "overwritten");

        let keys: Vec<_> = table.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(table.get("a").map(String::as_str), Some("overwritten"));
    }

    #[test]
    fn remove_preserves_order() {
        let mut table = PropertyTable::from([("a", "1"), ("b", "2"), ("c", "3")]);

        assert_eq!(table.remove("b"), Some("2".to_string()));

        let keys: Vec<_> = table.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "c"]);
    }
}
