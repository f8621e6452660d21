//! Flat key-value record type.

/// A flat mapping from identifier keys to byte-string values.
///
/// Entries preserve insertion order (the encoder emits lines in this
/// order) and keys are unique: inserting an existing key replaces its
/// value in place.
///
/// Keys are *not* validated here. Validation happens when a record is
/// encoded, so that a store operation can report the failure before any
/// file is touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    entries: Vec<(String, Vec<u8>)>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty record with space for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Inserts a key-value pair.
    ///
    /// If the key is already present its value is replaced in place
    /// (keeping the entry's position) and the previous value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Option<Vec<u8>> {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(std::mem::replace(&mut entry.1, value))
        } else {
            self.entries.push((key, value));
            None
        }
    }

    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Removes `key` and returns its value, if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Vec<u8>> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the record holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>, V: Into<Vec<u8>>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        record.extend(iter);
        record
    }
}

impl<K: Into<String>, V: Into<Vec<u8>>> Extend<(K, V)> for Record {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Record {
    type Item = (String, Vec<u8>);
    type IntoIter = std::vec::IntoIter<(String, Vec<u8>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut record = Record::new();
        assert_eq!(record.insert("name", "Alice"), None);
        assert_eq!(record.get("name"), Some(&b"Alice"[..]));
        assert_eq!(record.get("missing"), None);
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut record = Record::new();
        record.insert("a", "1");
        record.insert("b", "2");

        let old = record.insert("a", "one");
        assert_eq!(old, Some(b"1".to_vec()));

        // Position of "a" is unchanged.
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(record.get("a"), Some(&b"one"[..]));
    }

    #[test]
    fn remove_entry() {
        let mut record = Record::new();
        record.insert("a", "1");
        record.insert("b", "2");

        assert_eq!(record.remove("a"), Some(b"1".to_vec()));
        assert_eq!(record.remove("a"), None);
        assert!(!record.contains_key("a"));
        assert!(record.contains_key("b"));
    }

    #[test]
    fn preserves_insertion_order() {
        let record: Record = vec![("z", "1"), ("a", "2"), ("m", "3")]
            .into_iter()
            .collect();
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn empty_record() {
        let record = Record::new();
        assert!(record.is_empty());
        assert_eq!(record.len(), 0);
        assert_eq!(record.iter().count(), 0);
    }

    #[test]
    fn binary_values() {
        let mut record = Record::new();
        record.insert("blob", vec![0u8, 1, 255, 10, 92]);
        assert_eq!(record.get("blob"), Some(&[0u8, 1, 255, 10, 92][..]));
    }
}
