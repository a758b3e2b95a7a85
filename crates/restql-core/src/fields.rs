use derive_more::Deref;
use serde::{Serialize, Serializer, ser::SerializeMap};

///
/// FieldMap
///
/// Insertion-ordered, string-keyed mapping.
/// Writing an existing key replaces its value in place, so the key keeps
/// the position of its first insertion. Rendering walks entries in order.
///

#[derive(Clone, Debug, Deref, Eq, PartialEq)]
pub struct FieldMap<V>(Vec<(String, V)>);

impl<V> FieldMap<V> {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Insert or replace, returning the previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();

        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.0.push((key, value));
                None
            }
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    /// Key-union of two maps where `other` wins on conflicting keys.
    #[must_use]
    pub fn union(mut self, other: Self) -> Self {
        for (key, value) in other.0 {
            self.insert(key, value);
        }

        self
    }
}

impl<V> Default for FieldMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMap<V>
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }

        map
    }
}

impl<V> IntoIterator for FieldMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a FieldMap<V> {
    type Item = &'a (String, V);
    type IntoIter = std::slice::Iter<'a, (String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<V: Serialize> Serialize for FieldMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }

        map.end()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_first_position() {
        let mut map: FieldMap<u32> = [("a", 1), ("b", 2)].into_iter().collect();

        assert_eq!(map.insert("a", 9), Some(1));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map.get("a"), Some(&9));
    }

    #[test]
    fn union_is_right_biased_and_appends_new_keys() {
        let left: FieldMap<u32> = [("x", 1), ("z", 5)].into_iter().collect();
        let right: FieldMap<u32> = [("y", 3), ("x", 2)].into_iter().collect();

        let merged = left.union(right);

        assert_eq!(
            merged.iter().cloned().collect::<Vec<_>>(),
            vec![("x".to_string(), 2), ("z".to_string(), 5), ("y".to_string(), 3)]
        );
    }

    #[test]
    fn duplicate_pairs_collapse_to_last_value() {
        let map: FieldMap<&str> = [("Accept", "text/plain"), ("Accept", "application/json")]
            .into_iter()
            .collect();

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Accept"), Some(&"application/json"));
    }
}
