use crate::stmt::Value;

use indexmap::IndexMap;

/// A row with dirty tracking.
///
/// `original` is the last committed snapshot, `current` the working copy.
/// A field is changed when its current value differs from the original one,
/// not when it was merely written.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Record {
    original: IndexMap<String, Value>,
    current: IndexMap<String, Value>,
}

impl Record {
    /// An empty record, as used for inserts.
    pub fn new() -> Record {
        Record::default()
    }

    /// A record hydrated from a fetched row: both snapshots equal the row.
    pub fn from_row(row: IndexMap<String, Value>) -> Record {
        Record {
            original: row.clone(),
            current: row,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.current.get(key)
    }

    /// The committed value of `key`.
    pub fn original(&self, key: &str) -> Option<&Value> {
        self.original.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.current.insert(key.into(), value.into());
        self
    }

    /// Fields whose current value differs from the original one, in working
    /// copy order. A field absent from the original counts as changed.
    pub fn diff(&self) -> IndexMap<String, Value> {
        self.current
            .iter()
            .filter(|(key, value)| self.original.get(*key) != Some(*value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// The full working copy.
    pub fn raw(&self) -> &IndexMap<String, Value> {
        &self.current
    }

    /// A record restricted to `keys`, keeping pending changes on them.
    pub fn slice(&self, keys: &[&str]) -> Record {
        let pick = |map: &IndexMap<String, Value>| {
            keys.iter()
                .filter_map(|key| map.get_key_value(*key))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        };

        Record {
            original: pick(&self.original),
            current: pick(&self.current),
        }
    }

    pub fn commit(&mut self) {
        self.original = self.current.clone();
    }

    pub fn rollback(&mut self) {
        self.current = self.original.clone();
    }

    pub fn is_changed(&self) -> bool {
        self.current
            .iter()
            .any(|(key, value)| self.original.get(key) != Some(value))
    }

    pub fn is_field_changed(&self, key: &str) -> bool {
        self.current.get(key) != self.original.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.current.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Record::from_row(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
