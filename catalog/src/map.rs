use std::sync::Arc;

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// An ordered sequence of values indexed by a unique key.
///
/// Iteration follows insertion order, not key order.
#[derive(Debug)]
pub struct Map<K, V>(Arc<Inner<K, V>>);

#[derive(Debug)]
struct Inner<K, V> {
    entries: BTreeMap<K, usize>,
    values: Arc<[V]>,
}

impl<K, V> Map<K, V> {
    /// Indexes `values` by `to_key`, failing with the first key that repeats.
    pub fn new(values: impl Into<Arc<[V]>>, to_key: impl Fn(&V) -> K) -> Result<Self, K>
    where
        K: Ord,
    {
        let values = values.into();
        let mut entries = BTreeMap::new();

        for (i, value) in values.iter().enumerate() {
            match entries.entry(to_key(value)) {
                Entry::Vacant(entry) => {
                    let _ = entry.insert(i);
                }
                Entry::Occupied(entry) => {
                    let (key, _) = entry.remove_entry();

                    return Err(key);
                }
            }
        }

        Ok(Self(Arc::new(Inner { entries, values })))
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q> + Ord,
        Q: Ord,
    {
        Some(&self.0.values[*self.0.entries.get(key)?])
    }

    pub fn last_key(&self) -> Option<&K> {
        self.0.entries.keys().next_back()
    }

    pub fn len(&self) -> usize {
        self.0.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.values.is_empty()
    }

    pub fn values(&self) -> &[V] {
        &self.0.values
    }

    /// Returns the underlying sequence without copying it.
    pub fn shared(&self) -> Arc<[V]> {
        self.0.values.clone()
    }
}

impl<K, V> Clone for Map<K, V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
