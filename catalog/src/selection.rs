use std::fmt;
use std::sync::Arc;

/// The entities matching a filter, in store order.
pub struct Selection<T> {
    matches: Arc<[T]>,
}

impl<T> Selection<T> {
    pub fn new(matches: impl Into<Arc<[T]>>) -> Self {
        Self {
            matches: matches.into(),
        }
    }

    pub fn matches(&self) -> &[T] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.matches.iter()
    }
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> Clone for Selection<T> {
    fn clone(&self) -> Self {
        Self {
            matches: self.matches.clone(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Selection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Debug for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("matches", &self.matches.len())
            .finish()
    }
}
