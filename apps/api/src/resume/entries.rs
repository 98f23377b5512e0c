use std::ops::Index;
use std::sync::Arc;

use serde::Serialize;

/// A growable, never-shrinking list of résumé entries.
///
/// The outer list and every entry are shared. Replacing one entry builds a new
/// outer list that reuses the `Arc` of every other entry, so untouched entries
/// keep their identity across snapshots. There is no removal operation and the
/// only constructor seeds exactly one entry, which keeps `len() >= 1`.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct EntryList<T>(Arc<Vec<Arc<T>>>);

impl<T> EntryList<T> {
    pub fn seeded(first: T) -> Self {
        Self(Arc::new(vec![Arc::new(first)]))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a list built through this API.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<T>> {
        self.0.get(index)
    }

    pub fn first(&self) -> &T {
        &self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter().map(|entry| entry.as_ref())
    }

    /// Returns a new list where only `index` holds `f(old)`.
    /// `None` when `index` is out of bounds.
    pub fn replaced(&self, index: usize, f: impl FnOnce(&T) -> T) -> Option<Self> {
        let current = self.0.get(index)?;
        let replacement = Arc::new(f(current));

        let mut entries = Vec::with_capacity(self.0.len());
        for (i, entry) in self.0.iter().enumerate() {
            if i == index {
                entries.push(Arc::clone(&replacement));
            } else {
                entries.push(Arc::clone(entry));
            }
        }
        Some(Self(Arc::new(entries)))
    }

    /// Returns a new list with `entry` appended at index `len()`.
    pub fn pushed(&self, entry: T) -> Self {
        let mut entries = Vec::with_capacity(self.0.len() + 1);
        entries.extend(self.0.iter().cloned());
        entries.push(Arc::new(entry));
        Self(Arc::new(entries))
    }

    /// True when both lists are the very same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Default> Default for EntryList<T> {
    fn default() -> Self {
        Self::seeded(T::default())
    }
}

impl<T> Clone for EntryList<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: PartialEq> PartialEq for EntryList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl<T> Index<usize> for EntryList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_one_blank_entry() {
        let list: EntryList<String> = EntryList::default();
        assert_eq!(list.len(), 1);
        assert_eq!(list.first(), "");
    }

    #[test]
    fn test_replaced_keeps_sibling_identity() {
        let list = EntryList::seeded("a".to_string())
            .pushed("b".to_string())
            .pushed("c".to_string());

        let next = list.replaced(1, |_| "B".to_string()).unwrap();

        assert_eq!(next.iter().collect::<Vec<_>>(), vec!["a", "B", "c"]);
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert!(Arc::ptr_eq(list.get(0).unwrap(), next.get(0).unwrap()));
        assert!(Arc::ptr_eq(list.get(2).unwrap(), next.get(2).unwrap()));
        assert!(!Arc::ptr_eq(list.get(1).unwrap(), next.get(1).unwrap()));
    }

    #[test]
    fn test_replaced_out_of_range() {
        let list = EntryList::seeded(0u8);
        assert!(list.replaced(1, |v| *v + 1).is_none());
    }

    #[test]
    fn test_pushed_leaves_original_untouched() {
        let list = EntryList::seeded(1u8);
        let next = list.pushed(2);
        assert_eq!(list.len(), 1);
        assert_eq!(next.len(), 2);
        assert_eq!(next[1], 2);
        assert!(Arc::ptr_eq(list.get(0).unwrap(), next.get(0).unwrap()));
    }

    #[test]
    fn test_clone_shares_allocation() {
        let list = EntryList::seeded(1u8);
        assert!(list.clone().ptr_eq(&list));
    }
}
