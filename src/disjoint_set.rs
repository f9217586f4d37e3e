//! Union-find over an arbitrary, growing universe of elements.
//!
//! [`DisjointSet`] maintains a partition of its elements into disjoint subsets. Elements are
//! mapped to dense indices on insertion, and the forest itself is stored as parallel index
//! vectors, the same key-to-index scheme used for vertex ids across the crate.
//!
//! # Algorithm
//!
//! - `find` walks parent links to the self-parented root and compresses the walked path
//! - `union` re-parents the root of the smaller tree under the root of the larger one; on a
//!   size tie the first argument's root survives
//!
//! Path compression never changes which element is the representative of a set, only how
//! quickly it is found.
//!
//! # Examples
//!
//! ```rust
//! use graphsuite::DisjointSet;
//!
//! let mut sets = DisjointSet::from_elements(["a", "b", "c"])?;
//! assert_eq!(sets.set_count(), 3);
//!
//! sets.union(&"a", &"c")?;
//! assert!(sets.same_set(&"c", &"a")?);
//! assert_eq!(sets.find(&"c")?, "a");
//! assert_eq!(sets.set_count(), 2);
//! # Ok::<(), graphsuite::Error>(())
//! ```

use std::{collections::HashMap, fmt::Debug, hash::Hash};

use tracing::trace;

use crate::{Error, Result};

/// A partition of elements into disjoint sets with union-by-size.
#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    /// Element to dense index
    index: HashMap<T, usize>,
    /// Dense index to element
    elements: Vec<T>,
    /// Parent index per element, roots point to themselves
    parent: Vec<usize>,
    /// Tree size per root, stale for non-roots
    size: Vec<usize>,
    /// Number of live sets
    sets: usize,
}

impl<T> Default for DisjointSet<T> {
    fn default() -> Self {
        DisjointSet {
            index: HashMap::new(),
            elements: Vec::new(),
            parent: Vec::new(),
            size: Vec::new(),
            sets: 0,
        }
    }
}

impl<T: Eq + Hash + Clone + Debug> DisjointSet<T> {
    /// Creates an empty disjoint set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a disjoint set holding each element in its own singleton set.
    ///
    /// # Arguments
    ///
    /// * `elements` - The initial elements, which must be distinct
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateElement`] if an element appears more than once.
    pub fn from_elements<I>(elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut sets = Self::new();
        for element in elements {
            if !sets.make_set(element.clone()) {
                return Err(Error::DuplicateElement(format!("{element:?}")));
            }
        }
        Ok(sets)
    }

    /// Inserts `element` as a new singleton set.
    ///
    /// # Returns
    ///
    /// `false` if the element was already present, in which case nothing changes.
    pub fn make_set(&mut self, element: T) -> bool {
        if self.index.contains_key(&element) {
            return false;
        }

        let id = self.elements.len();
        self.index.insert(element.clone(), id);
        self.elements.push(element);
        self.parent.push(id);
        self.size.push(1);
        self.sets += 1;
        true
    }

    /// Returns `true` if `element` has been inserted.
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.index.contains_key(element)
    }

    /// Returns the representative of the set containing `element`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `element` was never inserted.
    pub fn find(&mut self, element: &T) -> Result<T> {
        let id = self.id_of(element)?;
        let root = self.root(id);
        Ok(self.elements[root].clone())
    }

    /// Merges the sets containing `first` and `second`.
    ///
    /// # Returns
    ///
    /// `true` if two distinct sets were merged, `false` if both elements were already in the
    /// same set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if either element was never inserted. The partition is
    /// left unchanged in that case.
    pub fn union(&mut self, first: &T, second: &T) -> Result<bool> {
        let first_id = self.id_of(first)?;
        let second_id = self.id_of(second)?;

        let first_root = self.root(first_id);
        let second_root = self.root(second_id);
        if first_root == second_root {
            return Ok(false);
        }

        let (winner, loser) = if self.size[first_root] >= self.size[second_root] {
            (first_root, second_root)
        } else {
            (second_root, first_root)
        };

        trace!(winner, loser, "disjoint set: union");
        self.parent[loser] = winner;
        self.size[winner] += self.size[loser];
        self.sets -= 1;
        Ok(true)
    }

    /// Returns `true` if both elements belong to the same set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if either element was never inserted.
    pub fn same_set(&mut self, first: &T, second: &T) -> Result<bool> {
        let first_id = self.id_of(first)?;
        let second_id = self.id_of(second)?;
        Ok(self.root(first_id) == self.root(second_id))
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the number of inserted elements.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if no element has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn id_of(&self, element: &T) -> Result<usize> {
        self.index
            .get(element)
            .copied()
            .ok_or_else(|| Error::NotFound(format!("{element:?}")))
    }

    fn root(&mut self, id: usize) -> usize {
        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = id;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_elements_rejects_duplicates() {
        let result = DisjointSet::from_elements([1, 2, 3, 3]);
        assert_eq!(result.err(), Some(Error::DuplicateElement("3".to_string())));
    }

    #[test]
    fn test_reference_scenario() {
        let mut sets = DisjointSet::from_elements([1, 2, 3, 4, 5]).unwrap();
        assert_eq!(sets.set_count(), 5);
        assert_eq!(sets.find(&4).unwrap(), 4);
        assert!(matches!(sets.union(&5, &9), Err(Error::NotFound(_))));
        assert_eq!(sets.set_count(), 5);

        sets.union(&5, &3).unwrap();
        sets.union(&2, &4).unwrap();
        assert_eq!(sets.set_count(), 3);

        sets.union(&3, &2).unwrap();
        assert_eq!(sets.set_count(), 2);

        assert!(!sets.make_set(4));
        assert!(sets.make_set(6));
        assert_eq!(sets.set_count(), 3);
        assert_eq!(sets.element_count(), 6);

        assert_eq!(sets.find(&8), Err(Error::NotFound("8".to_string())));
    }

    #[test]
    fn test_union_tie_keeps_first_root() {
        let mut sets = DisjointSet::from_elements(['x', 'y']).unwrap();
        assert!(sets.union(&'y', &'x').unwrap());
        assert_eq!(sets.find(&'x').unwrap(), 'y');
    }

    #[test]
    fn test_union_smaller_under_larger() {
        let mut sets = DisjointSet::from_elements([1, 2, 3]).unwrap();
        sets.union(&1, &2).unwrap();
        // {3} is smaller than {1, 2}, so 1 stays the representative
        sets.union(&3, &1).unwrap();
        assert_eq!(sets.find(&3).unwrap(), 1);
    }

    #[test]
    fn test_union_same_set_is_noop() {
        let mut sets = DisjointSet::from_elements([1, 2]).unwrap();
        assert!(sets.union(&1, &2).unwrap());
        assert!(!sets.union(&2, &1).unwrap());
        assert_eq!(sets.set_count(), 1);
    }

    #[test]
    fn test_compression_keeps_representative() {
        let mut sets = DisjointSet::from_elements(0..8).unwrap();
        for i in 1..8 {
            sets.union(&0, &i).unwrap();
        }
        for i in 0..8 {
            assert_eq!(sets.find(&i).unwrap(), 0);
        }
    }

    #[test]
    fn test_same_set_and_contains() {
        let mut sets = DisjointSet::new();
        assert!(sets.is_empty());
        sets.make_set("a");
        sets.make_set("b");

        assert!(sets.contains(&"a"));
        assert!(!sets.contains(&"z"));
        assert!(!sets.same_set(&"a", &"b").unwrap());
        assert!(sets.same_set(&"a", &"z").is_err());
    }
}
