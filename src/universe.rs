//! Interning of the elements of all groups.
//!
//! The [`Universe`] is the union of all input groups. Each distinct element gets a dense
//! index (in first-seen order), which is what the [`BitSet`][crate::bitset::BitSet]s of
//! groups and regions are made of.

use std::collections::HashMap;
use std::hash::Hash;

/// Union of all groups, with a dense index per distinct element.
#[derive(Debug, Clone)]
pub struct Universe<T> {
    elements: Vec<T>,
    indices: HashMap<T, usize>,
}

impl<T> Universe<T> {
    /// Number of distinct elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element with the given index.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Iterates over the elements in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: Hash + Eq + Clone> Universe<T> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            indices: HashMap::new(),
        }
    }

    /// Returns the index of `value`, adding it to the universe if it is new.
    pub fn intern(&mut self, value: T) -> usize {
        if let Some(&index) = self.indices.get(&value) {
            return index;
        }
        let index = self.elements.len();
        self.indices.insert(value.clone(), index);
        self.elements.push(value);
        index
    }

    /// Returns the index of `value`, if it is part of the universe.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.indices.get(value).copied()
    }
}

impl<T: Hash + Eq + Clone> Default for Universe<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Universe<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
