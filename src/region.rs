//! Region decomposition of a family of groups.
//!
//! Given `n` groups, every element of their union belongs to exactly one *region*: the set
//! of elements that lie inside precisely the groups flagged by some [`RegionKey`]. The
//! `2^n - 1` regions form a partition of the universe.
//!
//! The region of an element is the intersection of the groups containing it minus all the
//! other groups, so it is identified by the element's membership mask alone. Elements are
//! therefore bucketed by mask in one pass, and only non-empty regions are stored.
//!
//! # Example
//!
//! ```
//! use venn_rs::region::Regions;
//! use venn_rs::types::RegionKey;
//!
//! let regions = Regions::new([vec![1, 2, 3], vec![3, 4]]).unwrap();
//! assert_eq!(regions.universe_len(), 4);
//!
//! let shared: RegionKey = "11".parse().unwrap();
//! assert_eq!(regions.count(shared), 1);
//! assert_eq!(regions.region(shared).collect::<Vec<_>>(), vec![&3]);
//! assert_eq!(regions.region_of(&4), Some("01".parse().unwrap()));
//! ```

use std::collections::BTreeMap;
use std::hash::Hash;

use log::debug;

use crate::bitset::BitSet;
use crate::error::VennError;
use crate::types::{region_keys, RegionKey, RegionKeys};
use crate::universe::Universe;

/// Maximum number of groups [`Regions`] accepts.
///
/// Every one of the `2^n - 1` regions gets a label, so `n` is bounded by what a label map
/// can hold in memory, well below the [`MAX_GROUPS`][crate::types::MAX_GROUPS] a key can
/// describe.
pub const MAX_REGION_GROUPS: usize = 20;

/// All regions of a family of groups, computed eagerly.
#[derive(Debug, Clone)]
pub struct Regions<T> {
    universe: Universe<T>,
    /// Element indices of each input group.
    groups: Vec<BitSet>,
    /// Membership mask of each element, indexed like the universe.
    masks: Vec<u64>,
    /// Element indices of each non-empty region, keyed by mask.
    buckets: BTreeMap<u64, Vec<usize>>,
}

impl<T: Hash + Eq + Clone> Regions<T> {
    /// Computes the regions of the given groups.
    ///
    /// Duplicate elements within a group are ignored. An empty list of groups is
    /// accepted and has no regions.
    ///
    /// # Errors
    ///
    /// Returns [`VennError::TooManyGroups`] for more than [`MAX_REGION_GROUPS`] groups,
    /// before any group is read.
    pub fn new<I, G>(groups: I) -> Result<Self, VennError>
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = T>,
    {
        let groups: Vec<G> = groups.into_iter().collect();
        let n = groups.len();
        if n > MAX_REGION_GROUPS {
            return Err(VennError::TooManyGroups {
                groups: n,
                max: MAX_REGION_GROUPS,
            });
        }

        let mut universe = Universe::new();
        let mut sets = Vec::with_capacity(n);
        for group in groups {
            let mut set = BitSet::new(universe.len());
            set.extend(group.into_iter().map(|x| universe.intern(x)));
            sets.push(set);
        }
        debug!("compute(groups = {}, universe = {})", n, universe.len());

        let mut masks = vec![0u64; universe.len()];
        for (i, set) in sets.iter().enumerate() {
            let flag = 1u64 << (n - 1 - i);
            for index in set.iter() {
                masks[index] |= flag;
            }
        }

        let mut buckets: BTreeMap<u64, Vec<usize>> = BTreeMap::new();
        for (index, &mask) in masks.iter().enumerate() {
            buckets.entry(mask).or_default().push(index);
        }
        debug!("compute: {} non-empty regions", buckets.len());

        Ok(Self {
            universe,
            groups: sets,
            masks,
            buckets,
        })
    }

    /// Returns the key of the region containing `element`, or `None` if the element is not
    /// part of any group.
    pub fn region_of(&self, element: &T) -> Option<RegionKey> {
        let index = self.universe.index_of(element)?;
        Some(RegionKey::new(self.masks[index], self.groups.len()))
    }
}

impl<T> Regions<T> {
    /// Number of input groups.
    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// Number of distinct elements over all groups.
    pub fn universe_len(&self) -> usize {
        self.universe.len()
    }

    /// The union of all groups.
    pub fn universe(&self) -> &Universe<T> {
        &self.universe
    }

    /// Number of distinct elements in group `i`.
    pub fn group_len(&self, i: usize) -> Option<usize> {
        self.groups.get(i).map(BitSet::len)
    }

    /// All region keys, in ascending order.
    pub fn keys(&self) -> RegionKeys {
        region_keys(self.groups.len())
    }

    fn bucket(&self, key: RegionKey) -> Option<&Vec<usize>> {
        if key.arity() != self.groups.len() {
            return None;
        }
        self.buckets.get(&key.mask())
    }

    /// Number of elements in the region `key`.
    ///
    /// Keys over a different number of groups denote no region and count as empty.
    pub fn count(&self, key: RegionKey) -> usize {
        self.bucket(key).map_or(0, Vec::len)
    }

    /// Elements of the region `key`, in first-seen order.
    pub fn region(&self, key: RegionKey) -> impl Iterator<Item = &T> + '_ {
        self.bucket(key)
            .into_iter()
            .flatten()
            .filter_map(|&index| self.universe.get(index))
    }

    /// Iterates over `(key, count)` for all regions, in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (RegionKey, usize)> + '_ {
        self.keys().map(|key| (key, self.count(key)))
    }

    /// Size of the region `key` as a percentage of the universe.
    ///
    /// # Errors
    ///
    /// Returns [`VennError::EmptyUniverse`] if there are no elements at all.
    pub fn percent(&self, key: RegionKey) -> Result<f64, VennError> {
        let total = self.universe.len();
        if total == 0 {
            return Err(VennError::EmptyUniverse);
        }
        Ok(100.0 * self.count(key) as f64 / total as f64)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use test_log::test;

    use super::*;

    fn key(s: &str) -> RegionKey {
        s.parse().unwrap()
    }

    fn sorted<'a>(it: impl Iterator<Item = &'a i32>) -> Vec<i32> {
        let mut v: Vec<i32> = it.copied().collect();
        v.sort();
        v
    }

    #[test]
    fn test_three_groups() {
        let regions = Regions::new([(0..10).collect::<Vec<i32>>(), (5..15).collect(), (3..8).collect()]).unwrap();

        assert_eq!(regions.num_groups(), 3);
        assert_eq!(regions.universe_len(), 15);
        assert_eq!(sorted(regions.region(key("100"))), vec![0, 1, 2]);
        assert_eq!(sorted(regions.region(key("010"))), vec![10, 11, 12, 13, 14]);
        assert_eq!(sorted(regions.region(key("101"))), vec![3, 4]);
        assert_eq!(sorted(regions.region(key("110"))), vec![8, 9]);
        assert_eq!(sorted(regions.region(key("111"))), vec![5, 6, 7]);
        assert_eq!(regions.count(key("001")), 0);
        assert_eq!(regions.count(key("011")), 0);
    }

    #[test]
    fn test_matches_intersect_and_subtract() {
        let groups: [Vec<i32>; 4] = [
            (0..30).step_by(2).collect(),
            (0..30).step_by(3).collect(),
            (10..25).collect(),
            vec![1, 7, 12, 29],
        ];
        let sets: Vec<HashSet<i32>> = groups.iter().map(|g| g.iter().copied().collect()).collect();
        let universe: HashSet<i32> = sets.iter().flatten().copied().collect();
        let regions = Regions::new(&groups).unwrap();

        for k in regions.keys() {
            let mut expected = universe.clone();
            for (i, set) in sets.iter().enumerate() {
                if k.contains(i) {
                    expected.retain(|x| set.contains(x));
                } else {
                    expected.retain(|x| !set.contains(x));
                }
            }
            let actual: HashSet<i32> = regions.region(k).map(|&&x| x).collect();
            assert_eq!(actual, expected, "region {}", k);
        }
    }

    #[test]
    fn test_region_elements_in_first_seen_order() {
        let regions = Regions::new([vec![9, 3, 5], vec![5, 1]]).unwrap();
        assert_eq!(regions.region(key("10")).copied().collect::<Vec<_>>(), vec![9, 3]);
        assert_eq!(regions.universe().iter().copied().collect::<Vec<_>>(), vec![9, 3, 5, 1]);
    }

    #[test]
    fn test_iter_order_and_counts() {
        let regions = Regions::new([vec!['a', 'b'], vec!['b', 'c', 'd']]).unwrap();
        let counts: Vec<(String, usize)> = regions.iter().map(|(k, n)| (k.to_string(), n)).collect();
        assert_eq!(
            counts,
            vec![("01".to_string(), 2), ("10".to_string(), 1), ("11".to_string(), 1)]
        );
    }

    #[test]
    fn test_duplicates_ignored() {
        let regions = Regions::new([vec![1, 1, 1, 2], vec![2, 2]]).unwrap();
        assert_eq!(regions.group_len(0), Some(2));
        assert_eq!(regions.group_len(1), Some(1));
        assert_eq!(regions.group_len(2), None);
        assert_eq!(regions.count(key("10")), 1);
        assert_eq!(regions.count(key("11")), 1);
    }

    #[test]
    fn test_identical_groups() {
        let regions = Regions::new([vec![1, 2, 3], vec![1, 2, 3], vec![1, 2, 3]]).unwrap();
        for (k, n) in regions.iter() {
            let expected = if k == key("111") { 3 } else { 0 };
            assert_eq!(n, expected, "region {}", k);
        }
    }

    #[test]
    fn test_disjoint_groups() {
        let regions = Regions::new([vec![1], vec![2], vec![3]]).unwrap();
        for (k, n) in regions.iter() {
            let expected = if k.degree() == 1 { 1 } else { 0 };
            assert_eq!(n, expected, "region {}", k);
        }
    }

    #[test]
    fn test_region_of() {
        let regions = Regions::new([vec![1, 2], vec![2, 3]]).unwrap();
        assert_eq!(regions.region_of(&1), Some(key("10")));
        assert_eq!(regions.region_of(&2), Some(key("11")));
        assert_eq!(regions.region_of(&3), Some(key("01")));
        assert_eq!(regions.region_of(&4), None);
    }

    #[test]
    fn test_foreign_key_is_empty() {
        let regions = Regions::new([vec![1, 2], vec![2, 3]]).unwrap();
        assert_eq!(regions.count(key("111")), 0);
        assert_eq!(regions.region(key("1")).count(), 0);
    }

    #[test]
    fn test_no_groups() {
        let regions = Regions::new(Vec::<Vec<u8>>::new()).unwrap();
        assert_eq!(regions.num_groups(), 0);
        assert_eq!(regions.keys().count(), 0);
        assert_eq!(regions.iter().count(), 0);
    }

    #[test]
    fn test_percent() {
        let regions = Regions::new([vec![1, 2, 3, 4], vec![4]]).unwrap();
        assert_eq!(regions.percent(key("10")), Ok(75.0));
        assert_eq!(regions.percent(key("11")), Ok(25.0));
        assert_eq!(regions.percent(key("01")), Ok(0.0));

        let empty = Regions::new([Vec::<u8>::new(), Vec::new()]).unwrap();
        assert_eq!(empty.percent(key("11")), Err(VennError::EmptyUniverse));
    }

    #[test]
    fn test_max_groups_accepted() {
        let regions = Regions::new(vec![vec![1u8, 2]; MAX_REGION_GROUPS]).unwrap();
        let all = RegionKey::new((1 << MAX_REGION_GROUPS) - 1, MAX_REGION_GROUPS);
        assert_eq!(regions.count(all), 2);
        assert_eq!(regions.region_of(&1), Some(all));
        assert_eq!(regions.count(RegionKey::new(1, MAX_REGION_GROUPS)), 0);
    }

    #[test]
    fn test_too_many_groups() {
        let groups = vec![vec![0u8]; MAX_REGION_GROUPS + 1];
        assert_eq!(
            Regions::new(groups).unwrap_err(),
            VennError::TooManyGroups {
                groups: MAX_REGION_GROUPS + 1,
                max: MAX_REGION_GROUPS
            }
        );
    }

    #[test]
    fn test_too_many_groups_rejected_before_reading() {
        let groups = (0..=MAX_REGION_GROUPS).map(|_| std::iter::repeat_with(|| -> u8 { panic!("group was read") }));
        assert!(matches!(
            Regions::new(groups),
            Err(VennError::TooManyGroups { groups, .. }) if groups == MAX_REGION_GROUPS + 1
        ));
    }
}
