//! Region keys: which groups a region belongs to.
//!
//! A [`RegionKey`] is a fixed-length sequence of membership flags, one per group.
//! Its string form is the sequence of flags written as binary digits, **group 0 first**:
//! for three groups, `"100"` is the region of elements that belong to group 0 only,
//! and `"011"` is the region shared by groups 1 and 2 but not group 0.
//!
//! Internally the flags are packed into a `u64` so that the digit string read as a binary
//! number is exactly the mask. Hence ordering keys by mask is the same as ordering their
//! strings, and enumerating masks `1..2^n` yields the keys in ascending order.

use std::fmt;
use std::str::FromStr;

use crate::error::VennError;

/// Maximum number of groups a [`RegionKey`] can describe.
pub const MAX_GROUPS: usize = 63;

/// Membership flags of a region (one per group, never all clear).
///
/// # Invariants
///
/// - `1 <= arity <= MAX_GROUPS`
/// - `mask != 0` and `mask < 2^arity`
/// - flag of group `i` is bit `arity - 1 - i` of the mask
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RegionKey {
    arity: usize,
    mask: u64,
}

impl RegionKey {
    /// Creates a key from a raw mask over `arity` groups.
    ///
    /// # Panics
    ///
    /// Panics if `arity` is out of range, if `mask == 0`, or if `mask` has bits
    /// beyond the first `arity` positions.
    pub fn new(mask: u64, arity: usize) -> Self {
        assert!((1..=MAX_GROUPS).contains(&arity), "Region key arity must be in 1..={}", MAX_GROUPS);
        assert_ne!(mask, 0, "Region key must include at least one group");
        assert!(mask >> arity == 0, "Region key mask has flags beyond its arity");
        RegionKey { arity, mask }
    }

    /// Creates a key for the region shared by exactly the given groups.
    ///
    /// # Panics
    ///
    /// Same conditions as [`RegionKey::new`], plus any group index `>= arity`.
    pub fn from_groups(groups: impl IntoIterator<Item = usize>, arity: usize) -> Self {
        let mut mask = 0;
        for group in groups {
            assert!(group < arity, "Group index {} out of range for {} groups", group, arity);
            mask |= 1 << (arity - 1 - group);
        }
        RegionKey::new(mask, arity)
    }

    /// Returns the raw mask.
    pub fn mask(self) -> u64 {
        self.mask
    }

    /// Returns the number of flags, i.e. the number of groups.
    pub fn arity(self) -> usize {
        self.arity
    }

    /// Returns `true` if the region lies inside `group`.
    pub fn contains(self, group: usize) -> bool {
        group < self.arity && (self.mask >> (self.arity - 1 - group)) & 1 != 0
    }

    /// Returns the indices of the groups this region lies inside, in ascending order.
    pub fn groups(self) -> impl Iterator<Item = usize> {
        (0..self.arity).filter(move |&g| self.contains(g))
    }

    /// Number of groups this region lies inside.
    pub fn degree(self) -> u32 {
        self.mask.count_ones()
    }
}

impl fmt::Display for RegionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in 0..self.arity {
            f.write_str(if self.contains(group) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for RegionKey {
    type Err = VennError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || VennError::InvalidKey(s.to_string());
        if s.is_empty() || s.len() > MAX_GROUPS {
            return Err(invalid());
        }
        let mut mask = 0;
        for c in s.chars() {
            let bit = match c {
                '0' => 0,
                '1' => 1,
                _ => return Err(invalid()),
            };
            mask = (mask << 1) | bit;
        }
        if mask == 0 {
            return Err(invalid());
        }
        Ok(RegionKey { arity: s.len(), mask })
    }
}

/// Returns all region keys over `n` groups, in ascending order.
///
/// There are `2^n - 1` of them (the all-clear key is skipped). For `n == 0` the
/// iterator is empty.
///
/// # Panics
///
/// Panics if `n > MAX_GROUPS`.
///
/// # Examples
///
/// ```
/// use venn_rs::types::region_keys;
///
/// let keys: Vec<String> = region_keys(2).map(|k| k.to_string()).collect();
/// assert_eq!(keys, ["01", "10", "11"]);
/// ```
pub fn region_keys(n: usize) -> RegionKeys {
    assert!(n <= MAX_GROUPS, "At most {} groups supported, got {}", MAX_GROUPS, n);
    RegionKeys {
        arity: n,
        next: 1,
        end: 1 << n,
    }
}

/// Iterator over region keys, see [`region_keys`].
#[derive(Debug, Clone)]
pub struct RegionKeys {
    arity: usize,
    next: u64,
    end: u64,
}

impl Iterator for RegionKeys {
    type Item = RegionKey;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let key = RegionKey {
            arity: self.arity,
            mask: self.next,
        };
        self.next += 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RegionKeys {}
