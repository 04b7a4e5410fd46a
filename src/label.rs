//! Region labels.
//!
//! A label summarizes one region as text. It is assembled from up to three fragments,
//! always in this order:
//!
//! - **logic**: the region key followed by `": "`, e.g. `"101: "`,
//! - **number**: the number of elements in the region, e.g. `"2"`,
//! - **percent**: the region size relative to the universe, one decimal, e.g. `"(12.5%)"`.
//!
//! With no fragment selected, every label is the empty string.
//!
//! # Example
//!
//! ```
//! use venn_rs::label::compute_region_labels;
//!
//! let labels = compute_region_labels([vec![1, 2], vec![2, 3]], ["logic", "number"]).unwrap();
//! assert_eq!(labels["01"], "01: 1");
//! assert_eq!(labels["11"], "11: 1");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use log::debug;

use crate::error::VennError;
use crate::region::Regions;
use crate::types::RegionKey;

/// One label fragment.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Fill {
    Logic,
    Number,
    Percent,
}

impl FromStr for Fill {
    type Err = VennError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "logic" => Ok(Fill::Logic),
            "number" => Ok(Fill::Number),
            "percent" => Ok(Fill::Percent),
            _ => Err(VennError::UnknownFill(s.to_string())),
        }
    }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Fill::Logic => "logic",
            Fill::Number => "number",
            Fill::Percent => "percent",
        };
        f.write_str(name)
    }
}

/// Which fragments make up a label.
///
/// The default shows the element count only.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LabelOptions {
    pub logic: bool,
    pub number: bool,
    pub percent: bool,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            logic: false,
            number: true,
            percent: false,
        }
    }
}

impl LabelOptions {
    /// No fragments: all labels are empty.
    pub fn none() -> Self {
        Self {
            logic: false,
            number: false,
            percent: false,
        }
    }

    /// Returns these options with `fill` enabled.
    pub fn with(mut self, fill: Fill) -> Self {
        match fill {
            Fill::Logic => self.logic = true,
            Fill::Number => self.number = true,
            Fill::Percent => self.percent = true,
        }
        self
    }

    /// Builds options from fill names. Unknown names are ignored.
    pub fn from_fill<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .fold(Self::none(), |options, name| match name.as_ref().parse() {
                Ok(fill) => options.with(fill),
                Err(_) => {
                    debug!("ignoring unknown fill option {:?}", name.as_ref());
                    options
                }
            })
    }
}

impl FromIterator<Fill> for LabelOptions {
    fn from_iter<I: IntoIterator<Item = Fill>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), LabelOptions::with)
    }
}

impl<T> Regions<T> {
    /// Formats the label of the region `key`.
    ///
    /// # Errors
    ///
    /// Returns [`VennError::EmptyUniverse`] if `options.percent` is set and there are no
    /// elements at all.
    pub fn label(&self, key: RegionKey, options: &LabelOptions) -> Result<String, VennError> {
        let mut label = String::new();
        if options.logic {
            label.push_str(&format!("{}: ", key));
        }
        if options.number {
            label.push_str(&self.count(key).to_string());
        }
        if options.percent {
            label.push_str(&format!("({:.1}%)", self.percent(key)?));
        }
        Ok(label)
    }

    /// Formats the labels of all regions, keyed by the key string.
    ///
    /// # Errors
    ///
    /// See [`Regions::label`].
    pub fn labels(&self, options: &LabelOptions) -> Result<BTreeMap<String, String>, VennError> {
        debug!("labels(groups = {}, options = {:?})", self.num_groups(), options);
        let mut labels = BTreeMap::new();
        for key in self.keys() {
            labels.insert(key.to_string(), self.label(key, options)?);
        }
        Ok(labels)
    }
}

/// Computes the label of every region of `groups`.
///
/// `fill` lists the label fragments by name (`"logic"`, `"number"`, `"percent"`);
/// unknown names are ignored. The result maps each of the `2^n - 1` key strings to its
/// label. With no groups, the result is empty.
///
/// # Errors
///
/// - [`VennError::EmptyUniverse`] if `"percent"` is requested but all groups are empty.
/// - [`VennError::TooManyGroups`] for more than
///   [`MAX_REGION_GROUPS`][crate::region::MAX_REGION_GROUPS] groups.
///
/// # Examples
///
/// ```
/// use venn_rs::label::compute_region_labels;
///
/// let labels = compute_region_labels([0..10, 5..15, 3..8], ["number"]).unwrap();
/// assert_eq!(labels["100"], "3");
/// assert_eq!(labels["111"], "3");
/// assert_eq!(labels.len(), 7);
/// ```
pub fn compute_region_labels<I, G, T, F, S>(groups: I, fill: F) -> Result<BTreeMap<String, String>, VennError>
where
    I: IntoIterator<Item = G>,
    G: IntoIterator<Item = T>,
    T: Hash + Eq + Clone,
    F: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let options = LabelOptions::from_fill(fill);
    Regions::new(groups)?.labels(&options)
}

/// Computes count labels for every region of `groups`.
pub fn get_labels<I, G, T>(groups: I) -> Result<BTreeMap<String, String>, VennError>
where
    I: IntoIterator<Item = G>,
    G: IntoIterator<Item = T>,
    T: Hash + Eq + Clone,
{
    Regions::new(groups)?.labels(&LabelOptions::default())
}
