//! Hand-off of region labels to a diagram renderer.
//!
//! Drawing is not done here. A renderer needs, besides the labels, one name and one color
//! per group, plus figure settings. [`Diagram`] bundles all of that and checks that the
//! pieces agree with each other: the number of names and colors matches the number of
//! groups, every label key has one flag per group, and the group count is one that a
//! diagram can be drawn for.
//!
//! # Example
//!
//! ```
//! use venn_rs::diagram::Diagram;
//! use venn_rs::label::LabelOptions;
//! use venn_rs::region::Regions;
//!
//! let regions = Regions::new([vec![1, 2], vec![2, 3], vec![3, 4]]).unwrap();
//! let diagram = Diagram::from_regions(&regions, &LabelOptions::default()).unwrap();
//! assert_eq!(diagram.label("111"), "0");
//! assert_eq!(diagram.legend().names(), ["A", "B", "C"]);
//! assert_eq!(diagram.figsize(), (9.0, 9.0));
//! ```

use std::collections::BTreeMap;

use crate::color::{Rgba, DEFAULT_COLORS};
use crate::error::VennError;
use crate::label::LabelOptions;
use crate::region::Regions;
use crate::types::RegionKey;

/// Smallest number of groups a diagram can be drawn for.
pub const MIN_DIAGRAM_GROUPS: usize = 2;
/// Largest number of groups a diagram can be drawn for.
pub const MAX_DIAGRAM_GROUPS: usize = DEFAULT_COLORS.len();

/// Default resolution, in dots per inch.
pub const DEFAULT_DPI: u32 = 96;

/// Default figure size (in inches) for a diagram of `groups` groups.
pub fn default_figsize(groups: usize) -> (f64, f64) {
    match groups {
        0..=2 => (9.0, 7.0),
        3 => (9.0, 9.0),
        4 => (12.0, 12.0),
        5 => (13.0, 13.0),
        _ => (20.0, 20.0),
    }
}

/// Names and colors of the groups.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    names: Vec<String>,
    colors: Vec<Rgba>,
}

impl Legend {
    /// Creates a legend for `groups` groups, named `A`, `B`, ... and colored with
    /// [`DEFAULT_COLORS`].
    ///
    /// # Errors
    ///
    /// Returns [`VennError::UnsupportedGroupCount`] unless
    /// `MIN_DIAGRAM_GROUPS <= groups <= MAX_DIAGRAM_GROUPS`.
    pub fn new(groups: usize) -> Result<Self, VennError> {
        if !(MIN_DIAGRAM_GROUPS..=MAX_DIAGRAM_GROUPS).contains(&groups) {
            return Err(VennError::UnsupportedGroupCount { groups });
        }
        Ok(Self {
            names: (0..groups).map(|i| ((b'A' + i as u8) as char).to_string()).collect(),
            colors: DEFAULT_COLORS[..groups].to_vec(),
        })
    }

    /// Replaces the group names.
    ///
    /// # Errors
    ///
    /// Returns [`VennError::NameCount`] if the number of names differs from the number of groups.
    pub fn with_names<I, S>(mut self, names: I) -> Result<Self, VennError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.len() != self.len() {
            return Err(VennError::NameCount {
                expected: self.len(),
                actual: names.len(),
            });
        }
        self.names = names;
        Ok(self)
    }

    /// Replaces the group colors.
    ///
    /// # Errors
    ///
    /// Returns [`VennError::ColorCount`] if the number of colors differs from the number of groups.
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Rgba>) -> Result<Self, VennError> {
        let colors: Vec<Rgba> = colors.into_iter().collect();
        if colors.len() != self.len() {
            return Err(VennError::ColorCount {
                expected: self.len(),
                actual: colors.len(),
            });
        }
        self.colors = colors;
        Ok(self)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }
}

/// Everything a renderer needs to draw one diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    labels: BTreeMap<String, String>,
    legend: Legend,
    figsize: (f64, f64),
    dpi: u32,
}

impl Diagram {
    /// Bundles labels with a legend.
    ///
    /// Keys missing from `labels` are drawn with an empty label.
    ///
    /// # Errors
    ///
    /// - [`VennError::InvalidKey`] if a key is not a valid region key.
    /// - [`VennError::KeyArity`] if a key does not have one flag per legend entry.
    pub fn new(labels: BTreeMap<String, String>, legend: Legend) -> Result<Self, VennError> {
        let groups = legend.len();
        for key in labels.keys() {
            let parsed: RegionKey = key.parse()?;
            if parsed.arity() != groups {
                return Err(VennError::KeyArity {
                    key: key.clone(),
                    expected: groups,
                });
            }
        }
        Ok(Self {
            labels,
            legend,
            figsize: default_figsize(groups),
            dpi: DEFAULT_DPI,
        })
    }

    /// Labels `regions` and pairs them with the default legend.
    ///
    /// # Errors
    ///
    /// Fails if labeling fails (see [`Regions::labels`]) or if the number of groups cannot
    /// be drawn (see [`Legend::new`]).
    pub fn from_regions<T>(regions: &Regions<T>, options: &LabelOptions) -> Result<Self, VennError> {
        let legend = Legend::new(regions.num_groups())?;
        Self::new(regions.labels(options)?, legend)
    }

    pub fn with_legend(self, legend: Legend) -> Result<Self, VennError> {
        let Self { labels, figsize, dpi, .. } = self;
        Ok(Self {
            figsize,
            dpi,
            ..Self::new(labels, legend)?
        })
    }

    pub fn with_figsize(mut self, width: f64, height: f64) -> Self {
        self.figsize = (width, height);
        self
    }

    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Label of the region `key`; empty if there is none.
    pub fn label(&self, key: &str) -> &str {
        self.labels.get(key).map_or("", String::as_str)
    }

    pub fn labels(&self) -> &BTreeMap<String, String> {
        &self.labels
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    pub fn num_groups(&self) -> usize {
        self.legend.len()
    }

    /// Figure size in inches.
    pub fn figsize(&self) -> (f64, f64) {
        self.figsize
    }

    pub fn dpi(&self) -> u32 {
        self.dpi
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_legend_defaults() {
        let legend = Legend::new(6).unwrap();
        assert_eq!(legend.names(), ["A", "B", "C", "D", "E", "F"]);
        assert_eq!(legend.colors(), &DEFAULT_COLORS[..]);

        let legend = Legend::new(2).unwrap();
        assert_eq!(legend.len(), 2);
        assert_eq!(legend.colors(), &DEFAULT_COLORS[..2]);
    }

    #[test]
    fn test_legend_group_count() {
        assert_eq!(Legend::new(0), Err(VennError::UnsupportedGroupCount { groups: 0 }));
        assert_eq!(Legend::new(1), Err(VennError::UnsupportedGroupCount { groups: 1 }));
        assert_eq!(Legend::new(7), Err(VennError::UnsupportedGroupCount { groups: 7 }));
    }

    #[test]
    fn test_legend_names() {
        let legend = Legend::new(2).unwrap().with_names(["cats", "dogs"]).unwrap();
        assert_eq!(legend.names(), ["cats", "dogs"]);

        let err = Legend::new(3).unwrap().with_names(["only", "two"]).unwrap_err();
        assert_eq!(err, VennError::NameCount { expected: 3, actual: 2 });
    }

    #[test]
    fn test_legend_colors() {
        let red = Rgba::new(255, 0, 0, 1.0);
        let legend = Legend::new(2).unwrap().with_colors([red, red]).unwrap();
        assert_eq!(legend.colors(), [red, red]);

        let err = Legend::new(2).unwrap().with_colors([red]).unwrap_err();
        assert_eq!(err, VennError::ColorCount { expected: 2, actual: 1 });
    }

    #[test]
    fn test_diagram_missing_label_is_empty() {
        let labels = BTreeMap::from([("11".to_string(), "42".to_string())]);
        let diagram = Diagram::new(labels, Legend::new(2).unwrap()).unwrap();
        assert_eq!(diagram.label("11"), "42");
        assert_eq!(diagram.label("01"), "");
        assert_eq!(diagram.dpi(), DEFAULT_DPI);
        assert_eq!(diagram.figsize(), (9.0, 7.0));
    }

    #[test]
    fn test_diagram_rejects_bad_keys() {
        let labels = BTreeMap::from([("101".to_string(), String::new())]);
        assert_eq!(
            Diagram::new(labels, Legend::new(2).unwrap()),
            Err(VennError::KeyArity {
                key: "101".to_string(),
                expected: 2
            })
        );

        let labels = BTreeMap::from([("1x".to_string(), String::new())]);
        assert_eq!(
            Diagram::new(labels, Legend::new(2).unwrap()),
            Err(VennError::InvalidKey("1x".to_string()))
        );
    }

    #[test]
    fn test_diagram_from_regions() {
        let regions = Regions::new([vec![1, 2, 3], vec![3, 4], vec![4, 5], vec![5, 1]]).unwrap();
        let diagram = Diagram::from_regions(&regions, &LabelOptions::default())
            .unwrap()
            .with_dpi(300)
            .with_figsize(5.0, 5.0);
        assert_eq!(diagram.num_groups(), 4);
        assert_eq!(diagram.labels().len(), 15);
        assert_eq!(diagram.label("1000"), "1");
        assert_eq!(diagram.label("1001"), "1");
        assert_eq!(diagram.dpi(), 300);
        assert_eq!(diagram.figsize(), (5.0, 5.0));

        let diagram = diagram.with_legend(Legend::new(4).unwrap().with_names(["w", "x", "y", "z"]).unwrap()).unwrap();
        assert_eq!(diagram.legend().names()[3], "z");
        assert_eq!(diagram.dpi(), 300);
        assert!(diagram.with_legend(Legend::new(3).unwrap()).is_err());
    }

    #[test]
    fn test_diagram_from_regions_one_group() {
        let regions = Regions::new([vec![1, 2, 3]]).unwrap();
        assert_eq!(
            Diagram::from_regions(&regions, &LabelOptions::default()),
            Err(VennError::UnsupportedGroupCount { groups: 1 })
        );
    }
}
