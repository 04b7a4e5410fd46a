//! # venn-rs: region labels for Venn diagrams
//!
//! **`venn-rs`** splits the union of `n` groups into the disjoint regions of a Venn
//! diagram and summarizes every region with a short text label.
//!
//! ## What is a region?
//!
//! Each element of the union belongs to some groups and not to the others. Elements with the
//! same membership pattern form a *region*. A pattern is written as a [`RegionKey`]: one
//! binary digit per group, **group 0 first**. For three groups, `"101"` holds the elements
//! that are in groups 0 and 2 but not in group 1. There are `2^n - 1` regions (nothing lies
//! outside all groups), and together they partition the union.
//!
//! ## Basic Usage
//!
//! ```rust
//! use venn_rs::compute_region_labels;
//!
//! let labels = compute_region_labels([0..10, 5..15, 3..8], ["number"]).unwrap();
//!
//! assert_eq!(labels["001"], "0");
//! assert_eq!(labels["010"], "5");
//! assert_eq!(labels["100"], "3");
//! assert_eq!(labels["101"], "2");
//! assert_eq!(labels["110"], "2");
//! assert_eq!(labels["111"], "3");
//! ```
//!
//! Labels can combine the key itself (`"logic"`), the element count (`"number"`) and the
//! share of the union (`"percent"`):
//!
//! ```rust
//! use venn_rs::{LabelOptions, Regions};
//!
//! let regions = Regions::new([vec!["a", "b"], vec!["b", "c"]]).unwrap();
//! let options = LabelOptions { logic: true, number: true, percent: true };
//! let labels = regions.labels(&options).unwrap();
//! assert_eq!(labels["11"], "11: 1(33.3%)");
//! ```
//!
//! ## Core Components
//!
//! - **[`types`]**: [`RegionKey`] and the enumeration of all keys.
//! - **[`region`]**: [`Regions`], the decomposition of a family of groups.
//! - **[`label`]**: label formatting and [`compute_region_labels`].
//! - **[`diagram`]**: names, colors and figure settings handed to a renderer.

pub mod bitset;
pub mod color;
pub mod diagram;
pub mod error;
pub mod label;
pub mod region;
pub mod types;
pub mod universe;

pub use crate::error::VennError;
pub use crate::label::{compute_region_labels, get_labels, Fill, LabelOptions};
pub use crate::region::Regions;
pub use crate::types::{region_keys, RegionKey};
