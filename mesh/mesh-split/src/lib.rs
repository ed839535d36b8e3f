//! Component labeling and splitting for glyph meshes.
//!
//! A glyph source file holds many disjoint shapes in one mesh. This crate
//! separates them:
//!
//! 1. [`label_components`] tags every element with its connected component
//! 2. [`split_by_group`] copies each tag's elements into its own mesh and
//!    computes its bounds
//!
//! # Example
//!
//! ```
//! use mesh_split::{label_components, split_by_group};
//! use mesh_types::{cuboid, Point3};
//!
//! let mut mesh = cuboid(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
//! mesh.merge(&cuboid(Point3::new(3.0, 0.0, 0.0), Point3::new(4.0, 1.0, 1.0)));
//!
//! let count = label_components(&mut mesh);
//! let groups = split_by_group(&mesh).unwrap();
//! assert_eq!(groups.len(), count);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod label;
mod split;

pub use error::{SplitError, SplitResult};
pub use label::label_components;
pub use split::{split_by_group, MeshGroup};
