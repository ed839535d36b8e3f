//! Edge and face elements of an indexed mesh.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An edge between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    /// Endpoint vertex indices.
    pub vertices: [u32; 2],
    /// Component membership tag.
    pub group: u32,
}

impl Edge {
    /// Create an edge in group 0.
    #[inline]
    #[must_use]
    pub const fn new(v0: u32, v1: u32) -> Self {
        Self {
            vertices: [v0, v1],
            group: 0,
        }
    }

    /// The endpoints ordered so the smaller index comes first.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> (u32, u32) {
        let [a, b] = self.vertices;
        if a < b { (a, b) } else { (b, a) }
    }
}

/// A triangle face referencing three vertices.
///
/// Winding is counter-clockwise when viewed from outside. `normal` is
/// computed by [`IndexedMesh::finish`](crate::IndexedMesh::finish) and is
/// zero until then or for degenerate faces.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Face {
    /// Vertex indices in winding order.
    pub vertices: [u32; 3],
    /// Outward unit normal.
    pub normal: Vector3<f64>,
    /// Component membership tag.
    pub group: u32,
}

impl Face {
    /// Create a face in group 0 with no normal.
    #[inline]
    #[must_use]
    pub fn new(v0: u32, v1: u32, v2: u32) -> Self {
        Self {
            vertices: [v0, v1, v2],
            normal: Vector3::zeros(),
            group: 0,
        }
    }

    /// The three sides as vertex index pairs, in winding order.
    #[inline]
    #[must_use]
    pub const fn sides(&self) -> [[u32; 2]; 3] {
        let [a, b, c] = self.vertices;
        [[a, b], [b, c], [c, a]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_key_is_direction_independent() {
        assert_eq!(Edge::new(4, 1).key(), Edge::new(1, 4).key());
    }

    #[test]
    fn face_sides_follow_winding() {
        let face = Face::new(0, 1, 2);
        assert_eq!(face.sides(), [[0, 1], [1, 2], [2, 0]]);
        assert_eq!(face.group, 0);
    }
}
