//! Traits for mesh types.

use crate::{Aabb, Triangle, Vertex};
use nalgebra::Point3;

/// Read-only view of mesh topology.
///
/// The narrow interface the loaders, splitters and font assembly rely on.
pub trait MeshTopology {
    /// Get the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Get the number of explicit edges.
    fn edge_count(&self) -> usize;

    /// Get the number of faces (triangles).
    fn face_count(&self) -> usize;

    /// Check if the mesh has no triangles to draw.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0 || self.face_count() == 0
    }

    /// Number of groups implied by the vertex tags: one more than the
    /// largest tag, or zero for a mesh without vertices.
    fn group_count(&self) -> usize {
        self.vertices()
            .map(|v| v.group as usize + 1)
            .max()
            .unwrap_or(0)
    }

    /// Get a vertex by index, `None` if out of bounds.
    fn vertex(&self, index: usize) -> Option<&Vertex>;

    /// Get a face's vertex indices, `None` if out of bounds.
    fn face(&self, index: usize) -> Option<[u32; 3]>;

    /// Get a face with resolved vertex positions, `None` if out of bounds.
    fn triangle(&self, face_index: usize) -> Option<Triangle>;

    /// Iterate over all vertices.
    fn vertices(&self) -> impl Iterator<Item = &Vertex>;

    /// Iterate over all faces as vertex index triples.
    fn faces(&self) -> impl Iterator<Item = [u32; 3]>;

    /// Iterate over all faces with resolved vertex positions.
    fn triangles(&self) -> impl Iterator<Item = Triangle>;
}

/// Types that can compute a bounding box.
pub trait MeshBounds {
    /// Compute the axis-aligned bounding box of all vertex positions.
    ///
    /// Returns an empty AABB if the mesh has no vertices.
    fn bounds(&self) -> Aabb;

    /// Compute the bounding box, returning `None` if empty.
    fn bounds_opt(&self) -> Option<Aabb> {
        let b = self.bounds();
        if b.is_empty() { None } else { Some(b) }
    }

    /// Get the center of the bounding box.
    fn center(&self) -> Point3<f64> {
        self.bounds().center()
    }
}
