//! Indexed triangle mesh.

use std::path::PathBuf;

use crate::{Aabb, Edge, Face, MeshBounds, MeshTopology, Triangle, Vertex};
use nalgebra::{Point3, Vector3};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Non-element metadata of a mesh.
///
/// Copied between meshes with [`IndexedMesh::copy_properties_from`]; never
/// touched by element operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshProperties {
    /// Display name.
    pub name: Option<String>,
    /// File the mesh was loaded from.
    pub source: Option<PathBuf>,
}

/// A subset copy referenced a vertex that is not part of the subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{element} {index} references vertex {vertex} outside the copied subset")]
pub struct SubsetError {
    /// Kind of element holding the reference (`"edge"` or `"face"`).
    pub element: &'static str,
    /// Index of that element in the source mesh.
    pub index: usize,
    /// The unmapped vertex index.
    pub vertex: u32,
}

/// An indexed triangle mesh.
///
/// Stores vertices, edges and faces separately, with edges and faces
/// referencing vertices by index. Every element carries a `group` tag
/// marking the connected component it belongs to.
///
/// # Winding Order
///
/// Faces use **counter-clockwise (CCW) winding** when viewed from outside.
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, Vertex, MeshTopology};
///
/// let mut mesh = IndexedMesh::new();
/// let a = mesh.add_vertex(Vertex::from_coords(0.0, 0.0, 0.0));
/// let b = mesh.add_vertex(Vertex::from_coords(1.0, 0.0, 0.0));
/// let c = mesh.add_vertex(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.add_triangle(a, b, c);
/// mesh.finish();
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// assert!((mesh.faces[0].normal.z - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Explicit edges. May be empty when a mesh is built from faces only.
    pub edges: Vec<Edge>,

    /// Triangle faces.
    pub faces: Vec<Face>,

    /// Name and provenance.
    pub properties: MeshProperties,
}

impl IndexedMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
            properties: MeshProperties {
                name: None,
                source: None,
            },
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, edge_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            edges: Vec::with_capacity(edge_count),
            faces: Vec::with_capacity(face_count),
            properties: MeshProperties::default(),
        }
    }

    /// Append a vertex, returning its index.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, meshes with >4B vertices are unsupported
    pub fn add_vertex(&mut self, vertex: Vertex) -> u32 {
        self.vertices.push(vertex);
        (self.vertices.len() - 1) as u32
    }

    /// Append an edge between two existing vertices, returning its index.
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_edge(&mut self, v0: u32, v1: u32) -> u32 {
        self.edges.push(Edge::new(v0, v1));
        (self.edges.len() - 1) as u32
    }

    /// Append a triangle over three existing vertices, returning its index.
    ///
    /// The normal is left zero until [`finish`](Self::finish).
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) -> u32 {
        self.faces.push(Face::new(v0, v1, v2));
        (self.faces.len() - 1) as u32
    }

    /// Post-load fix-up: compute face normals and area-weighted vertex
    /// normals.
    ///
    /// Degenerate faces get a zero normal and do not contribute to vertex
    /// normals.
    pub fn finish(&mut self) {
        let mut accumulated = vec![Vector3::zeros(); self.vertices.len()];

        for face in &mut self.faces {
            let [i0, i1, i2] = face.vertices;
            let tri = Triangle::new(
                self.vertices[i0 as usize].position,
                self.vertices[i1 as usize].position,
                self.vertices[i2 as usize].position,
            );
            let weighted = tri.normal_unnormalized();
            face.normal = weighted
                .try_normalize(f64::EPSILON)
                .unwrap_or_else(Vector3::zeros);
            for &i in &face.vertices {
                accumulated[i as usize] += weighted;
            }
        }

        for (vertex, sum) in self.vertices.iter_mut().zip(accumulated) {
            vertex.attributes.normal = sum.try_normalize(f64::EPSILON);
        }
    }

    /// Copy non-element metadata from `template`.
    pub fn copy_properties_from(&mut self, template: &Self) {
        self.properties = template.properties.clone();
    }

    /// Copy a subset of elements into a new mesh.
    ///
    /// Vertices are renumbered contiguously in the order given; edge and
    /// face references are remapped accordingly. Properties are copied
    /// from `self`.
    ///
    /// # Errors
    ///
    /// Returns [`SubsetError`] if a selected edge or face references a
    /// vertex that is not in `vertices`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn copy_subset(
        &self,
        vertices: &[usize],
        edges: &[usize],
        faces: &[usize],
    ) -> Result<Self, SubsetError> {
        let mut remap = vec![u32::MAX; self.vertices.len()];
        let mut subset = Self::with_capacity(vertices.len(), edges.len(), faces.len());
        subset.copy_properties_from(self);

        for (new_index, &old_index) in vertices.iter().enumerate() {
            remap[old_index] = new_index as u32;
            subset.vertices.push(self.vertices[old_index].clone());
        }

        let lookup = |element: &'static str, index: usize, vertex: u32| {
            remap
                .get(vertex as usize)
                .copied()
                .filter(|&mapped| mapped != u32::MAX)
                .ok_or(SubsetError {
                    element,
                    index,
                    vertex,
                })
        };

        for &index in edges {
            let mut edge = self.edges[index];
            for v in &mut edge.vertices {
                *v = lookup("edge", index, *v)?;
            }
            subset.edges.push(edge);
        }

        for &index in faces {
            let mut face = self.faces[index];
            for v in &mut face.vertices {
                *v = lookup("face", index, *v)?;
            }
            subset.faces.push(face);
        }

        Ok(subset)
    }

    /// Translate mesh by the given vector.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for vertex in &mut self.vertices {
            vertex.position += offset;
        }
    }

    /// Scale mesh uniformly around the origin.
    pub fn scale(&mut self, factor: f64) {
        for vertex in &mut self.vertices {
            vertex.position.coords *= factor;
        }
    }

    /// Compute the total surface area of the mesh.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles().map(|tri| tri.area()).sum()
    }

    /// Merge another mesh into this one.
    ///
    /// The other mesh's elements are appended with vertex references
    /// offset appropriately. Group tags are kept as they are.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, so vertex counts > 4B are unsupported by design
    pub fn merge(&mut self, other: &Self) {
        let vertex_offset = self.vertices.len() as u32;

        self.vertices.extend(other.vertices.iter().cloned());

        self.edges.extend(other.edges.iter().map(|edge| {
            let mut edge = *edge;
            for v in &mut edge.vertices {
                *v += vertex_offset;
            }
            edge
        }));

        self.faces.extend(other.faces.iter().map(|face| {
            let mut face = *face;
            for v in &mut face.vertices {
                *v += vertex_offset;
            }
            face
        }));
    }
}

impl MeshTopology for IndexedMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    fn face(&self, index: usize) -> Option<[u32; 3]> {
        self.faces.get(index).map(|f| f.vertices)
    }

    fn triangle(&self, face_index: usize) -> Option<Triangle> {
        self.faces.get(face_index).map(|f| {
            let [i0, i1, i2] = f.vertices;
            Triangle {
                v0: self.vertices[i0 as usize].position,
                v1: self.vertices[i1 as usize].position,
                v2: self.vertices[i2 as usize].position,
            }
        })
    }

    fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    fn faces(&self) -> impl Iterator<Item = [u32; 3]> {
        self.faces.iter().map(|f| f.vertices)
    }

    fn triangles(&self) -> impl Iterator<Item = Triangle> {
        self.faces.iter().map(|f| {
            let [i0, i1, i2] = f.vertices;
            Triangle {
                v0: self.vertices[i0 as usize].position,
                v1: self.vertices[i1 as usize].position,
                v2: self.vertices[i2 as usize].position,
            }
        })
    }
}

impl MeshBounds for IndexedMesh {
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| &v.position))
    }
}

/// Create an axis-aligned box mesh spanning `min` to `max`.
///
/// Produces 8 vertices, the 12 cube edges and 12 outward-facing
/// triangles. Face diagonals are implied by the triangles but not listed
/// as explicit edges.
#[must_use]
pub fn cuboid(min: Point3<f64>, max: Point3<f64>) -> IndexedMesh {
    let mut mesh = IndexedMesh::with_capacity(8, 12, 12);

    for &(x, y, z) in &[
        (min.x, min.y, min.z), // 0
        (max.x, min.y, min.z), // 1
        (max.x, max.y, min.z), // 2
        (min.x, max.y, min.z), // 3
        (min.x, min.y, max.z), // 4
        (max.x, min.y, max.z), // 5
        (max.x, max.y, max.z), // 6
        (min.x, max.y, max.z), // 7
    ] {
        mesh.add_vertex(Vertex::from_coords(x, y, z));
    }

    for &[a, b] in &[
        [0, 1], [1, 2], [2, 3], [3, 0],
        [4, 5], [5, 6], [6, 7], [7, 4],
        [0, 4], [1, 5], [2, 6], [3, 7],
    ] {
        mesh.add_edge(a, b);
    }

    for &[a, b, c] in &[
        [0, 2, 1], [0, 3, 2], // bottom, -Z
        [4, 5, 6], [4, 6, 7], // top, +Z
        [0, 1, 5], [0, 5, 4], // front, -Y
        [3, 7, 6], [3, 6, 2], // back, +Y
        [0, 4, 7], [0, 7, 3], // left, -X
        [1, 2, 6], [1, 6, 5], // right, +X
    ] {
        mesh.add_triangle(a, b, c);
    }

    mesh.finish();
    mesh
}

/// Helper function to create a unit cube mesh from (0,0,0) to (1,1,1).
///
/// # Example
///
/// ```
/// use mesh_types::{unit_cube, MeshTopology};
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.face_count(), 12);
/// ```
#[must_use]
pub fn unit_cube() -> IndexedMesh {
    cuboid(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_triangles() -> IndexedMesh {
        let mut mesh = IndexedMesh::new();
        for &(x, y) in &[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (5.0, 0.0), (6.0, 0.0), (5.0, 1.0)] {
            mesh.add_vertex(Vertex::from_coords(x, y, 0.0));
        }
        mesh.add_edge(0, 1);
        mesh.add_edge(3, 4);
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(3, 4, 5);
        mesh
    }

    #[test]
    fn mesh_is_empty() {
        let mesh = IndexedMesh::new();
        assert!(mesh.is_empty());

        let mut mesh2 = IndexedMesh::new();
        mesh2.add_vertex(Vertex::from_coords(0.0, 0.0, 0.0));
        assert!(mesh2.is_empty()); // no faces

        mesh2.add_triangle(0, 0, 0);
        assert!(!mesh2.is_empty());
    }

    #[test]
    fn add_returns_indices() {
        let mut mesh = IndexedMesh::new();
        assert_eq!(mesh.add_vertex(Vertex::from_coords(0.0, 0.0, 0.0)), 0);
        assert_eq!(mesh.add_vertex(Vertex::from_coords(1.0, 0.0, 0.0)), 1);
        assert_eq!(mesh.add_edge(0, 1), 0);
        assert_eq!(mesh.add_triangle(0, 1, 0), 0);
    }

    #[test]
    fn finish_computes_normals() {
        let mut mesh = two_triangles();
        mesh.finish();
        for face in &mesh.faces {
            assert!((face.normal.z - 1.0).abs() < 1e-12);
        }
        for vertex in &mesh.vertices {
            let n = vertex.normal().unwrap_or_else(Vector3::zeros);
            assert!((n.z - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn finish_degenerate_face_has_zero_normal() {
        let mut mesh = IndexedMesh::new();
        mesh.add_vertex(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.add_vertex(Vertex::from_coords(1.0, 0.0, 0.0));
        mesh.add_vertex(Vertex::from_coords(2.0, 0.0, 0.0));
        mesh.add_triangle(0, 1, 2);
        mesh.finish();
        assert!(mesh.faces[0].normal.norm() < f64::EPSILON);
        assert!(mesh.vertices[0].normal().is_none());
    }

    #[test]
    fn copy_subset_remaps_indices() {
        let mut mesh = two_triangles();
        mesh.properties.name = Some("pair".to_string());

        let subset = mesh.copy_subset(&[3, 4, 5], &[1], &[1]);
        assert!(subset.is_ok());
        let subset = subset.unwrap();
        assert_eq!(subset.vertex_count(), 3);
        assert_eq!(subset.edges[0].vertices, [0, 1]);
        assert_eq!(subset.faces[0].vertices, [0, 1, 2]);
        assert!((subset.vertices[0].position.x - 5.0).abs() < f64::EPSILON);
        assert_eq!(subset.properties.name.as_deref(), Some("pair"));
    }

    #[test]
    fn copy_subset_rejects_outside_reference() {
        let mesh = two_triangles();
        let err = mesh.copy_subset(&[0, 1], &[], &[0]);
        assert_eq!(
            err,
            Err(SubsetError {
                element: "face",
                index: 0,
                vertex: 2
            })
        );
    }

    #[test]
    fn copy_properties_leaves_elements() {
        let mut template = IndexedMesh::new();
        template.properties.name = Some("glyphs".to_string());
        let mut mesh = two_triangles();
        mesh.copy_properties_from(&template);
        assert_eq!(mesh.properties.name.as_deref(), Some("glyphs"));
        assert_eq!(mesh.face_count(), 2);
    }

    #[test]
    fn mesh_bounds() {
        let mesh = two_triangles();
        let bounds = mesh.bounds();
        assert!((bounds.min.x - 0.0).abs() < f64::EPSILON);
        assert!((bounds.max.x - 6.0).abs() < f64::EPSILON);
        assert!((bounds.max.y - 1.0).abs() < f64::EPSILON);
        assert!(bounds.is_volume_zero());
    }

    #[test]
    fn empty_mesh_bounds() {
        let mesh = IndexedMesh::new();
        assert!(mesh.bounds().is_empty());
    }

    #[test]
    fn unit_cube_surface_area() {
        let cube = unit_cube();
        let area = cube.surface_area();
        assert!(
            (area - 6.0).abs() < 1e-10,
            "Unit cube surface area should be 6.0, got {area}"
        );
        assert_eq!(cube.edge_count(), 12);
    }

    #[test]
    fn cuboid_normals_point_outward() {
        let mesh = cuboid(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        for (face, tri) in mesh.faces.iter().zip(mesh.triangles()) {
            let outward = tri.centroid().coords;
            assert!(face.normal.dot(&outward) > 0.0);
        }
    }

    #[test]
    fn mesh_merge() {
        let mut mesh1 = two_triangles();
        let mesh2 = two_triangles();

        mesh1.merge(&mesh2);
        assert_eq!(mesh1.vertex_count(), 12);
        assert_eq!(mesh1.face_count(), 4);
        assert_eq!(mesh1.edge_count(), 4);
        assert_eq!(mesh1.faces[2].vertices, [6, 7, 8]);
        assert_eq!(mesh1.edges[3].vertices, [9, 10]);
    }

    #[test]
    fn mesh_translate_and_scale() {
        let mut mesh = IndexedMesh::new();
        mesh.add_vertex(Vertex::from_coords(1.0, 1.0, 1.0));

        mesh.translate(Vector3::new(1.0, 2.0, 3.0));
        mesh.scale(0.5);

        let pos = mesh.vertices[0].position;
        assert!((pos.x - 1.0).abs() < f64::EPSILON);
        assert!((pos.y - 1.5).abs() < f64::EPSILON);
        assert!((pos.z - 2.0).abs() < f64::EPSILON);
    }
}
