//! 3D affine transformation values.

use mesh_types::{Aabb, IndexedMesh, Point3};
use nalgebra::{Matrix4, Vector3};

/// A 3D transformation represented as a 4x4 matrix.
///
/// Transforms are plain values: they are composed with [`then`](Self::then)
/// and applied to geometry with [`flatten_into`](Self::flatten_into), which
/// bakes the result into vertex positions so no transform state needs to
/// be carried alongside the mesh afterwards.
///
/// # Example
///
/// ```
/// use mesh_transform::Transform3D;
/// use mesh_types::Point3;
///
/// let translate = Transform3D::translation(1.0, 2.0, 3.0);
/// let scale = Transform3D::uniform_scale(2.0);
/// let combined = translate.then(&scale);
///
/// let p = combined.transform_point(&Point3::origin());
/// assert!((p.x - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3D {
    /// The 4x4 transformation matrix in column-major order.
    matrix: Matrix4<f64>,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3D {
    /// Create a new transformation from a 4x4 matrix.
    #[must_use]
    pub const fn from_matrix(matrix: Matrix4<f64>) -> Self {
        Self { matrix }
    }

    /// Create the identity transformation (no change).
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Create a translation transformation.
    #[must_use]
    pub fn translation(tx: f64, ty: f64, tz: f64) -> Self {
        Self {
            matrix: Matrix4::new_translation(&Vector3::new(tx, ty, tz)),
        }
    }

    /// Create a translation from a vector.
    #[must_use]
    pub fn from_translation(v: Vector3<f64>) -> Self {
        Self::translation(v.x, v.y, v.z)
    }

    /// Create a uniform scaling transformation.
    #[must_use]
    pub fn uniform_scale(factor: f64) -> Self {
        Self::scale(factor, factor, factor)
    }

    /// Create a non-uniform scaling transformation.
    #[must_use]
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            matrix: Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz)),
        }
    }

    /// Get the underlying 4x4 matrix.
    #[must_use]
    pub const fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    /// Compose this transformation with another (self then other).
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        Self {
            matrix: other.matrix * self.matrix,
        }
    }

    /// Compute the inverse transformation, `None` if singular.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|m| Self { matrix: m })
    }

    /// Check whether this is the identity within `epsilon`.
    #[must_use]
    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.matrix.is_identity(epsilon)
    }

    /// Transform a point (applies translation).
    #[must_use]
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        self.matrix.transform_point(point)
    }

    /// Transform a direction vector (ignores translation).
    #[must_use]
    pub fn transform_vector(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.matrix.transform_vector(vector)
    }

    /// Transform a normal vector with the inverse transpose of the linear
    /// part, renormalized. Returns `None` for singular transforms or a
    /// zero normal.
    #[must_use]
    pub fn transform_normal(&self, normal: &Vector3<f64>) -> Option<Vector3<f64>> {
        let m = self.matrix.fixed_view::<3, 3>(0, 0);
        m.try_inverse()
            .map(|inv| inv.transpose() * normal)
            .and_then(|n| n.try_normalize(f64::EPSILON))
    }

    /// Bake this transformation into a mesh's vertex positions, vertex
    /// normals and face normals.
    pub fn flatten_into(&self, mesh: &mut IndexedMesh) {
        for vertex in &mut mesh.vertices {
            vertex.position = self.transform_point(&vertex.position);
            if let Some(normal) = vertex.attributes.normal {
                vertex.attributes.normal = self.transform_normal(&normal);
            }
        }
        for face in &mut mesh.faces {
            face.normal = self
                .transform_normal(&face.normal)
                .unwrap_or_else(Vector3::zeros);
        }
    }

    /// Apply this transformation to a copy of a mesh.
    #[must_use]
    pub fn apply_to_mesh(&self, mesh: &IndexedMesh) -> IndexedMesh {
        let mut result = mesh.clone();
        self.flatten_into(&mut result);
        result
    }

    /// Bounds of a box after this transformation.
    #[must_use]
    pub fn apply_to_aabb(&self, aabb: &Aabb) -> Aabb {
        aabb.transformed(&self.matrix)
    }
}
