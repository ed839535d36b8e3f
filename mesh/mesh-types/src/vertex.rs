//! Vertex types and attributes.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Optional attributes that can be attached to a vertex.
///
/// - `normal`: Computed from adjacent faces by [`IndexedMesh::finish`]
/// - `uv`: Parametric coordinates carried through from modeling tools
///
/// [`IndexedMesh::finish`]: crate::IndexedMesh::finish
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexAttributes {
    /// Unit normal vector, computed from adjacent faces.
    pub normal: Option<Vector3<f64>>,

    /// Texture coordinates (U, V).
    pub uv: Option<(f32, f32)>,
}

impl VertexAttributes {
    /// Create empty attributes with no values set.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            normal: None,
            uv: None,
        }
    }

    /// Check if any attributes are set.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.normal.is_none() && self.uv.is_none()
    }
}

/// A vertex in 3D space with a component group tag.
///
/// The `group` tag marks which connected component (physical blob) the
/// vertex belongs to. It is `0` until a labeling pass assigns it.
///
/// # Example
///
/// ```
/// use mesh_types::{Vertex, Point3};
///
/// let v1 = Vertex::new(Point3::new(1.0, 2.0, 3.0));
/// let v2 = Vertex::from_coords(1.0, 2.0, 3.0);
///
/// assert_eq!(v1.position, v2.position);
/// assert_eq!(v1.group, 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// 3D position.
    pub position: Point3<f64>,

    /// Component membership tag.
    pub group: u32,

    /// Optional attributes (normal, uv).
    pub attributes: VertexAttributes,
}

impl Vertex {
    /// Create a new vertex with only position set.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            group: 0,
            attributes: VertexAttributes::empty(),
        }
    }

    /// Create a vertex from raw coordinates.
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }

    /// Set the group tag.
    #[inline]
    #[must_use]
    pub const fn with_group(mut self, group: u32) -> Self {
        self.group = group;
        self
    }

    /// Get the normal if set.
    #[inline]
    #[must_use]
    pub const fn normal(&self) -> Option<Vector3<f64>> {
        self.attributes.normal
    }
}

impl From<Point3<f64>> for Vertex {
    fn from(position: Point3<f64>) -> Self {
        Self::new(position)
    }
}

impl From<[f64; 3]> for Vertex {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::from_coords(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vertex {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::from_coords(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_from_coords() {
        let v = Vertex::from_coords(1.0, 2.0, 3.0);
        assert!((v.position.x - 1.0).abs() < f64::EPSILON);
        assert!((v.position.y - 2.0).abs() < f64::EPSILON);
        assert!((v.position.z - 3.0).abs() < f64::EPSILON);
        assert!(v.attributes.is_empty());
        assert_eq!(v.group, 0);
    }

    #[test]
    fn vertex_with_group() {
        let v = Vertex::from_coords(0.0, 0.0, 0.0).with_group(7);
        assert_eq!(v.group, 7);
    }

    #[test]
    fn vertex_from_tuple_and_array() {
        let a: Vertex = (1.0, 2.0, 3.0).into();
        let b: Vertex = [1.0, 2.0, 3.0].into();
        assert_eq!(a, b);
    }

    #[test]
    fn attributes_is_empty() {
        let mut attrs = VertexAttributes::empty();
        assert!(attrs.is_empty());
        attrs.uv = Some((0.5, 0.5));
        assert!(!attrs.is_empty());
    }
}
