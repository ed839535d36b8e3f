//! A single glyph.

use mesh_split::MeshGroup;
use mesh_transform::Transform3D;
use mesh_types::{Aabb, IndexedMesh, MeshTopology};

/// The geometry of one character plus its bounds.
///
/// Whitespace glyphs have no geometry and carry the bounds of the glyph
/// before them so spacing stays defined.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Glyph geometry, anchored at the glyph's left edge.
    pub mesh: IndexedMesh,
    /// Bounds used for layout.
    pub bounds: Aabb,
}

impl Glyph {
    /// Create a glyph from one split group.
    #[must_use]
    pub fn from_group(group: &MeshGroup) -> Self {
        Self {
            mesh: group.mesh.clone(),
            bounds: group.bounds,
        }
    }

    /// Create a glyph without geometry.
    #[must_use]
    pub fn blank(bounds: Aabb) -> Self {
        Self {
            mesh: IndexedMesh::new(),
            bounds,
        }
    }

    /// Merge another group into this glyph.
    pub fn absorb(&mut self, group: &MeshGroup) {
        self.mesh.merge(&group.mesh);
        self.bounds.insert(&group.bounds);
    }

    /// Horizontal extent.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bounds.size_x()
    }

    /// Whether the glyph has nothing to draw.
    #[inline]
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.mesh.is_empty()
    }

    /// How far `next` reaches back over this glyph, as a fraction of this
    /// glyph's width.
    ///
    /// Zero-width glyphs report negative infinity so nothing merges into
    /// them.
    #[must_use]
    pub fn overlap(&self, next: &Aabb) -> f64 {
        let width = self.width();
        if width > 0.0 {
            (self.bounds.max.x - next.min.x) / width
        } else {
            f64::NEG_INFINITY
        }
    }

    /// Bake a transform into the geometry and bounds.
    pub fn apply(&mut self, transform: &Transform3D) {
        transform.flatten_into(&mut self.mesh);
        self.bounds = transform.apply_to_aabb(&self.bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_types::{cuboid, Point3};

    fn group(x0: f64, x1: f64) -> MeshGroup {
        MeshGroup::new(cuboid(Point3::new(x0, 0.0, 0.0), Point3::new(x1, 1.0, 0.1)))
    }

    #[test]
    fn overlap_fraction() {
        let glyph = Glyph::from_group(&group(0.0, 2.0));
        assert_relative_eq!(glyph.overlap(&group(1.0, 3.0).bounds), 0.5, epsilon = 1e-12);
        assert_relative_eq!(glyph.overlap(&group(2.0, 3.0).bounds), 0.0, epsilon = 1e-12);
        assert_relative_eq!(glyph.overlap(&group(4.0, 5.0).bounds), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_width_never_overlaps() {
        let flat = Glyph::blank(Aabb::from_point(Point3::new(1.0, 0.0, 0.0)));
        assert!(flat.overlap(&group(0.0, 2.0).bounds).is_infinite());
        assert!(Glyph::blank(Aabb::empty())
            .overlap(&group(0.0, 1.0).bounds)
            .is_sign_negative());
    }

    #[test]
    fn absorb_merges_geometry_and_bounds() {
        let mut glyph = Glyph::from_group(&group(0.0, 1.0));
        glyph.absorb(&group(0.5, 1.5));
        assert_eq!(glyph.mesh.vertex_count(), 16);
        assert_eq!(glyph.mesh.face_count(), 24);
        assert_relative_eq!(glyph.width(), 1.5, epsilon = 1e-12);
        assert!(!glyph.is_blank());
        assert!(Glyph::blank(glyph.bounds).is_blank());
    }

    #[test]
    fn apply_moves_mesh_and_bounds_together() {
        let mut glyph = Glyph::from_group(&group(2.0, 4.0));
        glyph.apply(&Transform3D::translation(-2.0, 0.0, 0.0).then(&Transform3D::uniform_scale(0.5)));
        assert_relative_eq!(glyph.bounds.min.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(glyph.bounds.max.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(glyph.bounds.max.y, 0.5, epsilon = 1e-12);
        let mesh_bounds = mesh_types::MeshBounds::bounds(&glyph.mesh);
        assert_relative_eq!(mesh_bounds.max.x, glyph.bounds.max.x, epsilon = 1e-12);
    }
}
