//! Axis-aligned bounding box.

use std::fmt;
use std::str::FromStr;

use nalgebra::{Matrix4, Point3, Vector3};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box (AABB).
///
/// Represents a 3D box aligned with the coordinate axes, defined by
/// minimum and maximum corner points. An axis with `max < min` is empty;
/// the canonical empty box (see [`Aabb::empty`]) has every axis empty and
/// is the state before anything has been inserted.
///
/// A box only ever grows through [`insert_point`](Self::insert_point) and
/// [`insert`](Self::insert). It shrinks only by [`reset`](Self::reset) or
/// by an explicit [`transform`](Self::transform).
///
/// The optional `frame` describes a local coordinate frame for the volume.
/// It is carried along untouched by every operation and is not part of the
/// text form.
///
/// # Example
///
/// ```
/// use mesh_types::{Aabb, Point3};
///
/// let aabb = Aabb::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(10.0, 10.0, 10.0),
/// );
///
/// assert_eq!(aabb.size(), Point3::new(10.0, 10.0, 10.0).coords);
/// assert!(aabb.contains(&Point3::new(5.0, 5.0, 5.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner (smallest x, y, z values).
    pub min: Point3<f64>,
    /// Maximum corner (largest x, y, z values).
    pub max: Point3<f64>,
    /// Optional local coordinate frame of the volume.
    pub frame: Option<Matrix4<f64>>,
}

impl Aabb {
    /// Create a new AABB from minimum and maximum corners.
    ///
    /// The corners are automatically corrected if min > max for any axis.
    #[must_use]
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self {
            min: Point3::new(min.x.min(max.x), min.y.min(max.y), min.z.min(max.z)),
            max: Point3::new(min.x.max(max.x), min.y.max(max.y), min.z.max(max.z)),
            frame: None,
        }
    }

    /// Create an AABB from a single point.
    ///
    /// The resulting box is non-empty but has zero volume.
    #[inline]
    #[must_use]
    pub const fn from_point(point: Point3<f64>) -> Self {
        Self {
            min: point,
            max: point,
            frame: None,
        }
    }

    /// Create the canonical empty AABB.
    ///
    /// Min starts at the largest representable value and max at its
    /// negation, so the first insertion always wins on every axis.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Aabb, Point3};
    ///
    /// let mut aabb = Aabb::empty();
    /// assert!(aabb.is_empty());
    ///
    /// aabb.insert_point(&Point3::new(1.0, 2.0, 3.0));
    /// assert!(!aabb.is_empty());
    /// ```
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::MAX, f64::MAX, f64::MAX),
            max: Point3::new(-f64::MAX, -f64::MAX, -f64::MAX),
            frame: None,
        }
    }

    /// Create an AABB from an iterator of points.
    ///
    /// Returns an empty AABB if the iterator is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Aabb, Point3};
    ///
    /// let points = vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(10.0, 5.0, 3.0),
    ///     Point3::new(-2.0, 8.0, 1.0),
    /// ];
    ///
    /// let aabb = Aabb::from_points(points.iter());
    /// assert_eq!(aabb.min, Point3::new(-2.0, 0.0, 0.0));
    /// assert_eq!(aabb.max, Point3::new(10.0, 8.0, 3.0));
    /// ```
    #[must_use]
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point3<f64>>) -> Self {
        let mut aabb = Self::empty();
        for point in points {
            aabb.insert_point(point);
        }
        aabb
    }

    /// Attach a local coordinate frame.
    #[must_use]
    pub const fn with_frame(mut self, frame: Matrix4<f64>) -> Self {
        self.frame = Some(frame);
        self
    }

    /// Reset to the canonical empty state, keeping the frame.
    pub fn reset(&mut self) {
        let frame = self.frame;
        *self = Self::empty();
        self.frame = frame;
    }

    /// Check if nothing has been inserted since the box was created or reset.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Check if any axis has zero extent.
    ///
    /// A flat planar box is non-empty but zero-volume.
    #[inline]
    #[must_use]
    pub fn is_volume_zero(&self) -> bool {
        let s = self.size();
        s.x <= 0.0 || s.y <= 0.0 || s.z <= 0.0
    }

    /// Get the size (dimensions) of the AABB.
    ///
    /// Each axis is clamped to zero when `max < min`.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Aabb, Point3};
    ///
    /// let aabb = Aabb::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(3.0, 4.0, 5.0),
    /// );
    /// let size = aabb.size();
    /// assert_eq!(size.x, 3.0);
    /// assert_eq!(size.y, 4.0);
    /// assert_eq!(size.z, 5.0);
    /// assert_eq!(Aabb::empty().size().x, 0.0);
    /// ```
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        Vector3::new(self.size_x(), self.size_y(), self.size_z())
    }

    /// Extent along X, clamped to zero.
    #[inline]
    #[must_use]
    pub fn size_x(&self) -> f64 {
        (self.max.x - self.min.x).max(0.0)
    }

    /// Extent along Y, clamped to zero.
    #[inline]
    #[must_use]
    pub fn size_y(&self) -> f64 {
        (self.max.y - self.min.y).max(0.0)
    }

    /// Extent along Z, clamped to zero.
    #[inline]
    #[must_use]
    pub fn size_z(&self) -> f64 {
        (self.max.z - self.min.z).max(0.0)
    }

    /// Get the center of the AABB.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        Point3::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    /// Get the volume of the AABB.
    ///
    /// Returns 0.0 for empty AABBs.
    #[inline]
    #[must_use]
    pub fn volume(&self) -> f64 {
        let s = self.size();
        s.x * s.y * s.z
    }

    /// Check if the AABB contains a point.
    ///
    /// Points on the boundary are considered inside.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Check if this AABB overlaps another AABB on all three axes.
    ///
    /// Touching AABBs are considered overlapping.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Aabb, Point3};
    ///
    /// let a = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 10.0));
    /// let b = Aabb::new(Point3::new(10.0, 5.0, 5.0), Point3::new(15.0, 15.0, 15.0));
    /// let c = Aabb::new(Point3::new(20.0, 20.0, 20.0), Point3::new(30.0, 30.0, 30.0));
    ///
    /// assert!(a.overlaps(&b));
    /// assert!(!a.overlaps(&c));
    /// ```
    #[inline]
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Compute the union (enclosing AABB) of two AABBs.
    ///
    /// The frame of `self` is kept.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = *self;
        result.insert(other);
        result
    }

    /// Widen the box to include a point.
    pub fn insert_point(&mut self, point: &Point3<f64>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Widen the box to include the full extent of another box.
    ///
    /// Inserting an empty box is a no-op.
    pub fn insert(&mut self, other: &Self) {
        if other.is_empty() {
            return;
        }
        self.insert_point(&other.min);
        self.insert_point(&other.max);
    }

    /// Replace the box by the bounds of its eight corners after applying
    /// an affine transform.
    ///
    /// An empty box stays empty.
    pub fn transform(&mut self, matrix: &Matrix4<f64>) {
        if self.is_empty() {
            return;
        }
        let corners = self.corners();
        let frame = self.frame;
        *self = Self::empty();
        self.frame = frame;
        for corner in &corners {
            self.insert_point(&matrix.transform_point(corner));
        }
    }

    /// Return a transformed copy, see [`transform`](Self::transform).
    #[must_use]
    pub fn transformed(&self, matrix: &Matrix4<f64>) -> Self {
        let mut result = *self;
        result.transform(matrix);
        result
    }

    /// Return a copy moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector3<f64>) -> Self {
        if self.is_empty() {
            return *self;
        }
        Self {
            min: self.min + offset,
            max: self.max + offset,
            frame: self.frame,
        }
    }

    /// Get the eight corner points of the AABB.
    #[must_use]
    pub fn corners(&self) -> [Point3<f64>; 8] {
        [
            Point3::new(self.min.x, self.min.y, self.min.z),
            Point3::new(self.max.x, self.min.y, self.min.z),
            Point3::new(self.min.x, self.max.y, self.min.z),
            Point3::new(self.max.x, self.max.y, self.min.z),
            Point3::new(self.min.x, self.min.y, self.max.z),
            Point3::new(self.max.x, self.min.y, self.max.z),
            Point3::new(self.min.x, self.max.y, self.max.z),
            Point3::new(self.max.x, self.max.y, self.max.z),
        ]
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

/// Error parsing the text form of an [`Aabb`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAabbError {
    /// Wrong number of whitespace-separated fields.
    #[error("expected 6 scalars, found {found}")]
    FieldCount {
        /// Number of fields present.
        found: usize,
    },

    /// A field is not a valid real number.
    #[error("field {index} is not a number: {field:?}")]
    InvalidScalar {
        /// Zero-based field index.
        index: usize,
        /// The offending text.
        field: String,
    },
}

/// Writes `xmin xmax ymin ymax zmin zmax` in shortest round-trip notation.
impl fmt::Display for Aabb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:e} {:e} {:e} {:e} {:e} {:e}",
            self.min.x, self.max.x, self.min.y, self.max.y, self.min.z, self.max.z
        )
    }
}

impl FromStr for Aabb {
    type Err = ParseAabbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(ParseAabbError::FieldCount {
                found: fields.len(),
            });
        }

        let mut values = [0.0; 6];
        for (index, (field, value)) in fields.iter().zip(values.iter_mut()).enumerate() {
            *value = field
                .parse::<f64>()
                .map_err(|_| ParseAabbError::InvalidScalar {
                    index,
                    field: (*field).to_string(),
                })?;
        }

        let [xmin, xmax, ymin, ymax, zmin, zmax] = values;
        Ok(Self {
            min: Point3::new(xmin, ymin, zmin),
            max: Point3::new(xmax, ymax, zmax),
            frame: None,
        })
    }
}
