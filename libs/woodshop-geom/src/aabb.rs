//! # Axis-Aligned Bounding Box
//!
//! Min/max corner pair plus the box volume arithmetic used to sanity-check
//! set operations. None of this is solid modeling: a union of two boxes is
//! their bounding box, and volumes follow inclusion-exclusion.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box.
///
/// The default value is the zero-sized box at the origin, which is also what
/// an empty mesh reports.
///
/// # Example
///
/// ```rust
/// use woodshop_geom::Aabb;
/// use glam::DVec3;
///
/// let aabb = Aabb::new(DVec3::splat(-1.0), DVec3::new(1.0, 2.0, 3.0));
/// assert_eq!(aabb.size(), DVec3::new(2.0, 3.0, 4.0));
/// assert_eq!(aabb.volume(), 24.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Aabb {
    /// Creates a box from its corners.
    pub const fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point, or the zero box when empty.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = DVec3>,
    {
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return Self::default();
        };
        points.fold(Self::new(first, first), |acc, p| {
            Self::new(acc.min.min(p), acc.max.max(p))
        })
    }

    /// Component-wise extent.
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Enclosed volume. Inverted axes count as zero extent.
    pub fn volume(&self) -> f64 {
        let size = self.size().max(DVec3::ZERO);
        size.x * size.y * size.z
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// Overlap of both boxes, or `None` when they are disjoint or only touch
    /// on some axis.
    pub fn intersection(&self, other: &Aabb) -> Option<Aabb> {
        let overlap = Aabb::new(self.min.max(other.min), self.max.min(other.max));
        let size = overlap.size();
        (size.x > 0.0 && size.y > 0.0 && size.z > 0.0).then_some(overlap)
    }

    /// Volume of the overlap of both boxes.
    pub fn intersection_volume(&self, other: &Aabb) -> f64 {
        self.intersection(other).map_or(0.0, |overlap| overlap.volume())
    }

    /// Volume of the set union of both boxes (inclusion-exclusion).
    pub fn union_volume(&self, other: &Aabb) -> f64 {
        self.volume() + other.volume() - self.intersection_volume(other)
    }

    /// Volume of `self` not covered by `other`, clamped at zero.
    pub fn difference_volume(&self, other: &Aabb) -> f64 {
        (self.volume() - self.intersection_volume(other)).max(0.0)
    }
}
