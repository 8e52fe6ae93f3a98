//! Ray representation.

use crate::intersect::{self, SphereHit};
use crate::TraceError;
use tanray_math::{try_direction, Dir3, Point3, Vec3};

/// A ray in 3D space defined by origin and unit direction.
///
/// Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Unit direction of the ray.
    pub direction: Dir3,
}

impl Ray {
    /// Create a ray from an origin and a direction.
    ///
    /// The direction does not need to be pre-normalized; it is normalized
    /// here. Fails with [`TraceError::DegenerateRay`] when its length is
    /// below tolerance.
    pub fn new(origin: Point3, direction: Vec3) -> Result<Self, TraceError> {
        let direction =
            try_direction(direction).map_err(|_| TraceError::DegenerateRay(direction.norm()))?;
        Ok(Self { origin, direction })
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction.as_ref()
    }

    /// Test this ray against the sphere of `radius` centered at the world
    /// origin, returning the nearest forward hit.
    ///
    /// Returns `None` when the ray misses the sphere or both crossings lie
    /// behind the origin. A tangent ray reports the single tangency point.
    pub fn intersects(&self, radius: f64) -> Option<SphereHit> {
        intersect::intersect_sphere(self, radius).into_iter().next()
    }
}
