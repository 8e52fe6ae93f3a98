//! Ray-surface intersection algorithms.
//!
//! Each surface has a dedicated closed-form intersector. Hits are only
//! reported for non-negative parameters: crossings behind the ray origin
//! are excluded.

mod plane;
mod sphere;

pub use plane::intersect_plane;
pub use sphere::intersect_sphere;

use tanray_math::{Point2, Point3};

/// A hit against an origin-centered sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereHit {
    /// Non-negative parametric distance along the ray.
    pub t: f64,
    /// 3D intersection point, on the sphere.
    pub point: Point3,
}

/// A hit against a plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneHit {
    /// Non-negative parametric distance along the ray.
    pub t: f64,
    /// 3D intersection point, on the plane.
    pub point: Point3,
    /// Plane parameter coordinates (u, v) at the intersection.
    pub uv: Point2,
}
