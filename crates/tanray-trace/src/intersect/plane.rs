//! Ray-plane intersection (closed-form).

use super::PlaneHit;
use crate::Ray;
use tanray_geom::Plane;
use tanray_math::Tolerance;

/// Intersect a ray with a plane.
///
/// Returns `Some(hit)` if the ray meets the plane at a non-negative t, or
/// `None` if the ray is parallel to the plane or the crossing lies behind
/// the ray origin.
pub fn intersect_plane(ray: &Ray, plane: &Plane) -> Option<PlaneHit> {
    let normal = plane.normal.as_ref();
    let denom = ray.direction.dot(normal);

    // Ray is parallel to the plane
    if Tolerance::DEFAULT.is_zero(denom) {
        return None;
    }

    let t = (plane.origin - ray.origin).dot(normal) / denom;
    if t < 0.0 {
        return None;
    }

    let point = ray.at(t);
    let uv = plane.project(&point);
    Some(PlaneHit { t, point, uv })
}
