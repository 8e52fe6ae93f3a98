//! Ray-sphere intersection (quadratic equation).

use super::SphereHit;
use crate::Ray;
use tanray_math::{solve_quadratic, QuadRoots};

/// Intersect a ray with the sphere of `radius` centered at the world origin.
///
/// Returns up to 2 hits (entry and exit points), sorted by t. Only hits
/// with t >= 0 are returned; a tangent ray yields a single hit at the
/// tangency distance.
pub fn intersect_sphere(ray: &Ray, radius: f64) -> Vec<SphereHit> {
    let oc = ray.origin.coords;
    let d = ray.direction.as_ref();

    // Quadratic: |oc + t*d|^2 = r^2
    let a = d.dot(d); // Always 1 for unit direction, but explicit for clarity
    let b = 2.0 * oc.dot(d);
    let c = oc.dot(&oc) - radius * radius;

    let roots = match solve_quadratic(a, b, c) {
        QuadRoots::None => return Vec::new(),
        QuadRoots::One(t) => vec![t],
        QuadRoots::Two(t1, t2) => vec![t1, t2],
    };

    roots
        .into_iter()
        .filter(|&t| t >= 0.0)
        .map(|t| SphereHit {
            t,
            point: ray.at(t),
        })
        .collect()
}
