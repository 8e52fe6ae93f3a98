#![warn(missing_docs)]

//! Plane primitive for the tanray geometry kernel.
//!
//! A plane is anchored at an origin point and spanned by two direction
//! vectors. Construction validates that the spanning directions are
//! non-parallel; after that every query is a pure function of the stored
//! fields, so a `Plane` is freely shareable across threads.

use tanray_math::{
    solve_quadratic, try_direction, Dir3, MathError, Point2, Point3, QuadRoots, Tolerance, Vec3,
};
use thiserror::Error;

/// Errors raised when constructing geometry.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeomError {
    /// The two spanning directions are parallel (or one of them is zero),
    /// so they do not define a plane.
    #[error("degenerate plane: spanning directions are parallel or zero")]
    DegeneratePlane,
    /// A vector utility rejected its input.
    #[error(transparent)]
    Math(#[from] MathError),
}

/// An infinite plane anchored at `origin` and spanned by two directions.
///
/// Immutable after construction. The spanning vectors are kept as given
/// (not normalized); the unit normal is precomputed from their cross
/// product at construction time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Anchor point on the plane.
    pub origin: Point3,
    /// First spanning direction, as passed to the constructor.
    pub span_a: Vec3,
    /// Second spanning direction, as passed to the constructor.
    pub span_b: Vec3,
    /// Unit normal (`span_a × span_b`, normalized).
    pub normal: Dir3,
}

impl Plane {
    /// Create a plane from an origin point and two spanning directions.
    ///
    /// The spanning vectors do not need to be normalized or orthogonal.
    /// Fails with [`GeomError::DegeneratePlane`] when their cross product
    /// has near-zero magnitude.
    pub fn new(origin: Point3, span_a: Vec3, span_b: Vec3) -> Result<Self, GeomError> {
        let normal =
            try_direction(span_a.cross(&span_b)).map_err(|_| GeomError::DegeneratePlane)?;
        Ok(Self {
            origin,
            span_a,
            span_b,
            normal,
        })
    }

    /// Create a plane from an origin and a normal direction.
    ///
    /// The spanning directions are chosen arbitrarily perpendicular to the
    /// normal. Fails when the normal has near-zero length.
    pub fn from_normal(origin: Point3, normal: Vec3) -> Result<Self, GeomError> {
        let n = try_direction(normal)?;
        // Pick an arbitrary vector not parallel to the normal
        let arbitrary = if n.x.abs() < 0.9 { Vec3::x() } else { Vec3::y() };
        let a = arbitrary.cross(n.as_ref());
        let b = n.as_ref().cross(&a);
        Self::new(origin, a, b)
    }

    /// XY plane at the world origin.
    pub fn xy() -> Self {
        Self {
            origin: Point3::origin(),
            span_a: Vec3::x(),
            span_b: Vec3::y(),
            normal: Dir3::new_unchecked(Vec3::z()),
        }
    }

    /// First tangent direction: the normalized first spanning vector.
    fn t1(&self) -> Dir3 {
        // span_a is non-zero whenever construction succeeded
        Dir3::new_normalize(self.span_a)
    }

    /// Canonical in-plane perpendicular to [`t1`](Self::t1): `normal × t1`.
    fn in_plane_perp(&self) -> Dir3 {
        Dir3::new_unchecked(self.normal.as_ref().cross(self.t1().as_ref()))
    }

    /// Extract a tangent basis for the plane.
    ///
    /// Returns `(T1, T2)`: two unit directions lying in the plane with
    /// `T1 · T2 = 0`. `T1` is always the normalized first spanning vector.
    /// The seed for `T2` blends between the canonical in-plane perpendicular
    /// (`t = 0`) and the raw second spanning vector (`t = 1`); the blend is
    /// then orthonormalized against `T1`, so the returned pair is orthonormal
    /// for every `t`.
    pub fn tangents(&self, t: f64) -> (Dir3, Dir3) {
        let t1 = self.t1();
        let perp = self.in_plane_perp();

        let seed = (1.0 - t) * perp.as_ref() + t * self.span_b;
        let rejected = seed - seed.dot(t1.as_ref()) * t1.as_ref();

        // The seed can collapse onto T1 only for some t < 0; fall back to
        // the canonical perpendicular so the result stays well-defined.
        let t2 = Dir3::try_new(rejected, Tolerance::DEFAULT.linear).unwrap_or(perp);
        (t1, t2)
    }

    /// Project a 3D point onto this plane's (u, v) parameter space.
    ///
    /// The chart is the canonical frame `tangents(0)`.
    pub fn project(&self, p: &Point3) -> Point2 {
        let d = p - self.origin;
        Point2::new(
            d.dot(self.t1().as_ref()),
            d.dot(self.in_plane_perp().as_ref()),
        )
    }

    /// Signed distance from a point to this plane.
    pub fn signed_distance(&self, p: &Point3) -> f64 {
        (p - self.origin).dot(self.normal.as_ref())
    }

    /// Points where in-plane lines through the plane's closest point to the
    /// world origin are tangent to the sphere of `radius` centered there.
    ///
    /// Returns 0 points when the plane misses the sphere, 1 when it grazes
    /// it, and 2 when it cuts through it.
    pub fn sphere_tangencies(&self, radius: f64) -> Vec<Point3> {
        let n = self.normal.as_ref();
        let o = self.origin.coords;

        // Reparameterize around the plane's closest point to the world
        // origin: d0 points from the anchor toward it, d1 is the in-plane
        // perpendicular. This keeps the quadratic well-conditioned when the
        // anchor sits far from the tangency points.
        let closest = n * n.dot(&o);
        let to_closest = closest - o;
        let d0 = try_direction(to_closest).unwrap_or_else(|_| self.t1());
        let d1 = Dir3::new_unchecked(n.cross(d0.as_ref()));
        let d0 = d0.into_inner();
        let d1 = d1.into_inner();

        let oc = o.dot(&o) - radius * radius;
        let d0_o = d0.dot(&o);
        let d1_o = d1.dot(&o);
        let d0_d1 = d0.dot(&d1);

        // Tangency condition: the line o + s*(d0 + alpha*d1) touches the
        // sphere when its quadratic in s has a double root. Expanding that
        // discriminant gives a quadratic in alpha.
        let a = d1_o * d1_o - d1.dot(&d1) * oc;
        let b = 2.0 * (d1_o * d0_o - d0_d1 * oc);
        let c = d0_o * d0_o - d0.dot(&d0) * oc;

        let alphas = match solve_quadratic(a, b, c) {
            QuadRoots::None => return Vec::new(),
            QuadRoots::One(x) => vec![x],
            QuadRoots::Two(x1, x2) => vec![x1, x2],
        };

        alphas
            .into_iter()
            .map(|alpha| {
                let dir = d0 + alpha * d1;
                // Closest approach of the tangent line to the world origin
                let s = -dir.dot(&o) / dir.dot(&dir);
                self.origin + s * dir
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_rejects_parallel_spans() {
        let err = Plane::new(
            Point3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(0.0, 2.0, 2.0),
        )
        .unwrap_err();
        assert_eq!(err, GeomError::DegeneratePlane);
    }

    #[test]
    fn test_new_rejects_zero_span() {
        let result = Plane::new(Point3::origin(), Vec3::zeros(), Vec3::y());
        assert!(result.is_err());
    }

    #[test]
    fn test_from_normal_rejects_zero() {
        let result = Plane::from_normal(Point3::origin(), Vec3::zeros());
        assert!(matches!(result, Err(GeomError::Math(_))));
    }

    #[test]
    fn test_from_normal_frame() {
        let plane = Plane::from_normal(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 2.0))
            .unwrap();
        assert_relative_eq!(plane.normal.z.abs(), 1.0, epsilon = 1e-12);
        let (t1, t2) = plane.tangents(0.0);
        assert!(t1.dot(plane.normal.as_ref()).abs() < 1e-12);
        assert!(t2.dot(plane.normal.as_ref()).abs() < 1e-12);
    }

    #[test]
    fn test_tangents_orthonormal_for_all_t() {
        let plane = Plane::new(
            Point3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0),
        )
        .unwrap();
        for t in [-2.0, -0.5, 0.0, 0.25, 0.5, 1.0, 3.0] {
            let (t1, t2) = plane.tangents(t);
            assert_relative_eq!(t1.as_ref().norm(), 1.0, epsilon = 1e-9);
            assert_relative_eq!(t2.as_ref().norm(), 1.0, epsilon = 1e-9);
            assert!(t1.dot(t2.as_ref()).abs() < 1e-9, "t = {t}");
            assert!(t1.dot(plane.normal.as_ref()).abs() < 1e-9);
            assert!(t2.dot(plane.normal.as_ref()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_tangents_t1_follows_span_a() {
        let plane = Plane::new(
            Point3::origin(),
            Vec3::new(0.0, 3.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        )
        .unwrap();
        let (t1, _) = plane.tangents(0.7);
        assert_relative_eq!(t1.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tangents_at_one_seeded_by_span_b() {
        // Spans already orthogonal: at t = 1, T2 is just span_b normalized
        let plane = Plane::new(
            Point3::origin(),
            Vec3::x(),
            Vec3::new(0.0, 5.0, 0.0),
        )
        .unwrap();
        let (_, t2) = plane.tangents(1.0);
        assert_relative_eq!(t2.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_tangents_idempotent() {
        let plane = Plane::new(
            Point3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0),
        )
        .unwrap();
        let first = plane.tangents(1.0);
        for _ in 0..100 {
            assert_eq!(plane.tangents(1.0), first);
        }
    }

    #[test]
    fn test_project_roundtrip() {
        let plane = Plane::xy();
        let uv = plane.project(&Point3::new(3.0, 4.0, 7.0));
        assert_relative_eq!(uv.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(uv.y, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_signed_distance() {
        let plane = Plane::xy();
        assert_relative_eq!(
            plane.signed_distance(&Point3::new(1.0, 2.0, 5.0)),
            5.0,
            epsilon = 1e-12
        );
        assert!(plane.signed_distance(&Point3::new(0.0, 0.0, -1.0)) < 0.0);
    }

    #[test]
    fn test_sphere_tangencies_grazing() {
        // Plane through (1,0,0) spanned by z/y touches the unit sphere at
        // exactly its closest point.
        let plane =
            Plane::new(Point3::new(1.0, 0.0, 0.0), Vec3::z(), Vec3::y()).unwrap();
        let points = plane.sphere_tangencies(1.0);
        assert_eq!(points.len(), 1);
        assert!(Tolerance::DEFAULT.points_equal(&points[0], &Point3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_sphere_tangencies_grazing_offset_anchor() {
        // Same plane, anchored away from the closest point
        let plane =
            Plane::new(Point3::new(1.0, 1.0, 0.0), Vec3::z(), Vec3::y()).unwrap();
        let points = plane.sphere_tangencies(1.0);
        assert_eq!(points.len(), 1);
        assert!(Tolerance::DEFAULT.points_equal(&points[0], &Point3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_sphere_tangencies_miss() {
        let plane =
            Plane::new(Point3::new(2.0, 0.0, 0.0), Vec3::z(), Vec3::y()).unwrap();
        assert!(plane.sphere_tangencies(1.0).is_empty());
    }

    #[test]
    fn test_sphere_tangencies_cutting() {
        let plane =
            Plane::new(Point3::new(0.98, 1.0, 0.0), Vec3::z(), Vec3::y()).unwrap();
        let points = plane.sphere_tangencies(1.0);
        assert_eq!(points.len(), 2);
        for p in &points {
            // Tangency points lie on the sphere and on the plane
            assert_relative_eq!(p.coords.norm(), 1.0, epsilon = 1e-6);
            assert!(plane.signed_distance(p).abs() < 1e-6);
        }
    }
}
