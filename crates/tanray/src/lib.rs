#![warn(missing_docs)]

//! tanray — small 3D geometry kernel
//!
//! Plane and ray primitives with pure, allocation-light queries: tangent
//! basis extraction, plane-sphere tangency, and closed-form ray-sphere /
//! ray-plane intersection. Degenerate input (zero vectors, parallel
//! spanning directions) is rejected at construction, so queries never
//! have to guard against it.
//!
//! # Example
//!
//! ```rust
//! use tanray::{Plane, Point3, Ray, Vec3};
//!
//! let plane = Plane::new(
//!     Point3::new(1.0, 0.0, 0.0),
//!     Vec3::new(0.0, 1.0, 1.0),
//!     Vec3::new(0.0, 0.0, 1.0),
//! )
//! .unwrap();
//! let (t1, t2) = plane.tangents(1.0);
//! assert!(t1.dot(t2.as_ref()).abs() < 1e-9);
//!
//! let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 1.0)).unwrap();
//! let hit = ray.intersects(1.0).unwrap();
//! assert!((hit.t - 1.0).abs() < 1e-9);
//! ```

pub use tanray_geom::{GeomError, Plane};
pub use tanray_math::{
    solve_quadratic, try_direction, Dir3, MathError, Point2, Point3, QuadRoots, Tolerance, Vec3,
};
pub use tanray_trace::{intersect, PlaneHit, Ray, SphereHit, TraceError};
