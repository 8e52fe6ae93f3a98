#![warn(missing_docs)]

//! Math types for the tanray geometry kernel.
//!
//! Thin wrappers around nalgebra providing the shared vocabulary for the
//! plane and ray crates: points, vectors, unit directions, tolerance
//! constants, and the quadratic solver both primitives lean on.

use nalgebra::{Unit, Vector3};
use thiserror::Error;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A point in 2D parameter space.
pub type Point2 = nalgebra::Point2<f64>;

/// Errors raised by scalar and vector utilities.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// A vector with near-zero length was passed where a direction is needed.
    #[error("degenerate vector: length {0} is below tolerance")]
    DegenerateVector(f64),
}

/// Normalize `v` into a unit direction.
///
/// Fails with [`MathError::DegenerateVector`] when the length of `v` is
/// below the linear tolerance, so callers never divide by ~0.
pub fn try_direction(v: Vec3) -> Result<Dir3, MathError> {
    Dir3::try_new(v, Tolerance::DEFAULT.linear).ok_or_else(|| MathError::DegenerateVector(v.norm()))
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance.
    pub linear: f64,
    /// Angular tolerance in radians.
    pub angular: f64,
}

impl Tolerance {
    /// Default kernel tolerances (1e-9 linear, 1e-9 rad angular).
    pub const DEFAULT: Self = Self {
        linear: 1e-9,
        angular: 1e-9,
    };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Real roots of `a*x^2 + b*x + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadRoots {
    /// No real solution.
    None,
    /// A single root: linear equation, or a double root (tangency).
    One(f64),
    /// Two distinct roots, sorted ascending.
    Two(f64, f64),
}

/// Solve `a*x^2 + b*x + c = 0` over the reals.
///
/// A double root (discriminant within tolerance of zero) is collapsed to
/// [`QuadRoots::One`]. Degenerate coefficients fall through to the linear
/// and constant cases rather than producing NaN.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> QuadRoots {
    let tol = Tolerance::DEFAULT.linear;

    if a.abs() < tol {
        // Linear: b*x + c = 0
        if b.abs() < tol {
            // Constant: only the trivial equation has solutions
            return if c.abs() < tol {
                QuadRoots::One(0.0)
            } else {
                QuadRoots::None
            };
        }
        return QuadRoots::One(-c / b);
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < -tol {
        return QuadRoots::None;
    }
    if discriminant < tol {
        return QuadRoots::One(-b / (2.0 * a));
    }

    let sqrt_disc = discriminant.sqrt();
    let x1 = (-b - sqrt_disc) / (2.0 * a);
    let x2 = (-b + sqrt_disc) / (2.0 * a);
    if x1 <= x2 {
        QuadRoots::Two(x1, x2)
    } else {
        QuadRoots::Two(x2, x1)
    }
}
