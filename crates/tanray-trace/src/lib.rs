#![warn(missing_docs)]

//! Ray primitive and intersection queries for the tanray geometry kernel.
//!
//! A [`Ray`] is an origin plus a unit direction; construction rejects
//! near-zero direction vectors so intersection math is never
//! scale-dependent. All queries are pure: a ray never changes after
//! construction, and repeated calls with the same arguments return the
//! same result.
//!
//! - [`Ray`] - ray representation with origin and direction
//! - [`intersect`] - closed-form ray-surface intersection algorithms

mod ray;
pub mod intersect;

pub use intersect::{PlaneHit, SphereHit};
pub use ray::Ray;

use thiserror::Error;

/// Errors raised when constructing a ray.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TraceError {
    /// The direction vector has near-zero length.
    #[error("degenerate ray: direction length {0} is below tolerance")]
    DegenerateRay(f64),
}
