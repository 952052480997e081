//! .
//!
//! The origin of coordinate system is in top-left corner, `y` grows downwards. Layouts live in
//! a normalized plane where both axes span roughly `[0, 100]`, so that a consumer can map them
//! onto any viewport with [`to_viewport`].

use euclid::{Box2D, Point2D, Size2D};

pub mod band;
pub use band::*;
pub mod silhouette;
pub use silhouette::*;
#[cfg(test)] mod tests;

/// Normalized coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct NormalizedSpace;
/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

/// Extent of both axes of [`NormalizedSpace`].
pub const EXTENT: f64 = 100.0;

pub type P2<T = f64> = Point2D<T, NormalizedSpace>;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Pure containment predicate over the normalized plane.
pub trait Region<T> {
  fn contains(&self, point: P2<T>) -> bool;
}

impl <T, R> Region<T> for &R where R: Region<T> + ?Sized {
  fn contains(&self, point: P2<T>) -> bool {
    (**self).contains(point)
  }
}

/// Map a normalized point onto a viewport, treating each coordinate as a percentage of the
/// corresponding viewport side.
pub fn to_viewport(
  point: P2,
  viewport: Size2D<f64, PixelSpace>
) -> Point2D<f64, PixelSpace> {
  (point.to_vector()
    .cast_unit::<PixelSpace>()
    .component_mul(viewport.to_vector()) / EXTENT)
    .to_point()
}
