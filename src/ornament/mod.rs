//! Placed ornaments and the label store.

use {
  crate::geometry::{self, PixelSpace, P2},
  euclid::{Point2D, Size2D}
};

pub mod palette;
pub use palette::*;
pub mod store;
pub use store::*;

/// A placed, labelable point of a layout.
///
/// `id`, `position` and `color` are fixed at creation; only the text changes, and only by
/// producing a new ornament.
#[derive(Debug, Clone, PartialEq)]
pub struct Ornament {
  id: usize,
  position: P2,
  color: Color,
  text: String
}

impl Ornament {
  pub(crate) fn new(id: usize, position: P2, color: Color) -> Self {
    Self { id, position, color, text: String::new() }
  }

  /// Insertion sequence number, dense from 0.
  pub fn id(&self) -> usize { self.id }
  pub fn position(&self) -> P2 { self.position }
  pub fn color(&self) -> Color { self.color }
  pub fn text(&self) -> &str { &self.text }

  pub fn with_text(&self, text: impl Into<String>) -> Self {
    Self { text: text.into(), ..self.clone() }
  }

  pub fn to_viewport(&self, viewport: Size2D<f64, PixelSpace>) -> Point2D<f64, PixelSpace> {
    geometry::to_viewport(self.position, viewport)
  }
}
