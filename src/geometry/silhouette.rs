use {
  super::{Band, BoundingBox, NormalizedSpace, Region, P2},
  crate::error::{ErrorKind, Result},
  anyhow::bail,
  euclid::{Box2D, Point2D},
  num_traits::Float
};

/// Bands of the tree silhouette, top to bottom.
///
/// The middle and bottom apexes (27, 45) sit below the first row of their band, so those
/// bands are empty until their apex row.
pub const TREE_BANDS: [Band<f64>; 3] = [
  Band {
    min_y: 19.0, max_y: 40.0, apex: 14.0, height: 31.0,
    bottom_width: 53.0, left_center: 51.0, right_center: 47.0
  },
  Band {
    min_y: 23.0, max_y: 57.0, apex: 27.0, height: 35.0,
    bottom_width: 75.0, left_center: 52.0, right_center: 48.0
  },
  Band {
    min_y: 29.0, max_y: 88.0, apex: 45.0, height: 43.0,
    bottom_width: 103.0, left_center: 50.0, right_center: 50.0
  },
];

/// Union of overlapping bands. A point is inside if any band contains it.
#[derive(Debug, Clone, PartialEq)]
pub struct Silhouette<T> {
  bands: Vec<Band<T>>
}

impl Silhouette<f64> {
  pub fn tree() -> Self {
    Self { bands: TREE_BANDS.to_vec() }
  }
}

impl Default for Silhouette<f64> {
  fn default() -> Self {
    Self::tree()
  }
}

impl <T: Float> Silhouette<T> {
  pub fn new(bands: Vec<Band<T>>) -> Result<Self> {
    if bands.is_empty() {
      bail!(ErrorKind::InvalidConfig("silhouette needs at least one band".into()));
    }
    for band in &bands {
      band.validate()?;
    }
    Ok(Self { bands })
  }

  pub fn bands(&self) -> &[Band<T>] {
    &self.bands
  }
}

impl <T: Float> Region<T> for Silhouette<T> {
  fn contains(&self, point: P2<T>) -> bool {
    self.bands.iter().any(|band| band.contains(point))
  }
}

impl <T: Float> BoundingBox<T, NormalizedSpace> for Silhouette<T> {
  fn bounding_box(&self) -> Box2D<T, NormalizedSpace> {
    self.bands.iter()
      .map(|band| band.bounding_box())
      .reduce(|a, b| a.union(&b))
      .unwrap_or_else(|| Box2D::new(Point2D::origin(), Point2D::origin()))
  }
}
