use {
  super::{BoundingBox, NormalizedSpace, Region, P2},
  crate::error::{ErrorKind, Result},
  anyhow::bail,
  euclid::{Box2D, Point2D},
  num_traits::Float
};

/// Triangular band of a silhouette.
///
/// Width grows linearly with the distance below `apex`: at height `y` the band spans
/// `w = (y - apex) / height * bottom_width`, and the horizontal bounds are
/// `[left_center - w / 2, right_center + w / 2]`. Only rows inside `[min_y, max_y]` belong
/// to the band; a row where the bounds cross is empty.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Band<T> {
  pub min_y: T,
  pub max_y: T,
  pub apex: T,
  pub height: T,
  pub bottom_width: T,
  pub left_center: T,
  pub right_center: T
}

impl <T: Float> Band<T> {
  pub fn validate(&self) -> Result<()> {
    let fields = [
      self.min_y, self.max_y, self.apex, self.height,
      self.bottom_width, self.left_center, self.right_center
    ];
    if !fields.iter().all(|v| v.is_finite()) {
      bail!(ErrorKind::InvalidConfig("band parameters must be finite".into()));
    }
    if self.min_y > self.max_y {
      bail!(ErrorKind::InvalidConfig("band y-range is inverted".into()));
    }
    if self.height <= T::zero() {
      bail!(ErrorKind::InvalidConfig("band height must be positive".into()));
    }
    Ok(())
  }

  /// Unclipped band width at height `y`.
  pub fn width_at(&self, y: T) -> T {
    (y - self.apex) / self.height * self.bottom_width
  }

  /// Horizontal bounds at height `y`, `None` outside of the band's y-range.
  pub fn bounds_at(&self, y: T) -> Option<(T, T)> {
    if y < self.min_y || y > self.max_y {
      return None;
    }
    let half = self.width_at(y) / (T::one() + T::one());
    Some((self.left_center - half, self.right_center + half))
  }
}

impl <T: Float> Region<T> for Band<T> {
  fn contains(&self, point: P2<T>) -> bool {
    self.bounds_at(point.y)
      .map_or(false, |(left, right)| left <= point.x && point.x <= right)
  }
}

impl <T: Float> BoundingBox<T, NormalizedSpace> for Band<T> {
  // bounds are linear in y, so the extremes sit on the first and last row
  fn bounding_box(&self) -> Box2D<T, NormalizedSpace> {
    let rows = [self.min_y, self.max_y];
    let (left, right) = rows.iter()
      .filter_map(|&y| self.bounds_at(y))
      .fold((T::infinity(), T::neg_infinity()), |(l, r), (left, right)|
        (l.min(left).min(right), r.max(left).max(right)));
    Box2D::new(
      Point2D::new(left, self.min_y),
      Point2D::new(right, self.max_y)
    )
  }
}
