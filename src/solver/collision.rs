use {
  crate::geometry::P2,
  itertools::iproduct,
  std::collections::HashMap
};

/// Set of accepted points, queried for minimum separation.
pub trait CollisionIndex {
  fn with_separation(min_separation: f64) -> Self where Self: Sized;
  fn separation(&self) -> f64;
  /// True iff some registered point lies *strictly* closer than the separation.
  fn too_close(&self, point: P2) -> bool;
  fn insert(&mut self, point: P2);
  fn len(&self) -> usize;
  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// Linear scan over every registered point.
#[derive(Debug, Clone)]
pub struct LinearIndex {
  separation: f64,
  points: Vec<P2>
}

impl CollisionIndex for LinearIndex {
  fn with_separation(min_separation: f64) -> Self {
    Self { separation: min_separation, points: vec![] }
  }

  fn separation(&self) -> f64 {
    self.separation
  }

  fn too_close(&self, point: P2) -> bool {
    self.points.iter()
      .any(|p| p.distance_to(point) < self.separation)
  }

  fn insert(&mut self, point: P2) {
    self.points.push(point);
  }

  fn len(&self) -> usize {
    self.points.len()
  }
}

/// Uniform hash grid with cells as wide as the separation, so any conflicting point lies in
/// the 3×3 neighbourhood of the query cell.
#[derive(Debug, Clone)]
pub struct GridIndex {
  separation: f64,
  cells: HashMap<(i64, i64), Vec<P2>>,
  len: usize
}

impl GridIndex {
  fn cell(&self, point: P2) -> (i64, i64) {
    (
      (point.x / self.separation).floor() as i64,
      (point.y / self.separation).floor() as i64
    )
  }
}

impl CollisionIndex for GridIndex {
  fn with_separation(min_separation: f64) -> Self {
    Self { separation: min_separation, cells: HashMap::new(), len: 0 }
  }

  fn separation(&self) -> f64 {
    self.separation
  }

  fn too_close(&self, point: P2) -> bool {
    let (cx, cy) = self.cell(point);
    iproduct!(-1..=1, -1..=1)
      .filter_map(|(dx, dy)| self.cells.get(&(cx + dx, cy + dy)))
      .flatten()
      .any(|p| p.distance_to(point) < self.separation)
  }

  fn insert(&mut self, point: P2) {
    let cell = self.cell(point);
    self.cells.entry(cell).or_default().push(point);
    self.len += 1;
  }

  fn len(&self) -> usize {
    self.len
  }
}
