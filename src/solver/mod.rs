//! Rejection sampling of ornament layouts.

use {
  crate::{
    error::{ErrorKind, Result},
    geometry::{NormalizedSpace, Region, P2},
    ornament::Ornament
  },
  anyhow::bail,
  euclid::Box2D,
  itertools::Itertools
};

pub mod collision;
pub use collision::{CollisionIndex, GridIndex, LinearIndex};
pub mod sampler;
pub use sampler::{generate, Placement, Sampler, SamplerIter, SamplerStats};

/// Source of uniform values in `[0, 1)`.
pub trait UniformSource {
  fn next_uniform(&mut self) -> f64;
}

impl <R: rand::Rng + ?Sized> UniformSource for R {
  fn next_uniform(&mut self) -> f64 {
    self.gen::<f64>()
  }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SamplerConfig {
  /// Number of ornaments to aim for; reaching it is not guaranteed.
  pub target_count: usize,
  /// Candidate draws allowed before generation stops.
  pub max_attempts: u64,
  pub min_separation: f64,
  /// Rectangle candidates are drawn from, uniformly.
  pub candidates: Box2D<f64, NormalizedSpace>
}

impl Default for SamplerConfig {
  fn default() -> Self {
    SamplerConfig {
      target_count: 250,
      max_attempts: 800,
      min_separation: 2.3,
      candidates: Box2D::new(P2::new(2.0, 16.0), P2::new(92.0, 77.0))
    }}}

impl SamplerConfig {
  pub fn with_target_count(self, target_count: usize) -> Self {
    Self { target_count, ..self }
  }

  pub fn with_max_attempts(self, max_attempts: u64) -> Self {
    Self { max_attempts, ..self }
  }

  pub fn with_min_separation(self, min_separation: f64) -> Self {
    Self { min_separation, ..self }
  }

  pub fn with_candidates(self, candidates: Box2D<f64, NormalizedSpace>) -> Self {
    Self { candidates, ..self }
  }

  pub fn validate(&self) -> Result<()> {
    if !self.min_separation.is_finite() || self.min_separation <= 0.0 {
      bail!(ErrorKind::InvalidConfig(format!(
        "minimum separation must be positive, got {}", self.min_separation)));
    }
    let corners = [self.candidates.min, self.candidates.max];
    if !corners.iter().all(|p| p.x.is_finite() && p.y.is_finite()) {
      bail!(ErrorKind::InvalidConfig("candidate area must be finite".into()));
    }
    if self.candidates.is_empty() {
      bail!(ErrorKind::InvalidConfig(format!(
        "candidate area {:?} is empty", self.candidates)));
    }
    Ok(())
  }
}

/// Re-check the invariants of a layout: dense ids in insertion order, containment, and
/// pairwise separation. Reports the first violation found.
pub fn check_layout<R>(region: &R, min_separation: f64, ornaments: &[Ornament]) -> Result<()>
  where R: Region<f64> + ?Sized {
  for (index, ornament) in ornaments.iter().enumerate() {
    if ornament.id() != index {
      bail!(ErrorKind::LayoutViolation(format!(
        "ornament at index {} has id {}", index, ornament.id())));
    }
    if !region.contains(ornament.position()) {
      bail!(ErrorKind::LayoutViolation(format!(
        "ornament {} at {:?} lies outside the silhouette", index, ornament.position())));
    }
  }
  let crowded = ornaments.iter()
    .tuple_combinations::<(_, _)>()
    .find(|(a, b)| a.position().distance_to(b.position()) < min_separation);
  if let Some((a, b)) = crowded {
    bail!(ErrorKind::LayoutViolation(format!(
      "ornaments {} and {} are {} apart", a.id(), b.id(),
      a.position().distance_to(b.position()))));
  }
  Ok(())
}
