use {
  super::{CollisionIndex, LinearIndex, SamplerConfig, UniformSource},
  crate::{
    error::Result,
    geometry::{Region, Silhouette, P2},
    ornament::{Color, Ornament}
  },
  log::{debug, trace},
  std::iter::FusedIterator
};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SamplerStats {
  pub attempts: u64,
  pub accepted: usize,
  pub rejected_outside: u64,
  pub rejected_collision: u64
}

/// Finished layout. Holding fewer ornaments than the target is a normal outcome.
#[derive(Debug, Clone)]
pub struct Placement {
  pub ornaments: Vec<Ornament>,
  pub stats: SamplerStats,
  pub target_count: usize
}

impl Placement {
  pub fn is_complete(&self) -> bool {
    self.ornaments.len() >= self.target_count
  }
}

/// Rejection sampler: candidates are drawn uniformly from the configured rectangle, and kept
/// when they fall inside the region and far enough from every ornament placed so far.
#[derive(Debug, Clone)]
pub struct Sampler<R> {
  region: R,
  config: SamplerConfig
}

impl <R: Region<f64>> Sampler<R> {
  pub fn new(region: R, config: SamplerConfig) -> Self {
    Self { region, config }
  }

  /// Same as [`new`](Self::new), rejecting a malformed configuration.
  pub fn checked(region: R, config: SamplerConfig) -> Result<Self> {
    config.validate()?;
    Ok(Self::new(region, config))
  }

  pub fn region(&self) -> &R {
    &self.region
  }

  pub fn config(&self) -> &SamplerConfig {
    &self.config
  }

  /// Lazily yields accepted ornaments, using a [`LinearIndex`].
  pub fn iter<'a, U>(&'a self, rng: &'a mut U) -> SamplerIter<'a, R, U, LinearIndex>
    where U: UniformSource + ?Sized {
    self.iter_with_index(rng)
  }

  pub fn iter_with_index<'a, I, U>(&'a self, rng: &'a mut U) -> SamplerIter<'a, R, U, I>
    where I: CollisionIndex,
          U: UniformSource + ?Sized {
    SamplerIter {
      region: &self.region,
      config: &self.config,
      rng,
      index: I::with_separation(self.config.min_separation),
      stats: SamplerStats::default()
    }
  }

  pub fn run<U>(&self, rng: &mut U) -> Placement
    where U: UniformSource + ?Sized {
    self.run_with_index::<LinearIndex, U>(rng)
  }

  /// Run to completion: stops at the target count or when the attempt budget is spent,
  /// whichever comes first.
  pub fn run_with_index<I, U>(&self, rng: &mut U) -> Placement
    where I: CollisionIndex,
          U: UniformSource + ?Sized {
    let mut iter = self.iter_with_index::<I, U>(rng);
    let ornaments: Vec<_> = iter.by_ref().collect();
    let stats = iter.stats();

    debug!(
      "placed {}/{} ornaments in {} attempts ({} outside, {} too close)",
      stats.accepted, self.config.target_count, stats.attempts,
      stats.rejected_outside, stats.rejected_collision
    );
    if ornaments.len() < self.config.target_count {
      debug!("attempt budget of {} spent before reaching the target", self.config.max_attempts);
    }
    Placement { ornaments, stats, target_count: self.config.target_count }
  }

  pub fn generate<U>(&self, rng: &mut U) -> Vec<Ornament>
    where U: UniformSource + ?Sized {
    self.run(rng).ornaments
  }
}

/// Generate a layout inside the tree silhouette with the reference candidate area and
/// separation.
pub fn generate<U>(target_count: usize, max_attempts: u64, rng: &mut U) -> Vec<Ornament>
  where U: UniformSource + ?Sized {
  let config = SamplerConfig::default()
    .with_target_count(target_count)
    .with_max_attempts(max_attempts);
  Sampler::new(Silhouette::tree(), config).generate(rng)
}

pub struct SamplerIter<'a, R, U: ?Sized, I> {
  region: &'a R,
  config: &'a SamplerConfig,
  rng: &'a mut U,
  index: I,
  stats: SamplerStats
}

impl <'a, R, U, I> SamplerIter<'a, R, U, I>
  where R: Region<f64>,
        U: UniformSource + ?Sized,
        I: CollisionIndex {
  pub fn stats(&self) -> SamplerStats {
    self.stats
  }

  pub fn index(&self) -> &I {
    &self.index
  }

  fn draw_candidate(&mut self) -> P2 {
    let area = self.config.candidates;
    let x = area.min.x + self.rng.next_uniform() * area.width();
    let y = area.min.y + self.rng.next_uniform() * area.height();
    P2::new(x, y)
  }
}

impl <'a, R, U, I> Iterator for SamplerIter<'a, R, U, I>
  where R: Region<f64>,
        U: UniformSource + ?Sized,
        I: CollisionIndex {
  type Item = Ornament;

  fn next(&mut self) -> Option<Ornament> {
    while self.stats.accepted < self.config.target_count
      && self.stats.attempts < self.config.max_attempts {
      self.stats.attempts += 1;
      let point = self.draw_candidate();

      if !self.region.contains(point) {
        self.stats.rejected_outside += 1;
        continue;
      }
      if self.index.too_close(point) {
        self.stats.rejected_collision += 1;
        continue;
      }

      let color = Color::from_uniform(self.rng.next_uniform());
      let ornament = Ornament::new(self.stats.accepted, point, color);
      self.index.insert(point);
      self.stats.accepted += 1;
      trace!("#{} accepted at {:?} after {} attempts", ornament.id(), point, self.stats.attempts);
      return Some(ornament);
    }
    None
  }
}

impl <'a, R, U, I> FusedIterator for SamplerIter<'a, R, U, I>
  where R: Region<f64>,
        U: UniformSource + ?Sized,
        I: CollisionIndex {}
