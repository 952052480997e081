/// Generate a tree layout and print every ornament at the size of an 800x1000 viewport.
/// An optional first argument seeds the generator.

use {
  ornament_layout::{
    geometry::{PixelSpace, Silhouette},
    ornament::OrnamentStore,
    solver::{check_layout, Sampler, SamplerConfig}
  },
  anyhow::{Context, Result},
  euclid::Size2D,
  rand::prelude::*
};

fn main() -> Result<()> {
  let seed = match std::env::args().nth(1) {
    Some(arg) => arg.parse::<u64>().context("seed must be an unsigned integer")?,
    None => 0
  };
  let mut rng = rand_pcg::Pcg64::seed_from_u64(seed);

  let sampler = Sampler::checked(Silhouette::tree(), SamplerConfig::default())?;
  let config = sampler.config();
  let placement = sampler.run(&mut rng);
  check_layout(sampler.region(), config.min_separation, &placement.ornaments)?;

  println!(
    "seed {}: {}/{} ornaments, {} attempts ({} outside, {} too close)",
    seed, placement.stats.accepted, config.target_count, placement.stats.attempts,
    placement.stats.rejected_outside, placement.stats.rejected_collision
  );

  let mut store = OrnamentStore::from(placement);
  store.update_text(0, "Merry Christmas");
  store.update_text(store.len() / 2, "Thanks for everything");

  let viewport = Size2D::<_, PixelSpace>::new(800.0, 1000.0);
  for ornament in store.iter() {
    let p = ornament.to_viewport(viewport);
    println!(
      "#{:<4} {} ({:6.2}, {:6.2}) -> ({:6.1}, {:6.1}) {}",
      ornament.id(), ornament.color(),
      ornament.position().x, ornament.position().y,
      p.x, p.y, ornament.text()
    );
  }
  Ok(())
}
