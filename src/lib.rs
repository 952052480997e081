//! This is a library for laying out ornaments on a tree silhouette.
//!
//! It is split into three modules: [`geometry`] answers whether a point of the normalized
//! `[0, 100]²` plane lies inside the silhouette, [`solver`] fills the silhouette with
//! non-overlapping points by rejection sampling, and [`ornament`] holds the result and its
//! labels. Rendering is left to the consumer; positions map onto any viewport with
//! [`Ornament::to_viewport`](ornament::Ornament::to_viewport).
//!
//! # Basic usage
//! ```
//! # use {
//! #   ornament_layout::{
//! #     error::Result,
//! #     geometry::Silhouette,
//! #     ornament::OrnamentStore,
//! #     solver::{check_layout, Sampler, SamplerConfig},
//! #   },
//! #   rand::SeedableRng,
//! # };
//! # fn main() -> Result<()> {
//! let config = SamplerConfig::default(); // 250 ornaments, 800 attempts, 2.3 apart
//! let sampler = Sampler::checked(Silhouette::tree(), config)?;
//!
//! // Any `rand::Rng` can drive the sampler; seeding it makes the layout reproducible.
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
//! let placement = sampler.run(&mut rng);
//!
//! // Running out of attempts before the target is not an error, the layout is just smaller.
//! assert!(placement.ornaments.len() <= config.target_count);
//! check_layout(sampler.region(), config.min_separation, &placement.ornaments)?;
//!
//! let mut store = OrnamentStore::from(placement);
//! store.update_text(0, "Merry Christmas");
//! assert_eq!(store.get(0).map(|o| o.text()), Some("Merry Christmas"));
//! # Ok(())
//! # }
//! ```
//!
//! # Collision backends
//! The sampler checks separation through a [`CollisionIndex`](solver::CollisionIndex).
//! [`LinearIndex`](solver::LinearIndex) scans every placed point and is plenty for a few
//! hundred ornaments; [`GridIndex`](solver::GridIndex) buckets points into cells as wide as
//! the separation and yields the same layouts:
//! ```
//! # use {
//! #   ornament_layout::{geometry::Silhouette, solver::{GridIndex, Sampler, SamplerConfig}},
//! #   rand::SeedableRng,
//! # };
//! let sampler = Sampler::new(Silhouette::tree(), SamplerConfig::default().with_target_count(50));
//! let placement = sampler.run_with_index::<GridIndex, _>(&mut rand_pcg::Pcg64::seed_from_u64(1));
//! assert!(placement.ornaments.len() <= 50);
//! ```

pub mod error;
pub mod geometry;
pub mod solver;
pub mod ornament;
