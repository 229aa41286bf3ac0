#![doc(
  html_playground_url = "https://play.rust-lang.org/",
  test(no_crate_inject, attr(deny(warnings)))
)]

//! Smooth 2D gradient noise, with aggressive memoization.
//!
//! Every integer lattice point gets a random unit gradient the first time a
//! sample touches it, and keeps that gradient for the life of the sampler.
//! Every exact coordinate that gets sampled also has its final value cached,
//! so hammering the same points is just a map lookup. Neither cache ever
//! evicts, so memory grows with the number of distinct cells and coordinates
//! visited.
//!
//! ```
//! use bb_noise::Perlin;
//!
//! let noise = Perlin::new();
//!
//! // The field is zero at every lattice point, and smooth in between.
//! assert_eq!(noise.sample(2.0, -3.0), 0.0);
//! let v = noise.sample(0.5, 0.5);
//! assert!(v > -1.0 && v < 1.0);
//! ```

#[macro_use]
extern crate log;

pub mod cache;
pub mod math;
pub mod perlin;
pub mod rng;

pub use cache::Cache;
pub use perlin::Perlin;
