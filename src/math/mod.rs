mod point;
mod vec;

pub use point::Point;
pub use vec::Vec2;

use std::hash::BuildHasher;
use wyhash::WyHash;

#[derive(Debug, Default, Clone)]
pub struct WyHashBuilder;

impl BuildHasher for WyHashBuilder {
  type Hasher = WyHash;

  fn build_hasher(&self) -> Self::Hasher {
    // Fixed random number. Cache keys are trusted here, so we don't care about
    // hash DOS.
    WyHash::with_seed(0x2c8a59f88245331d)
  }
}
