use rand_core::{impls, Error, RngCore};
use wyhash::wyrng;

/// A small, fast rng, backed by the `wyrng` step from the `wyhash` crate.
/// This is not cryptographically secure. Given the same seed, it always
/// produces the same stream, which is all the gradient table needs.
#[derive(Debug, Clone)]
pub struct WyhashRng {
  seed: u64,
}

impl WyhashRng {
  pub fn new(seed: u64) -> Self { WyhashRng { seed } }
}

impl RngCore for WyhashRng {
  fn next_u64(&mut self) -> u64 { wyrng(&mut self.seed) }
  fn next_u32(&mut self) -> u32 { self.next_u64() as u32 }
  fn fill_bytes(&mut self, dest: &mut [u8]) { impls::fill_bytes_via_next(self, dest) }
  fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
    self.fill_bytes(dest);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::{assert_eq, assert_ne};

  #[test]
  fn same_seed_same_stream() {
    let mut a = WyhashRng::new(42);
    let mut b = WyhashRng::new(42);
    for _ in 0..8 {
      assert_eq!(a.next_u64(), b.next_u64());
    }
  }

  #[test]
  fn seeds_change_the_stream() {
    let mut a = WyhashRng::new(1);
    let mut b = WyhashRng::new(2);
    let a_vals: Vec<u64> = (0..4).map(|_| a.next_u64()).collect();
    let b_vals: Vec<u64> = (0..4).map(|_| b.next_u64()).collect();
    assert_ne!(a_vals, b_vals);
  }

  #[test]
  fn fill_bytes_fills() {
    let mut rng = WyhashRng::new(12345);
    let mut buf = [0; 32];
    rng.fill_bytes(&mut buf);
    assert_ne!(buf, [0; 32]);
  }
}
