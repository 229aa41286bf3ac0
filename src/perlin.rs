use crate::{
  cache::Cache,
  math::{Point, Vec2},
  rng::WyhashRng,
};
use float_ord::FloatOrd;
use parking_lot::Mutex;
use rand::{rngs::OsRng, Rng, RngCore};
use std::f64::consts;

/// A 2D gradient noise sampler.
///
/// Every integer lattice point is assigned a random unit gradient the first
/// time a sample needs it. A sample takes the four corners of its unit cell,
/// dots each corner's gradient with the offset from that corner, and blends
/// the four results with an eased bilinear interpolation. That makes the field
/// exactly zero at every lattice point, smooth everywhere else, and keeps
/// every value within `[-1, 1]` (the true extremes are around ±0.71).
///
/// Both the gradients and the finished samples are memoized for the life of
/// the sampler, and never evicted. Samples are keyed by the exact coordinate,
/// so only bit-for-bit repeated queries hit the sample cache.
///
/// ```
/// use bb_noise::Perlin;
///
/// let noise = Perlin::new();
///
/// let v = noise.sample(1.2, 3.4);
/// // Sampling is memoized, so this is the exact same value.
/// assert_eq!(noise.sample(1.2, 3.4), v);
/// // The field is zero at every lattice point.
/// assert_eq!(noise.sample(-2.0, 7.0), 0.0);
/// ```
pub struct Perlin {
  // The gradient grid is owned by this cache's builder, since nothing else
  // needs to read it.
  values: Mutex<Cache<(FloatOrd<f64>, FloatOrd<f64>), f64>>,
}

impl Perlin {
  /// Creates a sampler with gradients drawn from OS entropy. The seed is
  /// logged at debug level, so a surprising field can be recreated with
  /// [`with_rng`](Self::with_rng).
  pub fn new() -> Self {
    let seed = OsRng.next_u64();
    debug!("seeding gradient lattice with {:#018x}", seed);
    Perlin::with_rng(WyhashRng::new(seed))
  }

  /// Creates a sampler that draws its gradient angles from the given rng.
  ///
  /// Gradients are generated lazily, in the order samples first touch them.
  /// Two samplers built from the same rng state will only produce the same
  /// field if they are also queried in the same order.
  pub fn with_rng<R: RngCore + Send + 'static>(mut rng: R) -> Self {
    let mut gradients: Cache<Point, Vec2> =
      Cache::new(move |_| Vec2::from_angle(rng.gen::<f64>() * consts::TAU));
    let values = Cache::new(move |(FloatOrd(x), FloatOrd(y)): (FloatOrd<f64>, FloatOrd<f64>)| {
      let cell = Point::containing(x, y);
      let x0y0 = gradient_dot(&mut gradients, x, y, cell);
      let x1y0 = gradient_dot(&mut gradients, x, y, cell + Point::new(1.0, 0.0));
      let x0y1 = gradient_dot(&mut gradients, x, y, cell + Point::new(0.0, 1.0));
      let x1y1 = gradient_dot(&mut gradients, x, y, cell + Point::new(1.0, 1.0));
      lerp2(ease(x - cell.x), ease(y - cell.y), x0y0, x1y0, x0y1, x1y1)
    });
    Perlin { values: Mutex::new(values) }
  }

  /// Returns the noise value at the given coordinate.
  ///
  /// The first call for a coordinate computes the value; every later call
  /// with the same coordinate returns the identical cached number.
  pub fn sample(&self, x: f64, y: f64) -> f64 {
    *self.values.lock().get((FloatOrd(x), FloatOrd(y)))
  }
}

impl Default for Perlin {
  fn default() -> Self { Perlin::new() }
}

// Looks up (or generates) the gradient for the given lattice point, and dots
// it with the offset from that point to the sampled coordinate.
fn gradient_dot(gradients: &mut Cache<Point, Vec2>, x: f64, y: f64, p: Point) -> f64 {
  let gradient = *gradients.get(p);
  let offset = Vec2::new(x, y) - p.into();
  offset.dot(gradient)
}

/// Cubic smoothstep. Maps `0..=1` onto `0..=1` with zero slope at both ends.
fn ease(t: f64) -> f64 { t * t * (3.0 - 2.0 * t) }

fn lerp2(delta_x: f64, delta_y: f64, x0y0: f64, x1y0: f64, x0y1: f64, x1y1: f64) -> f64 {
  lerp(delta_y, lerp(delta_x, x0y0, x1y0), lerp(delta_x, x0y1, x1y1))
}

fn lerp(delta: f64, start: f64, end: f64) -> f64 { start + delta * (end - start) }
