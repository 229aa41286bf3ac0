use float_ord::FloatOrd;
use std::{
  fmt,
  hash::{Hash, Hasher},
  ops::{Add, AddAssign, Sub, SubAssign},
};

/// A point on the integer lattice. Every point that a sample touches gets a
/// gradient assigned to it, which stays fixed for the life of the sampler.
///
/// The coordinates are always whole numbers, but they are stored as `f64`:
/// `f64::floor` is exact for every finite input, so this covers the entire
/// finite coordinate line, where an integer field would overflow past its
/// own range. Equality and hashing go through [`FloatOrd`], bit for bit.
#[derive(Debug, Clone, Copy)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

impl fmt::Display for Point {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Point({} {})", self.x, self.y)
  }
}

impl PartialEq for Point {
  fn eq(&self, other: &Self) -> bool {
    FloatOrd(self.x) == FloatOrd(other.x) && FloatOrd(self.y) == FloatOrd(other.y)
  }
}
impl Eq for Point {}

impl Hash for Point {
  fn hash<H: Hasher>(&self, state: &mut H) {
    FloatOrd(self.x).hash(state);
    FloatOrd(self.y).hash(state);
  }
}

impl Point {
  /// Creates a new lattice point. The caller is expected to pass whole
  /// numbers.
  pub const fn new(x: f64, y: f64) -> Self {
    Point { x, y }
  }
  /// Returns the minimum corner of the unit cell containing the given
  /// coordinate. This rounds towards negative infinity, so `(-0.3, 0.3)` is in
  /// the cell at `(-1, 0)`.
  pub fn containing(x: f64, y: f64) -> Self {
    Point { x: x.floor(), y: y.floor() }
  }
}

impl Add for Point {
  type Output = Self;
  fn add(self, other: Self) -> Self {
    Self { x: self.x + other.x, y: self.y + other.y }
  }
}

impl AddAssign for Point {
  fn add_assign(&mut self, other: Self) {
    self.x += other.x;
    self.y += other.y;
  }
}

impl Sub for Point {
  type Output = Self;
  fn sub(self, other: Self) -> Self {
    Self { x: self.x - other.x, y: self.y - other.y }
  }
}

impl SubAssign for Point {
  fn sub_assign(&mut self, other: Self) {
    self.x -= other.x;
    self.y -= other.y;
  }
}
