use super::Point;
use std::ops::{Add, Div, Mul, Sub};

/// A vector in 2D space. This is used for the gradients pinned to the lattice,
/// and for the offset between a lattice point and a sampled coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
  pub x: f64,
  pub y: f64,
}

impl Vec2 {
  pub const fn new(x: f64, y: f64) -> Self { Vec2 { x, y } }

  /// Returns the unit vector at the given angle, in radians, measured
  /// counter-clockwise from the positive X axis.
  pub fn from_angle(angle: f64) -> Self { Vec2 { x: angle.cos(), y: angle.sin() } }

  /// Returns the dot product of the two vectors.
  pub fn dot(&self, other: Vec2) -> f64 { self.x * other.x + self.y * other.y }

  /// Returns the length of this vector, squared.
  pub fn len_squared(&self) -> f64 { self.x.powi(2) + self.y.powi(2) }

  /// Returns the length of this vector. If possible, prefer
  /// [`len_squared`](Self::len_squared).
  pub fn len(&self) -> f64 { self.len_squared().sqrt() }
}

impl From<Point> for Vec2 {
  fn from(p: Point) -> Vec2 { Vec2 { x: p.x, y: p.y } }
}

impl Add for Vec2 {
  type Output = Vec2;

  fn add(self, other: Vec2) -> Vec2 { Vec2 { x: self.x + other.x, y: self.y + other.y } }
}
impl Sub for Vec2 {
  type Output = Vec2;

  fn sub(self, other: Vec2) -> Vec2 { Vec2 { x: self.x - other.x, y: self.y - other.y } }
}

impl Mul<f64> for Vec2 {
  type Output = Vec2;

  fn mul(self, fac: f64) -> Vec2 { Vec2 { x: self.x * fac, y: self.y * fac } }
}
impl Div<f64> for Vec2 {
  type Output = Vec2;

  fn div(self, fac: f64) -> Vec2 { Vec2 { x: self.x / fac, y: self.y / fac } }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use std::f64::consts;

  fn assert_similar(actual: f64, expected: f64) {
    if (actual - expected).abs() > 1e-9 {
      panic!("expected: {expected}, got: {actual}");
    }
  }

  #[test]
  fn dot_products() {
    assert_eq!(Vec2::new(1.0, 0.0).dot(Vec2::new(0.0, 1.0)), 0.0);
    assert_eq!(Vec2::new(2.0, 3.0).dot(Vec2::new(4.0, 5.0)), 23.0);
    assert_eq!(Vec2::new(1.0, -1.0).dot(Vec2::new(1.0, 1.0)), 0.0);
  }

  #[test]
  fn angles_give_unit_vectors() {
    assert_eq!(Vec2::from_angle(0.0), Vec2::new(1.0, 0.0));
    let mut angle = 0.0;
    while angle < consts::TAU {
      let v = Vec2::from_angle(angle);
      assert_similar(v.len(), 1.0);
      assert_similar(v.len_squared(), 1.0);
      angle += 0.1;
    }
  }

  #[test]
  fn vec_math() {
    assert_eq!(Vec2::new(1.0, 2.0) + Vec2::new(3.0, 4.0), Vec2::new(4.0, 6.0));
    assert_eq!(Vec2::new(1.0, 2.0) - Vec2::new(3.0, 4.0), Vec2::new(-2.0, -2.0));
    assert_eq!(Vec2::new(1.0, 2.0) * 2.0, Vec2::new(2.0, 4.0));
    assert_eq!(Vec2::new(1.0, 2.0) / 2.0, Vec2::new(0.5, 1.0));
    assert_eq!(Vec2::from(Point::new(2.0, -7.0)), Vec2::new(2.0, -7.0));
  }
}
