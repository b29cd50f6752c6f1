use std::{
  cmp::Ordering,
  fmt,
  ops::{Add, Sub},
};

use facet::Facet;
use serde::*;

/// The closed range `[min, max]` an extent spans on a single dimension.
///
/// `min <= max` is expected but not enforced, an inverted pair simply never overlaps anything.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq, Facet)]
pub struct Bounds<T> {
  pub min: T,
  pub max: T,
}

impl<T> Bounds<T> {
  pub fn new(min: T, max: T) -> Self {
    Self { min, max }
  }
}

fn is_unordered<T: PartialOrd>(v: &T) -> bool {
  v.partial_cmp(v).is_none()
}

// an unordered value (NaN) loses to an ordered one whichever side it is on
#[inline(always)]
fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
  match a.partial_cmp(&b) {
    Some(Ordering::Greater) => b,
    Some(_) => a,
    None if is_unordered(&a) => b,
    None => a,
  }
}

#[inline(always)]
fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
  match a.partial_cmp(&b) {
    Some(Ordering::Less) => b,
    Some(_) => a,
    None if is_unordered(&a) => b,
    None => a,
  }
}

impl<T: PartialOrd + Copy> Bounds<T> {
  /// false for inverted ranges and for ranges with an unordered end
  pub fn is_valid(&self) -> bool {
    self.min <= self.max
  }

  /// Return the shared sub range, or None if the ranges are apart. Touching ends count as a
  /// single point overlap.
  ///
  /// This is the only overlap rule in the crate: both the constructive and the predicate
  /// operations on extents go through it so they can not disagree.
  #[inline]
  pub fn intersect(&self, other: &Self) -> Option<Self> {
    if !self.is_valid() || !other.is_valid() {
      return None;
    }
    let shared = Self::new(
      partial_max(self.min, other.min),
      partial_min(self.max, other.max),
    );
    shared.is_valid().then_some(shared)
  }

  #[inline]
  pub fn overlaps(&self, other: &Self) -> bool {
    self.intersect(other).is_some()
  }

  /// the smallest range enclosing both
  #[inline]
  pub fn union(&self, other: &Self) -> Self {
    Self::new(
      partial_min(self.min, other.min),
      partial_max(self.max, other.max),
    )
  }

  /// true if other lies inside self, ends included
  #[inline]
  pub fn covers(&self, other: &Self) -> bool {
    self.min <= other.min && other.max <= self.max
  }
}

impl<T> Bounds<T>
where
  T: Copy + Add<Output = T> + Sub<Output = T>,
{
  /// grow both ends by `amount`, a negative amount shrinks the range
  pub fn expand(&self, amount: T) -> Self {
    Self::new(self.min - amount, self.max + amount)
  }
}

impl<T> From<(T, T)> for Bounds<T> {
  fn from((min, max): (T, T)) -> Self {
    Self::new(min, max)
  }
}

impl<T> From<Bounds<T>> for (T, T) {
  fn from(b: Bounds<T>) -> Self {
    (b.min, b.max)
  }
}

impl<T> From<[T; 2]> for Bounds<T> {
  fn from([min, max]: [T; 2]) -> Self {
    Self::new(min, max)
  }
}

// serialized as a plain pair so an extent reads like `{"X": [1.0, 2.0]}`
impl<T: Serialize> Serialize for Bounds<T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    (&self.min, &self.max).serialize(serializer)
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Bounds<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let (min, max) = <(T, T)>::deserialize(deserializer)?;
    Ok(Self::new(min, max))
  }
}

impl<T: fmt::Debug> fmt::Display for Bounds<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "({:?}, {:?})", self.min, self.max)
  }
}
