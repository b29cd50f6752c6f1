use crate::*;

/// Implemented by anything that can report the bounds it occupies on each of its dimensions.
///
/// This crate knows nothing about the objects that produce extents, downstream geometry types
/// implement this to take part in the extent operations.
pub trait HasExtent<T = f64> {
  fn extent(&self) -> Extent<T>;
}

impl<T: Clone> HasExtent<T> for Extent<T> {
  fn extent(&self) -> Extent<T> {
    self.clone()
  }
}

impl<T, X: HasExtent<T> + ?Sized> HasExtent<T> for &X {
  fn extent(&self) -> Extent<T> {
    (**self).extent()
  }
}

pub fn extent<T, X: HasExtent<T> + ?Sized>(x: &X) -> Extent<T> {
  x.extent()
}

/// Shorthand for [`intersects`] between any two extent providers.
pub fn extents_intersect<T, A, B>(a: &A, b: &B, strict: impl Into<DimensionMatch>) -> bool
where
  T: PartialOrd + Copy,
  A: HasExtent<T> + ?Sized,
  B: HasExtent<T> + ?Sized,
{
  intersects(&a.extent(), &b.extent(), strict)
}
