use std::{
  borrow::Borrow,
  ops::{Add, Sub},
};

use crate::*;

/// How dimensions present in only one of two extents are handled.
///
/// Converts from `bool`, `true` being [`DimensionMatch::Strict`], so the operations read either
/// as `intersect(&a, &b, true)` or `intersect(&a, &b, DimensionMatch::Strict)`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum DimensionMatch {
  /// dimensions missing on one side are ignored
  #[default]
  Shared,
  /// any dimension missing on one side voids the result
  Strict,
}

impl DimensionMatch {
  pub fn is_strict(self) -> bool {
    matches!(self, Self::Strict)
  }

  /// false if the strict rule rejects this pair outright
  fn accepts<T>(self, a: &Extent<T>, b: &Extent<T>) -> bool {
    !self.is_strict() || a.same_dimensions(b)
  }
}

impl From<bool> for DimensionMatch {
  fn from(strict: bool) -> Self {
    if strict {
      Self::Strict
    } else {
      Self::Shared
    }
  }
}

/// Visit every dimension of `a` that `b` also has, in `a`'s order. Returns false without
/// visiting the rest as soon as `f` does, and also if no dimension is shared at all.
fn all_shared<T>(
  a: &Extent<T>,
  b: &Extent<T>,
  mut f: impl FnMut(&DimName, &Bounds<T>, &Bounds<T>) -> bool,
) -> bool {
  let mut any_shared = false;
  for (name, a_bounds) in a.iter() {
    if let Some(b_bounds) = b.get(name) {
      if !f(name, a_bounds, b_bounds) {
        return false;
      }
      any_shared = true;
    }
  }
  any_shared
}

/// The region both extents cover, over the dimensions they share.
///
/// Returns None if any shared dimension does not overlap, if the extents share no dimension, or
/// in strict mode if either side has a dimension the other lacks. Touching ends overlap, giving a
/// zero length range on that dimension. The result keeps `a`'s dimension order.
pub fn intersect<T: PartialOrd + Copy>(
  a: &Extent<T>,
  b: &Extent<T>,
  strict: impl Into<DimensionMatch>,
) -> Option<Extent<T>> {
  let strict: DimensionMatch = strict.into();
  if !strict.accepts(a, b) {
    return None;
  }

  let mut dimensions = DimensionStorage::new();
  let all_overlap = all_shared(a, b, |name, a_bounds, b_bounds| {
    match a_bounds.intersect(b_bounds) {
      Some(shared) => {
        dimensions.push((name.clone(), shared));
        true
      }
      None => false,
    }
  });

  all_overlap.then(|| Extent::from_unique(dimensions))
}

/// The smallest extent enclosing both.
///
/// Shared dimensions are widened to span both sides. Dimensions found on one side only are copied
/// as they are, unless strict mode is on, in which case their presence returns None. Strict mode
/// also returns None when no dimension is shared at all. The result lists `a`'s dimensions first,
/// then those only `b` has.
pub fn union<T: PartialOrd + Copy>(
  a: &Extent<T>,
  b: &Extent<T>,
  strict: impl Into<DimensionMatch>,
) -> Option<Extent<T>> {
  let strict: DimensionMatch = strict.into();
  if !strict.accepts(a, b) {
    return None;
  }
  // same dimensions on both sides here, so an empty `a` means nothing is shared
  if strict.is_strict() && a.is_empty() {
    return None;
  }

  let mut dimensions: DimensionStorage<T> = a
    .iter()
    .map(|(name, a_bounds)| {
      let bounds = match b.get(name) {
        Some(b_bounds) => a_bounds.union(b_bounds),
        None => *a_bounds,
      };
      (name.clone(), bounds)
    })
    .collect();
  dimensions.extend(
    b.iter()
      .filter(|(name, _)| !a.contains_dimension(name))
      .map(|(name, bounds)| (name.clone(), *bounds)),
  );

  Some(Extent::from_unique(dimensions))
}

/// True if the extents overlap on every shared dimension, touching ends included.
///
/// Extents without any shared dimension never intersect. In strict mode a dimension found on one
/// side only makes the result false. Dimension order is irrelevant. Always agrees with
/// [`intersect`] returning Some.
pub fn intersects<T: PartialOrd + Copy>(
  a: &Extent<T>,
  b: &Extent<T>,
  strict: impl Into<DimensionMatch>,
) -> bool {
  let strict: DimensionMatch = strict.into();
  strict.accepts(a, b) && all_shared(a, b, |_, a_bounds, b_bounds| a_bounds.overlaps(b_bounds))
}

pub fn disjoint<T: PartialOrd + Copy>(
  a: &Extent<T>,
  b: &Extent<T>,
  strict: impl Into<DimensionMatch>,
) -> bool {
  !intersects(a, b, strict)
}

/// True if `b` lies inside `a` on every shared dimension, ends included. Same sharing rules as
/// [`intersects`].
pub fn covers<T: PartialOrd + Copy>(
  a: &Extent<T>,
  b: &Extent<T>,
  strict: impl Into<DimensionMatch>,
) -> bool {
  let strict: DimensionMatch = strict.into();
  strict.accepts(a, b) && all_shared(a, b, |_, a_bounds, b_bounds| a_bounds.covers(b_bounds))
}

/// Fold [`union`] over all the extents, None for an empty input or when strict mode rejects any
/// pair.
pub fn union_all<T, E>(
  extents: impl IntoIterator<Item = E>,
  strict: impl Into<DimensionMatch>,
) -> Option<Extent<T>>
where
  T: PartialOrd + Copy,
  E: Borrow<Extent<T>>,
{
  let strict: DimensionMatch = strict.into();
  let mut iter = extents.into_iter();
  let first = iter.next()?.borrow().clone();
  iter.try_fold(first, |acc, ext| union(&acc, ext.borrow(), strict))
}

impl<T: PartialOrd + Copy> Extent<T> {
  pub fn intersect(&self, other: &Self, strict: impl Into<DimensionMatch>) -> Option<Self> {
    intersect(self, other, strict)
  }

  pub fn union(&self, other: &Self, strict: impl Into<DimensionMatch>) -> Option<Self> {
    union(self, other, strict)
  }

  pub fn intersects(&self, other: &Self, strict: impl Into<DimensionMatch>) -> bool {
    intersects(self, other, strict)
  }

  pub fn disjoint(&self, other: &Self, strict: impl Into<DimensionMatch>) -> bool {
    disjoint(self, other, strict)
  }

  pub fn covers(&self, other: &Self, strict: impl Into<DimensionMatch>) -> bool {
    covers(self, other, strict)
  }
}

impl<T> Extent<T>
where
  T: Copy + Add<Output = T> + Sub<Output = T>,
{
  /// Grow the named dimensions by the paired amount on both ends. Names this extent does not have
  /// are skipped.
  ///
  /// ```
  /// use rendiation_extent::*;
  ///
  /// let ext = extent!(X = (1.0, 2.0), Y = (3.0, 4.0));
  /// let grown = ext.buffer([("X", 0.5), ("Z", 10.0)]);
  /// assert_eq!(grown, extent!(X = (0.5, 2.5), Y = (3.0, 4.0)));
  /// ```
  #[must_use]
  pub fn buffer<N: AsRef<str>>(&self, amounts: impl IntoIterator<Item = (N, T)>) -> Self {
    let mut dimensions = self.dimensions_cloned();
    for (name, amount) in amounts {
      if let Some((_, bounds)) = dimensions.iter_mut().find(|(n, _)| n == name.as_ref()) {
        *bounds = bounds.expand(amount);
      }
    }
    Self::from_unique(dimensions)
  }
}
