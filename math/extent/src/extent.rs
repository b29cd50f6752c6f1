use std::{fmt, iter::FromIterator, marker::PhantomData};

use serde::{
  de::{MapAccess, Visitor},
  ser::SerializeMap,
  *,
};
use smallvec::SmallVec;

use crate::*;

pub(crate) type DimensionStorage<T> = SmallVec<[(DimName, Bounds<T>); 4]>;

/// An immutable, ordered mapping from dimension name to the bounds on that dimension.
///
/// The order of dimensions is the construction order. It shows up when iterating or printing,
/// but equality and all set operations treat the dimensions as an unordered set.
///
/// ```
/// use rendiation_extent::*;
///
/// let ext = Extent::new([("X", (1.0, 2.0)), ("Y", (3.0, 4.0))]);
/// assert_eq!(ext.dimension_names().collect::<Vec<_>>(), ["X", "Y"]);
/// assert_eq!(
///   ext.bounds().collect::<Vec<_>>(),
///   [Bounds::new(1.0, 2.0), Bounds::new(3.0, 4.0)]
/// );
/// ```
#[derive(Clone)]
pub struct Extent<T = f64> {
  dimensions: DimensionStorage<T>,
}

impl<T> Default for Extent<T> {
  fn default() -> Self {
    Self::empty()
  }
}

impl<T> Extent<T> {
  pub fn empty() -> Self {
    Self {
      dimensions: SmallVec::new(),
    }
  }

  /// the caller guarantees the names are unique
  pub(crate) fn from_unique(dimensions: DimensionStorage<T>) -> Self {
    Self { dimensions }
  }

  /// Build an extent, keeping the first bounds given for a repeated dimension name.
  ///
  /// Use [`Extent::try_new`] to reject repeated names instead.
  pub fn new<N, B>(items: impl IntoIterator<Item = (N, B)>) -> Self
  where
    N: Into<DimName>,
    B: Into<Bounds<T>>,
  {
    items.into_iter().collect()
  }

  pub fn try_new<N, B>(items: impl IntoIterator<Item = (N, B)>) -> Result<Self, ExtentError>
  where
    N: Into<DimName>,
    B: Into<Bounds<T>>,
  {
    let mut dimensions = DimensionStorage::new();
    for (name, bounds) in items {
      let name = name.into();
      if dimensions.iter().any(|(n, _)| n == &name) {
        return Err(ExtentError::DuplicateDimension(name));
      }
      dimensions.push((name, bounds.into()));
    }
    Ok(Self { dimensions })
  }

  pub(crate) fn dimensions_cloned(&self) -> DimensionStorage<T>
  where
    T: Clone,
  {
    self.dimensions.clone()
  }

  pub fn len(&self) -> usize {
    self.dimensions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.dimensions.is_empty()
  }

  pub fn dimension_names(&self) -> impl ExactSizeIterator<Item = &DimName> + '_ {
    self.dimensions.iter().map(|(name, _)| name)
  }

  pub fn contains_dimension(&self, name: &str) -> bool {
    self.get(name).is_some()
  }

  pub fn get(&self, name: &str) -> Option<&Bounds<T>> {
    self
      .dimensions
      .iter()
      .find(|(n, _)| n.as_str() == name)
      .map(|(_, bounds)| bounds)
  }

  pub fn iter(&self) -> impl ExactSizeIterator<Item = (&DimName, &Bounds<T>)> + '_ {
    self.dimensions.iter().map(|(name, bounds)| (name, bounds))
  }

  /// true if both sides name exactly the same dimensions, in any order
  pub fn same_dimensions<U>(&self, other: &Extent<U>) -> bool {
    self.len() == other.len() && self.dimension_names().all(|n| other.contains_dimension(n))
  }
}

impl<T: Copy> Extent<T> {
  /// bound pairs, aligned with [`Extent::dimension_names`]
  pub fn bounds(&self) -> impl ExactSizeIterator<Item = Bounds<T>> + '_ {
    self.dimensions.iter().map(|(_, bounds)| *bounds)
  }

  pub fn bound_for(&self, name: &str) -> Option<Bounds<T>> {
    self.get(name).copied()
  }
}

impl<N, B, T> FromIterator<(N, B)> for Extent<T>
where
  N: Into<DimName>,
  B: Into<Bounds<T>>,
{
  fn from_iter<I: IntoIterator<Item = (N, B)>>(items: I) -> Self {
    let mut dimensions = DimensionStorage::new();
    for (name, bounds) in items {
      let name = name.into();
      if dimensions.iter().any(|(n, _)| n == &name) {
        log::warn!("extent dimension `{name}` is given more than once, later bounds are ignored");
        continue;
      }
      dimensions.push((name, bounds.into()));
    }
    Self { dimensions }
  }
}

impl<'a, T> IntoIterator for &'a Extent<T> {
  type Item = &'a (DimName, Bounds<T>);
  type IntoIter = std::slice::Iter<'a, (DimName, Bounds<T>)>;

  fn into_iter(self) -> Self::IntoIter {
    self.dimensions.iter()
  }
}

impl<T: PartialEq> PartialEq for Extent<T> {
  fn eq(&self, other: &Self) -> bool {
    self.len() == other.len()
      && self
        .iter()
        .all(|(name, bounds)| other.get(name) == Some(bounds))
  }
}

impl<T: Eq> Eq for Extent<T> {}

impl<T: fmt::Debug> fmt::Debug for Extent<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("Extent ")?;
    f.debug_map()
      .entries(self.iter().map(|(name, bounds)| (name, (&bounds.min, &bounds.max))))
      .finish()
  }
}

impl<T: fmt::Debug> fmt::Display for Extent<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("Extent(")?;
    for (i, (name, bounds)) in self.iter().enumerate() {
      if i > 0 {
        f.write_str(", ")?;
      }
      write!(f, "{name} = {bounds}")?;
    }
    f.write_str(")")
  }
}

impl<T: Serialize> Serialize for Extent<T> {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.len()))?;
    for (name, bounds) in self.iter() {
      map.serialize_entry(name, bounds)?;
    }
    map.end()
  }
}

struct ExtentVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ExtentVisitor<T> {
  type Value = Extent<T>;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("a map from dimension name to a (min, max) pair")
  }

  fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
    let mut entries: DimensionStorage<T> = SmallVec::new();
    while let Some(entry) = access.next_entry::<DimName, Bounds<T>>()? {
      entries.push(entry);
    }
    Extent::try_new(entries).map_err(de::Error::custom)
  }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Extent<T> {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_map(ExtentVisitor(PhantomData))
  }
}
