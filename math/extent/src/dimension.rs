use std::{borrow::Borrow, fmt, ops::Deref, sync::Arc};

use serde::*;

/// Name of one axis of an extent. Clones share the underlying string.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DimName(Arc<str>);

impl DimName {
  pub fn new(name: impl Into<Arc<str>>) -> Self {
    Self(name.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl Deref for DimName {
  type Target = str;

  fn deref(&self) -> &str {
    &self.0
  }
}

impl AsRef<str> for DimName {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl Borrow<str> for DimName {
  fn borrow(&self) -> &str {
    &self.0
  }
}

impl From<&str> for DimName {
  fn from(name: &str) -> Self {
    Self::new(name)
  }
}

impl From<String> for DimName {
  fn from(name: String) -> Self {
    Self::new(name)
  }
}

impl From<&DimName> for DimName {
  fn from(name: &DimName) -> Self {
    name.clone()
  }
}

impl PartialEq<str> for DimName {
  fn eq(&self, other: &str) -> bool {
    self.as_str() == other
  }
}

impl PartialEq<&str> for DimName {
  fn eq(&self, other: &&str) -> bool {
    self.as_str() == *other
  }
}

impl fmt::Debug for DimName {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt::Debug::fmt(self.as_str(), f)
  }
}

impl fmt::Display for DimName {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
