//! Named multi-dimensional extents.
//!
//! An [`Extent`] maps dimension names (`X`, `Y`, `Time`, ..) to a `(min, max)` bound pair.
//! Set operations between extents only combine the dimensions both sides agree on; the
//! [`DimensionMatch`] flag decides whether a dimension missing from one side is ignored or voids
//! the whole result.

mod bounds;
mod dimension;
mod error;
mod extent;
mod ops;
mod provider;

pub use bounds::*;
pub use dimension::*;
pub use error::*;
pub use extent::*;
pub use ops::*;
pub use provider::*;

/// Keyword style construction.
///
/// ```
/// use rendiation_extent::*;
///
/// let ext = extent!(X = (1.0, 2.0), Y = (3.0, 4.0));
/// assert_eq!(ext.bound_for("Y"), Some(Bounds::new(3.0, 4.0)));
/// assert_eq!(ext.to_string(), "Extent(X = (1.0, 2.0), Y = (3.0, 4.0))");
/// ```
#[macro_export]
macro_rules! extent {
  () => {
    $crate::Extent::empty()
  };
  ($($name:ident = $bounds:expr),+ $(,)?) => {
    $crate::Extent::new([$((stringify!($name), $crate::Bounds::from($bounds))),+])
  };
}
