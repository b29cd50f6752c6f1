use crate::DimName;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtentError {
  #[error("dimension `{0}` is given more than once")]
  DuplicateDimension(DimName),
}
