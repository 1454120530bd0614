//! Immutable 2d vector
//!
//! Every operation returns a new Vector2, a vector carries a time tag `w`
//! of its creation in milliseconds
//!
//! Misused operand never panics, it degrades to a sentinel value

#[macro_use]
pub mod vec_error;
pub mod vec_model;

pub use vec_error::{VecError, VecErrorKind};
pub use vec_model::*;
