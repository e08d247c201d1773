// src/prelude.rs
//! The “everything” import for ndvec.
//!
//! Brings you the vector type, its error type and the free-function
//! operation forms with one glob:
//! ```rust
//! use ndvec::prelude::*;
//! ```

// core data types
pub use crate::error::{Result, VectorError};
pub use crate::types::Scalar;
pub use crate::vector::{Rounded, Vector};

// free-function operation forms
pub use crate::ops::{add, for_every, magnitude, multiply, normalize, subtract};
