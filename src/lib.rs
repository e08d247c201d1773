//! # ndvec Quickstart
//!
//! ```rust
//! use ndvec::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let i = Vector::vec3(4.0, 5.0, 6.0)?;
//! let j = Vector::vec3(2.0, 2.0, 2.0)?;
//!
//! // |(4,5,6)| ≈ 8.77496
//! assert!((i.magnitude() - 8.77496).abs() < 1e-5);
//!
//! // Normalize j, then chain add and subtract
//! let out = j.normalized()?.add(&i).subtract(&j);
//! assert!((out.x()? - 2.57735).abs() < 1e-4);
//! assert!((out.y()? - 3.57735).abs() < 1e-4);
//! assert!((out.z()? - 4.57735).abs() < 1e-4);
//! # Ok(())
//! # }
//! ```
//!
#![doc = include_str!("../README.md")]

// Core modules
pub mod error;
pub mod ops;
pub mod prelude;
pub mod types;
pub mod vector;

// --- Public API exports ---

pub use error::{Result, VectorError};
pub use types::Scalar;
pub use vector::{Rounded, Vector};
