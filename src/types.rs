// src/types.rs
//! Scalar type selection.

#[cfg(feature = "f32")]
pub type Scalar = f32;
#[cfg(not(feature = "f32"))]
pub type Scalar = f64;

// the dimension is runtime data, so no DIM constant lives here
