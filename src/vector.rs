//! The runtime-dimensioned Euclidean vector value type.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::error::{Result, VectorError};
use crate::ops;
use crate::types::Scalar;

/// A Euclidean vector whose dimension is determined at construction time.
///
/// Components live in an ordered buffer; the dimension is always the buffer
/// length, never tracked separately. Every stored component is finite: all
/// write paths validate their input and fail with
/// [`VectorError::NonFiniteComponent`] rather than storing NaN or ±∞.
///
/// Arithmetic never mutates an operand — `add`, `subtract`, `scale` and
/// `normalized` all return a fresh vector. The only mutation paths are
/// [`set`](Vector::set), the named setters, [`push`](Vector::push) and
/// [`pop`](Vector::pop).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector {
    components: Vec<Scalar>,
}

impl Vector {
    /// Construct from an ordered sequence of components.
    ///
    /// The dimension equals the number of components supplied; zero
    /// components is a valid (empty) vector. Fails with
    /// [`VectorError::NonFiniteComponent`] if any value is NaN or infinite.
    pub fn new<I>(components: I) -> Result<Self>
    where
        I: IntoIterator<Item = Scalar>,
    {
        let components: Vec<Scalar> = components.into_iter().collect();
        for (index, &value) in components.iter().enumerate() {
            if !value.is_finite() {
                return Err(VectorError::NonFiniteComponent { index, value });
            }
        }
        Ok(Self { components })
    }

    /// The zero vector of the given dimension.
    #[inline]
    pub fn zeros(dimension: usize) -> Self {
        Self {
            components: vec![0.0; dimension],
        }
    }

    /// Construct a 2-dimensional vector.
    #[inline]
    pub fn vec2(x: Scalar, y: Scalar) -> Result<Self> {
        Self::new([x, y])
    }

    /// Construct a 3-dimensional vector.
    #[inline]
    pub fn vec3(x: Scalar, y: Scalar, z: Scalar) -> Result<Self> {
        Self::new([x, y, z])
    }

    /// Construct a 4-dimensional vector.
    #[inline]
    pub fn vec4(x: Scalar, y: Scalar, z: Scalar, w: Scalar) -> Result<Self> {
        Self::new([x, y, z, w])
    }

    /// Build from a buffer whose components are already known to be finite.
    ///
    /// Callers are responsible for upholding the finiteness invariant.
    #[inline]
    pub(crate) fn from_checked(components: Vec<Scalar>) -> Self {
        Self { components }
    }

    /// Number of components.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    /// Whether the vector has dimension zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The components as a slice, in order.
    #[inline]
    pub fn components(&self) -> &[Scalar] {
        &self.components
    }

    /// Iterate over the components in index order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.components.iter()
    }

    /// Read the component at `index`.
    ///
    /// Fails with [`VectorError::IndexOutOfBounds`] when
    /// `index >= dimension()`; there is no silent zero-extension here.
    pub fn get(&self, index: usize) -> Result<Scalar> {
        self.components
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfBounds {
                index,
                dimension: self.components.len(),
            })
    }

    /// Overwrite the component at `index`.
    ///
    /// Fails with [`VectorError::IndexOutOfBounds`] when
    /// `index >= dimension()` and with [`VectorError::NonFiniteComponent`]
    /// for a NaN or infinite value. On failure the vector is unchanged.
    pub fn set(&mut self, index: usize, value: Scalar) -> Result<()> {
        if !value.is_finite() {
            return Err(VectorError::NonFiniteComponent { index, value });
        }
        let dimension = self.components.len();
        match self.components.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(VectorError::IndexOutOfBounds { index, dimension }),
        }
    }

    /// First component. Errors when the vector is empty.
    #[inline]
    pub fn x(&self) -> Result<Scalar> {
        self.get(0)
    }

    /// Second component.
    #[inline]
    pub fn y(&self) -> Result<Scalar> {
        self.get(1)
    }

    /// Third component.
    #[inline]
    pub fn z(&self) -> Result<Scalar> {
        self.get(2)
    }

    /// Fourth component.
    #[inline]
    pub fn w(&self) -> Result<Scalar> {
        self.get(3)
    }

    /// Write the first component.
    ///
    /// The named setters share the indexed [`set`](Vector::set) policy: a
    /// write past the current dimension is an error, never an implicit grow.
    /// Use [`push`](Vector::push) to extend a vector.
    #[inline]
    pub fn set_x(&mut self, value: Scalar) -> Result<()> {
        self.set(0, value)
    }

    /// Write the second component.
    #[inline]
    pub fn set_y(&mut self, value: Scalar) -> Result<()> {
        self.set(1, value)
    }

    /// Write the third component.
    #[inline]
    pub fn set_z(&mut self, value: Scalar) -> Result<()> {
        self.set(2, value)
    }

    /// Write the fourth component.
    #[inline]
    pub fn set_w(&mut self, value: Scalar) -> Result<()> {
        self.set(3, value)
    }

    /// Append a component, growing the dimension by one.
    pub fn push(&mut self, value: Scalar) -> Result<()> {
        if !value.is_finite() {
            return Err(VectorError::NonFiniteComponent {
                index: self.components.len(),
                value,
            });
        }
        self.components.push(value);
        Ok(())
    }

    /// Remove and return the last component, shrinking the dimension by one.
    #[inline]
    pub fn pop(&mut self) -> Option<Scalar> {
        self.components.pop()
    }

    /// Component-wise sum with `other`. See [`ops::add`].
    #[inline]
    pub fn add(&self, other: &Vector) -> Vector {
        ops::add(self, other)
    }

    /// Component-wise difference `self - other`. See [`ops::subtract`].
    #[inline]
    pub fn subtract(&self, other: &Vector) -> Vector {
        ops::subtract(self, other)
    }

    /// Every component scaled by `scalar`. See [`ops::multiply`].
    #[inline]
    pub fn scale(&self, scalar: Scalar) -> Result<Vector> {
        ops::multiply(self, scalar)
    }

    /// Euclidean norm. See [`ops::magnitude`].
    #[inline]
    pub fn magnitude(&self) -> Scalar {
        ops::magnitude(self)
    }

    /// Unit vector with the same direction. See [`ops::normalize`].
    #[inline]
    pub fn normalized(&self) -> Result<Vector> {
        ops::normalize(self)
    }
}

impl TryFrom<Vec<Scalar>> for Vector {
    type Error = VectorError;

    fn try_from(components: Vec<Scalar>) -> Result<Self> {
        Self::new(components)
    }
}

impl TryFrom<&[Scalar]> for Vector {
    type Error = VectorError;

    fn try_from(components: &[Scalar]) -> Result<Self> {
        Self::new(components.iter().copied())
    }
}

impl From<Vector> for Vec<Scalar> {
    fn from(v: Vector) -> Vec<Scalar> {
        v.components
    }
}

impl Add for &Vector {
    type Output = Vector;

    #[inline]
    fn add(self, rhs: &Vector) -> Vector {
        ops::add(self, rhs)
    }
}

impl Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        ops::add(&self, &rhs)
    }
}

impl Sub for &Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: &Vector) -> Vector {
        ops::subtract(self, rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        ops::subtract(&self, &rhs)
    }
}

impl Neg for &Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        Vector::from_checked(self.components.iter().map(|c| -c).collect())
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        -&self
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

/// A tiny wrapper for printing a `Vector` rounded to `decimals` places.
pub struct Rounded<'a>(pub &'a Vector, pub usize);

impl<'a> fmt::Display for Rounded<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Rounded(v, dec) = *self;
        write!(f, "(")?;
        for (i, c) in v.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.prec$}", c, prec = dec)?;
        }
        write!(f, ")")
    }
}

impl<'a> Rounded<'a> {
    /// Wrap a `&Vector` for pretty-printing with `decimals` digits.
    #[inline]
    pub fn new(v: &'a Vector, decimals: usize) -> Self {
        Rounded(v, decimals)
    }
}
