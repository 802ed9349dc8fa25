use std::fmt;
use std::ops::{Index, IndexMut, Mul, Neg};

use crate::compare::{self, near_zero};
use crate::error::{GeometryError, Result};

/// Variable-length real-valued vector.
///
/// All algebraic operations return fresh vectors; [`Vector::append`] and
/// [`Vector::extend`] are the only mutating methods. Equality is
/// element-wise within [`REL_TOL`](crate::REL_TOL) relative or
/// [`VECTOR_ABS_TOL`](crate::VECTOR_ABS_TOL) absolute tolerance.
#[derive(Clone, Debug, Default)]
pub struct Vector {
    values: Vec<f64>,
}

impl Vector {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// All-zero vector of the given length.
    pub fn zero(len: usize) -> Self {
        Self { values: vec![0.0; len] }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// Append a single element, growing the vector by one.
    pub fn append(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Append every element of `values`.
    pub fn extend<I: IntoIterator<Item = f64>>(&mut self, values: I) {
        self.values.extend(values);
    }

    /// Checked element access.
    pub fn get(&self, index: usize) -> Result<f64> {
        self.values
            .get(index)
            .copied()
            .ok_or(GeometryError::IndexOutOfRange { index, len: self.values.len() })
    }

    /// Checked mutable element access.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut f64> {
        let len = self.values.len();
        self.values
            .get_mut(index)
            .ok_or(GeometryError::IndexOutOfRange { index, len })
    }

    fn check_len(&self, other: &Self, op: &'static str) -> Result<()> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(GeometryError::SizeMismatch { op, lhs: self.len(), rhs: other.len() })
        }
    }

    fn zip_with(&self, other: &Self, op: &'static str, f: impl Fn(f64, f64) -> f64) -> Result<Self> {
        self.check_len(other, op)?;
        Ok(Self::new(self.iter().zip(other.iter()).map(|(&a, &b)| f(a, b)).collect()))
    }

    /// Element-wise sum. Operands must have equal length.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Element-wise difference. Operands must have equal length.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Element-wise (Hadamard) product, not the dot product.
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "multiply", |a, b| a * b)
    }

    /// Element-wise quotient. Zero divisors propagate as IEEE infinities or
    /// NaN; only a length mismatch is an error.
    pub fn try_div(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "divide", |a, b| a / b)
    }

    /// Element-wise sign flip.
    pub fn negate(&self) -> Self {
        Self::new(self.iter().map(|x| -x).collect())
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> f64 {
        self.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Scale to unit length.
    ///
    /// There is no zero-magnitude guard: normalizing the zero vector yields
    /// NaN components. Callers that cannot rule out a zero vector should
    /// check [`Vector::is_zero_vector`] first. [`Quaternion`] takes the
    /// opposite stance and rejects its zero value explicitly.
    ///
    /// [`Quaternion`]: crate::Quaternion::normalize
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        Self::new(self.iter().map(|x| x / mag).collect())
    }

    /// Multiply every element by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.iter().map(|x| x * factor).collect())
    }

    /// Sum of element-wise products. Operands must have equal length.
    pub fn dot(&self, other: &Self) -> Result<f64> {
        self.check_len(other, "dot")?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a * b).sum())
    }

    /// Cross product, defined for operand lengths 2 and 3 only.
    ///
    /// A length-2 operand paired with a length-3 one is padded with a
    /// trailing zero. Two length-2 operands yield a single-element vector
    /// holding the z-component of the 3D analog.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        if !(2..=3).contains(&self.len()) || !(2..=3).contains(&other.len()) {
            return Err(GeometryError::SizeMismatch { op: "cross", lhs: self.len(), rhs: other.len() });
        }
        if self.len() == 2 && other.len() == 2 {
            let z = self.values[0] * other.values[1] - self.values[1] * other.values[0];
            return Ok(Self::new(vec![z]));
        }
        let pad = |v: &Self| {
            let mut padded = [0.0; 3];
            padded[..v.len()].copy_from_slice(v.as_slice());
            padded
        };
        let u = pad(self);
        let v = pad(other);
        Ok(Self::new(vec![
            u[1] * v[2] - u[2] * v[1],
            u[2] * v[0] - u[0] * v[2],
            u[0] * v[1] - u[1] * v[0],
        ]))
    }

    /// Every element within [`ZERO_ABS_TOL`](crate::ZERO_ABS_TOL) of zero.
    pub fn is_zero_vector(&self) -> bool {
        self.iter().all(|&x| near_zero(x))
    }

    /// Directions agree: the dot product of the normalized operands is
    /// tolerantly +1.
    pub fn is_parallel(&self, other: &Self) -> bool {
        matches!(self.normalize().dot(&other.normalize()), Ok(d) if compare::vector_close(d, 1.0))
    }

    /// Directions oppose: the dot product of the normalized operands is
    /// tolerantly -1.
    pub fn is_antiparallel(&self, other: &Self) -> bool {
        matches!(self.normalize().dot(&other.normalize()), Ok(d) if compare::vector_close(d, -1.0))
    }

    /// The dot product of the normalized operands is within
    /// [`ZERO_ABS_TOL`](crate::ZERO_ABS_TOL) of zero.
    pub fn is_orthogonal(&self, other: &Self) -> bool {
        matches!(self.normalize().dot(&other.normalize()), Ok(d) if near_zero(d))
    }

    /// Tolerant element-wise equality. Unlike `==`, a length mismatch is
    /// reported as an error rather than read as inequality.
    pub fn try_eq(&self, other: &Self) -> Result<bool> {
        self.check_len(other, "compare")?;
        Ok(self.iter().zip(other.iter()).all(|(&a, &b)| compare::vector_close(a, b)))
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.try_eq(other).unwrap_or(false)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        self.negate()
    }
}

impl Neg for &Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        self.negate()
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Vector {
        rhs.scale(self)
    }
}

impl Index<usize> for Vector {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        let len = self.values.len();
        match self.values.get(index) {
            Some(v) => v,
            None => panic!("index {index} is out of bounds for length {len}"),
        }
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        let len = self.values.len();
        match self.values.get_mut(index) {
            Some(v) => v,
            None => panic!("index {index} is out of bounds for length {len}"),
        }
    }
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for Vector {
    fn from(values: &[f64]) -> Self {
        Self::new(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(values: [f64; N]) -> Self {
        Self::new(values.to_vec())
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;
    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;
    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Vector(values=[")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x:.4}")?;
        }
        write!(f, "])")
    }
}
