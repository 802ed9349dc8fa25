use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use float_eq::float_eq;

use crate::compare::{self, QUATERNION_ABS_TOL, REL_TOL};
use crate::error::{GeometryError, Result};
use crate::Vector;

/// Quaternion `w + xi + yj + zk`.
///
/// A unit quaternion represents a rotation; sums and differences are
/// general hypercomplex values and need not stay unit. No magnitude
/// invariant is enforced except by [`Quaternion::normalize`] and
/// [`Quaternion::inverse`], which reject the zero quaternion.
///
/// Equality is component-wise within [`REL_TOL`](crate::REL_TOL) relative
/// or [`QUATERNION_ABS_TOL`](crate::QUATERNION_ABS_TOL) absolute tolerance,
/// tighter than the Vector/Point margin.
#[derive(Clone, Copy, Debug)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// The multiplicative identity `(1, 0, 0, 0)`.
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Basis quaternion `i`.
    pub fn i() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    /// Basis quaternion `j`.
    pub fn j() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    /// Basis quaternion `k`.
    pub fn k() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    pub fn from_tuple((w, x, y, z): (f64, f64, f64, f64)) -> Self {
        Self::new(w, x, y, z)
    }

    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.w, self.x, self.y, self.z)
    }

    pub fn scalar_part(&self) -> f64 {
        self.w
    }

    /// The vector part `(x, y, z)` as a length-3 [`Vector`].
    pub fn vector_part(&self) -> Vector {
        Vector::from([self.x, self.y, self.z])
    }

    /// `w^2 + x^2 + y^2 + z^2`.
    pub fn squared_sum(&self) -> f64 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean norm over all four components.
    pub fn norm(&self) -> f64 {
        self.squared_sum().sqrt()
    }

    /// `(w, -x, -y, -z)`.
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Scale to unit norm.
    ///
    /// Unlike [`Vector::normalize`](crate::Vector::normalize), which lets
    /// NaN propagate, the zero quaternion is rejected explicitly.
    pub fn normalize(&self) -> Result<Self> {
        if self.is_zero_quaternion() {
            return Err(GeometryError::InvalidOperation("cannot normalize the zero quaternion"));
        }
        let n = self.norm();
        Ok(Self::new(self.w / n, self.x / n, self.y / n, self.z / n))
    }

    /// Multiplicative inverse: `conjugate / squared_sum`. Fails on the zero
    /// quaternion.
    pub fn inverse(&self) -> Result<Self> {
        if self.is_zero_quaternion() {
            return Err(GeometryError::InvalidOperation("cannot invert the zero quaternion"));
        }
        let s = self.squared_sum();
        Ok(Self::new(self.w / s, -self.x / s, -self.y / s, -self.z / s))
    }

    /// Left-division: `self.divide(q)` computes `q * self.inverse()`.
    ///
    /// Quaternion multiplication does not commute, so the operand order is
    /// part of the contract; this is the Hamilton-product ordering used
    /// throughout the crate. Scalars lift via `From<f64>`:
    /// `q.divide(2.0)` is `2 * q.inverse()`.
    pub fn divide(&self, other: impl Into<Quaternion>) -> Result<Self> {
        Ok(other.into() * self.inverse()?)
    }

    /// Raise to a real exponent via the polar decomposition
    /// `q = n (cos(phi) + u sin(phi))`, with `phi = acos(w / n)` and `u`
    /// the unit vector part.
    ///
    /// The zero quaternion is returned unchanged. A pure-real quaternion
    /// short-circuits to `(w^e, 0, 0, 0)`; a negative `w` with a
    /// fractional exponent then yields NaN, as real exponentiation does.
    pub fn powf(&self, exponent: f64) -> Self {
        if self.is_zero_quaternion() {
            return *self;
        }
        let vector_mag = (self.x * self.x + self.y * self.y + self.z * self.z).sqrt();
        if vector_mag == 0.0 {
            return Self::new(self.w.powf(exponent), 0.0, 0.0, 0.0);
        }
        let n = self.norm();
        let phi = (self.w / n).acos();
        let scaled_norm = n.powf(exponent);
        let vector_scale = scaled_norm * (exponent * phi).sin() / vector_mag;
        Self::new(
            scaled_norm * (exponent * phi).cos(),
            self.x * vector_scale,
            self.y * vector_scale,
            self.z * vector_scale,
        )
    }

    /// All four components within [`QUATERNION_ABS_TOL`] of zero.
    pub fn is_zero_quaternion(&self) -> bool {
        [self.w, self.x, self.y, self.z]
            .iter()
            .all(|&c| float_eq!(c, 0.0, abs <= QUATERNION_ABS_TOL))
    }

    /// Squared sum tolerantly equal to one.
    pub fn is_unit_quaternion(&self) -> bool {
        float_eq!(self.squared_sum(), 1.0, rmax <= REL_TOL)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<f64> for Quaternion {
    fn from(scalar: f64) -> Self {
        Self::new(scalar, 0.0, 0.0, 0.0)
    }
}

impl PartialEq for Quaternion {
    fn eq(&self, other: &Self) -> bool {
        compare::quaternion_close(self.w, other.w)
            && compare::quaternion_close(self.x, other.x)
            && compare::quaternion_close(self.y, other.y)
            && compare::quaternion_close(self.z, other.z)
    }
}

impl Add for Quaternion {
    type Output = Quaternion;
    fn add(self, rhs: Self) -> Quaternion {
        Self::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Quaternion {
    type Output = Quaternion;
    fn sub(self, rhs: Self) -> Quaternion {
        Self::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;
    fn neg(self) -> Quaternion {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

/// Hamilton product: scalar part `w1 w2 - v1 . v2`, vector part
/// `w1 v2 + w2 v1 + v1 x v2`.
impl Mul for Quaternion {
    type Output = Quaternion;
    fn mul(self, rhs: Self) -> Quaternion {
        Self::new(
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y + self.y * rhs.w + self.z * rhs.x - self.x * rhs.z,
            self.w * rhs.z + self.z * rhs.w + self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl Mul<f64> for Quaternion {
    type Output = Quaternion;
    fn mul(self, rhs: f64) -> Quaternion {
        self * Quaternion::from(rhs)
    }
}

impl Mul<Quaternion> for f64 {
    type Output = Quaternion;
    fn mul(self, rhs: Quaternion) -> Quaternion {
        Quaternion::from(self) * rhs
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Quaternion(w={:.4}, x={:.4}, y={:.4}, z={:.4})",
            self.w, self.x, self.y, self.z
        )
    }
}
