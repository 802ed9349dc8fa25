use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use crate::compare;
use crate::error::{GeometryError, Result};
use crate::Vector;

/// Principal coordinate axis, as consumed by [`Point::angle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Point in 3D space: exactly three named components.
///
/// A fixed-arity type by construction rather than a three-element
/// [`Vector`]: the open-ended `append`/`extend` surface must not leak onto
/// it. Arithmetic operators return fresh points; [`Point::translate`] and
/// [`Point::translate_uniform`] are the only mutating methods. Equality is
/// component-wise within the Vector tolerances.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    /// Default distance threshold for [`Point::near`].
    pub const NEAR_THRESHOLD: f64 = 0.01;

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn at_origin() -> Self {
        Self::default()
    }

    /// Fails with `SizeMismatch` unless the slice has exactly three
    /// elements.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match *values {
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(GeometryError::SizeMismatch {
                op: "Point::from_slice",
                lhs: 3,
                rhs: values.len(),
            }),
        }
    }

    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    pub fn to_vector(&self) -> Vector {
        Vector::from([self.x, self.y, self.z])
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> {
        [self.x, self.y, self.z].into_iter()
    }

    /// Checked component access (0 is x, 1 is y, 2 is z).
    pub fn get(&self, index: usize) -> Result<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(GeometryError::IndexOutOfRange { index, len: 3 }),
        }
    }

    /// Move this point in place.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    /// [`Point::translate`] with the same delta on every axis.
    pub fn translate_uniform(&mut self, d: f64) {
        self.translate(d, d, d);
    }

    /// Euclidean distance.
    pub fn distance_to(&self, other: &Self) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2) + (other.z - self.z).powi(2))
            .sqrt()
    }

    /// True if the two points lie within `threshold` of each other.
    /// [`Point::NEAR_THRESHOLD`] is the conventional default.
    pub fn near(&self, other: &Self, threshold: f64) -> bool {
        self.distance_to(other) <= threshold
    }

    /// Angle between the position vector of this point and a principal
    /// axis, in radians.
    pub fn angle(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => (self.y.powi(2) + self.z.powi(2)).sqrt().atan2(self.x),
            Axis::Y => (self.z.powi(2) + self.x.powi(2)).sqrt().atan2(self.y),
            Axis::Z => (self.x.powi(2) + self.y.powi(2)).sqrt().atan2(self.z),
        }
    }

    /// Magnitude of the position vector.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Any component is NaN, e.g. downstream of a zero-vector normalize.
    pub fn is_undefined(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    pub fn is_origin(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// True if `a`, `b` and `c` lie on a common straight line, i.e.
    /// `(b - a) x (c - a)` is the zero vector. Coincident points among the
    /// three short-circuit to true.
    pub fn check_collinear(a: &Point, b: &Point, c: &Point) -> bool {
        Self::collinear(a, b, c, false)
    }

    /// [`Point::check_collinear`] with the additional requirement that `b`
    /// lies between `a` and `c`: `(b - a) . (c - a)` must fall inside
    /// `[0, distance(a, c)^2]`. With `b` off both endpoints, `a == c`
    /// leaves no room in between and is therefore false.
    pub fn check_collinear_ordered(a: &Point, b: &Point, c: &Point) -> bool {
        Self::collinear(a, b, c, true)
    }

    fn collinear(a: &Point, b: &Point, c: &Point, ordered: bool) -> bool {
        if a == b || b == c {
            return true;
        }
        if c == a {
            return !ordered;
        }

        let u = *b - *a;
        let v = *c - *a;
        let cross = Vector::from([
            u.y * v.z - u.z * v.y,
            u.z * v.x - u.x * v.z,
            u.x * v.y - u.y * v.x,
        ]);
        if !cross.is_zero_vector() {
            return false;
        }

        if ordered {
            let dot = u.x * v.x + u.y * v.y + u.z * v.z;
            if dot < 0.0 || dot > a.distance_to(c).powi(2) {
                return false;
            }
        }
        true
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        compare::vector_close(self.x, other.x)
            && compare::vector_close(self.y, other.y)
            && compare::vector_close(self.z, other.z)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Self) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Self) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul for Point {
    type Output = Point;
    fn mul(self, rhs: Self) -> Point {
        Point::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Div for Point {
    type Output = Point;
    fn div(self, rhs: Self) -> Point {
        Point::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y, -self.z)
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl Index<usize> for Point {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index {index} is out of bounds [0,2]"),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Point(x={:.4}, y={:.4}, z={:.4})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn construction_and_conversions() {
        let p = Point::from((4.0, 3.0, 12.0));
        assert_eq!(p.as_tuple(), (4.0, 3.0, 12.0));
        assert_eq!(Point::from_slice(&[4.0, 3.0, 12.0]).unwrap(), p);
        assert_eq!(p.to_vector(), Vector::from([4.0, 3.0, 12.0]));
        assert_eq!(Point::at_origin(), Point::new(0.0, 0.0, 0.0));
        assert!(Point::at_origin().is_origin());
    }

    #[test]
    fn from_slice_rejects_wrong_arity() {
        assert_eq!(
            Point::from_slice(&[1.0, 2.0]),
            Err(GeometryError::SizeMismatch { op: "Point::from_slice", lhs: 3, rhs: 2 })
        );
        assert!(Point::from_slice(&[1.0, 2.0, 3.0, 4.0]).is_err());
    }

    #[test]
    fn arithmetic_operators() {
        let p = Point::new(1.0, 2.0, 3.0);
        let q = Point::new(2.0, 4.0, 6.0);
        assert_eq!(p + q, Point::new(3.0, 6.0, 9.0));
        assert_eq!(q - p, Point::new(1.0, 2.0, 3.0));
        assert_eq!(p * q, Point::new(2.0, 8.0, 18.0));
        assert_eq!(q / p, Point::new(2.0, 2.0, 2.0));
        assert_eq!(-p, Point::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn translate_mutates_in_place() {
        let mut p = Point::new(1.0, 2.0, 3.0);
        p.translate(1.0, 2.0, 3.0);
        assert_eq!(p, Point::new(2.0, 4.0, 6.0));

        let mut p = Point::new(1.0, 2.0, 4.0);
        p.translate_uniform(5.0);
        assert_eq!(p, Point::new(6.0, 7.0, 9.0));
    }

    #[test]
    fn point_used_in_line_is_a_copy() {
        // Mutating a point after handing it to another entity must not
        // reach through: composition is by value.
        let mut p = Point::new(1.0, 1.0, 1.0);
        let q = p;
        p.translate_uniform(10.0);
        assert_eq!(q, Point::new(1.0, 1.0, 1.0));
    }

    #[rstest(/**/ p,                          other,                      distance,
             case(Point::new(1.0, 2.0, 3.0),  Point::new(1.0, 2.0, 3.0),  0.0),
             case(Point::new(3.0, 4.0, 12.0), Point::at_origin(),        13.0),
             case(Point::new(1.0, 0.0, 0.0),  Point::new(2.0, 0.0, 0.0),  1.0),
             case(Point::new(3.0, 0.0, 0.0),  Point::new(0.0, 4.0, 0.0),  5.0),
    )]
    fn distances(p: Point, other: Point, distance: f64) {
        assert_float_eq!(p.distance_to(&other), distance, ulps <= 1);
        assert_float_eq!(other.distance_to(&p), distance, ulps <= 1);
    }

    #[test]
    fn near_uses_threshold() {
        let p = Point::at_origin();
        let q = Point::new(0.005, 0.0, 0.0);
        assert!(p.near(&q, Point::NEAR_THRESHOLD));
        assert!(!p.near(&q, 0.001));
    }

    #[rstest(/**/ p,                          axis,     expected,
             case(Point::new(1.0, 0.0, 0.0),  Axis::X,  0.0),
             case(Point::new(-1.0, 0.0, 0.0), Axis::X,  PI),
             case(Point::new(0.0, 1.0, 0.0),  Axis::X,  FRAC_PI_2),
             case(Point::new(0.0, 1.0, 0.0),  Axis::Y,  0.0),
             case(Point::new(0.0, 0.0, 2.0),  Axis::Z,  0.0),
             case(Point::new(1.0, 1.0, 0.0),  Axis::X,  FRAC_PI_4),
             case(Point::new(1.0, 0.0, 1.0),  Axis::Z,  FRAC_PI_4),
    )]
    fn angle_to_axis(p: Point, axis: Axis, expected: f64) {
        assert_float_eq!(p.angle(axis), expected, abs <= 1e-12);
    }

    #[test]
    fn magnitude_as_position_vector() {
        assert_float_eq!(Point::new(3.0, 4.0, 12.0).magnitude(), 13.0, ulps <= 1);
        assert_float_eq!(Point::new(0.0, 3.0, 4.0).magnitude(), 5.0, ulps <= 1);
    }

    #[test]
    fn undefined_points_carry_nan() {
        assert!(!Point::new(1.0, 2.0, 3.0).is_undefined());
        assert!(Point::new(f64::NAN, 0.0, 0.0).is_undefined());
        // The documented route to one: normalizing a zero vector.
        let n = Vector::zero(3).normalize();
        assert!(Point::new(n[0], n[1], n[2]).is_undefined());
    }

    #[test]
    fn equality_is_tolerant() {
        assert_eq!(Point::new(1.00001, 0.0, 0.0), Point::new(1.0, 0.0, 0.0));
        assert_ne!(Point::new(1.01, 0.0, 0.0), Point::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn indexing() {
        let p = Point::new(1.0, 2.0, 3.0);
        assert_eq!((p[0], p[1], p[2]), (1.0, 2.0, 3.0));
        assert_eq!(p.get(2), Ok(3.0));
        assert_eq!(p.get(3), Err(GeometryError::IndexOutOfRange { index: 3, len: 3 }));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_panics_past_z() {
        let p = Point::at_origin();
        let _ = p[3];
    }

    #[rstest(/**/ a,                          b,                          c,                          plain, ordered,
             // the classic diagonal
             case(Point::at_origin(),         Point::new(1.0, 1.0, 1.0),  Point::new(2.0, 2.0, 2.0),  true,  true),
             // off the line
             case(Point::at_origin(),         Point::new(1.0, 0.0, 0.0),  Point::new(1.0, 1.0, 1.0),  false, false),
             // collinear but b outside the a..c span
             case(Point::new(1.0, 1.0, 1.0),  Point::new(3.0, 3.0, 3.0),  Point::new(2.0, 2.0, 2.0),  true,  false),
             // walking backwards is still ordered
             case(Point::new(2.0, 2.0, 2.0),  Point::new(1.0, 1.0, 1.0),  Point::at_origin(),         true,  true),
             // degenerate: repeated points
             case(Point::at_origin(),         Point::new(1.0, 1.0, 1.0),  Point::new(1.0, 1.0, 1.0),  true,  true),
             case(Point::at_origin(),         Point::at_origin(),         Point::new(2.0, 2.0, 2.0),  true,  true),
             case(Point::at_origin(),         Point::new(1.0, 1.0, 1.0),  Point::at_origin(),         true,  false),
    )]
    fn collinearity(a: Point, b: Point, c: Point, plain: bool, ordered: bool) {
        assert_eq!(Point::check_collinear(&a, &b, &c), plain);
        assert_eq!(Point::check_collinear_ordered(&a, &b, &c), ordered);
    }

    #[test]
    fn display_uses_four_decimals() {
        let p = Point::new(1.0, -2.25, 3.5);
        assert_eq!(p.to_string(), "Point(x=1.0000, y=-2.2500, z=3.5000)");
    }
}
