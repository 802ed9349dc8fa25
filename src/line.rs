use std::fmt;

use float_eq::float_eq;

use crate::compare::{near_zero, REL_TOL};
use crate::error::{GeometryError, Result};
use crate::{Point, Vector};

/// Infinite line in 3D, defined by a direction vector and a point lying on
/// the line.
///
/// The fields are private so the construction-time invariant holds for the
/// lifetime of the value: the direction vector has exactly three components
/// and is never the zero vector.
#[derive(Clone, Debug)]
pub struct Line {
    direction_vector: Vector,
    point: Point,
}

// Infallible on the length-3 vectors the Line invariant guarantees.
fn cross3(u: &Vector, v: &Vector) -> Vector {
    Vector::from([
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ])
}

impl Line {
    /// Fails with `SizeMismatch` unless the direction vector has three
    /// components, and with `InvalidArgument` if it is the zero vector.
    pub fn new(direction_vector: Vector, point: Point) -> Result<Self> {
        if direction_vector.len() != 3 {
            return Err(GeometryError::SizeMismatch {
                op: "Line::new",
                lhs: 3,
                rhs: direction_vector.len(),
            });
        }
        if direction_vector.is_zero_vector() {
            return Err(GeometryError::InvalidArgument(format!(
                "direction vector {direction_vector} does not define a direction"
            )));
        }
        Ok(Self { direction_vector, point })
    }

    /// Line through `p0` and `p1`, with direction `p1 - p0`. Coincident
    /// points leave the direction undefined and fail like a zero direction
    /// vector.
    pub fn from_points(p0: Point, p1: Point) -> Result<Self> {
        Self::new((p1 - p0).to_vector(), p0)
    }

    /// The X axis: direction `(1, 0, 0)` through the origin.
    pub fn x_axis() -> Self {
        Self {
            direction_vector: Vector::from([1.0, 0.0, 0.0]),
            point: Point::at_origin(),
        }
    }

    pub fn direction_vector(&self) -> &Vector {
        &self.direction_vector
    }

    pub fn point(&self) -> &Point {
        &self.point
    }

    /// True if `point - self.point` is a scalar multiple of the direction
    /// vector.
    ///
    /// Walks the component pairs keeping a running ratio, which stays
    /// well-defined when the direction has zero extent along some axis: a
    /// zero direction component simply demands a zero delta component.
    pub fn contains_point(&self, point: &Point) -> bool {
        let delta = *point - self.point;
        let mut ratio: Option<f64> = None;
        for (&u, v) in self.direction_vector.iter().zip(delta.iter()) {
            if u == 0.0 {
                if v == 0.0 {
                    continue;
                }
                return false;
            }
            if let Some(r) = ratio {
                if !float_eq!(r, v / u, rmax <= REL_TOL) {
                    return false;
                }
            }
            ratio = Some(v / u);
        }
        true
    }

    /// Direction vectors point the same or opposite ways.
    pub fn is_parallel(&self, other: &Self) -> bool {
        self.direction_vector.is_parallel(&other.direction_vector)
            || self.direction_vector.is_antiparallel(&other.direction_vector)
    }

    pub fn is_orthogonal(&self, other: &Self) -> bool {
        self.direction_vector.is_orthogonal(&other.direction_vector)
    }

    /// Intersection point of two coplanar lines.
    ///
    /// Parallel lines, coincident lines included, yield `None`. So do
    /// near-degenerate configurations in which the cross products
    /// underlying the closed-form solution lose all magnitude and the
    /// system cannot be solved reliably.
    ///
    /// # Panics
    ///
    /// Skew input (lines that neither intersect nor run parallel) violates
    /// the coplanarity precondition and panics rather than returning a
    /// wrong point.
    pub fn intersection(&self, other: &Self) -> Option<Point> {
        if self.is_parallel(other) {
            return None;
        }
        if self.contains_point(&other.point) {
            return Some(other.point);
        }
        if other.contains_point(&self.point) {
            return Some(self.point);
        }

        let connector = match Line::from_points(self.point, other.point) {
            Ok(line) => line,
            // Defining points nearly coincide; treat as degenerate.
            Err(_) => return None,
        };
        let c1 = cross3(&other.direction_vector, connector.direction_vector());
        let c2 = cross3(&other.direction_vector, &self.direction_vector);

        let c1_mag = c1.magnitude();
        let c2_mag = c2.magnitude();
        if near_zero(c1_mag) || near_zero(c2_mag) {
            return None;
        }

        let scaled = self.direction_vector.scale(c1_mag / c2_mag);
        let offset = Point::new(scaled[0], scaled[1], scaled[2]);
        if c1.is_parallel(&c2) {
            Some(self.point + offset)
        } else if c1.is_antiparallel(&c2) {
            Some(self.point - offset)
        } else {
            // The parallel and containment checks above exclude every
            // coplanar configuration that could land here.
            panic!("skew lines passed to intersection: {self} vs {other}");
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Line(direction_vector={}, point={})", self.direction_vector, self.point)
    }
}
