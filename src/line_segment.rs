use std::fmt;

use crate::error::{GeometryError, Result};
use crate::{Point, Vector};

/// Bounded line between two distinct endpoints.
#[derive(Clone, Copy, Debug)]
pub struct LineSegment {
    a: Point,
    b: Point,
}

impl LineSegment {
    /// Fails with `InvalidArgument` if the endpoints are tolerantly equal.
    pub fn new(a: Point, b: Point) -> Result<Self> {
        if a == b {
            return Err(GeometryError::InvalidArgument(format!(
                "endpoints {a} and {b} coincide"
            )));
        }
        Ok(Self { a, b })
    }

    pub fn a(&self) -> &Point {
        &self.a
    }

    pub fn b(&self) -> &Point {
        &self.b
    }

    /// Derived on demand as `b - a`.
    pub fn direction_vector(&self) -> Vector {
        (self.b - self.a).to_vector()
    }

    /// True if `point` lies on the segment, endpoints included.
    pub fn contains_point(&self, point: &Point) -> bool {
        Point::check_collinear_ordered(&self.a, point, &self.b)
    }

    /// Euclidean distance between the endpoints.
    pub fn length(&self) -> f64 {
        self.a.distance_to(&self.b)
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LineSegment(a={}, b={})", self.a, self.b)
    }
}
