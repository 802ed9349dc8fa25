//! Vector, point, quaternion and line primitives for 3D geometry, with
//! tolerant floating-point equality throughout.

mod compare;
mod error;
mod line;
mod line_segment;
mod path;
mod point;
mod quaternion;
mod vector;

pub use compare::{is_close, QUATERNION_ABS_TOL, REL_TOL, VECTOR_ABS_TOL, ZERO_ABS_TOL};
pub use error::{GeometryError, Result};
pub use line::Line;
pub use line_segment::LineSegment;
pub use path::{Path, Polygon};
pub use point::{Axis, Point};
pub use quaternion::Quaternion;
pub use vector::Vector;
