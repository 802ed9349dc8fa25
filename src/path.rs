//! Thin ordered-collection wrappers around [`Point`].

use crate::error::{GeometryError, Result};
use crate::Point;

/// Ordered sequence of points describing a route.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// A path needs at least two points.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 2 {
            return Err(GeometryError::InvalidArgument(
                "a path needs more than one point".into(),
            ));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn append(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Insert before `index`. Panics if `index` is past the end, like
    /// `Vec::insert`.
    pub fn insert(&mut self, index: usize, point: Point) {
        self.points.insert(index, point);
    }

    /// Remove the first point tolerantly equal to `point`. Returns whether
    /// anything was removed.
    pub fn remove(&mut self, point: &Point) -> bool {
        match self.points.iter().position(|p| p == point) {
            Some(index) => {
                self.points.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn pop(&mut self, index: usize) -> Option<Point> {
        if index < self.points.len() {
            Some(self.points.remove(index))
        } else {
            None
        }
    }
}

/// Closed figure described by its vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.vertices.iter()
    }

    /// Translate every vertex in place.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        for vertex in &mut self.vertices {
            vertex.translate(dx, dy, dz);
        }
    }
}
