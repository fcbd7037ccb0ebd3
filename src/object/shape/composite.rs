use super::Shape;
use crate::intersection::Intersection;
use crate::Ray;

/// Unordered collection of shapes answering intersection queries as a whole.
///
/// Per-surface queries (normal, reflection, refraction) are not properties of
/// the collection, they are answered by the member recorded in the
/// intersection.
#[derive(Default)]
pub struct Composite {
    shapes: Vec<Box<dyn Shape>>,
}

impl Composite {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    pub fn push(mut self, shape: Box<dyn Shape>) -> Self {
        self.shapes.push(shape);

        self
    }

    pub fn add(&mut self, shape: Box<dyn Shape>) {
        self.shapes.push(shape);
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn shapes(&self) -> impl Iterator<Item = &dyn Shape> {
        self.shapes.iter().map(|s| s.as_ref() as &dyn Shape)
    }

    /// Tests every member against the same record, true if any of them narrowed it.
    pub fn intersect<'s>(&'s self, intersection: &mut Intersection<'s>) -> bool {
        let mut hit = false;

        for shape in &self.shapes {
            if shape.intersect(intersection) {
                hit = true;
            }
        }

        hit
    }

    pub fn does_intersect(&self, ray: &Ray) -> bool {
        self.shapes.iter().any(|s| s.does_intersect(ray))
    }

    pub fn return_normal(&self, intersection: &Intersection) -> Option<Ray> {
        intersection.shape.map(|s| s.return_normal(intersection))
    }
}
