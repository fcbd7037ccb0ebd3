use super::Shape;
use crate::intersection::Intersection;
use crate::material::Surface;
use crate::Ray;
use cgmath::{InnerSpace, Vector3};

#[derive(Clone, Debug)]
pub struct Sphere {
    center: Vector3<f64>,
    radius: f64,
    surface: Surface,
}

impl Sphere {
    pub fn new(center: Vector3<f64>, radius: f64, surface: Surface) -> Self {
        let mut sphere = Self {
            center,
            radius: 1.0,
            surface,
        };

        sphere.set_radius(radius);
        sphere
    }

    pub fn set_radius(&mut self, radius: f64) {
        if radius <= 0.0 {
            panic!("Sphere radius must be positive number, got {}", radius);
        }

        self.radius = radius;
    }

    pub fn center(&self) -> Vector3<f64> {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Both roots of the ray/sphere quadratic, nearest first.
    pub fn roots(&self, ray: &Ray) -> Option<(f64, f64)> {
        let origin = ray.origin - self.center;

        let a = ray.direction.magnitude2();
        let b = 2.0 * ray.direction.dot(origin);
        let c = origin.magnitude2() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt = discriminant.sqrt();

        Some(((-b - sqrt) / (2.0 * a), (-b + sqrt) / (2.0 * a)))
    }
}

impl Shape for Sphere {
    fn intersect<'s>(&'s self, intersection: &mut Intersection<'s>) -> bool {
        let (t1, t2) = match self.roots(&intersection.ray) {
            Some(roots) => roots,
            None => return false,
        };

        if intersection.accepts(t1) {
            intersection.record(t1, self)
        } else {
            intersection.record(t2, self)
        }
    }

    fn does_intersect(&self, ray: &Ray) -> bool {
        match self.roots(ray) {
            Some((t1, t2)) => ray.contains(t1) || ray.contains(t2),
            None => false,
        }
    }

    fn normal_at(&self, position: Vector3<f64>) -> Vector3<f64> {
        (position - self.center).normalize()
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }
}
