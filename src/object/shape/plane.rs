use super::Shape;
use crate::intersection::Intersection;
use crate::material::{Material, Surface};
use crate::Ray;
use cgmath::{InnerSpace, Vector3};

/// Rays closer to parallel than this count as missing the plane.
const PARALLEL_EPSILON: f64 = 1e-12;

#[derive(Clone, Debug)]
pub struct Plane {
    position: Vector3<f64>,
    normal: Vector3<f64>,
    surface: Surface,
    checker: [Vector3<f64>; 2],
}

impl Plane {
    pub fn new(position: Vector3<f64>, normal: Vector3<f64>, surface: Surface) -> Self {
        Self {
            position,
            normal: normal.normalize(),
            surface,
            checker: Self::default_checker(),
        }
    }

    pub fn default_checker() -> [Vector3<f64>; 2] {
        [
            Vector3::new(0.0, 200.0, 200.0) / 255.0,
            Vector3::new(200.0, 200.0, 200.0) / 255.0,
        ]
    }

    /// Colors of even and odd cells of the diffuse pattern.
    pub fn set_checker(&mut self, even: Vector3<f64>, odd: Vector3<f64>) {
        self.checker = [even, odd];
    }

    fn hit_distance(&self, ray: &Ray) -> Option<f64> {
        let d_dot_n = ray.direction.dot(self.normal);

        if d_dot_n.abs() < PARALLEL_EPSILON {
            return None;
        }

        Some((self.position - ray.origin).dot(self.normal) / d_dot_n)
    }
}

impl Shape for Plane {
    fn intersect<'s>(&'s self, intersection: &mut Intersection<'s>) -> bool {
        match self.hit_distance(&intersection.ray) {
            Some(t) => intersection.record(t, self),
            None => false,
        }
    }

    fn does_intersect(&self, ray: &Ray) -> bool {
        self.hit_distance(ray).map_or(false, |t| ray.contains(t))
    }

    fn normal_at(&self, _position: Vector3<f64>) -> Vector3<f64> {
        self.normal
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }

    fn color_at(&self, position: Vector3<f64>) -> Vector3<f64> {
        if self.surface.material != Material::Diffuse {
            return self.surface.color;
        }

        // cell parity in f64, far hits overflow integer indices
        let cell = (position.x.round() + position.z.round()).rem_euclid(2.0);

        self.checker[if cell == 1.0 { 1 } else { 0 }]
    }
}
