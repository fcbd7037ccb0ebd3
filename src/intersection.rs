use crate::object::shape::Shape;
use crate::Ray;
use cgmath::{Vector3, Zero};

/// Nearest hit found so far along `ray`.
///
/// Shapes only ever narrow `t`, so testing any number of shapes against the
/// same record leaves it holding the closest one.
pub struct Intersection<'s> {
    pub ray: Ray,
    pub t: f64,
    pub shape: Option<&'s dyn Shape>,
    pub color: Vector3<f64>,
}

impl<'s> Intersection<'s> {
    pub fn new(ray: Ray) -> Self {
        Self {
            t: ray.t_max,
            ray,
            shape: None,
            color: Vector3::zero(),
        }
    }

    pub fn position(&self) -> Vector3<f64> {
        self.ray.at(self.t)
    }

    pub fn is_hit(&self) -> bool {
        self.shape.is_some()
    }

    /// Whether `t` lies strictly inside `(t_min, current t)`.
    pub fn accepts(&self, t: f64) -> bool {
        t > self.ray.t_min && t < self.t
    }

    /// Records `shape` at `t` if that is a strict improvement.
    pub fn record(&mut self, t: f64, shape: &'s dyn Shape) -> bool {
        if !self.accepts(t) {
            return false;
        }

        self.t = t;
        self.shape = Some(shape);
        self.color = shape.color_at(self.position());

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Material, Surface};
    use crate::object::shape::Sphere;
    use crate::RayKind;

    fn ray() -> Ray {
        Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, -1.0), RayKind::Primary)
    }

    #[test]
    fn starts_empty_at_t_max() {
        let isect = Intersection::new(ray().with_t_max(10.0));

        assert_eq!(isect.t, 10.0);
        assert!(!isect.is_hit());
    }

    #[test]
    fn only_strict_improvements_are_recorded() {
        let sphere = Sphere::new(
            Vector3::new(0.0, 0.0, -5.0),
            1.0,
            Surface::new(Vector3::new(1.0, 0.0, 0.0), Material::Diffuse),
        );
        let mut isect = Intersection::new(ray());

        assert!(isect.record(4.0, &sphere));
        assert!(!isect.record(4.0, &sphere));
        assert!(!isect.record(6.0, &sphere));
        assert!(!isect.record(0.0, &sphere));
        assert!(isect.record(3.0, &sphere));

        assert_eq!(isect.t, 3.0);
        assert_eq!(isect.position(), Vector3::new(0.0, 0.0, -3.0));
        assert_eq!(isect.color, Vector3::new(1.0, 0.0, 0.0));
    }
}
