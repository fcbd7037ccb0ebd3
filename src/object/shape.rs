use crate::intersection::Intersection;
use crate::material::Surface;
use crate::math::{offset_origin, reflect, refract};
use crate::{Ray, RayKind};
use cgmath::Vector3;

mod composite;
mod plane;
mod sphere;

pub use composite::Composite;
pub use plane::Plane;
pub use sphere::Sphere;

/// Offset applied along the normal to the origin of rays spawned at a hit point.
pub const SURFACE_BIAS: f64 = 0.0001;

pub trait Shape: Send + Sync {
    /// Narrows `intersection` to this shape if it is hit strictly closer than
    /// the current record. Returns whether the record changed.
    fn intersect<'s>(&'s self, intersection: &mut Intersection<'s>) -> bool;

    /// Existence-only test inside the ray's own `(t_min, t_max)` window.
    fn does_intersect(&self, ray: &Ray) -> bool;

    /// Outward unit normal at a point on the surface.
    fn normal_at(&self, position: Vector3<f64>) -> Vector3<f64>;

    fn surface(&self) -> &Surface;

    /// Unlit color of the surface at `position`, patterns are resolved here.
    fn color_at(&self, _position: Vector3<f64>) -> Vector3<f64> {
        self.surface().color
    }

    fn return_normal(&self, intersection: &Intersection) -> Ray {
        let position = intersection.position();

        Ray::new(position, self.normal_at(position), RayKind::Secondary)
    }

    fn make_reflected_ray(&self, intersection: &Intersection) -> Ray {
        let position = intersection.position();
        let normal = self.normal_at(position);
        let direction = reflect(intersection.ray.direction, normal);

        Ray::new(
            offset_origin(position, normal, direction, SURFACE_BIAS),
            direction,
            RayKind::Secondary,
        )
    }

    /// Falls back to the mirror direction on total internal reflection.
    fn make_refraction_ray(&self, intersection: &Intersection) -> Ray {
        let position = intersection.position();
        let normal = self.normal_at(position);

        let direction = match refract(intersection.ray.direction, normal) {
            Some(direction) => direction,
            None => return self.make_reflected_ray(intersection),
        };

        Ray::new(
            offset_origin(position, normal, direction, SURFACE_BIAS),
            direction,
            RayKind::Secondary,
        )
    }
}
