use crate::math::offset_origin;
use crate::{Ray, RayKind};
use cgmath::{InnerSpace, Vector3};

/// Point light. It carries no color or falloff, only visibility and direction matter.
#[derive(Debug, Copy, Clone)]
pub struct Light {
    pub location: Vector3<f64>,
}

impl Light {
    pub fn new(location: Vector3<f64>) -> Self {
        Self { location }
    }

    /// Occlusion ray from a surface point towards the light.
    ///
    /// The origin is pushed off the surface by `bias` and the ray ends at the
    /// light, so geometry behind the light never casts a shadow.
    pub fn shadow_ray(&self, position: Vector3<f64>, normal: Vector3<f64>, bias: f64) -> Ray {
        let origin = offset_origin(position, normal, self.location - position, bias);
        let to_light = self.location - origin;

        Ray::new(origin, to_light, RayKind::Shadow).with_t_max(to_light.magnitude())
    }
}
