use crate::{Ray, RayKind};
use cgmath::{Angle, InnerSpace, Rad, Vector3};
use log::warn;

pub trait Camera: Send + Sync {
    /// Primary ray through a point of the image plane, both coordinates in
    /// `[-1, 1]` with `y` pointing up.
    fn make_ray(&self, x: f64, y: f64) -> Ray;
}

#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    location: Vector3<f64>,
    forward: Vector3<f64>,
    right: Vector3<f64>,
    up: Vector3<f64>,
    half_width: f64,
    half_height: f64,
}

impl PerspectiveCamera {
    /// `half_fov` is the vertical half angle, `aspect_ratio` is width over height.
    pub fn new<A: Into<Rad<f64>>>(
        location: Vector3<f64>,
        target: Vector3<f64>,
        up: Vector3<f64>,
        half_fov: A,
        aspect_ratio: f64,
    ) -> Self {
        let forward = (target - location).normalize();

        let mut right = forward.cross(up);
        if right.magnitude2() < 1e-12 {
            warn!("camera gaze is parallel to the up vector, picking another up");
            let fallback = if forward.x.abs() < 0.9 {
                Vector3::new(1.0, 0.0, 0.0)
            } else {
                Vector3::new(0.0, 0.0, 1.0)
            };
            right = forward.cross(fallback);
        }
        let right = right.normalize();
        let up = right.cross(forward);

        let half_fov: Rad<f64> = half_fov.into();
        let half_height = half_fov.tan();

        Self {
            location,
            forward,
            right,
            up,
            half_width: half_height * aspect_ratio,
            half_height,
        }
    }
}

impl Camera for PerspectiveCamera {
    fn make_ray(&self, x: f64, y: f64) -> Ray {
        let direction = self.forward
            + self.right * (x * self.half_width)
            + self.up * (y * self.half_height);

        Ray::new(self.location, direction, RayKind::Primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Deg;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(
            Vector3::new(-5.0, 1.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Deg(25.0),
            800.0 / 640.0,
        )
    }

    #[test]
    fn center_of_screen_looks_at_target() {
        let ray = camera().make_ray(0.0, 0.0);

        assert_eq!(ray.origin, Vector3::new(-5.0, 1.0, 0.0));
        assert!((ray.direction - Vector3::new(1.0, 0.0, 0.0)).magnitude() < 1e-12);
        assert_eq!(ray.kind, RayKind::Primary);
    }

    #[test]
    fn basis_is_orthonormal() {
        let cam = camera();

        assert!(cam.forward.dot(cam.right).abs() < 1e-12);
        assert!(cam.forward.dot(cam.up).abs() < 1e-12);
        assert!(cam.right.dot(cam.up).abs() < 1e-12);
        assert!((cam.up.magnitude() - 1.0).abs() < 1e-12);
        assert!(cam.up.y > 0.0);
    }

    #[test]
    fn screen_edges_follow_field_of_view() {
        let cam = camera();

        let top = cam.make_ray(0.0, 1.0);
        let angle = top.direction.dot(cam.forward).acos();
        assert!((angle - 25f64.to_radians()).abs() < 1e-9);
        assert!(top.direction.y > 0.0);

        let right = cam.make_ray(1.0, 0.0);
        assert!(right.direction.dot(cam.right) > 0.0);
        assert!((right.direction.magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_up_still_gives_valid_rays() {
        let cam = PerspectiveCamera::new(
            Vector3::new(0.0, 10.0, 0.0),
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Deg(30.0),
            1.0,
        );

        let ray = cam.make_ray(0.5, -0.5);
        assert!(ray.direction.x.is_finite());
        assert!(ray.direction.y < 0.0);
    }
}
