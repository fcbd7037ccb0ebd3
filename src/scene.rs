use crate::camera::{Camera, PerspectiveCamera};
use crate::light::Light;
use crate::material::{Material, Surface};
use crate::object::shape::{Composite, Plane, Shape, Sphere};
use cgmath::{Deg, Vector3, Zero};

/// Everything a render reads. Shared immutably between render threads.
pub struct Scene {
    pub objects: Composite,
    pub light: Light,
    pub camera: Box<dyn Camera>,
}

impl Scene {
    pub fn new(camera: Box<dyn Camera>, light: Light) -> Self {
        Self {
            objects: Composite::new(),
            light,
            camera,
        }
    }

    pub fn push(mut self, item: Box<dyn Shape>) -> Self {
        self.objects.add(item);

        self
    }

    /// Checkered floor, a red diffuse sphere and a blue mirror sphere.
    pub fn default_scene(aspect_ratio: f64) -> Self {
        let camera = PerspectiveCamera::new(
            Vector3::new(-5.0, 1.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Deg(25.0),
            aspect_ratio,
        );
        let light = Light::new(Vector3::new(-6.0, 10.0, 5.0));

        let floor = Plane::new(
            Vector3::zero(),
            Vector3::new(0.0, 1.0, 0.0),
            Surface::new(Vector3::new(0.0, 0.0, 0.0), Material::Diffuse),
        );
        let red = Sphere::new(
            Vector3::new(2.0, 1.0, -1.0),
            1.0,
            Surface::new(Vector3::new(1.0, 0.0, 0.0), Material::Diffuse),
        );
        let blue = Sphere::new(
            Vector3::new(5.5, 1.0, 1.5),
            1.0,
            Surface::new(Vector3::new(0.0, 0.0, 1.0), Material::Mirror),
        );

        Scene::new(Box::new(camera), light)
            .push(Box::new(floor))
            .push(Box::new(red))
            .push(Box::new(blue))
    }
}
