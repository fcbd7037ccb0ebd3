use cgmath::{InnerSpace, Vector3};

pub mod camera;
pub mod frame;
pub mod framebuffer;
pub mod intersection;
pub mod light;
pub mod material;
pub mod math;
pub mod object;
pub mod renderer;
pub mod scene;
pub mod scene_loader;
pub mod tracer;

/// Smallest parametric distance accepted as a hit, keeps rays from hitting their own origin.
pub const RAY_T_MIN: f64 = 0.0001;

/// Upper bound of a fresh ray.
pub const RAY_T_MAX: f64 = f64::INFINITY;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RayKind {
    Primary,
    Shadow,
    Secondary,
}

#[derive(Debug, Copy, Clone)]
pub struct Ray {
    pub origin: Vector3<f64>,
    pub direction: Vector3<f64>,
    pub t_min: f64,
    pub t_max: f64,
    pub kind: RayKind,
}

impl Ray {
    /// Direction is normalized here, everything downstream treats it as a unit vector.
    pub fn new(origin: Vector3<f64>, direction: Vector3<f64>, kind: RayKind) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
            t_min: RAY_T_MIN,
            t_max: RAY_T_MAX,
            kind,
        }
    }

    pub fn with_t_max(mut self, t_max: f64) -> Self {
        self.t_max = t_max;
        self
    }

    pub fn at(&self, t: f64) -> Vector3<f64> {
        self.origin + self.direction * t
    }

    pub fn contains(&self, t: f64) -> bool {
        t > self.t_min && t < self.t_max
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RenderMode {
    Shaded,
    Normal,
    Depth,
}
