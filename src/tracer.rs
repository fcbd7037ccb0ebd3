use crate::intersection::Intersection;
use crate::material::Material;
use crate::math::face_forward;
use crate::object::shape::SURFACE_BIAS;
use crate::scene::Scene;
use crate::{Ray, RenderMode};
use cgmath::{Array, InnerSpace, Vector3, Zero};

/// Resolves the color seen along rays cast into a [`Scene`].
///
/// Holds only settings, every call reads the scene immutably and returns its
/// color, so one tracer can be shared by any number of render threads.
#[derive(Clone, Debug)]
pub struct RayTracer {
    pub mode: RenderMode,
    /// Number of mirror or refraction bounces followed before giving up.
    pub max_depth: usize,
    /// Returned by secondary rays that hit nothing or run out of depth.
    pub miss_color: Vector3<f64>,
    /// Returned by primary rays that hit nothing.
    pub background: Vector3<f64>,
    pub shadow_bias: f64,
}

impl RayTracer {
    pub fn color_for_pixel(&self, scene: &Scene, x: f64, y: f64) -> RayResult {
        self.color_for_ray(scene.camera.make_ray(x, y), scene)
    }

    /// Full evaluation of a primary ray: nearest hit, shadow test, shading.
    pub fn color_for_ray(&self, ray: Ray, scene: &Scene) -> RayResult {
        let mut intersection = Intersection::new(ray);

        if !scene.objects.intersect(&mut intersection) {
            return RayResult {
                color: self.background,
                depth: 0,
                hit: false,
            };
        }

        match self.mode {
            RenderMode::Shaded => self.shade(&intersection, scene),
            RenderMode::Normal => {
                let normal = scene
                    .objects
                    .return_normal(&intersection)
                    .map_or(Vector3::zero(), |n| n.direction);

                RayResult {
                    color: normal * 0.5 + Vector3::from_value(0.5),
                    depth: 0,
                    hit: true,
                }
            }
            RenderMode::Depth => {
                let value = 1.0 / (1.0 + 0.1 * intersection.t);

                RayResult {
                    color: Vector3::from_value(value),
                    depth: 0,
                    hit: true,
                }
            }
        }
    }

    /// Lit color of a primary hit.
    ///
    /// An occluded light turns the point black whatever its material.
    pub fn shade(&self, intersection: &Intersection, scene: &Scene) -> RayResult {
        let shape = match intersection.shape {
            Some(shape) => shape,
            None => return self.miss(0),
        };

        let position = intersection.position();
        let normal = face_forward(shape.normal_at(position), intersection.ray.direction);

        let shadow_ray = scene.light.shadow_ray(position, normal, self.shadow_bias);
        if scene.objects.does_intersect(&shadow_ray) {
            return RayResult {
                color: Vector3::zero(),
                depth: 0,
                hit: true,
            };
        }

        let lambert = normal.dot(shadow_ray.direction).max(0.0);
        let surface = shape.surface();

        let base = match surface.material {
            Material::Diffuse => RayResult {
                color: shape.color_at(position),
                depth: 0,
                hit: true,
            },
            Material::Mirror => self.trace(shape.make_reflected_ray(intersection), scene, 1),
            Material::Refractive => self.trace(shape.make_refraction_ray(intersection), scene, 1),
            Material::Flat => {
                return RayResult {
                    color: clamp_color(surface.color),
                    depth: 0,
                    hit: true,
                }
            }
        };

        RayResult {
            color: clamp_color(base.color * lambert),
            depth: base.depth,
            hit: true,
        }
    }

    /// Unlit color seen along a secondary ray, `depth` bounces after the primary hit.
    pub fn trace(&self, ray: Ray, scene: &Scene, depth: usize) -> RayResult {
        if depth > self.max_depth {
            return self.miss(depth);
        }

        let mut intersection = Intersection::new(ray);
        scene.objects.intersect(&mut intersection);

        let shape = match intersection.shape {
            Some(shape) => shape,
            None => return self.miss(depth),
        };

        let surface = shape.surface();

        match surface.material {
            Material::Diffuse => RayResult {
                color: shape.color_at(intersection.position()),
                depth,
                hit: true,
            },
            Material::Mirror => {
                self.trace(shape.make_reflected_ray(&intersection), scene, depth + 1)
            }
            Material::Refractive => {
                self.trace(shape.make_refraction_ray(&intersection), scene, depth + 1)
            }
            Material::Flat => RayResult {
                color: surface.color,
                depth,
                hit: true,
            },
        }
    }

    fn miss(&self, depth: usize) -> RayResult {
        RayResult {
            color: self.miss_color,
            depth,
            hit: false,
        }
    }
}

impl Default for RayTracer {
    fn default() -> Self {
        Self {
            mode: RenderMode::Shaded,
            max_depth: 6,
            miss_color: Vector3::from_value(20.0 / 255.0),
            background: Vector3::zero(),
            shadow_bias: SURFACE_BIAS,
        }
    }
}

pub struct RayResult {
    pub color: Vector3<f64>,
    /// Deepest bounce visited while resolving the color.
    pub depth: usize,
    pub hit: bool,
}

pub fn clamp_color(color: Vector3<f64>) -> Vector3<f64> {
    color.map(|c| if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) })
}
