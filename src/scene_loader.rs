use std::path::Path;

use cgmath::{Deg, InnerSpace, Vector3};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::camera::PerspectiveCamera;
use crate::light::Light;
use crate::material::{Material, Surface};
use crate::object::shape::{Plane, Shape, Sphere};
use crate::scene::Scene;
use crate::tracer::RayTracer;

pub struct SceneLoader {}

impl SceneLoader {
    /// Reads a json5 scene description. The camera is built for the given
    /// image aspect ratio, so the loader needs the output size up front.
    pub fn load_from_path<P: AsRef<Path>>(
        path: P,
        aspect_ratio: f64,
    ) -> Result<LoadedScene, LoaderError> {
        let scene_str = std::fs::read_to_string(path)?;

        Self::load_from_str(&scene_str, aspect_ratio)
    }

    pub fn load_from_str(scene_str: &str, aspect_ratio: f64) -> Result<LoadedScene, LoaderError> {
        let json: SceneFile = json5::from_str(scene_str)?;

        let camera = load_camera(&json.camera, aspect_ratio)?;
        let light = Light::new(Vector3::from(json.light.location));

        let mut scene = Scene::new(Box::new(camera), light);

        for stub in &json.objects {
            scene = scene.push(build_shape(stub)?);
        }

        let settings = match &json.settings {
            Some(stub) => load_settings(stub)?,
            None => TracerSettings::default(),
        };

        debug!(
            "loaded scene with {} objects, light at {:?}, settings {:?}",
            scene.objects.len(),
            json.light.location,
            settings
        );

        Ok(LoadedScene { scene, settings })
    }
}

pub struct LoadedScene {
    pub scene: Scene,
    pub settings: TracerSettings,
}

/// Tracer overrides carried by a scene file. Unset fields keep the tracer's values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TracerSettings {
    pub max_depth: Option<usize>,
    pub miss_color: Option<Vector3<f64>>,
    pub shadow_bias: Option<f64>,
}

impl TracerSettings {
    pub fn apply(&self, mut tracer: RayTracer) -> RayTracer {
        if let Some(depth) = self.max_depth {
            tracer.max_depth = depth;
        }

        if let Some(color) = self.miss_color {
            tracer.miss_color = color;
        }

        if let Some(bias) = self.shadow_bias {
            tracer.shadow_bias = bias;
        }

        tracer
    }
}

fn load_camera(stub: &CameraStub, aspect_ratio: f64) -> Result<PerspectiveCamera, LoaderError> {
    let location = Vector3::from(stub.location);
    let target = Vector3::from(stub.target);
    let up = stub.up.map_or(Vector3::new(0.0, 1.0, 0.0), Vector3::from);

    if (target - location).magnitude2() == 0.0 {
        return Err(LoaderError::InvalidValue(
            "camera target equals its location".into(),
        ));
    }

    if up.magnitude2() == 0.0 {
        return Err(LoaderError::InvalidValue("camera up vector is zero".into()));
    }

    if !(stub.fov > 0.0 && stub.fov < 90.0) {
        return Err(LoaderError::InvalidValue(format!(
            "camera fov {} is outside (0, 90) degrees",
            stub.fov
        )));
    }

    if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
        return Err(LoaderError::InvalidValue(format!(
            "aspect ratio {aspect_ratio} is not positive"
        )));
    }

    Ok(PerspectiveCamera::new(
        location,
        target,
        up,
        Deg(stub.fov),
        aspect_ratio,
    ))
}

fn load_settings(stub: &SettingsStub) -> Result<TracerSettings, LoaderError> {
    if let Some(bias) = stub.shadow_bias {
        if !(bias >= 0.0 && bias.is_finite()) {
            return Err(LoaderError::InvalidValue(format!(
                "shadow bias {bias} must be a non-negative number"
            )));
        }
    }

    Ok(TracerSettings {
        max_depth: stub.max_depth,
        miss_color: stub.miss_color.map(Vector3::from),
        shadow_bias: stub.shadow_bias,
    })
}

fn build_shape(stub: &ObjectStub) -> Result<Box<dyn Shape>, LoaderError> {
    let surface = Surface::new(
        stub.color.map_or(Vector3::new(1.0, 1.0, 1.0), Vector3::from),
        Material::from(stub.material),
    );

    let obj = match (&stub.plane, &stub.sphere) {
        (Some(plane), None) => {
            let normal = Vector3::from(plane.normal);

            if normal.magnitude2() == 0.0 {
                return Err(LoaderError::InvalidValue("plane normal is zero".into()));
            }

            let mut shape = Plane::new(Vector3::from(plane.position), normal, surface);

            if let Some([even, odd]) = plane.checker {
                shape.set_checker(Vector3::from(even), Vector3::from(odd));
            }

            Box::new(shape) as Box<dyn Shape>
        }
        (None, Some(sphere)) => {
            if !(sphere.radius > 0.0 && sphere.radius.is_finite()) {
                return Err(LoaderError::InvalidValue(format!(
                    "sphere radius {} must be positive",
                    sphere.radius
                )));
            }

            let shape = Sphere::new(Vector3::from(sphere.center), sphere.radius, surface);

            Box::new(shape) as Box<dyn Shape>
        }
        (Some(_), Some(_)) => {
            return Err(LoaderError::InvalidValue(
                "object has more than one shape".into(),
            ))
        }
        (None, None) => return Err(LoaderError::KeyError("plane or sphere")),
    };

    Ok(obj)
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("{0}")]
    InputError(#[from] std::io::Error),
    #[error("{0}")]
    FormatError(#[from] json5::Error),
    #[error("no key '{0}' found")]
    KeyError(&'static str),
    #[error("{0}")]
    InvalidValue(String),
}

#[derive(Debug, Serialize, Deserialize)]
struct SceneFile {
    camera: CameraStub,
    light: LightStub,
    settings: Option<SettingsStub>,
    objects: Vec<ObjectStub>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CameraStub {
    location: [f64; 3],
    target: [f64; 3],
    up: Option<[f64; 3]>,
    /// Vertical half angle in degrees.
    fov: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct LightStub {
    location: [f64; 3],
}

#[derive(Debug, Serialize, Deserialize)]
struct SettingsStub {
    max_depth: Option<usize>,
    miss_color: Option<[f64; 3]>,
    shadow_bias: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ObjectStub {
    plane: Option<PlaneStub>,
    sphere: Option<SphereStub>,
    color: Option<[f64; 3]>,
    material: i64,
}

#[derive(Debug, Serialize, Deserialize)]
struct PlaneStub {
    position: [f64; 3],
    normal: [f64; 3],
    checker: Option<[[f64; 3]; 2]>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SphereStub {
    center: [f64; 3],
    radius: f64,
}
