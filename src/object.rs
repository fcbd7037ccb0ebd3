pub mod shape;

pub use shape::{Composite, Plane, Shape, Sphere};
