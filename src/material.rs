use cgmath::Vector3;

/// Shading branch of a surface, decoded from the integer tag used in scene files.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Material {
    /// Tag 1, lit and shadowed, patterned when on a plane.
    Diffuse,
    /// Tag 2
    Mirror,
    /// Tag 3
    Refractive,
    /// Any other tag, drawn with the surface color and no lighting.
    Flat,
}

impl Material {
    pub fn tag(&self) -> i64 {
        match self {
            Material::Diffuse => 1,
            Material::Mirror => 2,
            Material::Refractive => 3,
            Material::Flat => 0,
        }
    }
}

impl From<i64> for Material {
    fn from(tag: i64) -> Self {
        match tag {
            1 => Material::Diffuse,
            2 => Material::Mirror,
            3 => Material::Refractive,
            _ => Material::Flat,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Surface {
    pub color: Vector3<f64>,
    pub material: Material,
}

impl Surface {
    pub fn new(color: Vector3<f64>, material: Material) -> Self {
        Self { color, material }
    }
}
