use crate::*;

/// Phong reflectance parameters, owned by an object and read-only during a
/// render.
#[derive(Clone, Debug)]
pub struct Material {
    pub ambient: RGBA,
    pub diffuse: RGBA,
    pub specular: RGBA,
    pub shininess: f32,
}

impl Material {
    pub fn new(ambient: RGBA, diffuse: RGBA, specular: RGBA, shininess: f32) -> Self {
        assert!(shininess >= 0.0);
        Material {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    /// Matte material with a dim ambient floor derived from the diffuse
    /// color.
    pub fn matte(diffuse: RGBA) -> Self {
        Self::new(diffuse * 0.1, diffuse, RGBA::none(), 0.0)
    }

    /// Glossy material with a white highlight.
    pub fn glossy(diffuse: RGBA, shininess: f32) -> Self {
        Self::new(diffuse * 0.1, diffuse, RGBA::all(1.0), shininess)
    }
}
