use crate::object::{ObjectHit, ObjectList, SimpleObject};
use crate::*;

/// Point light with separate ambient/diffuse/specular contributions.
#[derive(Clone, Debug)]
pub struct Light {
    pub position: P3,
    pub ambient: RGBA,
    pub diffuse: RGBA,
    pub specular: RGBA,
    pub intensity: f32,
}

impl Light {
    pub fn white(position: P3, intensity: f32) -> Self {
        Light {
            position,
            ambient: RGBA::all(1.0),
            diffuse: RGBA::all(1.0),
            specular: RGBA::all(1.0),
            intensity,
        }
    }
}

/// Offset keeping shadow rays off the surface they start from and short of
/// the light itself.
pub const SHADOW_BIAS: f32 = 1e-3;

pub struct Scene {
    objects: ObjectList,
    lights: Vec<Light>,
}

impl Scene {
    pub fn new(objects: Vec<SimpleObject>, lights: Vec<Light>) -> Self {
        Scene {
            objects: ObjectList::new(objects),
            lights,
        }
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn first_hit(&self, ray: &Ray, min_dist: f32, max_dist: f32) -> Option<ObjectHit> {
        self.objects.first_hit(ray, min_dist, max_dist)
    }

    /// Shadow test: true iff no occluder sits strictly between the surface
    /// point and the light.
    ///
    /// The ray is cast from the point toward the light with a normalized
    /// direction, so the window is in distance units and its upper bound
    /// stays short of the light position.
    pub fn is_lit(&self, point: &P3, light: &Light) -> bool {
        let to_light = light.position - point;
        let dist = to_light.norm();
        let ray = Ray::new(*point, to_light / dist);
        self.first_hit(&ray, SHADOW_BIAS, dist - SHADOW_BIAS).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::shape::shapes::Sphere;

    fn blocker() -> SimpleObject {
        SimpleObject {
            shape: Sphere::new(P3::new(0.0, 0.0, 5.0), 1.0).into(),
            material: Material::matte(RGBA::all(0.5)),
            color: RGBA::rgb(0.5, 0.5, 0.5),
        }
    }

    #[test]
    fn point_behind_sphere_is_shadowed() {
        let light = Light::white(P3::new(0.0, 0.0, 10.0), 1.0);
        let point = P3::origin();

        let scene = Scene::new(vec![blocker()], vec![light.clone()]);
        assert!(!scene.is_lit(&point, &light));

        let empty = Scene::new(vec![], vec![light.clone()]);
        assert!(empty.is_lit(&point, &light));
    }

    #[test]
    fn occluder_behind_the_light_does_not_shadow() {
        let light = Light::white(P3::new(0.0, 0.0, 2.0), 1.0);
        let scene = Scene::new(vec![blocker()], vec![light.clone()]);
        assert!(scene.is_lit(&P3::origin(), &light));
    }

    #[test]
    fn own_surface_does_not_self_shadow() {
        let sphere = SimpleObject {
            shape: Sphere::new(P3::origin(), 1.0).into(),
            material: Material::matte(RGBA::all(0.5)),
            color: RGBA::rgb(0.5, 0.5, 0.5),
        };
        let light = Light::white(P3::new(0.0, 0.0, 5.0), 1.0);
        let scene = Scene::new(vec![sphere], vec![light.clone()]);
        // Point on the sphere facing the light.
        assert!(scene.is_lit(&P3::new(0.0, 0.0, 1.0), &light));
    }
}
