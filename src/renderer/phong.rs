use crate::material::Material;
use crate::object::ObjectHit;
use crate::scene::{Light, Scene};
use crate::*;

/// Local illumination for a visible hit, summed over the scene's lights.
///
/// A fully occluded light contributes nothing; if no light contributes
/// anything at all the material's bare ambient color is returned instead,
/// so surfaces never come out pure black (the "ambient floor" rule).
pub fn shade(scene: &Scene, eye: &P3, hit: &ObjectHit) -> RGBA {
    let n = hit.object.shape.normal(&hit.isect.pos);
    let e = (eye - hit.isect.pos).normalize();
    let material = &hit.object.material;

    let mut color = RGBA::none();
    for light in scene.lights() {
        color += light_term(scene, &hit.isect.pos, &n, &e, material, light);
    }

    if color.is_zero() {
        material.ambient
    } else {
        color
    }
}

fn light_term(
    scene: &Scene,
    pos: &P3,
    n: &V3,
    e: &V3,
    material: &Material,
    light: &Light,
) -> RGBA {
    if !scene.is_lit(pos, light) {
        return RGBA::none();
    }

    let t = (light.position - pos).normalize();
    let r = (n * (2.0 * n.dot(&t)) - t).normalize();

    let mut color = material.ambient * light.ambient;
    let n_dot_t = n.dot(&t);
    if n_dot_t > 0.0 {
        color += material.diffuse * light.diffuse * n_dot_t;
    }
    let e_dot_r = e.dot(&r);
    if e_dot_r > 0.0 {
        color += material.specular * light.specular * e_dot_r.powf(material.shininess);
    }

    color * light.intensity
}
