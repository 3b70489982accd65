use crate::camera::Camera;
use crate::material::Material;
use crate::object::SimpleObject;
use crate::scene::{Light, Scene};
use crate::shape::shapes::{Plane, Sphere};
use crate::*;

/// Built-in scenes, selectable by name from the CLI.
pub fn by_name(name: &str, aspect: f32) -> Option<(Scene, Camera)> {
    match name {
        "single" => Some(single(aspect)),
        "trio" => Some(trio(aspect)),
        _ => None,
    }
}

pub const SCENE_NAMES: &[&str] = &["single", "trio"];

/// Unit sphere at the origin, one white light at the camera.
pub fn single(aspect: f32) -> (Scene, Camera) {
    let origin = P3::new(0.0, 0.0, 5.0);
    let objects = vec![SimpleObject {
        shape: Sphere::new(P3::origin(), 1.0).into(),
        material: Material::glossy(RGBA::rgb(0.8, 0.2, 0.2), 30.0),
        color: RGBA::rgb(0.8, 0.2, 0.2),
    }];
    let lights = vec![Light::white(origin, 1.0)];

    let camera = Camera::look_at(origin, P3::origin(), V3::new(0.0, 1.0, 0.0), 1.0, 1.0, aspect);
    (Scene::new(objects, lights), camera)
}

/// Three spheres over a ground plane, two lights.
pub fn trio(aspect: f32) -> (Scene, Camera) {
    let objects = vec![
        SimpleObject {
            shape: Sphere::new(P3::new(-2.2, 0.0, 0.0), 1.0).into(),
            material: Material::glossy(RGBA::rgb(0.9, 0.3, 0.2), 50.0),
            color: RGBA::rgb(0.9, 0.3, 0.2),
        },
        SimpleObject {
            shape: Sphere::new(P3::new(0.0, 0.0, -1.0), 1.0).into(),
            material: Material::glossy(RGBA::rgb(0.2, 0.7, 0.3), 10.0),
            color: RGBA::rgb(0.2, 0.7, 0.3),
        },
        SimpleObject {
            shape: Sphere::new(P3::new(2.2, 0.0, 0.0), 1.0).into(),
            material: Material::matte(RGBA::rgb(0.25, 0.35, 0.9)),
            color: RGBA::rgb(0.25, 0.35, 0.9),
        },
        SimpleObject {
            shape: Plane::new(P3::new(0.0, -1.0, 0.0), V3::new(0.0, 1.0, 0.0)).into(),
            material: Material::matte(RGBA::rgb(0.6, 0.6, 0.6)),
            color: RGBA::rgb(0.6, 0.6, 0.6),
        },
    ];
    let lights = vec![
        Light::white(P3::new(4.0, 6.0, 8.0), 0.8),
        Light {
            position: P3::new(-6.0, 3.0, 4.0),
            ambient: RGBA::rgb(0.1, 0.1, 0.1),
            diffuse: RGBA::rgb(0.4, 0.4, 0.7),
            specular: RGBA::rgb(0.4, 0.4, 0.7),
            intensity: 0.6,
        },
    ];

    let camera = Camera::look_at(
        P3::new(0.0, 1.5, 8.0),
        P3::new(0.0, 0.0, 0.0),
        V3::new(0.0, 1.0, 0.0),
        1.0,
        1.2,
        aspect,
    );
    (Scene::new(objects, lights), camera)
}
