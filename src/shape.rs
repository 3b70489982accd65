use crate::*;

/// Result of a ray/shape query over a distance window.
///
/// `valid` means the ray mathematically hits the surface somewhere along its
/// parameterization; `visible` additionally means the chosen root lies inside
/// the queried `[min_dist, max_dist]` window. `dist` and `pos` must only be
/// read when `valid` is set.
#[derive(Clone, Copy, Debug)]
pub struct Intersection {
    pub valid: bool,
    pub visible: bool,
    pub dist: f32,
    pub pos: P3,
}

impl Intersection {
    /// The "no hit" sentinel.
    pub fn none() -> Self {
        Intersection {
            valid: false,
            visible: false,
            dist: std::f32::INFINITY,
            pos: P3::origin(),
        }
    }

    fn at(ray: &Ray, dist: f32, min_dist: f32, max_dist: f32) -> Self {
        Intersection {
            valid: true,
            visible: min_dist <= dist && dist <= max_dist,
            dist,
            pos: ray.at(dist),
        }
    }
}

trait ShapeImpl {
    fn intersect(&self, ray: &Ray, min_dist: f32, max_dist: f32) -> Intersection;
    fn normal(&self, pos: &P3) -> V3;
}

pub mod shapes {
    use super::*;

    #[derive(Clone, Debug)]
    pub struct Sphere {
        pub center: P3,
        pub radius: f32,
    }

    impl Sphere {
        pub fn new(center: P3, radius: f32) -> Self {
            assert!(radius > 0.0);
            Sphere { center, radius }
        }
    }

    impl ShapeImpl for Sphere {
        fn intersect(&self, ray: &Ray, min_dist: f32, max_dist: f32) -> Intersection {
            let oc = ray.origin - self.center;
            let a = ray.dir.dot(&ray.dir);
            let b = 2.0 * ray.dir.dot(&oc);
            let c = oc.dot(&oc) - self.radius * self.radius;

            let det = b * b - 4.0 * a * c;
            if det < 0.0 {
                return Intersection::none();
            }

            let d1 = (-b + det.sqrt()) / (2.0 * a);
            let d2 = (-b - det.sqrt()) / (2.0 * a);
            // The smaller root is kept even when negative; callers filter
            // through the distance window.
            Intersection::at(ray, d1.min(d2), min_dist, max_dist)
        }

        fn normal(&self, pos: &P3) -> V3 {
            (pos - self.center).normalize()
        }
    }

    #[derive(Clone, Debug)]
    pub struct Plane {
        pub point: P3,
        normal: V3,
    }

    impl Plane {
        pub fn new(point: P3, normal: V3) -> Self {
            assert!(normal.norm() > 0.0);
            Plane {
                point,
                normal: normal.normalize(),
            }
        }
    }

    impl ShapeImpl for Plane {
        fn intersect(&self, ray: &Ray, min_dist: f32, max_dist: f32) -> Intersection {
            let denom = ray.dir.dot(&self.normal);
            if denom.abs() < 1e-8 {
                return Intersection::none();
            }
            let d = (self.point - ray.origin).dot(&self.normal) / denom;
            Intersection::at(ray, d, min_dist, max_dist)
        }

        fn normal(&self, _pos: &P3) -> V3 {
            self.normal
        }
    }
}

pub enum Shape {
    Sphere(shapes::Sphere),
    Plane(shapes::Plane),
}

impl_wrap_from_many! {Shape, shapes, [Sphere, Plane]}

use Shape::*;
impl Shape {
    pub fn intersect(&self, ray: &Ray, min_dist: f32, max_dist: f32) -> Intersection {
        match self {
            Sphere(s) => s.intersect(ray, min_dist, max_dist),
            Plane(s) => s.intersect(ray, min_dist, max_dist),
        }
    }

    pub fn normal(&self, pos: &P3) -> V3 {
        match self {
            Sphere(s) => s.normal(pos),
            Plane(s) => s.normal(pos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::shapes::{Plane, Sphere};
    use super::*;

    const INF: f32 = std::f32::INFINITY;

    #[test]
    fn axial_hit_has_expected_root() {
        let sphere = Shape::from(Sphere::new(P3::origin(), 1.0));
        let ray = Ray::new(P3::new(0.0, 0.0, 5.0), V3::new(0.0, 0.0, -1.0));
        let isect = sphere.intersect(&ray, 0.0, INF);
        assert!(isect.valid && isect.visible);
        assert!((isect.dist - 4.0).abs() < 1e-5);
        assert!((isect.pos - P3::new(0.0, 0.0, 1.0)).norm() < 1e-5);
    }

    #[test]
    fn unnormalized_direction_reports_parameter_not_distance() {
        let sphere = Shape::from(Sphere::new(P3::origin(), 1.0));
        let ray = Ray::new(P3::new(0.0, 0.0, 5.0), V3::new(0.0, 0.0, -2.0));
        let isect = sphere.intersect(&ray, 0.0, INF);
        assert!(isect.valid);
        assert!((isect.dist - 2.0).abs() < 1e-5);
    }

    #[test]
    fn miss_is_invalid() {
        let sphere = Shape::from(Sphere::new(P3::origin(), 1.0));
        let ray = Ray::new(P3::new(0.0, 3.0, 5.0), V3::new(0.0, 0.0, -1.0));
        let isect = sphere.intersect(&ray, 0.0, INF);
        assert!(!isect.valid && !isect.visible);
    }

    #[test]
    fn hit_outside_window_is_valid_but_not_visible() {
        let sphere = Shape::from(Sphere::new(P3::origin(), 1.0));
        let ray = Ray::new(P3::new(0.0, 0.0, 5.0), V3::new(0.0, 0.0, -1.0));
        let isect = sphere.intersect(&ray, 0.0, 3.5);
        assert!(isect.valid);
        assert!(!isect.visible);
    }

    #[test]
    fn smaller_root_wins_even_when_negative() {
        // Ray starting inside the sphere: roots at t = -1 and t = 1, the
        // negative one is reported and the window filters it out.
        let sphere = Shape::from(Sphere::new(P3::origin(), 1.0));
        let ray = Ray::new(P3::origin(), V3::new(0.0, 0.0, 1.0));
        let isect = sphere.intersect(&ray, 0.0, INF);
        assert!(isect.valid);
        assert!(!isect.visible);
        assert!((isect.dist + 1.0).abs() < 1e-5);
    }

    #[test]
    fn sphere_normal_points_outward() {
        let sphere = Shape::from(Sphere::new(P3::new(1.0, 0.0, 0.0), 2.0));
        let n = sphere.normal(&P3::new(3.0, 0.0, 0.0));
        assert!((n - V3::new(1.0, 0.0, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn plane_hit_and_parallel_miss() {
        let plane = Shape::from(Plane::new(P3::new(0.0, -1.0, 0.0), V3::new(0.0, 1.0, 0.0)));
        let down = Ray::new(P3::origin(), V3::new(0.0, -1.0, 0.0));
        let isect = plane.intersect(&down, 0.0, INF);
        assert!(isect.valid && isect.visible);
        assert!((isect.dist - 1.0).abs() < 1e-6);

        let sideways = Ray::new(P3::origin(), V3::new(1.0, 0.0, 0.0));
        assert!(!plane.intersect(&sideways, 0.0, INF).valid);
    }

    #[test]
    fn normalize_is_idempotent() {
        let v = V3::new(0.3, -1.2, 2.5).normalize();
        assert!((v.normalize() - v).norm() < 1e-6);
        assert!((v.norm() - 1.0).abs() < 1e-6);
    }
}
