use crate::*;

/// Pinhole camera with an explicit view plane and clipping distances.
///
/// `direction` and `up` are normalized and orthogonalized at construction so
/// the screen axes derived from them are unit length.
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: P3,
    pub direction: V3,
    pub up: V3,
    pub view_plane_distance: f32,
    pub view_plane_width: f32,
    pub view_plane_height: f32,
    pub front_plane_distance: f32,
    pub back_plane_distance: f32,
}

impl Camera {
    pub fn new(
        position: P3,
        direction: V3,
        up: V3,
        view_plane_distance: f32,
        view_plane_width: f32,
        view_plane_height: f32,
        front_plane_distance: f32,
        back_plane_distance: f32,
    ) -> Self {
        assert!(view_plane_distance > 0.0);
        assert!(view_plane_width > 0.0 && view_plane_height > 0.0);
        assert!(0.0 <= front_plane_distance && front_plane_distance < back_plane_distance);
        assert!(direction.norm() > 0.0);
        let direction = direction.normalize();
        let up = up - direction * up.dot(&direction);
        assert!(up.norm() > 0.0, "up must not be parallel to direction");
        let up = up.normalize();
        Camera {
            position,
            direction,
            up,
            view_plane_distance,
            view_plane_width,
            view_plane_height,
            front_plane_distance,
            back_plane_distance,
        }
    }

    /// Camera aimed at `look_at`, view-plane height derived from the aspect
    /// ratio of the target image.
    pub fn look_at(
        position: P3,
        look_at: P3,
        up: V3,
        view_plane_distance: f32,
        view_plane_width: f32,
        aspect: f32,
    ) -> Self {
        Self::new(
            position,
            look_at - position,
            up,
            view_plane_distance,
            view_plane_width,
            view_plane_width / aspect,
            0.0,
            1e4,
        )
    }

    /// Screen-space horizontal axis. The `up x direction` orientation is
    /// fixed; flipping it mirrors the image.
    pub fn right(&self) -> V3 {
        self.up.cross(&self.direction)
    }

    /// Ray from the camera position through the view-plane point at offsets
    /// `(u, v)` from the plane center. The direction is left unnormalized.
    pub fn ray_to(&self, u: f32, v: f32) -> Ray {
        let plane_point = self.position
            + self.direction * self.view_plane_distance
            + self.right() * u
            + self.up * v;
        Ray::from_to(&self.position, &plane_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_are_unit_and_orthogonal() {
        let cam = Camera::new(
            P3::origin(),
            V3::new(0.0, 0.0, -2.0),
            V3::new(0.1, 1.0, 0.0),
            1.0,
            1.0,
            1.0,
            0.0,
            100.0,
        );
        assert!((cam.direction.norm() - 1.0).abs() < 1e-6);
        assert!((cam.up.norm() - 1.0).abs() < 1e-6);
        assert!(cam.up.dot(&cam.direction).abs() < 1e-6);
        assert!((cam.right().norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn center_ray_follows_the_view_direction() {
        let cam = Camera::new(
            P3::new(0.0, 0.0, 5.0),
            V3::new(0.0, 0.0, -1.0),
            V3::new(0.0, 1.0, 0.0),
            1.0,
            1.0,
            1.0,
            0.0,
            100.0,
        );
        let ray = cam.ray_to(0.0, 0.0);
        assert!((ray.origin - cam.position).norm() < 1e-6);
        assert!((ray.dir.normalize() - cam.direction).norm() < 1e-6);
    }
}
