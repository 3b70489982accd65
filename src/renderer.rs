use crate::camera::Camera;
use crate::image::Image;
use crate::scene::Scene;
use crate::*;

use log::*;

pub mod phong;

#[derive(Clone, Copy, Debug)]
pub enum RenderMode {
    /// Per-light Phong shading with shadow tests.
    Shaded,
    /// Each object's flat color, no lighting.
    Flat,
}

#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    pub nthread: usize,
    pub mode: RenderMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            nthread: num_cpus::get(),
            mode: RenderMode::Shaded,
        }
    }
}

/// Map a pixel index to its offset on the view plane, centered on zero.
pub fn image_to_view_plane(n: u32, img_size: u32, view_plane_size: f32) -> f32 {
    n as f32 * view_plane_size / img_size as f32 - view_plane_size / 2.0
}

pub struct Renderer;

impl Renderer {
    /// Fill `image` by casting one ray per pixel.
    ///
    /// Rows are split into contiguous bands, one worker thread per band.
    /// Workers read only the immutable scene and camera and each writes
    /// exclusively to its own band, so no locking is involved.
    pub fn render(&self, scene: &Scene, camera: &Camera, image: &mut Image, config: RenderConfig) {
        let w = image.w();
        let h = image.h();
        let nthread = config.nthread.max(1);
        debug!("rendering {}x{} on {} threads", w, h, nthread);

        let bands = image.row_bands_mut(nthread);
        std::thread::scope(|s| {
            for (first_row, band) in bands {
                s.spawn(move || {
                    Self::render_band(scene, camera, config.mode, w, h, first_row, band);
                });
            }
        });
    }

    fn render_band(
        scene: &Scene,
        camera: &Camera,
        mode: RenderMode,
        w: u32,
        h: u32,
        first_row: u32,
        band: &mut [RGBA],
    ) {
        let background = RGBA::none();
        for (i, pixel) in band.iter_mut().enumerate() {
            let x = i as u32 % w;
            let y = first_row + i as u32 / w;

            let u = image_to_view_plane(x, w, camera.view_plane_width);
            let v = image_to_view_plane(y, h, camera.view_plane_height);
            let ray = camera.ray_to(u, v);

            let hit = scene.first_hit(
                &ray,
                camera.front_plane_distance,
                camera.back_plane_distance,
            );
            let color = match (&hit, mode) {
                (None, _) => background,
                (Some(hit), RenderMode::Flat) => hit.object.color,
                (Some(hit), RenderMode::Shaded) => phong::shade(scene, &camera.position, hit),
            };
            if !color.is_finite() {
                warn!("non-finite color at pixel ({}, {})", x, y);
                *pixel = background;
            } else {
                *pixel = color;
            }
        }
    }
}
