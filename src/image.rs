use crate::rgb::RGBA;

/// Row-major grid of colors, written once per render.
pub struct Image {
    w: u32,
    h: u32,
    buf: Vec<RGBA>,
}

impl Image {
    pub fn new(w: u32, h: u32) -> Self {
        assert!(w > 0 && h > 0);
        let mut buf = Vec::new();
        buf.resize((w * h) as usize, RGBA::none());
        Image { w, h, buf }
    }

    pub fn w(&self) -> u32 {
        self.w
    }

    pub fn h(&self) -> u32 {
        self.h
    }

    pub fn at(&self, x: u32, y: u32) -> &RGBA {
        &self.buf[(y * self.w + x) as usize]
    }

    pub fn at_mut(&mut self, x: u32, y: u32) -> &mut RGBA {
        &mut self.buf[(y * self.w + x) as usize]
    }

    /// Split the buffer into up to `n` contiguous row bands. Each band is
    /// `(first_row, pixels)` and the slices are disjoint, so one thread can
    /// own each band with no further synchronization.
    pub fn row_bands_mut(&mut self, n: usize) -> Vec<(u32, &mut [RGBA])> {
        let rows_per_band = (self.h as usize + n - 1) / n;
        let chunk = rows_per_band * self.w as usize;
        self.buf
            .chunks_mut(chunk)
            .enumerate()
            .map(|(i, band)| ((i * rows_per_band) as u32, band))
            .collect()
    }

    /// Encode as 8-bit RGBA PNG.
    pub fn write_png(&self, filename: &str) -> image::ImageResult<()> {
        let mut bytes = Vec::with_capacity(self.buf.len() * 4);
        for color in self.buf.iter() {
            bytes.extend_from_slice(&color.to_bytes());
        }
        image::save_buffer(filename, &bytes, self.w, self.h, image::ColorType::Rgba8)
    }
}
