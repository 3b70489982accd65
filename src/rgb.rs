use std::ops::{Add, AddAssign, Div, Mul, MulAssign};

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RGBA {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl RGBA {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        RGBA { r, g, b, a }
    }

    pub fn all(x: f32) -> Self {
        Self::new(x, x, x, x)
    }

    /// Opaque color from rgb components.
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// The all-zero color, used as the "no contribution" sentinel and as
    /// the background.
    pub fn none() -> Self {
        Self::all(0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0 && self.a == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Clamp to [0, 1] and quantize to 8 bits per channel.
    pub fn to_bytes(&self) -> [u8; 4] {
        fn quantize(x: f32) -> u8 {
            (x.max(0.0).min(1.0) * 255.0).round() as u8
        }
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}

impl<'a> Add<&'a Self> for RGBA {
    type Output = Self;
    fn add(self, rhs: &'a Self) -> Self {
        RGBA {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
            a: self.a + rhs.a,
        }
    }
}

impl Add for RGBA {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.add(&rhs)
    }
}

impl AddAssign for RGBA {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<'a> Mul<&'a Self> for RGBA {
    type Output = Self;
    fn mul(self, rhs: &'a Self) -> Self {
        RGBA {
            r: self.r * rhs.r,
            g: self.g * rhs.g,
            b: self.b * rhs.b,
            a: self.a * rhs.a,
        }
    }
}

impl Mul for RGBA {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.mul(&rhs)
    }
}

impl Mul<f32> for RGBA {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        RGBA {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
            a: self.a * rhs,
        }
    }
}

impl MulAssign<f32> for RGBA {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for RGBA {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        RGBA {
            r: self.r / rhs,
            g: self.g / rhs,
            b: self.b / rhs,
            a: self.a / rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sentinel() {
        assert!(RGBA::none().is_zero());
        assert!(!RGBA::new(0.0, 0.0, 0.0, 1.0).is_zero());
    }

    #[test]
    fn componentwise_ops() {
        let c = RGBA::new(0.5, 0.25, 1.0, 1.0) * RGBA::new(2.0, 2.0, 0.5, 1.0);
        assert_eq!(c, RGBA::new(1.0, 0.5, 0.5, 1.0));
        let s = RGBA::rgb(0.1, 0.2, 0.3) + RGBA::rgb(0.2, 0.3, 0.4);
        assert!((s.r - 0.3).abs() < 1e-6);
        assert!((s.a - 2.0).abs() < 1e-6);
    }

    #[test]
    fn quantization_clamps() {
        assert_eq!(RGBA::new(-1.0, 0.5, 2.0, 1.0).to_bytes(), [0, 128, 255, 255]);
    }
}
