use crate::*;

/// Parametric ray `origin + t * dir`. The direction is not required to be
/// unit length; intersection formulas must account for `|dir| != 1`.
#[derive(Clone, Debug)]
pub struct Ray {
    pub origin: P3,
    pub dir: V3,
}

impl Ray {
    pub fn new(origin: P3, dir: V3) -> Self {
        Ray { origin, dir }
    }

    /// Ray from `from` through `to`, direction left unnormalized.
    pub fn from_to(from: &P3, to: &P3) -> Self {
        Ray {
            origin: *from,
            dir: to - from,
        }
    }

    pub fn at(&self, t: f32) -> P3 {
        self.origin + self.dir * t
    }
}
