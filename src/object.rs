use crate::material::Material;
use crate::shape::{Intersection, Shape};
use crate::*;

pub struct SimpleObject {
    pub shape: Shape,
    pub material: Material,
    /// Flat color used by the unshaded preview mode.
    pub color: RGBA,
}

/// A visible hit together with the object it landed on.
pub struct ObjectHit<'a> {
    pub isect: Intersection,
    pub object: &'a SimpleObject,
}

pub struct ObjectList {
    pub objects: Vec<SimpleObject>,
}

impl ObjectList {
    pub fn new(objects: Vec<SimpleObject>) -> Self {
        ObjectList { objects }
    }

    /// Nearest visible hit over all objects, by linear scan.
    ///
    /// Each shape reports its own `Intersection`; only hits that are both
    /// valid and inside the `[min_dist, max_dist]` window compete, and the
    /// smallest parameter wins. `None` is the "nothing here" sentinel.
    pub fn first_hit(&self, ray: &Ray, min_dist: f32, max_dist: f32) -> Option<ObjectHit> {
        let mut nearest = None::<ObjectHit>;
        for object in self.objects.iter() {
            let isect = object.shape.intersect(ray, min_dist, max_dist);
            if !isect.valid || !isect.visible {
                continue;
            }
            match nearest {
                Some(ref hit) if hit.isect.dist <= isect.dist => {}
                _ => nearest = Some(ObjectHit { isect, object }),
            }
        }
        nearest
    }
}
