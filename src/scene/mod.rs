mod list;
mod material;
pub mod primitives;

use crate::geometry::{HitRecord, Interval, Ray, WorldBox};

pub use list::HittableList;
pub use material::{MaterialIdx, MaterialLookupError, MaterialTable};
pub use primitives::{Primitive, Sphere, Triangle};

/// Renderable object.
///
/// Implementations are immutable once built, so a single object can be shared
/// between rendering threads without locking.
pub trait Hittable {
    /// Tests the ray against the object, only accepting hits with `t` inside `ray_t`.
    /// Returns true on hit and fills in `rec`, leaves `rec` untouched otherwise.
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool;

    /// Box enclosing the whole object.
    fn bounding_box(&self) -> WorldBox;

    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let mut rec = HitRecord::default();
        self.hit(ray, ray_t, &mut rec).then_some(rec)
    }
}
