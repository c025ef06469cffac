pub mod geometry;
pub mod scene;
pub mod util;

pub use geometry::{HitRecord, Interval, Ray};
pub use scene::{Hittable, HittableList, MaterialIdx, MaterialTable, Primitive, Sphere, Triangle};
