mod sphere;
mod triangle;

pub use sphere::Sphere;
pub use triangle::Triangle;

use crate::{
    geometry::{HitRecord, Interval, Ray, WorldBox},
    scene::{Hittable, HittableList},
};

/// Closed set of the object kinds a scene is made of, dispatched with a match
/// instead of through a vtable.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Triangle(Triangle),
    Sphere(Sphere),
    List(HittableList),
}

impl Hittable for Primitive {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        match self {
            Primitive::Triangle(triangle) => triangle.hit(ray, ray_t, rec),
            Primitive::Sphere(sphere) => sphere.hit(ray, ray_t, rec),
            Primitive::List(list) => list.hit(ray, ray_t, rec),
        }
    }

    fn bounding_box(&self) -> WorldBox {
        match self {
            Primitive::Triangle(triangle) => triangle.bounding_box(),
            Primitive::Sphere(sphere) => sphere.bounding_box(),
            Primitive::List(list) => list.bounding_box(),
        }
    }
}

impl From<Triangle> for Primitive {
    fn from(value: Triangle) -> Self {
        Primitive::Triangle(value)
    }
}

impl From<Sphere> for Primitive {
    fn from(value: Sphere) -> Self {
        Primitive::Sphere(value)
    }
}

impl From<HittableList> for Primitive {
    fn from(value: HittableList) -> Self {
        Primitive::List(value)
    }
}
