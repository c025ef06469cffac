use std::f64::consts::PI;

use nalgebra::Unit;

use crate::{
    geometry::{FloatType, HitRecord, Interval, Ray, WorldBox, WorldPoint, WorldVector},
    scene::{Hittable, MaterialIdx},
};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: WorldPoint,
    pub radius: FloatType,
    pub material: MaterialIdx,
}

impl Sphere {
    pub fn new(center: WorldPoint, radius: FloatType, material: MaterialIdx) -> Sphere {
        Sphere {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    /// Spherical coordinates of a point on the unit sphere, both mapped to [0, 1].
    /// u goes around the Y axis starting from -X, v goes from -Y to +Y.
    fn surface_uv(p: &WorldVector) -> (FloatType, FloatType) {
        let theta = (-p.y).clamp(-1.0, 1.0).acos();
        let phi = (-p.z).atan2(p.x) + PI;
        (phi / (2.0 * PI), theta / PI)
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        // A point has no surface normal
        if self.radius <= 0.0 {
            return false;
        }

        let oc = self.center - ray.origin;
        let a = ray.direction.norm_squared();
        let h = ray.direction.dot(&oc);
        let c = oc.norm_squared() - self.radius * self.radius;
        let discriminant = h * h - a * c;

        if discriminant < 0.0 || a == 0.0 {
            return false;
        }

        let sqrt_disc = discriminant.sqrt();
        let t1 = (h - sqrt_disc) / a;
        let t2 = (h + sqrt_disc) / a;
        let t = if ray_t.contains(t1) {
            t1
        } else if ray_t.contains(t2) {
            t2
        } else {
            return false;
        };

        let point = ray.point_at(t);
        let outward_normal = Unit::new_normalize(point - self.center);
        let (u, v) = Self::surface_uv(outward_normal.as_ref());

        rec.t = t;
        rec.point = point;
        rec.set_face_normal(ray, outward_normal);
        rec.u = u;
        rec.v = v;
        rec.material = self.material;

        true
    }

    fn bounding_box(&self) -> WorldBox {
        let r_vec = WorldVector::repeat(self.radius);
        WorldBox::new(self.center - r_vec, self.center + r_vec)
    }
}
