use nalgebra::Unit;

use super::{BarycentricCoordinates, FloatType, Ray, WorldPoint, WorldVector};
use crate::scene::MaterialIdx;

/// Result of a successful ray intersection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitRecord {
    /// Ray parameter of the hit, `point == ray.point_at(t)`
    pub t: FloatType,
    pub point: WorldPoint,
    /// Unit normal, always facing against the incoming ray
    pub normal: Unit<WorldVector>,
    /// True if the ray arrived from the side the outward normal points to
    pub front_face: bool,
    /// Surface coordinates of the hit, barycentric for triangles
    pub u: FloatType,
    pub v: FloatType,
    pub material: MaterialIdx,
}

impl HitRecord {
    /// Orients the stored normal against the ray and records which side was hit.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Unit<WorldVector>) {
        self.front_face = ray.direction.dot(outward_normal.as_ref()) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }

    pub fn barycentric(&self) -> BarycentricCoordinates<FloatType> {
        BarycentricCoordinates {
            u: self.u,
            v: self.v,
        }
    }
}

impl Default for HitRecord {
    fn default() -> Self {
        HitRecord {
            t: FloatType::INFINITY,
            point: WorldPoint::origin(),
            normal: WorldVector::z_axis(),
            front_face: false,
            u: 0.0,
            v: 0.0,
            material: MaterialIdx::default(),
        }
    }
}
