use nalgebra::Unit;

use crate::{
    geometry::{self, HitRecord, Interval, Ray, WorldBox, WorldPoint},
    scene::{Hittable, MaterialIdx},
};

/// Flat, double sided triangle.
///
/// Vertex order sets the outward normal (counter clockwise when looking at the front face).
/// Degenerate triangles are allowed and never get hit.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    vertices: geometry::Triangle<WorldPoint>,
    material: MaterialIdx,
    bounding_box: WorldBox,
}

impl Triangle {
    pub fn new(p0: WorldPoint, p1: WorldPoint, p2: WorldPoint, material: MaterialIdx) -> Self {
        let vertices = geometry::Triangle::new(p0, p1, p2);
        Triangle {
            bounding_box: vertices.bounding_box(),
            vertices,
            material,
        }
    }

    pub fn vertices(&self) -> &geometry::Triangle<WorldPoint> {
        &self.vertices
    }

    pub fn material(&self) -> MaterialIdx {
        self.material
    }
}

impl Hittable for Triangle {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        let Some((t, uv)) = self.vertices.intersect(ray) else {
            return false;
        };
        if !ray_t.contains(t) {
            return false;
        }

        rec.t = t;
        rec.point = ray.point_at(t);
        rec.material = self.material;
        rec.set_face_normal(ray, Unit::new_normalize(self.vertices.normal()));
        rec.u = uv.u;
        rec.v = uv.v;

        true
    }

    fn bounding_box(&self) -> WorldBox {
        self.bounding_box
    }
}
