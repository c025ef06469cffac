mod aabb;
mod hit_record;
mod interval;
mod ray_box_intersection;
mod ray_triangle_intersection;
mod triangle;

pub use aabb::AABB;
pub use hit_record::HitRecord;
pub use interval::Interval;
pub use triangle::{BarycentricCoordinates, Triangle, VertexCountError};

pub type FloatType = f64;
pub type WorldPoint = nalgebra::Point3<FloatType>;
pub type WorldVector = nalgebra::Vector3<FloatType>;
pub type WorldBox = AABB<WorldPoint>;

/// Determinant threshold below which a ray counts as parallel to a triangle.
pub const EPSILON: FloatType = 1e-8;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: WorldPoint,
    /// Direction of the ray, not normalized.
    /// Hit distances are measured in multiples of its length.
    pub direction: WorldVector,

    /// Componentwise inverse of the ray direction
    /// Zeros in direction get turned into positive infinity regardless of the sign of the zero
    pub inv_direction: WorldVector,
}

impl Ray {
    pub fn new(origin: WorldPoint, direction: WorldVector) -> Ray {
        let inv_direction = direction.map(|x| {
            if x == 0.0 {
                FloatType::INFINITY
            } else {
                1.0 / x
            }
        });

        Ray {
            origin,
            direction,
            inv_direction,
        }
    }

    pub fn point_at(&self, t: FloatType) -> WorldPoint {
        self.origin + self.direction * t
    }
}
