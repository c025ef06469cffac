use super::{FloatType, Interval, Ray, WorldBox};

impl WorldBox {
    /// Calculates ray intersection with the box using the slab method.
    /// Returns minimum and maximum distance along the ray, ray intersects if min <= max.
    pub fn intersect(&self, ray: &Ray) -> (FloatType, FloatType) {
        // Componentwise distances along the ray to the box's min and max corners.
        // The multiplication is NAN if the ray is starting inside the slab bounding plane
        // and is parallel to it. In this case we blend to +-infinity, so that the range becomes infinite
        let to_box_min = (self.min - ray.origin)
            .component_mul(&ray.inv_direction)
            .map(|x| if x.is_nan() { FloatType::NEG_INFINITY } else { x });
        let to_box_max = (self.max - ray.origin)
            .component_mul(&ray.inv_direction)
            .map(|x| if x.is_nan() { FloatType::INFINITY } else { x });

        // Correctly ordered (min_t <= max_t)
        let componentwise_min_t = to_box_min.zip_map(&to_box_max, FloatType::min);
        let componentwise_max_t = to_box_min.zip_map(&to_box_max, FloatType::max);

        (componentwise_min_t.max(), componentwise_max_t.min())
    }

    /// Checks whether the ray passes through the box within the parameter interval.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> bool {
        let (t1, t2) = self.intersect(ray);
        t1.max(ray_t.min) <= t2.min(ray_t.max)
    }
}
