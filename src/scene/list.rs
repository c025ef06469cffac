use crate::{
    geometry::{HitRecord, Interval, Ray, WorldBox},
    scene::{Hittable, Primitive},
};

/// Group of objects, hit testing returns the closest hit of all of them.
#[derive(Clone, Debug, PartialEq)]
pub struct HittableList {
    objects: Vec<Primitive>,
    bounding_box: WorldBox,
}

impl HittableList {
    pub fn new() -> Self {
        HittableList {
            objects: Vec::new(),
            bounding_box: WorldBox::empty(),
        }
    }

    pub fn add(&mut self, object: impl Into<Primitive>) {
        let object = object.into();
        self.bounding_box = self.bounding_box.union(&object.bounding_box());
        self.objects.push(object);
    }

    pub fn objects(&self) -> &[Primitive] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Into<Primitive>> FromIterator<P> for HittableList {
    fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
        let mut list = HittableList::new();
        for object in iter {
            list.add(object);
        }
        list
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        let mut closest = ray_t.max;
        let mut hit_anything = false;

        for object in &self.objects {
            // Children only write the record on hit, so it always holds the closest hit so far
            if object.hit(ray, ray_t.with_max(closest), rec) {
                hit_anything = true;
                closest = rec.t;
            }
        }

        hit_anything
    }

    fn bounding_box(&self) -> WorldBox {
        self.bounding_box
    }
}
