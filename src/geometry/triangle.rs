use std::ops::{Add, Index, IndexMut, Mul, Sub};

use num_traits::One;
use thiserror::Error;

use super::{FloatType, WorldBox, WorldPoint, WorldVector};

/// Three ordered vertices. The order determines the winding and so the direction of the normal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle<Point>([Point; 3]);

impl<Point> Triangle<Point> {
    pub fn new(a: Point, b: Point, c: Point) -> Triangle<Point> {
        Triangle([a, b, c])
    }

    pub fn iter<'a>(&'a self) -> impl Iterator<Item = &'a Point> {
        self.0.iter()
    }

    pub fn map<Point2, F: FnMut(&Point) -> Point2>(&self, mut f: F) -> Triangle<Point2> {
        Triangle([f(&self[0]), f(&self[1]), f(&self[2])])
    }

    pub fn zip_map<Point2, Point3, F: FnMut(&Point, &Point2) -> Point3>(
        &self,
        rhs: &Triangle<Point2>,
        mut f: F,
    ) -> Triangle<Point3> {
        Triangle([
            f(&self.0[0], &rhs.0[0]),
            f(&self.0[1], &rhs.0[1]),
            f(&self.0[2], &rhs.0[2]),
        ])
    }
}

impl<Point> Index<usize> for Triangle<Point> {
    type Output = Point;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<Point> IndexMut<usize> for Triangle<Point> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<Point> From<[Point; 3]> for Triangle<Point> {
    fn from(value: [Point; 3]) -> Self {
        Triangle(value)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("A triangle needs exactly 3 vertices, got {0}")]
pub struct VertexCountError(pub usize);

impl<Point: Clone> TryFrom<&[Point]> for Triangle<Point> {
    type Error = VertexCountError;

    fn try_from(value: &[Point]) -> Result<Self, Self::Error> {
        match value {
            [a, b, c] => Ok(Triangle::new(a.clone(), b.clone(), c.clone())),
            _ => Err(VertexCountError(value.len())),
        }
    }
}

impl Triangle<WorldPoint> {
    /// Returns edge vectors, coming from self[0]
    pub fn edges(&self) -> [WorldVector; 2] {
        [self.0[1] - self.0[0], self.0[2] - self.0[0]]
    }

    /// Returns a normal vector of the triangle, not normalized.
    /// Swapping any two vertices flips its sign.
    pub fn normal(&self) -> WorldVector {
        let [e1, e2] = self.edges();
        e1.cross(&e2)
    }

    pub fn centroid(&self) -> WorldPoint {
        WorldPoint::from(
            self.iter().map(|p| p.coords).sum::<WorldVector>() / 3.0,
        )
    }

    /// Componentwise min / max of the vertices.
    /// Encloses the vertices even if the triangle is degenerate.
    pub fn bounding_box(&self) -> WorldBox {
        let [a, b, c] = &self.0;
        WorldBox::new(a.inf(b).inf(c), a.sup(b).sup(c))
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BarycentricCoordinates<T> {
    pub u: T,
    pub v: T,
}

impl<T> BarycentricCoordinates<T>
where
    T: One + Copy + Sub<Output = T>,
{
    /// Weight of the first vertex.
    pub fn w(&self) -> T {
        T::one() - self.u - self.v
    }

    pub fn interpolate<T2>(&self, a: &T2, b: &T2, c: &T2) -> T2
    where
        for<'a> &'a T2: Mul<T, Output = T2>,
        T2: Add<Output = T2>,
    {
        a * self.w() + b * self.u + c * self.v
    }

    pub fn interpolate_triangle<T2>(&self, triangle: &Triangle<T2>) -> T2
    where
        for<'a> &'a T2: Mul<T, Output = T2>,
        T2: Add<Output = T2>,
    {
        self.interpolate(&triangle[0], &triangle[1], &triangle[2])
    }
}

impl BarycentricCoordinates<FloatType> {
    /// Edges count as inside.
    pub fn is_inside(&self) -> bool {
        self.u >= 0.0 && self.v >= 0.0 && self.u + self.v <= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::test::WorldPointWrapper;
    use assert2::{assert, let_assert};
    use test_strategy::proptest;

    fn unit_triangle() -> Triangle<WorldPoint> {
        Triangle::new(
            WorldPoint::new(0.0, 0.0, 0.0),
            WorldPoint::new(1.0, 0.0, 0.0),
            WorldPoint::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn edges_start_at_first_vertex() {
        let [e1, e2] = unit_triangle().edges();
        assert!(e1 == WorldVector::new(1.0, 0.0, 0.0));
        assert!(e2 == WorldVector::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn counter_clockwise_normal_points_up() {
        assert!(unit_triangle().normal() == WorldVector::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn centroid() {
        let t = Triangle::new(
            WorldPoint::new(0.0, 0.0, 0.0),
            WorldPoint::new(3.0, 0.0, 0.0),
            WorldPoint::new(0.0, 3.0, 6.0),
        );
        assert!(t.centroid() == WorldPoint::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn try_from_slice() {
        let points = [
            WorldPoint::new(0.0, 0.0, 0.0),
            WorldPoint::new(1.0, 0.0, 0.0),
            WorldPoint::new(0.0, 1.0, 0.0),
            WorldPoint::new(1.0, 1.0, 0.0),
        ];

        let_assert!(Ok(t) = Triangle::try_from(&points[..3]));
        assert!(t == unit_triangle());

        let_assert!(Err(e) = Triangle::try_from(&points[..]));
        assert!(e == VertexCountError(4));
        assert!(e.to_string() == "A triangle needs exactly 3 vertices, got 4");

        assert!(Triangle::try_from(&points[..2]) == Err(VertexCountError(2)));
    }

    #[test]
    fn map_and_zip_map() {
        let indices = Triangle::new(0usize, 1, 2);
        let doubled = indices.map(|i| i * 2);
        assert!(doubled == Triangle::new(0, 2, 4));
        let summed = indices.zip_map(&doubled, |a, b| a + b);
        assert!(summed == Triangle::new(0, 3, 6));
    }

    #[test]
    fn degenerate_bounding_box_is_flat() {
        let t = Triangle::new(
            WorldPoint::new(0.0, 0.0, 0.0),
            WorldPoint::new(1.0, 1.0, 0.0),
            WorldPoint::new(2.0, 2.0, 0.0),
        );
        let b = t.bounding_box();
        assert!(b.min == WorldPoint::new(0.0, 0.0, 0.0));
        assert!(b.max == WorldPoint::new(2.0, 2.0, 0.0));
        assert!(b.size().z == 0.0);
    }

    #[test]
    fn coincident_vertices_give_point_box() {
        let p = WorldPoint::new(1.0, -2.0, 3.0);
        let b = Triangle::new(p, p, p).bounding_box();
        assert!(b.min == p);
        assert!(b.max == p);
    }

    #[proptest]
    fn bounding_box_is_componentwise_min_max(
        a: WorldPointWrapper,
        b: WorldPointWrapper,
        c: WorldPointWrapper,
    ) {
        let (a, b, c) = (*a, *b, *c);
        let bb = Triangle::new(a, b, c).bounding_box();

        for i in 0..3 {
            assert!(bb.min[i] == a[i].min(b[i]).min(c[i]));
            assert!(bb.max[i] == a[i].max(b[i]).max(c[i]));
        }

        for permuted in [
            Triangle::new(a, c, b),
            Triangle::new(b, a, c),
            Triangle::new(b, c, a),
            Triangle::new(c, a, b),
            Triangle::new(c, b, a),
        ] {
            assert!(permuted.bounding_box() == bb);
        }

        for p in [a, b, c] {
            assert!(bb.contains_point(&p));
        }
    }

    #[test]
    fn barycentric_weights_sum_to_one() {
        let uv = BarycentricCoordinates { u: 0.25, v: 0.5 };
        assert!(uv.w() == 0.25);
    }

    #[test]
    fn interpolate_vertex_attributes() {
        let uv = BarycentricCoordinates { u: 0.25, v: 0.25 };
        let positions = unit_triangle().map(|p| p.coords);
        assert!(uv.interpolate_triangle(&positions) == WorldVector::new(0.25, 0.25, 0.0));
        assert!(uv.interpolate(&1.0, &2.0, &4.0) == 0.5 + 0.5 + 1.0);
    }

    #[test]
    fn edges_are_inside() {
        assert!((BarycentricCoordinates { u: 0.0, v: 0.0 }).is_inside());
        assert!((BarycentricCoordinates { u: 0.5, v: 0.5 }).is_inside());
        assert!((BarycentricCoordinates { u: 1.0, v: 0.0 }).is_inside());
        assert!(!(BarycentricCoordinates { u: -0.1, v: 0.5 }).is_inside());
        assert!(!(BarycentricCoordinates { u: 0.6, v: 0.6 }).is_inside());
    }
}
