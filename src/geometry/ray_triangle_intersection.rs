use nalgebra::Unit;

use crate::geometry::{EPSILON, Ray, SurfaceHit, Triangle};

impl Triangle {
    /// Ray intersection against the one-sided triangle.
    ///
    /// The reported normal is the reverse of the winding normal. Points
    /// exactly on an edge count as a miss, so adjacent faces never claim the
    /// same hit. A hit at distance zero is still a hit.
    pub fn intersect(&self, ray: &Ray) -> Option<SurfaceHit> {
        let normal = Unit::new_normalize(self.normal());

        let denom = ray.direction.dot(normal.as_ref());
        if denom.abs() < EPSILON {
            return None;
        }

        let t = normal.dot(&(self[0] - ray.origin)) / denom;
        if t < 0.0 {
            return None;
        }

        let point = ray.point_at(t);
        let edge_tests = [
            (self[1] - self[0], point - self[0]),
            (self[2] - self[1], point - self[1]),
            (self[0] - self[2], point - self[2]),
        ];
        let inside = edge_tests
            .iter()
            .all(|(edge, offset)| edge.cross(offset).dot(normal.as_ref()) > 0.0);

        inside.then_some(SurfaceHit { t, normal: -normal })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{WorldPoint, WorldVector, test::NonzeroWorldVectorWrapper};
    use assert2::assert;
    use proptest::prelude::prop_assume;
    use test_case::test_case;
    use test_strategy::proptest;

    fn triangle() -> Triangle {
        Triangle::new(
            WorldPoint::new(0.0, 0.0, 0.0),
            WorldPoint::new(2.0, 0.0, 0.0),
            WorldPoint::new(0.0, 2.0, 0.0),
        )
    }

    fn ray_towards(x: f32, y: f32) -> Ray {
        Ray::new(
            WorldPoint::new(x, y, 5.0),
            Unit::new_normalize(WorldVector::new(0.0, 0.0, -1.0)),
        )
    }

    #[test]
    fn interior_hit_reports_distance_and_flipped_normal() {
        let hit = triangle().intersect(&ray_towards(0.5, 0.5)).unwrap();
        assert!((hit.t - 5.0).abs() < 1e-6);
        assert!(hit.normal.into_inner() == WorldVector::new(0.0, 0.0, -1.0));
    }

    #[test_case(1.0, 0.0 ; "bottom edge midpoint")]
    #[test_case(1.0, 1.0 ; "hypotenuse midpoint")]
    #[test_case(0.0, 1.0 ; "left edge midpoint")]
    #[test_case(0.0, 0.0 ; "corner vertex")]
    #[test_case(2.0, 0.0 ; "bottom right vertex")]
    fn boundary_point_is_a_miss(x: f32, y: f32) {
        assert!(triangle().intersect(&ray_towards(x, y)).is_none());
    }

    #[test]
    fn outside_point_is_a_miss() {
        assert!(triangle().intersect(&ray_towards(1.5, 1.5)).is_none());
    }

    #[test]
    fn hit_behind_the_origin_is_a_miss() {
        let ray = Ray::new(
            WorldPoint::new(0.5, 0.5, -5.0),
            Unit::new_normalize(WorldVector::new(0.0, 0.0, -1.0)),
        );
        assert!(triangle().intersect(&ray).is_none());
    }

    #[proptest]
    fn in_plane_ray_is_a_miss(direction: NonzeroWorldVectorWrapper) {
        let direction = WorldVector::new(direction.x, direction.y, 0.0);
        prop_assume!(direction.norm() > 1e-3);
        let ray = Ray::new(WorldPoint::new(0.5, 0.5, 5.0), Unit::new_normalize(direction));
        assert!(triangle().intersect(&ray).is_none());
    }
}
