use nalgebra::Unit;

use crate::geometry::{EPSILON, Quad, Ray, SurfaceHit};

impl Quad {
    /// Ray intersection against the one-sided quad.
    ///
    /// Containment is four half-plane tests against the corner ordering
    /// documented on [`Quad`]. Points exactly on an edge count as a miss.
    /// A hit at distance zero is still a hit.
    pub fn intersect(&self, ray: &Ray) -> Option<SurfaceHit> {
        let [v1, v2, v3, v4] = *self.corners();
        let normal = Unit::new_normalize(self.winding_normal());

        let denom = ray.direction.dot(normal.as_ref());
        if denom.abs() < EPSILON {
            return None;
        }

        let t = normal.dot(&(v1 - ray.origin)) / denom;
        if t < 0.0 {
            return None;
        }

        let point = ray.point_at(t);
        let edge_tests = [
            (v2 - v1, point - v1),
            (v3 - v4, point - v4),
            (v1 - v3, point - v3),
            (v4 - v2, point - v2),
        ];
        let inside = edge_tests
            .iter()
            .all(|(edge, offset)| edge.cross(offset).dot(normal.as_ref()) > 0.0);

        inside.then_some(SurfaceHit { t, normal })
    }
}
