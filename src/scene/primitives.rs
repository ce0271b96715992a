use nalgebra::Unit;

use crate::geometry::{FloatType, Quad, Ray, SurfaceHit, Triangle, WorldPoint};
use crate::scene::Material;

#[derive(Copy, Clone, Debug)]
pub struct Sphere {
    pub center: WorldPoint,
    pub radius: FloatType,
    pub material: Material,
}

impl Sphere {
    pub fn intersect(&self, ray: &Ray) -> Option<SurfaceHit> {
        let oc = ray.origin - self.center;
        let b = oc.dot(&ray.direction);
        let c = oc.dot(&oc) - self.radius * self.radius;
        let discriminant = b * b - c;

        if discriminant < 0.0 {
            return None;
        }

        // Nearer root only: a ray starting inside the sphere reports no hit,
        // even when the far root is in front of the origin.
        let t = -b - discriminant.sqrt();
        if t < 0.0 {
            return None;
        }

        let point = ray.point_at(t);
        let normal = Unit::new_normalize(point - self.center);
        Some(SurfaceHit { t, normal })
    }
}

/// The four faces share every edge; the strict edge tests in
/// [`Triangle::intersect`] keep a point on a shared edge from being claimed
/// by both neighbours.
#[derive(Copy, Clone, Debug)]
pub struct Tetrahedron {
    faces: [Triangle; 4],
    pub material: Material,
}

const FACE_INDICES: [[usize; 3]; 4] = [[0, 1, 2], [1, 2, 3], [2, 3, 0], [3, 0, 1]];

impl Tetrahedron {
    pub fn new(vertices: [WorldPoint; 4], material: Material) -> Tetrahedron {
        let faces =
            FACE_INDICES.map(|[a, b, c]| Triangle::new(vertices[a], vertices[b], vertices[c]));
        Tetrahedron { faces, material }
    }

    /// Faces in fixed index order. Callers test each face independently,
    /// there is no combined nearest-face query here.
    pub fn faces(&self) -> &[Triangle; 4] {
        &self.faces
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Backdrop {
    pub quad: Quad,
    pub material: Material,
}

impl Backdrop {
    pub fn new(corners: [WorldPoint; 4], material: Material) -> Backdrop {
        Backdrop {
            quad: Quad::new(corners),
            material,
        }
    }

    pub fn intersect(&self, ray: &Ray) -> Option<SurfaceHit> {
        self.quad.intersect(ray)
    }
}
