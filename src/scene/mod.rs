pub mod primitives;

pub use primitives::{Backdrop, Sphere, Tetrahedron};

use nalgebra::Unit;
use ordered_float::OrderedFloat;

use crate::geometry::{EPSILON, FloatType, Ray, WorldPoint, WorldVector};
use crate::shading::{Color, Light};

/// Per-primitive surface description. Glazing and the Blinn-Phong highlight
/// are both opt-in per primitive, nothing is derived from the shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub color: Color,
    pub glaze: bool,
    pub shininess: Option<FloatType>,
}

/// A surface hit resolved against the whole scene.
#[derive(Copy, Clone, Debug)]
pub struct HitRecord {
    pub t: FloatType,
    pub point: WorldPoint,
    pub normal: Unit<WorldVector>,
    pub material: Material,
}

/// The fixed scene: a glazed backdrop quad, two spheres, a tetrahedron and
/// one directional light. The collection is not extensible.
#[derive(Clone, Debug)]
pub struct Scene {
    pub backdrop: Backdrop,
    pub spheres: [Sphere; 2],
    pub tetrahedron: Tetrahedron,
    pub light: Light,
}

impl Scene {
    /// Tests the seven candidate surfaces and keeps the smallest positive
    /// hit distance. Ties between coincident surfaces go to the
    /// earlier-tested primitive: tetrahedron faces in index order, then the
    /// spheres, then the backdrop.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<HitRecord> {
        let tetrahedron_faces = self
            .tetrahedron
            .faces()
            .iter()
            .map(|face| (face.intersect(ray), self.tetrahedron.material));
        let spheres = self
            .spheres
            .iter()
            .map(|sphere| (sphere.intersect(ray), sphere.material));
        let backdrop = std::iter::once((self.backdrop.intersect(ray), self.backdrop.material));

        tetrahedron_faces
            .chain(spheres)
            .chain(backdrop)
            .filter_map(|(hit, material)| hit.map(|hit| (hit, material)))
            .min_by_key(|(hit, _)| OrderedFloat(hit.t))
            .map(|(hit, material)| HitRecord {
                t: hit.t,
                point: ray.point_at(hit.t),
                normal: hit.normal,
                material,
            })
    }

    /// Shadow test: whether anything blocks the light at `point`.
    ///
    /// The shadow ray runs toward the reversed light direction with no
    /// distance bound (the light is infinitely far away), offset a little to
    /// step off the surface it starts on. The glazed backdrop is not an
    /// occluder; the light reaches the scene from its far side.
    pub fn occluded(&self, point: &WorldPoint) -> bool {
        let towards_light = -self.light.direction;
        let shadow_ray = Ray::new(
            point + towards_light.into_inner() * EPSILON,
            towards_light,
        );

        self.spheres
            .iter()
            .any(|sphere| sphere.intersect(&shadow_ray).is_some())
            || self
                .tetrahedron
                .faces()
                .iter()
                .any(|face| face.intersect(&shadow_ray).is_some())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Scene {
            backdrop: Backdrop::new(
                [
                    WorldPoint::new(-150.0, 300.0, -110.0),
                    WorldPoint::new(500.0, 300.0, -110.0),
                    WorldPoint::new(-250.0, -300.0, -110.0),
                    WorldPoint::new(500.0, -300.0, -110.0),
                ],
                Material {
                    color: Color::new(150.0, 200.0, 255.0),
                    glaze: true,
                    shininess: None,
                },
            ),
            spheres: [
                Sphere {
                    center: WorldPoint::new(-50.0, 80.0, -60.0),
                    radius: 50.0,
                    material: Material {
                        color: Color::new(200.0, 0.0, 255.0),
                        glaze: false,
                        shininess: Some(20.0),
                    },
                },
                Sphere {
                    center: WorldPoint::new(20.0, 230.0, -20.0),
                    radius: 90.0,
                    material: Material {
                        color: Color::new(0.0, 200.0, 150.0),
                        glaze: false,
                        shininess: None,
                    },
                },
            ],
            tetrahedron: Tetrahedron::new(
                [
                    WorldPoint::new(40.0, 100.0, -110.0),
                    WorldPoint::new(120.0, 100.0, -10.0),
                    WorldPoint::new(120.0, 50.0, -60.0),
                    WorldPoint::new(200.0, 100.0, -110.0),
                ],
                Material {
                    color: Color::new(250.0, 200.0, 0.0),
                    glaze: false,
                    shininess: None,
                },
            ),
            light: Light {
                direction: Unit::new_normalize(WorldVector::new(1.0, 1.5, -1.0)),
                ambient: 0.3,
                diffuse: 0.5,
                specular: 0.75,
            },
        }
    }
}
