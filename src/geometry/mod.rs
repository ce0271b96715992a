mod quad;
mod ray_quad_intersection;
mod ray_triangle_intersection;
mod triangle;

pub use quad::Quad;
pub use triangle::Triangle;

use nalgebra::{Point2, Point3, Unit, Vector2, Vector3};

use crate::error::Error;

pub type FloatType = f32;

/// Threshold below which a direction counts as parallel to a surface,
/// and offset applied to shadow ray origins.
pub const EPSILON: FloatType = 1e-8;

pub type ScreenPoint = Point2<u32>;
pub type ScreenSize = Vector2<u32>;

pub type WorldPoint = Point3<FloatType>;
pub type WorldVector = Vector3<FloatType>;

/// Normalizes a vector, failing on (near-)zero input instead of producing NaNs.
pub fn try_unit(vector: WorldVector) -> Result<Unit<WorldVector>, Error> {
    Unit::try_new(vector, EPSILON).ok_or(Error::DegenerateVector)
}

/// Mirrors a direction about a surface normal.
pub fn reflect(direction: &Unit<WorldVector>, normal: &Unit<WorldVector>) -> Unit<WorldVector> {
    let direction = direction.as_ref();
    let normal = normal.as_ref();
    Unit::new_normalize(direction - normal * (2.0 * direction.dot(normal)))
}

#[derive(Copy, Clone, Debug)]
pub struct Ray {
    pub origin: WorldPoint,
    pub direction: Unit<WorldVector>,
}

impl Ray {
    pub fn new(origin: WorldPoint, direction: Unit<WorldVector>) -> Ray {
        Ray { origin, direction }
    }

    pub fn point_at(&self, distance: FloatType) -> WorldPoint {
        self.origin + self.direction.as_ref() * distance
    }
}

/// Result of a ray hitting a single surface: distance along the ray and the
/// surface normal at the hit point. Always returned by value, intersection
/// tests keep no state between calls.
#[derive(Copy, Clone, Debug)]
pub struct SurfaceHit {
    pub t: FloatType,
    pub normal: Unit<WorldVector>,
}
