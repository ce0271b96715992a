use assert2::assert;
use bon::bon;
use nalgebra::Unit;

use crate::error::Error;
use crate::geometry::{
    FloatType, Ray, ScreenSize, WorldPoint, WorldVector, try_unit,
};

// The image plane is a fixed window, independent of the resolution.
const WINDOW_LEFT: FloatType = -250.0;
const WINDOW_RIGHT: FloatType = 250.0;
const WINDOW_BOTTOM: FloatType = -250.0;
const WINDOW_TOP: FloatType = 250.0;
const FOCAL_DISTANCE: FloatType = 350.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Projection {
    Orthographic,
    Perspective,
}

#[derive(Copy, Clone, Debug)]
pub struct Camera {
    eye: WorldPoint,

    resolution: ScreenSize,

    look: Unit<WorldVector>,
    u_basis: Unit<WorldVector>,
    v_basis: Unit<WorldVector>,

    projection: Projection,
}

#[bon]
impl Camera {
    #[builder]
    pub fn new(
        eye: WorldPoint,
        target: WorldPoint,
        up: WorldVector,
        resolution: ScreenSize,
        projection: Projection,
    ) -> Result<Self, Error> {
        assert!(resolution.x > 0);
        assert!(resolution.y > 0);

        let look = try_unit(target - eye)?;
        let reverse_look = -look.into_inner();
        let u_basis = try_unit(up.cross(&reverse_look))?;
        let v_basis = Unit::new_normalize(reverse_look.cross(u_basis.as_ref()));

        Ok(Camera {
            eye,
            resolution,
            look,
            u_basis,
            v_basis,
            projection,
        })
    }
}

impl Camera {
    pub fn resolution(&self) -> ScreenSize {
        self.resolution
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
    }

    /// Builds the primary ray for the given pixel, sampled at the pixel
    /// center. Row 0 is the bottom of the camera window.
    pub fn primary_ray(&self, row: u32, col: u32) -> Ray {
        let u = WINDOW_LEFT
            + (WINDOW_RIGHT - WINDOW_LEFT) * (col as FloatType + 0.5)
                / self.resolution.x as FloatType;
        let v = WINDOW_BOTTOM
            + (WINDOW_TOP - WINDOW_BOTTOM) * (row as FloatType + 0.5)
                / self.resolution.y as FloatType;
        let window_offset = self.u_basis.as_ref() * u + self.v_basis.as_ref() * v;

        match self.projection {
            Projection::Orthographic => Ray::new(self.eye + window_offset, self.look),
            Projection::Perspective => Ray::new(
                self.eye,
                Unit::new_normalize(self.look.as_ref() * FOCAL_DISTANCE + window_offset),
            ),
        }
    }
}
