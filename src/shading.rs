use nalgebra::{Unit, Vector3};

use crate::geometry::{FloatType, WorldVector};

/// RGB color with components in the 0-255 range.
pub type Color = Vector3<FloatType>;

/// Clamps every component into the displayable 0-255 range.
/// Applied after every color combination, overflow never wraps.
pub fn clamp_color(color: Color) -> Color {
    color.map(|component| component.clamp(0.0, 255.0))
}

const HIGHLIGHT_COLOR: [FloatType; 3] = [250.0, 250.0, 250.0];

/// Directional light, infinitely distant. `direction` points from the light
/// into the scene.
#[derive(Copy, Clone, Debug)]
pub struct Light {
    pub direction: Unit<WorldVector>,
    pub ambient: FloatType,
    pub diffuse: FloatType,
    pub specular: FloatType,
}

impl Light {
    pub fn ambient_term(&self, color: &Color) -> Color {
        clamp_color(color * self.ambient)
    }

    pub fn diffuse_term(&self, color: &Color, normal: &Unit<WorldVector>) -> Color {
        let lambert = normal.dot(&-self.direction.into_inner()).max(0.0);
        clamp_color(color * self.diffuse * lambert)
    }

    /// Blinn-Phong highlight. Applied only to materials that opt in with a
    /// shininess exponent, not derived from the primitive type.
    pub fn blinn_phong_term(
        &self,
        ray_direction: &Unit<WorldVector>,
        normal: &Unit<WorldVector>,
        shininess: FloatType,
    ) -> Color {
        let half = Unit::new_normalize(-self.direction.into_inner() - ray_direction.into_inner());
        let highlight = normal.dot(half.as_ref()).max(0.0).powf(shininess);
        clamp_color(Color::from(HIGHLIGHT_COLOR) * self.specular * highlight)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert2::assert;

    fn light(ambient: FloatType, diffuse: FloatType, specular: FloatType) -> Light {
        Light {
            direction: Unit::new_normalize(WorldVector::new(0.0, 0.0, -1.0)),
            ambient,
            diffuse,
            specular,
        }
    }

    #[test]
    fn clamp_color_pins_both_ends() {
        let clamped = clamp_color(Color::new(300.0, -5.0, 127.5));
        assert!(clamped == Color::new(255.0, 0.0, 127.5));
    }

    #[test]
    fn ambient_scales_the_base_color() {
        let color = light(0.3, 0.5, 0.75).ambient_term(&Color::new(100.0, 200.0, 50.0));
        assert!((color - Color::new(30.0, 60.0, 15.0)).norm() < 1e-3);
    }

    #[test]
    fn ambient_overflow_is_clamped() {
        let color = light(2.0, 0.5, 0.75).ambient_term(&Color::new(200.0, 10.0, 200.0));
        assert!(color == Color::new(255.0, 20.0, 255.0));
    }

    #[test]
    fn diffuse_is_full_when_facing_the_light() {
        let normal = Unit::new_normalize(WorldVector::new(0.0, 0.0, 1.0));
        let color = light(0.3, 0.5, 0.75).diffuse_term(&Color::new(100.0, 100.0, 100.0), &normal);
        assert!((color - Color::new(50.0, 50.0, 50.0)).norm() < 1e-3);
    }

    #[test]
    fn diffuse_is_zero_when_facing_away() {
        let normal = Unit::new_normalize(WorldVector::new(0.0, 0.0, -1.0));
        let color = light(0.3, 0.5, 0.75).diffuse_term(&Color::new(100.0, 100.0, 100.0), &normal);
        assert!(color == Color::zeros());
    }

    #[test]
    fn blinn_phong_peaks_on_the_half_vector() {
        // Ray direction opposite the light: the half vector equals the normal.
        let normal = Unit::new_normalize(WorldVector::new(0.0, 0.0, 1.0));
        let ray_direction = Unit::new_normalize(WorldVector::new(0.0, 0.0, -1.0));
        let color = light(0.3, 0.5, 0.75).blinn_phong_term(&ray_direction, &normal, 20.0);
        assert!((color - Color::new(187.5, 187.5, 187.5)).norm() < 1e-3);
    }

    #[test]
    fn blinn_phong_falls_off_away_from_the_half_vector() {
        let tilted = Unit::new_normalize(WorldVector::new(1.0, 0.0, 2.0));
        let ray_direction = Unit::new_normalize(WorldVector::new(0.0, 0.0, -1.0));
        let color = light(0.3, 0.5, 0.75).blinn_phong_term(&ray_direction, &tilted, 20.0);
        assert!(color.x < 187.5);
        assert!(color.x > 0.0);
    }

    #[test]
    fn blinn_phong_overflow_is_clamped() {
        let normal = Unit::new_normalize(WorldVector::new(0.0, 0.0, 1.0));
        let ray_direction = Unit::new_normalize(WorldVector::new(0.0, 0.0, -1.0));
        let color = light(0.3, 0.5, 2.0).blinn_phong_term(&ray_direction, &normal, 20.0);
        assert!(color == Color::new(255.0, 255.0, 255.0));
    }
}
