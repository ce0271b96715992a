use crate::camera::Camera;
use crate::error::Error;
use crate::geometry::{Ray, reflect};
use crate::scene::{HitRecord, Scene};
use crate::shading::{Color, clamp_color};
use crate::util::Rgb;

/// Reflection depth bound; a glazed hit at this depth shades locally without
/// spawning another ray.
pub const MAX_DEPTH: u32 = 3;

const BACKGROUND: [f32; 3] = [80.0, 80.0, 80.0];

// Blend weights for the recursive glaze bounce, tuned for this scene rather
// than derived from any reflectance model.
const GLAZE_BLEND_LIT: f32 = 0.5;
const GLAZE_BLEND_SHADOWED: f32 = 0.8;

/// Recursive Whitted-style tracer over one scene and one camera.
#[derive(Clone, Debug)]
pub struct Tracer {
    scene: Scene,
    camera: Camera,
}

impl Tracer {
    pub fn new(scene: Scene, camera: Camera) -> Tracer {
        Tracer { scene, camera }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Renders a single pixel. Row 0 is the bottom of the camera window.
    pub fn render_pixel(&self, row: u32, col: u32) -> Result<Rgb, Error> {
        let resolution = self.camera.resolution();
        if row >= resolution.y || col >= resolution.x {
            return Err(Error::InvalidCoordinate {
                row,
                col,
                width: resolution.x,
                height: resolution.y,
            });
        }

        let ray = self.camera.primary_ray(row, col);
        let color = self.trace(&ray, 0);
        Ok(Rgb::new(
            color.x.round() as u8,
            color.y.round() as u8,
            color.z.round() as u8,
        ))
    }

    fn trace(&self, ray: &Ray, depth: u32) -> Color {
        let Some(hit) = self.scene.nearest_hit(ray) else {
            return Color::from(BACKGROUND);
        };

        let shadowed = self.scene.occluded(&hit.point);

        if hit.material.glaze && depth < MAX_DEPTH {
            let bounced = self.bounce(ray, &hit, depth);
            return if shadowed {
                clamp_color(bounced * GLAZE_BLEND_SHADOWED)
            } else {
                clamp_color(self.local_shading(ray, &hit) + bounced * GLAZE_BLEND_LIT)
            };
        }

        if shadowed {
            if hit.material.glaze {
                // A glazed surface out of bounces loses even its ambient term.
                Color::zeros()
            } else {
                self.scene.light.ambient_term(&hit.material.color)
            }
        } else {
            clamp_color(self.local_shading(ray, &hit))
        }
    }

    fn local_shading(&self, ray: &Ray, hit: &HitRecord) -> Color {
        let light = &self.scene.light;
        let mut color = light.diffuse_term(&hit.material.color, &hit.normal)
            + light.ambient_term(&hit.material.color);
        if let Some(shininess) = hit.material.shininess {
            color += light.blinn_phong_term(&ray.direction, &hit.normal, shininess);
        }
        color
    }

    fn bounce(&self, ray: &Ray, hit: &HitRecord, depth: u32) -> Color {
        let reflected = reflect(&ray.direction, &hit.normal);
        // The bounce starts a full unit along the reflection, off the glazed
        // surface.
        let origin = hit.point + reflected.into_inner();
        self.trace(&Ray::new(origin, reflected), depth + 1)
    }
}
