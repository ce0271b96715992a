use image::RgbaImage;

use crate::{screen_block::ScreenBlock, tracer::Tracer, util::Rgb};

/// Renders one tile of the image into the per-worker buffer.
///
/// Image rows grow downward while camera rows grow upward, so the row index
/// is flipped here.
pub fn render_tile(tracer: &Tracer, tile: &ScreenBlock, buffer: &mut RgbaImage) {
    let height = tracer.camera().resolution().y;
    for point in tile.internal_points() {
        let row = height - 1 - point.y;
        let pixel = tracer
            .render_pixel(row, point.x)
            .expect("Tiles never leave the camera resolution!");

        let buffer_position = point - tile.min;
        buffer.put_pixel(buffer_position.x, buffer_position.y, rgb_to_image(pixel));
    }
}

/// Maps an 0-255 rgb pixel to an opaque pixel type compatible with module image.
pub fn rgb_to_image(pixel: Rgb) -> image::Rgba<u8> {
    image::Rgba([pixel.r, pixel.g, pixel.b, 255])
}
