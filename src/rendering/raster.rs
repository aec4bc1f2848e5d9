/// Rasterizer: executes paint commands against an RGB canvas

use std::io::Cursor;

use image::{ImageFormat, RgbImage};

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::font::Font;
use crate::rendering::paint::PaintCommand;

/// An owned RGB pixel buffer with the drawing operations the paint commands
/// need. Dimensions are fixed at creation; out-of-range writes are clipped.
pub struct Canvas {
    pixels: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Read a pixel, `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let p = self.pixels.get_pixel(x, y).0;
        Some(Rgb::new(p[0], p[1], p[2]))
    }

    fn put(&mut self, x: i64, y: i64, rgb: Rgb) {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return;
        }
        self.pixels
            .put_pixel(x as u32, y as u32, image::Rgb(rgb.channels()));
    }

    pub fn fill(&mut self, rgb: Rgb) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = image::Rgb(rgb.channels());
        }
    }

    /// Stroke a circle by inking the radial band (radius - stroke, radius]
    pub fn circle_outline(&mut self, cx: i32, cy: i32, radius: u32, stroke: u32, rgb: Rgb) {
        let r = radius as i64;
        let inner = radius.saturating_sub(stroke) as f64;
        let outer = radius as f64;
        for dy in -r..=r {
            for dx in -r..=r {
                let d = ((dx * dx + dy * dy) as f64).sqrt();
                if d > inner && d <= outer {
                    self.put(cx as i64 + dx, cy as i64 + dy, rgb);
                }
            }
        }
    }

    pub fn rect_outline(&mut self, x: i32, y: i32, width: u32, height: u32, stroke: u32, rgb: Rgb) {
        for dy in 0..height {
            for dx in 0..width {
                let on_band = dx < stroke
                    || dy < stroke
                    || dx >= width - stroke.min(width)
                    || dy >= height - stroke.min(height);
                if on_band {
                    self.put(x as i64 + dx as i64, y as i64 + dy as i64, rgb);
                }
            }
        }
    }

    /// Blit a builtin-face glyph at an integer scale, top-left at (x, y)
    pub fn blit_glyph(&mut self, ch: char, x: i32, y: i32, scale: u32, rgb: Rgb) {
        let glyph = match Font::builtin().glyph(ch) {
            Some(glyph) => glyph,
            None => return,
        };
        for gy in 0..Font::GLYPH_HEIGHT {
            for gx in 0..Font::GLYPH_WIDTH {
                if !glyph.is_set(gx, gy) {
                    continue;
                }
                for sy in 0..scale {
                    for sx in 0..scale {
                        self.put(
                            x as i64 + (gx * scale + sx) as i64,
                            y as i64 + (gy * scale + sy) as i64,
                            rgb,
                        );
                    }
                }
            }
        }
    }

    /// Encode the canvas as PNG bytes
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.pixels
            .write_to(&mut buf, ImageFormat::Png)
            .map_err(|e| Error::RenderError(format!("PNG encoding failed: {e}")))?;
        Ok(buf.into_inner())
    }
}

/// Execute `commands` in order against a fresh canvas
pub fn rasterize(width: u32, height: u32, commands: &[PaintCommand]) -> Canvas {
    let mut canvas = Canvas::new(width, height);
    for command in commands {
        match *command {
            PaintCommand::Fill { rgb } => canvas.fill(rgb),
            PaintCommand::CircleOutline {
                cx,
                cy,
                radius,
                stroke,
                rgb,
            } => canvas.circle_outline(cx, cy, radius, stroke, rgb),
            PaintCommand::RectOutline {
                x,
                y,
                width,
                height,
                stroke,
                rgb,
            } => canvas.rect_outline(x, y, width, height, stroke, rgb),
            PaintCommand::Glyph { ch, x, y, scale, rgb } => {
                canvas.blit_glyph(ch, x, y, scale, rgb)
            }
        }
    }
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLUE, WHITE};

    #[test]
    fn canvas_has_requested_dimensions() {
        let canvas = Canvas::new(128, 64);
        assert_eq!(canvas.width(), 128);
        assert_eq!(canvas.height(), 64);
    }

    #[test]
    fn fill_sets_every_pixel() {
        let mut canvas = Canvas::new(8, 8);
        canvas.fill(BLUE);
        assert_eq!(canvas.pixel(0, 0), Some(BLUE));
        assert_eq!(canvas.pixel(7, 7), Some(BLUE));
        assert_eq!(canvas.pixel(8, 8), None);
    }

    #[test]
    fn circle_band_is_inked() {
        let mut canvas = Canvas::new(64, 64);
        canvas.fill(BLUE);
        canvas.circle_outline(32, 32, 24, 4, WHITE);
        // Due north of the center: on the band at the radius, background inside
        assert_eq!(canvas.pixel(32, 32 - 24), Some(WHITE));
        assert_eq!(canvas.pixel(32, 32 - 21), Some(WHITE));
        assert_eq!(canvas.pixel(32, 32), Some(BLUE));
    }

    #[test]
    fn drawing_clips_at_edges() {
        let mut canvas = Canvas::new(16, 16);
        canvas.circle_outline(0, 0, 12, 2, WHITE);
        canvas.rect_outline(-4, -4, 10, 10, 2, WHITE);
        assert_eq!(canvas.width(), 16);
        assert_eq!(canvas.height(), 16);
    }

    #[test]
    fn glyph_blit_inks_foreground() {
        let mut canvas = Canvas::new(16, 16);
        canvas.fill(BLUE);
        canvas.blit_glyph('T', 4, 4, 1, WHITE);
        // Top bar of the T
        assert_eq!(canvas.pixel(4, 4), Some(WHITE));
        assert_eq!(canvas.pixel(8, 4), Some(WHITE));
        // Below the stem
        assert_eq!(canvas.pixel(4, 12), Some(BLUE));
    }

    #[test]
    fn unknown_glyph_is_a_no_op() {
        let mut canvas = Canvas::new(16, 16);
        canvas.fill(BLUE);
        canvas.blit_glyph('@', 4, 4, 1, WHITE);
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(canvas.pixel(x, y), Some(BLUE));
            }
        }
    }
}
