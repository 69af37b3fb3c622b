/// Software rasterizer: a fixed-size RGBA surface that strokes line segments
/// and encodes itself as PNG.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::rendering::paint::{PaintCommand, Rgba, Stroke};
use crate::rendering::Screenshot;
use crate::walk::Point;
use crate::Result;

#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Allocate a surface filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgba) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, image::Rgba(background)),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel at (x, y), `None` outside the surface.
    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgba> {
        let (x, y) = self.in_bounds(x, y)?;
        Some(self.image.get_pixel(x, y).0)
    }

    pub fn apply(&mut self, cmd: &PaintCommand) {
        match cmd {
            PaintCommand::Line { from, to, stroke } => self.draw_line(from, to, stroke),
        }
    }

    /// Stroke a segment between two pixel-space points (axes 0 and 1).
    ///
    /// Walks the Bresenham path from `from` to `to` and stamps a round brush
    /// at every step. Pixels off the surface are dropped.
    pub fn draw_line(&mut self, from: &Point, to: &Point, stroke: &Stroke) {
        let (mut x0, mut y0) = (from.coord(0).unwrap_or(0), from.coord(1).unwrap_or(0));
        let (x1, y1) = (to.coord(0).unwrap_or(0), to.coord(1).unwrap_or(0));
        let radius = stroke.radius();

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.stamp(x0, y0, radius, stroke.color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn stamp(&mut self, cx: i64, cy: i64, radius: i64, color: Rgba) {
        (-radius..=radius)
            .flat_map(|dy| (-radius..=radius).map(move |dx| (dx, dy)))
            .filter(|(dx, dy)| dx * dx + dy * dy <= radius * radius)
            .for_each(|(dx, dy)| {
                if let Some((x, y)) = self.in_bounds(cx + dx, cy + dy) {
                    self.image.put_pixel(x, y, image::Rgba(color));
                }
            });
    }

    fn in_bounds(&self, x: i64, y: i64) -> Option<(u32, u32)> {
        if x >= 0 && y >= 0 && x < i64::from(self.width()) && y < i64::from(self.height()) {
            Some((x as u32, y as u32))
        } else {
            None
        }
    }

    /// Encode the current surface as a lossless PNG.
    pub fn render_png(&self) -> Result<Screenshot> {
        let mut png_data = Vec::new();
        PngEncoder::new(&mut png_data).write_image(
            self.image.as_raw(),
            self.width(),
            self.height(),
            ExtendedColorType::Rgba8,
        )?;
        Ok(Screenshot {
            width: self.width(),
            height: self.height(),
            png_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgba = [0, 0, 0, 0];
    const INK: Rgba = [0x44, 0x44, 0x44, 0xff];

    fn thin() -> Stroke {
        Stroke { color: INK, width: 1 }
    }

    #[test]
    fn new_canvas_is_background() {
        let c = Canvas::new(8, 4, [1, 2, 3, 4]);
        assert_eq!(c.width(), 8);
        assert_eq!(c.height(), 4);
        assert_eq!(c.pixel(7, 3), Some([1, 2, 3, 4]));
        assert_eq!(c.pixel(8, 0), None);
        assert_eq!(c.pixel(-1, 0), None);
    }

    #[test]
    fn thin_horizontal_line_covers_endpoints_only_on_its_row() {
        let mut c = Canvas::new(20, 10, BG);
        c.draw_line(&Point::new(vec![2, 5]), &Point::new(vec![12, 5]), &thin());
        for x in 2..=12 {
            assert_eq!(c.pixel(x, 5), Some(INK));
        }
        assert_eq!(c.pixel(1, 5), Some(BG));
        assert_eq!(c.pixel(13, 5), Some(BG));
        assert_eq!(c.pixel(7, 4), Some(BG));
    }

    #[test]
    fn wide_stroke_spreads_around_the_path() {
        let mut c = Canvas::new(40, 40, BG);
        c.draw_line(&Point::new(vec![20, 10]), &Point::new(vec![20, 30]), &Stroke::default());
        assert_eq!(c.pixel(18, 20), Some(INK));
        assert_eq!(c.pixel(22, 20), Some(INK));
        assert_eq!(c.pixel(17, 20), Some(BG));
        assert_eq!(c.pixel(20, 8), Some(INK));
        assert_eq!(c.pixel(20, 33), Some(BG));
    }

    #[test]
    fn off_surface_segment_is_clipped_silently() {
        let mut c = Canvas::new(10, 10, BG);
        c.draw_line(&Point::new(vec![-50, 5]), &Point::new(vec![50, 5]), &thin());
        assert_eq!(c.pixel(0, 5), Some(INK));
        assert_eq!(c.pixel(9, 5), Some(INK));

        let mut far = Canvas::new(10, 10, BG);
        far.draw_line(&Point::new(vec![100, 100]), &Point::new(vec![200, 100]), &thin());
        assert!((0..10).all(|x| (0..10).all(|y| far.pixel(x, y) == Some(BG))));
    }

    #[test]
    fn apply_dispatches_commands() {
        let mut c = Canvas::new(4, 4, BG);
        c.apply(&PaintCommand::Line {
            from: Point::new(vec![0, 0]),
            to: Point::new(vec![3, 3]),
            stroke: thin(),
        });
        assert_eq!(c.pixel(1, 1), Some(INK));
    }

    #[test]
    fn render_png_has_signature_and_dimensions() {
        let c = Canvas::new(16, 8, BG);
        let s = c.render_png().unwrap();
        assert_eq!(s.width, 16);
        assert_eq!(s.height, 8);
        assert_eq!(&s.png_data[0..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&s.png_data).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (16, 8));
    }
}
