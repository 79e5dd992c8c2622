//! Shape rasterization primitives
//!
//! Lines, boxes and circles drawn straight into the frame buffer. All
//! coordinates are signed and clip silently at the canvas edge, so shapes
//! may overhang freely. Every pixel goes through the caller's
//! [`GraphicsMode`], which makes rubber-band style Toggle drawing work.

use crate::display::Display;
use crate::interface::ScanInterface;
use crate::mode::GraphicsMode;

impl<I, B> Display<I, B>
where
    I: ScanInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Draw a line between two points, endpoints included
    ///
    /// Bresenham's algorithm; works in any octant.
    pub fn draw_line(&mut self, x1: i16, y1: i16, x2: i16, y2: i16, mode: GraphicsMode) {
        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let sx: i16 = if x1 < x2 { 1 } else { -1 };
        let sy: i16 = if y1 < y2 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x1, y1);

        loop {
            self.write_pixel_at(x, y, mode, true);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw a rectangle outline with corners `(x1, y1)` and `(x2, y2)`
    pub fn draw_box(&mut self, x1: i16, y1: i16, x2: i16, y2: i16, mode: GraphicsMode) {
        self.draw_line(x1, y1, x2, y1, mode);
        self.draw_line(x2, y1, x2, y2, mode);
        self.draw_line(x2, y2, x1, y2, mode);
        self.draw_line(x1, y2, x1, y1, mode);
    }

    /// Draw a filled rectangle with corners `(x1, y1)` and `(x2, y2)`
    pub fn draw_filled_box(&mut self, x1: i16, y1: i16, x2: i16, y2: i16, mode: GraphicsMode) {
        let (left, right) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        for x in left..=right {
            self.draw_line(x, y1, x, y2, mode);
        }
    }

    /// Draw a circle outline centered on `(cx, cy)`
    ///
    /// Midpoint algorithm. A radius of 0 draws the center pixel; negative
    /// radii draw nothing.
    pub fn draw_circle(&mut self, cx: i16, cy: i16, radius: i16, mode: GraphicsMode) {
        if radius < 0 {
            return;
        }
        let mut x = 0i16;
        let mut y = radius;
        let mut f = 1 - radius;

        self.circle_points(cx, cy, x, y, mode);
        while x < y {
            if f >= 0 {
                y -= 1;
                f += 2 * (x - y) + 3;
            } else {
                f += 2 * x + 3;
            }
            x += 1;
            self.circle_points(cx, cy, x, y, mode);
        }
    }

    /// Write the up-to-8 symmetric points of one circle octant step
    ///
    /// Degenerate cases (x == 0, x == y) collapse duplicate points so Toggle
    /// mode never double-flips a pixel.
    fn circle_points(&mut self, cx: i16, cy: i16, x: i16, y: i16, mode: GraphicsMode) {
        if x == 0 {
            self.write_pixel_at(cx, cy + y, mode, true);
            self.write_pixel_at(cx, cy - y, mode, true);
            self.write_pixel_at(cx + y, cy, mode, true);
            self.write_pixel_at(cx - y, cy, mode, true);
        } else if x == y {
            self.write_pixel_at(cx + x, cy + y, mode, true);
            self.write_pixel_at(cx - x, cy + y, mode, true);
            self.write_pixel_at(cx + x, cy - y, mode, true);
            self.write_pixel_at(cx - x, cy - y, mode, true);
        } else if x < y {
            self.write_pixel_at(cx + x, cy + y, mode, true);
            self.write_pixel_at(cx - x, cy + y, mode, true);
            self.write_pixel_at(cx + x, cy - y, mode, true);
            self.write_pixel_at(cx - x, cy - y, mode, true);
            self.write_pixel_at(cx + y, cy + x, mode, true);
            self.write_pixel_at(cx - y, cy + x, mode, true);
            self.write_pixel_at(cx + y, cy - x, mode, true);
            self.write_pixel_at(cx - y, cy - x, mode, true);
        }
    }
}
