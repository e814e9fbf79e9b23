//! Rasterizer boundary
//!
//! Scanline conversion of paths happens outside of this crate.  A
//!   rasterizer is handed its clip region by the renderer and reports
//!   coverage as runs of 0..=255 values per pixel, which end up in
//!   [RasterCanvas::blend_pixel](../canvas/struct.RasterCanvas.html#method.blend_pixel).

use crate::canvas::RasterCanvas;
use crate::envelope::Envelope;

/// Anything that accepts a clip region from the renderer
pub trait Rasterizer {
    /// Limit output to pixels in `[x1,x2) x [y1,y2)`
    fn clip_box(&mut self, x1: i64, y1: i64, x2: i64, y2: i64);
    /// Region set by the last `clip_box`, if any
    fn clip(&self) -> Option<Envelope<i64>>;
    /// Forget any accumulated geometry, called when a map draw starts
    fn reset(&mut self) {}
}

/// Clip region for coverage spans
#[derive(Debug,Default,Clone)]
pub struct ClipBox {
    clip_box: Option<Envelope<i64>>,
}

impl ClipBox {
    pub fn new() -> Self {
        Self::default()
    }
    /// Clip the span of `len` pixels at (`x`,`y`)
    ///
    /// Returns the clipped start x, the number of pixels skipped from the
    ///   front and the remaining length
    pub fn clip_span(&self, x: i64, y: i64, len: i64) -> Option<(i64, usize, usize)> {
        let b = match self.clip_box {
            None => return if len > 0 { Some((x, 0, len as usize)) } else { None },
            Some(ref b) => b,
        };
        if y < b.miny || y >= b.maxy {
            return None;
        }
        let (mut x, mut len, mut off) = (x, len, 0);
        if x < b.minx {
            off = b.minx.saturating_sub(x);
            len = len.saturating_sub(off);
            x = b.minx;
        }
        if x.saturating_add(len) > b.maxx {
            len = b.maxx - x;
        }
        if len <= 0 {
            return None;
        }
        Some((x, off as usize, len as usize))
    }
    /// Blend a run of coverage values in `pixel`'s color into `canvas`
    pub fn render_span(&self, canvas: &mut RasterCanvas, x: i64, y: i64, pixel: u32, covers: &[u8]) {
        if let Some((x, off, len)) = self.clip_span(x, y, covers.len() as i64) {
            canvas.blend_hspan(x, y, pixel, &covers[off .. off + len]);
        }
    }
}

impl Rasterizer for ClipBox {
    fn clip_box(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        self.clip_box = Some(Envelope::new(x1, y1, x2, y2));
    }
    fn clip(&self) -> Option<Envelope<i64>> {
        self.clip_box
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_clipping() {
        let mut c = ClipBox::new();
        assert_eq!(c.clip_span(-5, 0, 10), Some((-5, 0, 10)));
        c.clip_box(0, 0, 8, 4);
        assert_eq!(c.clip_span(-5, 0, 10), Some((0, 5, 5)));
        assert_eq!(c.clip_span(6, 1, 10), Some((6, 0, 2)));
        assert_eq!(c.clip_span(-5, 0, 3), None);
        assert_eq!(c.clip_span(2, 4, 3), None);
        assert_eq!(c.clip_span(8, 0, 3), None);
        assert_eq!(c.clip_span(i64::MIN, 0, 10), None);
        assert_eq!(c.clip_span(i64::MAX - 1, 0, 10), None);
        assert_eq!(c.clip_span(7, 0, i64::MAX), Some((7, 0, 1)));
    }

    #[test]
    fn render_span_blends() {
        let mut canvas = RasterCanvas::new(4, 1);
        let mut c = ClipBox::new();
        c.clip_box(1, 0, 3, 1);
        c.render_span(&mut canvas, 0, 0, 0xff00_00ff, &[255, 255, 255, 255]);
        assert_eq!(canvas.data().data(), &[0, 0xff00_00ff, 0xff00_00ff, 0]);
    }
}
