//! Raster canvas

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::envelope::Envelope;
use crate::math::blend_over;
use crate::Surface;
use crate::SurfaceMut;

/// Image a map is drawn into
///
/// Every write is bounds checked; writes outside of the canvas are
///   silently dropped and the buffer never grows
#[derive(Debug,Clone)]
pub struct RasterCanvas {
    width: usize,
    height: usize,
    background: Color,
    data: PixelBuffer,
}

impl RasterCanvas {
    /// Create a new, fully transparent canvas
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height,
               background: Color::transparent(),
               data: PixelBuffer::new(width, height) }
    }
    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }
    /// Pixel data
    pub fn data(&self) -> &PixelBuffer {
        &self.data
    }
    /// Mutable pixel data
    pub fn data_mut(&mut self) -> &mut PixelBuffer {
        &mut self.data
    }
    /// Pixel data as bytes, `r,g,b,a` per pixel
    pub fn raw_data(&self) -> Vec<u8> {
        self.data.to_bytes()
    }
    /// Store the nominal background color
    ///
    /// The buffer is not painted, see [clear](#method.clear)
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }
    /// Nominal background color
    pub fn background(&self) -> Color {
        self.background
    }
    /// Paint every pixel with the background color
    pub fn clear(&mut self) {
        self.data.fill(self.background.rgba());
    }
    fn index(&self, x: i64, y: i64) -> Option<(usize, usize)> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            Some((x, y))
        } else {
            None
        }
    }
    /// Pixel at (`x`,`y`) or `None` if outside of the canvas
    pub fn get_pixel(&self, x: i64, y: i64) -> Option<u32> {
        self.index(x, y).map(|id| self.data[id])
    }
    /// Overwrite pixel at (`x`,`y`), no blending
    ///
    /// Locations outside of the canvas are ignored
    ///
    ///     use mapcore::RasterCanvas;
    ///
    ///     let mut canvas = RasterCanvas::new(1,2);
    ///     canvas.set_pixel(0,1, 0xff00_00ff);
    ///     assert_eq!(canvas.get_pixel(0,0), Some(0));
    ///     assert_eq!(canvas.get_pixel(0,1), Some(0xff00_00ff));
    ///
    ///     canvas.set_pixel(10,10, 0xff00_00ff); // Ignored, outside of range
    ///
    pub fn set_pixel(&mut self, x: i64, y: i64, pixel: u32) {
        if let Some(id) = self.index(x, y) {
            self.data[id] = pixel;
        }
    }
    /// Composite the color of `pixel` at (`x`,`y`) with `cover` as its alpha
    ///
    /// The alpha byte of `pixel` is ignored; `cover` is typically the
    ///   anti-aliased coverage from a rasterizer.  A `cover` of 0 does nothing.
    ///
    /// See [blend_over](../math/fn.blend_over.html)
    pub fn blend_pixel(&mut self, x: i64, y: i64, pixel: u32, cover: u8) {
        if cover == 0 {
            return;
        }
        if let Some(id) = self.index(x, y) {
            let dst = self.data[id];
            self.data[id] = blend_over(dst, pixel, u32::from(cover));
        }
    }
    /// Blend a horizontal run of coverage values starting at (`x`,`y`)
    pub fn blend_hspan(&mut self, x: i64, y: i64, pixel: u32, covers: &[u8]) {
        if y < 0 || y as usize >= self.height {
            return;
        }
        for (i, &cover) in covers.iter().enumerate() {
            self.blend_pixel(x.saturating_add(i as i64), y, pixel, cover);
        }
    }
    /// Region of the canvas covered by a `w` x `h` image placed at (`x0`,`y0`)
    fn overlap(&self, x0: i64, y0: i64, w: usize, h: usize) -> Option<Envelope<i64>> {
        let ext0 = Envelope::new(0, 0, self.width as i64, self.height as i64);
        let ext1 = Envelope::new(x0, y0, x0.saturating_add(w as i64), y0.saturating_add(h as i64));
        if ext0.intersects(&ext1) {
            Some(ext0.intersect(&ext1))
        } else {
            None
        }
    }
    /// Stamp `src` with its upper left corner at (`x0`,`y0`)
    ///
    /// Source pixels with a zero alpha byte are skipped, all others
    ///   replace the canvas pixel outright
    pub fn set_rectangle<S: Surface>(&mut self, x0: i64, y0: i64, src: &S) {
        let b = match self.overlap(x0, y0, src.width(), src.height()) {
            None => return,
            Some(b) => b,
        };
        for y in b.miny .. b.maxy {
            let row = src.row((y - y0) as usize);
            let dst = self.data.row_mut(y as usize);
            for x in b.minx .. b.maxx {
                let p = row[(x - x0) as usize];
                if p & 0xff00_0000 != 0 {
                    dst[x as usize] = p;
                }
            }
        }
    }
    /// Composite `src` with its upper left corner at (`x0`,`y0`)
    ///
    /// Each source pixel is blended with its own alpha byte as the cover,
    ///   using the same operator as [blend_pixel](#method.blend_pixel).
    ///   Source pixels with a zero alpha byte are skipped.
    pub fn set_rectangle_alpha<S: Surface>(&mut self, x0: i64, y0: i64, src: &S) {
        let b = match self.overlap(x0, y0, src.width(), src.height()) {
            None => return,
            Some(b) => b,
        };
        for y in b.miny .. b.maxy {
            let row = src.row((y - y0) as usize);
            let dst = self.data.row_mut(y as usize);
            for x in b.minx .. b.maxx {
                let p = row[(x - x0) as usize];
                let cover = p >> 24;
                if cover == 0 {
                    continue;
                }
                let i = x as usize;
                dst[i] = blend_over(dst[i], p, cover);
            }
        }
    }
}

impl Surface for RasterCanvas {
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn row(&self, y: usize) -> &[u32] {
        self.data.row(y)
    }
}

impl SurfaceMut for RasterCanvas {
    fn row_mut(&mut self, y: usize) -> &mut [u32] {
        self.data.row_mut(y)
    }
    fn copy_row(&mut self, from: usize, to: usize) {
        self.data.copy_row(from, to)
    }
}
