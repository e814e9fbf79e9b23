//! Affine and map-to-pixel transforms

use crate::envelope::Envelope;

/// Affine Transformation
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct AffineTransform {
    pub sx: f64,
    pub sy: f64,
    pub shx: f64,
    pub shy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl AffineTransform {
    /// Identity transform
    pub fn new() -> Self {
        Self { sx: 1.0,  sy: 1.0,
               shx: 0.0, shy: 0.0,
               tx: 0.0,  ty: 0.0,
        }
    }
    /// Add a translation to the transform
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.tx += dx;
        self.ty += dy;
    }
    /// Add a scaling to the transform
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.sx  *= sx;
        self.shx *= sx;
        self.tx  *= sx;
        self.sy  *= sy;
        self.shy *= sy;
        self.ty  *= sy;
    }
    /// Perform the transform
    pub fn transform(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.sx  + y * self.shx + self.tx,
         x * self.shy + y * self.sy  + self.ty)
    }
    fn determinant(&self) -> f64 {
        self.sx * self.sy - self.shy * self.shx
    }
    /// Inverse of the transform
    pub fn invert(&self) -> Self {
        let d = 1.0 / self.determinant();
        let sx = self.sy * d;
        let sy = self.sx * d;
        let shy = -self.shy * d;
        let shx = -self.shx * d;
        let tx = -self.tx * sx - self.ty * shx;
        let ty = -self.tx * shy - self.ty * sy;
        Self { sx, sy, shx, shy, tx, ty }
    }
}

/// Maps a map extent onto a `width` x `height` pixel grid
///
/// Pixel rows run top to bottom, so map `maxy` lands on pixel row 0.
///   The offset shifts the grid, for rendering one tile of a larger image.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct ViewTransform {
    width: usize,
    height: usize,
    extent: Envelope<f64>,
    offset: (f64, f64),
    fwd: AffineTransform,
    inv: AffineTransform,
}

impl ViewTransform {
    pub fn new(width: usize, height: usize, extent: Envelope<f64>, offset_x: f64, offset_y: f64) -> Self {
        let sx = width as f64 / extent.width();
        let sy = height as f64 / extent.height();
        let mut fwd = AffineTransform::new();
        fwd.translate(-extent.minx, -extent.maxy);
        fwd.scale(sx, -sy);
        fwd.translate(-offset_x, -offset_y);
        let inv = fwd.invert();
        Self { width, height, extent, offset: (offset_x, offset_y), fwd, inv }
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn extent(&self) -> &Envelope<f64> {
        &self.extent
    }
    pub fn offset(&self) -> (f64, f64) {
        self.offset
    }
    /// Map units per pixel along x
    pub fn scale(&self) -> f64 {
        self.extent.width() / self.width as f64
    }
    /// Map to pixel
    pub fn forward(&self, x: f64, y: f64) -> (f64, f64) {
        self.fwd.transform(x, y)
    }
    /// Pixel to map
    pub fn backward(&self, x: f64, y: f64) -> (f64, f64) {
        self.inv.transform(x, y)
    }
    /// Map box to pixel box
    pub fn forward_box(&self, env: &Envelope<f64>) -> Envelope<f64> {
        let (x0, y0) = self.forward(env.minx, env.miny);
        let (x1, y1) = self.forward(env.maxx, env.maxy);
        Envelope::new(x0, y0, x1, y1)
    }
    /// Pixel box to map box
    pub fn backward_box(&self, env: &Envelope<f64>) -> Envelope<f64> {
        let (x0, y0) = self.backward(env.minx, env.miny);
        let (x1, y1) = self.backward(env.maxx, env.maxy);
        Envelope::new(x0, y0, x1, y1)
    }
}
