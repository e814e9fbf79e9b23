//! Pixel buffers

use crate::Surface;
use crate::SurfaceMut;

use std::ops::Index;
use std::ops::IndexMut;

/// Owned Pixel Buffer
///
/// Data is stored as row-major order (C-format), one `u32` per pixel
#[derive(Debug,Default,Clone,PartialEq,Eq)]
pub struct PixelBuffer {
    data: Vec<u32>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// Create a new buffer of width by height, all pixels zero
    ///
    /// Data for the Image is allocated
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0)
    }
    /// Create a new buffer with every pixel set to `pixel`
    pub fn filled(width: usize, height: usize, pixel: u32) -> Self {
        PixelBuffer { width, height, data: vec![pixel; width * height] }
    }
    /// Wrap existing pixel data
    ///
    /// Returns `None` if `data` does not hold exactly width * height pixels
    pub fn from_vec(width: usize, height: usize, data: Vec<u32>) -> Option<Self> {
        if data.len() != width * height {
            return None;
        }
        Some(PixelBuffer { width, height, data })
    }
    /// Number of pixels
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// No pixels
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// All pixels, row by row
    pub fn data(&self) -> &[u32] {
        &self.data
    }
    /// All pixels, row by row
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }
    /// Pixel at (`x`,`y`) or `None` if outside of the buffer
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.data[y * self.width + x])
        } else {
            None
        }
    }
    /// Set every pixel
    pub fn fill(&mut self, pixel: u32) {
        self.data.iter_mut().for_each(|v| *v = pixel);
    }
    /// Pixels as bytes, `r,g,b,a` per pixel
    pub fn to_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|p| p.to_le_bytes().to_vec()).collect()
    }
    /// Borrow a sub-rectangle
    ///
    /// The rectangle is clipped to the buffer
    pub fn view(&self, x: usize, y: usize, width: usize, height: usize) -> ImageView<'_> {
        let x = x.min(self.width);
        let y = y.min(self.height);
        let width = width.min(self.width - x);
        let height = height.min(self.height - y);
        ImageView { buf: self, x, y, width, height }
    }
}

impl Surface for PixelBuffer {
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn row(&self, y: usize) -> &[u32] {
        let i = y * self.width;
        &self.data[i .. i + self.width]
    }
}

impl SurfaceMut for PixelBuffer {
    fn row_mut(&mut self, y: usize) -> &mut [u32] {
        let i = y * self.width;
        &mut self.data[i .. i + self.width]
    }
    fn copy_row(&mut self, from: usize, to: usize) {
        let w = self.width;
        self.data.copy_within(from * w .. from * w + w, to * w);
    }
}

impl Index<(usize,usize)> for PixelBuffer {
    type Output = u32;
    fn index(&self, index: (usize, usize)) -> &u32 {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        &self.data[index.1 * self.width + index.0]
    }
}
impl IndexMut<(usize,usize)> for PixelBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut u32 {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        &mut self.data[index.1 * self.width + index.0]
    }
}

/// Read-only window into a [PixelBuffer]
///
/// [PixelBuffer]: struct.PixelBuffer.html
#[derive(Debug,Copy,Clone)]
pub struct ImageView<'a> {
    buf: &'a PixelBuffer,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

impl Surface for ImageView<'_> {
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn row(&self, y: usize) -> &[u32] {
        &self.buf.row(self.y + y)[self.x .. self.x + self.width]
    }
}
