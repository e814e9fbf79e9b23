//! Rendering core of a map toolkit
//!
//! How does this work
//!    pj  = ProjTransform( Projection(src), Projection(dst) )
//!    pj.forward(x,y,z)               -- geometry into the map srs
//!    pj.forward_box_robust(bbox, n)  -- query boxes, sampled perimeter
//!  Map Draw
//!    canvas = RasterCanvas(width, height)
//!    ren    = Renderer(map, canvas, rasterizer)
//!      start_map_processing          -- rasterizer clip box = canvas
//!        start_layer_processing      -- clears labels if asked
//!          ClipBox.render_span()
//!            blend_hspan()
//!              blend_pixel()         -- coverage is the alpha
//!        end_layer_processing
//!      end_map_processing
//!  Images
//!    canvas.set_rectangle()          -- stamp non-transparent pixels
//!    canvas.set_rectangle_alpha()    -- source-over, pixel alpha
//!    scale_image(target, source)     -- nearest neighbor
//!    scale_image_bilinear(...)
//!
//! Pixels are `u32` with red in the least significant byte and alpha in
//! the most significant byte.

pub mod error;
pub mod color;
pub mod math;
pub mod buffer;
pub mod envelope;
pub mod canvas;
pub mod scale;
pub mod lock;
pub mod projection;
pub mod proj_transform;
pub mod affine_transform;
pub mod detector;
pub mod rasterizer;
pub mod map;
pub mod renderer;
pub mod image_util;

pub use crate::error::{Error, RenderState};
pub use crate::color::*;
pub use crate::buffer::*;
pub use crate::envelope::*;
pub use crate::canvas::*;
pub use crate::scale::*;
pub use crate::lock::*;
pub use crate::projection::*;
pub use crate::proj_transform::*;
pub use crate::affine_transform::*;
pub use crate::detector::*;
pub use crate::rasterizer::*;
pub use crate::map::*;
pub use crate::renderer::*;

/// Indexable 2-D pixel surface
///
/// Implemented by owned buffers, canvases and borrowed views so each
///   can serve as a resampling or blitting source
pub trait Surface {
    /// Width in pixels
    fn width(&self) -> usize;
    /// Height in pixels
    fn height(&self) -> usize;
    /// Row `y`, exactly `width()` pixels long
    fn row(&self, y: usize) -> &[u32];
    /// Pixel at (`x`,`y`)
    fn pixel(&self, x: usize, y: usize) -> u32 {
        self.row(y)[x]
    }
}

/// Writable pixel surface
pub trait SurfaceMut: Surface {
    /// Mutable row `y`, exactly `width()` pixels long
    fn row_mut(&mut self, y: usize) -> &mut [u32];
    /// Set pixel at (`x`,`y`)
    fn set(&mut self, x: usize, y: usize, pixel: u32) {
        self.row_mut(y)[x] = pixel;
    }
    /// Copy row `from` over row `to`
    fn copy_row(&mut self, from: usize, to: usize);
}
