//! Render pipeline
//!
//! A [Renderer] sequences one map draw:
//!
//! ```text
//! Created -> MapStarted -> { LayerActive -> MapStarted }* -> MapEnded
//! ```
//!
//! It owns the label collision region and configures the rasterizer, but
//!   never draws geometry itself.
//!
//! [Renderer]: struct.Renderer.html

use crate::affine_transform::ViewTransform;
use crate::canvas::RasterCanvas;
use crate::color::Color;
use crate::detector::LabelCollisionDetector;
use crate::error::{Error, RenderState, Result};
use crate::map::{Layer, Map};
use crate::rasterizer::{ClipBox, Rasterizer};

/// Lifecycle hooks of a map draw
///
/// Wrapping pipelines (buffering, instrumentation) implement this by
///   delegating to an inner pipeline.
pub trait MapProcessor {
    fn start_map_processing(&mut self, map: &Map) -> Result<()>;
    fn end_map_processing(&mut self, map: &Map) -> Result<()>;
    fn start_layer_processing(&mut self, layer: &Layer) -> Result<()>;
    fn end_layer_processing(&mut self, layer: &Layer) -> Result<()>;

    /// Run the whole draw, calling `render_layer` inside each active layer
    fn apply<F>(&mut self, map: &Map, mut render_layer: F) -> Result<()>
        where Self: Sized, F: FnMut(&mut Self, &Layer) -> Result<()>
    {
        self.start_map_processing(map)?;
        for layer in map.active_layers() {
            self.start_layer_processing(layer)?;
            render_layer(self, layer)?;
            self.end_layer_processing(layer)?;
        }
        self.end_map_processing(map)
    }
}

/// Draws a map into a [RasterCanvas](../canvas/struct.RasterCanvas.html)
#[derive(Debug)]
pub struct Renderer<'a, R> {
    canvas: &'a mut RasterCanvas,
    rasterizer: R,
    detector: LabelCollisionDetector,
    view: ViewTransform,
    scale_factor: f64,
    state: RenderState,
}

impl<'a, R: Rasterizer> Renderer<'a, R> {
    /// Bind `canvas` for drawing `map`
    ///
    /// A map background is stored on the canvas and painted immediately.
    ///   The offset places the canvas within a larger image, in pixels.
    pub fn new(map: &Map, canvas: &'a mut RasterCanvas, rasterizer: R,
               scale_factor: f64, offset_x: u32, offset_y: u32) -> Self {
        if let Some(bg) = map.background {
            canvas.set_background(bg);
            canvas.clear();
        }
        let view = ViewTransform::new(map.width, map.height, map.extent,
                                      f64::from(offset_x), f64::from(offset_y));
        let detector = LabelCollisionDetector::for_canvas(map.width, map.height, map.buffer_size);
        log::debug!("renderer {}x{} scale_factor={}", canvas.width(), canvas.height(), scale_factor);
        Self { canvas, rasterizer, detector, view, scale_factor,
               state: RenderState::Created }
    }
    pub fn state(&self) -> RenderState {
        self.state
    }
    pub fn canvas(&self) -> &RasterCanvas {
        &*self.canvas
    }
    pub fn canvas_mut(&mut self) -> &mut RasterCanvas {
        &mut *self.canvas
    }
    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }
    pub fn rasterizer_mut(&mut self) -> &mut R {
        &mut self.rasterizer
    }
    /// Labels placed so far
    pub fn detector(&self) -> &LabelCollisionDetector {
        &self.detector
    }
    pub fn detector_mut(&mut self) -> &mut LabelCollisionDetector {
        &mut self.detector
    }
    /// Map to pixel transform
    pub fn view_transform(&self) -> &ViewTransform {
        &self.view
    }
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
    fn transition(&mut self, expected: RenderState, next: RenderState) -> Result<()> {
        if self.state != expected {
            return Err(Error::InvalidState { expected, found: self.state });
        }
        self.state = next;
        Ok(())
    }
}

impl Renderer<'_, ClipBox> {
    /// Blend a run of coverage values, clipped to the rasterizer's region
    pub fn render_span(&mut self, x: i64, y: i64, color: Color, covers: &[u8]) {
        self.rasterizer.render_span(&mut *self.canvas, x, y, color.rgba(), covers);
    }
}

impl<R: Rasterizer> MapProcessor for Renderer<'_, R> {
    /// Reset the rasterizer and clip it to the canvas
    fn start_map_processing(&mut self, map: &Map) -> Result<()> {
        self.transition(RenderState::Created, RenderState::MapStarted)?;
        log::debug!("start map processing bbox={:?}", map.extent);
        let (w, h) = (self.canvas.width() as i64, self.canvas.height() as i64);
        self.rasterizer.reset();
        self.rasterizer.clip_box(0, 0, w, h);
        Ok(())
    }
    fn end_map_processing(&mut self, _map: &Map) -> Result<()> {
        self.transition(RenderState::MapStarted, RenderState::MapEnded)?;
        log::debug!("end map processing");
        Ok(())
    }
    /// Reset the label region if the layer asks for it
    fn start_layer_processing(&mut self, layer: &Layer) -> Result<()> {
        self.transition(RenderState::MapStarted, RenderState::LayerActive)?;
        log::debug!("start layer processing : {}", layer.name);
        if layer.clear_label_cache {
            log::debug!("clearing {} placed labels", self.detector.len());
            self.detector.clear();
        }
        Ok(())
    }
    fn end_layer_processing(&mut self, _layer: &Layer) -> Result<()> {
        self.transition(RenderState::LayerActive, RenderState::MapStarted)?;
        log::debug!("end layer processing");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::Envelope;

    #[test]
    fn out_of_order_hooks_fail() {
        let map = Map::new(4, 4);
        let layer = Layer::new("a");
        let mut canvas = RasterCanvas::new(4, 4);
        let mut ren = Renderer::new(&map, &mut canvas, ClipBox::new(), 1.0, 0, 0);
        assert!(ren.start_layer_processing(&layer).is_err());
        assert!(ren.end_map_processing(&map).is_err());
        assert_eq!(ren.state(), RenderState::Created);
        ren.start_map_processing(&map).unwrap();
        assert!(ren.start_map_processing(&map).is_err());
        assert!(ren.end_layer_processing(&layer).is_err());
        ren.start_layer_processing(&layer).unwrap();
        assert!(ren.end_map_processing(&map).is_err());
        ren.end_layer_processing(&layer).unwrap();
        ren.end_map_processing(&map).unwrap();
        assert_eq!(ren.state(), RenderState::MapEnded);
        match ren.start_map_processing(&map) {
            Err(Error::InvalidState { expected, found }) => {
                assert_eq!(expected, RenderState::Created);
                assert_eq!(found, RenderState::MapEnded);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn clip_box_matches_canvas() {
        let map = Map::new(10, 10);
        let mut canvas = RasterCanvas::new(6, 3);
        let mut ren = Renderer::new(&map, &mut canvas, ClipBox::new(), 1.0, 0, 0);
        assert!(ren.rasterizer().clip().is_none());
        ren.start_map_processing(&map).unwrap();
        assert_eq!(ren.rasterizer().clip(), Some(Envelope::new(0, 0, 6, 3)));
    }

    #[derive(Debug, Default)]
    struct Counting {
        resets: usize,
        clip: Option<Envelope<i64>>,
    }

    impl Rasterizer for Counting {
        fn clip_box(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
            self.clip = Some(Envelope::new(x1, y1, x2, y2));
        }
        fn clip(&self) -> Option<Envelope<i64>> {
            self.clip
        }
        fn reset(&mut self) {
            self.resets += 1;
            self.clip = None;
        }
    }

    #[test]
    fn map_start_resets_then_clips() {
        let map = Map::new(5, 5).with_layer(Layer::new("a"));
        let mut canvas = RasterCanvas::new(5, 5);
        let mut ren = Renderer::new(&map, &mut canvas, Counting::default(), 1.0, 0, 0);
        ren.apply(&map, |r, _| {
            assert_eq!(r.rasterizer().resets, 1);
            Ok(())
        }).unwrap();
        assert_eq!(ren.rasterizer().resets, 1);
        assert_eq!(ren.rasterizer().clip(), Some(Envelope::new(0, 0, 5, 5)));
    }
}
