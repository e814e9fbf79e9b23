//! Map and layer description consumed by the renderer
//!
//! Styles and datasources are handled elsewhere; only what the render
//!   pipeline needs is kept here.

use crate::color::Color;
use crate::envelope::Envelope;

/// Default reference system, geographic WGS84
pub const DEFAULT_SRS: &str = "+proj=longlat +ellps=WGS84 +datum=WGS84 +no_defs";

/// A layer of features drawn in order
#[derive(Debug,Clone,PartialEq)]
pub struct Layer {
    pub name: String,
    /// Reference system of the layer's data
    pub srs: String,
    /// Forget previously placed labels when this layer starts
    pub clear_label_cache: bool,
    /// Inactive layers are skipped
    pub active: bool,
}

impl Layer {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(),
               srs: DEFAULT_SRS.to_string(),
               clear_label_cache: false,
               active: true }
    }
    pub fn with_srs(mut self, srs: &str) -> Self {
        self.srs = srs.to_string();
        self
    }
    pub fn with_clear_label_cache(mut self, clear: bool) -> Self {
        self.clear_label_cache = clear;
        self
    }
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// Size, extent and layers of one map image
#[derive(Debug,Clone,PartialEq)]
pub struct Map {
    pub width: usize,
    pub height: usize,
    /// Extent shown, in map `srs` units
    pub extent: Envelope<f64>,
    /// Pixels around the image where labels may still be placed
    pub buffer_size: i32,
    pub background: Option<Color>,
    pub srs: String,
    pub layers: Vec<Layer>,
}

impl Map {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height,
               extent: Envelope::new(-180.0, -90.0, 180.0, 90.0),
               buffer_size: 0,
               background: None,
               srs: DEFAULT_SRS.to_string(),
               layers: vec![] }
    }
    pub fn with_extent(mut self, extent: Envelope<f64>) -> Self {
        self.extent = extent;
        self
    }
    pub fn with_buffer_size(mut self, buffer_size: i32) -> Self {
        self.buffer_size = buffer_size;
        self
    }
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
    pub fn with_srs(mut self, srs: &str) -> Self {
        self.srs = srs.to_string();
        self
    }
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }
    /// Layers that will be drawn
    pub fn active_layers(&self) -> impl Iterator<Item=&Layer> {
        self.layers.iter().filter(|l| l.active)
    }
}
