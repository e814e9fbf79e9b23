//! Label collision region

use crate::envelope::Envelope;

/// Footprints of labels already placed during a map draw
///
/// A candidate can be placed when it lies inside the region's extent and
///   touches no stored footprint.
#[derive(Debug,Clone)]
pub struct LabelCollisionDetector {
    extent: Envelope<f64>,
    labels: Vec<Envelope<f64>>,
}

impl LabelCollisionDetector {
    pub fn new(extent: Envelope<f64>) -> Self {
        Self { extent, labels: vec![] }
    }
    /// Region for a `width` x `height` canvas grown by `buffer` on every side
    pub fn for_canvas(width: usize, height: usize, buffer: i32) -> Self {
        let b = f64::from(buffer);
        Self::new(Envelope::new(-b, -b, width as f64 + b, height as f64 + b))
    }
    pub fn extent(&self) -> &Envelope<f64> {
        &self.extent
    }
    /// `footprint` is free to be placed
    pub fn has_placement(&self, footprint: &Envelope<f64>) -> bool {
        self.extent.contains_box(footprint) &&
            !self.labels.iter().any(|b| b.intersects(footprint))
    }
    /// Record a placed label
    pub fn insert(&mut self, footprint: Envelope<f64>) {
        self.labels.push(footprint);
    }
    /// Forget all placed labels
    pub fn clear(&mut self) {
        self.labels.clear();
    }
    pub fn len(&self) -> usize {
        self.labels.len()
    }
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item=&Envelope<f64>> {
        self.labels.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement() {
        let mut d = LabelCollisionDetector::for_canvas(100, 50, 10);
        assert_eq!(d.extent(), &Envelope::new(-10.0, -10.0, 110.0, 60.0));
        let a = Envelope::new(0.0, 0.0, 20.0, 10.0);
        assert!(d.has_placement(&a));
        d.insert(a);
        assert!(!d.has_placement(&Envelope::new(15.0, 5.0, 30.0, 15.0)));
        assert!(d.has_placement(&Envelope::new(21.0, 0.0, 30.0, 10.0)));
        // Outside the buffered extent
        assert!(!d.has_placement(&Envelope::new(105.0, 0.0, 115.0, 10.0)));
        d.clear();
        assert!(d.is_empty());
        assert!(d.has_placement(&Envelope::new(15.0, 5.0, 30.0, 15.0)));
    }
}
