//! Axis-aligned boxes

use std::ops::{Add, Div, Mul, Sub};

/// Rectangle used for pixel clipping and geographic bounding boxes
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Envelope<T> {
    /// Minimum x value
    pub minx: T,
    /// Minimum y value
    pub miny: T,
    /// Maximum x value
    pub maxx: T,
    /// Maximum y value
    pub maxy: T,
}

impl<T> Envelope<T> where T: PartialOrd + Copy + Add<Output=T> + Sub<Output=T> {
    /// Create a new Envelope
    ///
    /// Values are sorted before storing
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        let (minx, maxx) = if x1 > x2 { (x2,x1) } else { (x1,x2) };
        let (miny, maxy) = if y1 > y2 { (y2,y1) } else { (y1,y2) };
        Self { minx, miny, maxx, maxy }
    }
    /// Smallest Envelope holding every point
    ///
    /// Returns `None` for an empty iterator
    pub fn from_points<I>(points: I) -> Option<Self> where I: IntoIterator<Item=(T,T)> {
        let mut iter = points.into_iter();
        let (x, y) = iter.next()?;
        let mut env = Self::new(x, y, x, y);
        for (x, y) in iter {
            env.expand_to_include(x, y);
        }
        Some(env)
    }
    pub fn width(&self) -> T {
        self.maxx - self.minx
    }
    pub fn height(&self) -> T {
        self.maxy - self.miny
    }
    /// Expand if the point (x,y) is outside
    pub fn expand_to_include(&mut self, x: T, y: T) {
        if x < self.minx { self.minx = x; }
        if x > self.maxx { self.maxx = x; }
        if y < self.miny { self.miny = y; }
        if y > self.maxy { self.maxy = y; }
    }
    /// Expand if the envelope is outside
    pub fn expand_to_include_box(&mut self, other: &Envelope<T>) {
        self.expand_to_include(other.minx, other.miny);
        self.expand_to_include(other.maxx, other.maxy);
    }
    /// Point is inside or on the edge
    pub fn contains(&self, x: T, y: T) -> bool {
        x >= self.minx && x <= self.maxx && y >= self.miny && y <= self.maxy
    }
    /// Envelope is completely inside or on the edge
    pub fn contains_box(&self, other: &Envelope<T>) -> bool {
        self.contains(other.minx, other.miny) && self.contains(other.maxx, other.maxy)
    }
    /// Envelopes overlap or touch
    pub fn intersects(&self, other: &Envelope<T>) -> bool {
        !(other.minx > self.maxx || other.maxx < self.minx ||
          other.miny > self.maxy || other.maxy < self.miny)
    }
    /// Overlapping region
    ///
    /// Only meaningful when the envelopes [intersect](#method.intersects)
    pub fn intersect(&self, other: &Envelope<T>) -> Envelope<T> {
        let max = |a: T, b: T| if a > b { a } else { b };
        let min = |a: T, b: T| if a < b { a } else { b };
        Envelope {
            minx: max(self.minx, other.minx),
            miny: max(self.miny, other.miny),
            maxx: min(self.maxx, other.maxx),
            maxy: min(self.maxy, other.maxy),
        }
    }
}

impl<T> Envelope<T>
    where T: PartialOrd + Copy + Add<Output=T> + Sub<Output=T> + Mul<Output=T> + Div<Output=T> + From<u8>
{
    /// Center point
    pub fn center(&self) -> (T, T) {
        let two = T::from(2);
        ((self.minx + self.maxx) / two, (self.miny + self.maxy) / two)
    }
    /// Move the center to (`cx`,`cy`), keeping width and height
    pub fn re_center(&mut self, cx: T, cy: T) {
        let two = T::from(2);
        let (w2, h2) = (self.width() / two, self.height() / two);
        self.minx = cx - w2;
        self.miny = cy - h2;
        self.maxx = cx + w2;
        self.maxy = cy + h2;
    }
    /// Change the width, keeping the center
    pub fn set_width(&mut self, w: T) {
        let (cx, _) = self.center();
        let w2 = w / T::from(2);
        self.minx = cx - w2;
        self.maxx = cx + w2;
    }
    /// Change the height, keeping the center
    pub fn set_height(&mut self, h: T) {
        let (_, cy) = self.center();
        let h2 = h / T::from(2);
        self.miny = cy - h2;
        self.maxy = cy + h2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sorts_corners() {
        let e = Envelope::new(10, 20, 0, 5);
        assert_eq!(e, Envelope { minx: 0, miny: 5, maxx: 10, maxy: 20 });
        assert_eq!((e.width(), e.height()), (10, 15));
    }

    #[test]
    fn intersection() {
        let a = Envelope::new(0, 0, 10, 10);
        let b = Envelope::new(5, -5, 20, 5);
        assert!(a.intersects(&b));
        assert_eq!(a.intersect(&b), Envelope::new(5, 0, 10, 5));
        let c = Envelope::new(11, 0, 12, 1);
        assert!(!a.intersects(&c));
        // Edges touch
        let d = Envelope::new(10, 10, 12, 12);
        assert!(a.intersects(&d));
        assert_eq!(a.intersect(&d).width(), 0);
    }

    #[test]
    fn re_center_and_resize() {
        let mut e = Envelope::new(0.0, 0.0, 4.0, 2.0);
        assert_eq!(e.center(), (2.0, 1.0));
        e.re_center(10.0, 10.0);
        assert_eq!(e, Envelope::new(8.0, 9.0, 12.0, 11.0));
        e.set_width(2.0);
        e.set_height(6.0);
        assert_eq!(e, Envelope::new(9.0, 7.0, 11.0, 13.0));
    }

    #[test]
    fn points() {
        let e = Envelope::from_points(vec![(1.0, 5.0), (-1.0, 2.0), (3.0, 0.0)]).unwrap();
        assert_eq!(e, Envelope::new(-1.0, 0.0, 3.0, 5.0));
        assert!(Envelope::<f64>::from_points(vec![]).is_none());
        assert!(e.contains(0.0, 0.0));
        assert!(!e.contains(0.0, 5.5));
    }
}
