//! Conversion between reference systems

use crate::envelope::Envelope;
use crate::error::{Error, Result};
use crate::lock::ProjLock;
use crate::projection::Projection;

use proj4rs::transform::transform;

use std::f64::consts::PI;

const DEG_TO_RAD: f64 = PI / 180.0;
const RAD_TO_DEG: f64 = 180.0 / PI;

/// Converts points and boxes from a source to a destination projection
///
/// When source and destination are equal every operation is the identity
///   and the projection library is never called.
#[derive(Debug)]
pub struct ProjTransform {
    source: Projection,
    dest: Projection,
    is_source_geographic: bool,
    is_dest_geographic: bool,
    is_source_equal_dest: bool,
    lock: ProjLock,
}

impl ProjTransform {
    /// Create a transform with the default [ProjLock](../lock/enum.ProjLock.html)
    pub fn new(source: Projection, dest: Projection) -> Self {
        Self::with_lock(source, dest, ProjLock::default())
    }
    /// Create a transform synchronized by `lock`
    pub fn with_lock(source: Projection, dest: Projection, lock: ProjLock) -> Self {
        let is_source_geographic = source.is_geographic();
        let is_dest_geographic = dest.is_geographic();
        let is_source_equal_dest = source == dest;
        Self { source, dest, is_source_geographic, is_dest_geographic,
               is_source_equal_dest, lock }
    }
    /// Build both projections from definitions
    pub fn from_params(source: &str, dest: &str) -> Result<Self> {
        Ok(Self::new(Projection::new(source)?, Projection::new(dest)?))
    }
    /// Source and destination are the same
    pub fn equal(&self) -> bool {
        self.is_source_equal_dest
    }
    pub fn source(&self) -> &Projection {
        &self.source
    }
    pub fn dest(&self) -> &Projection {
        &self.dest
    }
    pub fn lock(&self) -> &ProjLock {
        &self.lock
    }

    fn project(&self, from: &Projection, to: &Projection,
               from_geographic: bool, to_geographic: bool,
               (x, y, z): (f64, f64, f64)) -> Result<(f64, f64, f64)> {
        let mut p = if from_geographic {
            (x * DEG_TO_RAD, y * DEG_TO_RAD, z)
        } else {
            (x, y, z)
        };
        let status = {
            let _guard = self.lock.acquire();
            transform(from.proj(), to.proj(), &mut p)
        };
        if let Err(e) = status {
            log::trace!("transform ({}, {}) failed: {}", x, y, e);
            return Err(Error::TransformFailed { x, y });
        }
        if !p.0.is_finite() || !p.1.is_finite() {
            log::trace!("transform ({}, {}) produced ({}, {})", x, y, p.0, p.1);
            return Err(Error::TransformFailed { x, y });
        }
        if to_geographic {
            p.0 *= RAD_TO_DEG;
            p.1 *= RAD_TO_DEG;
        }
        Ok((p.0, p.1, z))
    }

    /// Convert a point from source to destination
    ///
    /// `z` is carried through unchanged
    pub fn forward(&self, x: f64, y: f64, z: f64) -> Result<(f64, f64, f64)> {
        if self.is_source_equal_dest {
            return Ok((x, y, z));
        }
        self.project(&self.source, &self.dest,
                     self.is_source_geographic, self.is_dest_geographic, (x, y, z))
    }
    /// Convert a point from destination to source
    ///
    /// `z` is carried through unchanged
    pub fn backward(&self, x: f64, y: f64, z: f64) -> Result<(f64, f64, f64)> {
        if self.is_source_equal_dest {
            return Ok((x, y, z));
        }
        self.project(&self.dest, &self.source,
                     self.is_dest_geographic, self.is_source_geographic, (x, y, z))
    }

    /// Convert only the min and max corners of `env`
    ///
    /// Fast, but edges that bow under the projection are not bounded; see
    ///   [forward_box_robust](#method.forward_box_robust).
    ///   `env` is untouched on failure.
    pub fn forward_box(&self, env: &mut Envelope<f64>) -> Result<()> {
        if self.is_source_equal_dest {
            return Ok(());
        }
        self.corners(env, |x, y| self.forward(x, y, 0.0))
    }
    /// Convert only the min and max corners of `env`, destination to source
    pub fn backward_box(&self, env: &mut Envelope<f64>) -> Result<()> {
        if self.is_source_equal_dest {
            return Ok(());
        }
        self.corners(env, |x, y| self.backward(x, y, 0.0))
    }
    fn corners<F>(&self, env: &mut Envelope<f64>, f: F) -> Result<()>
        where F: Fn(f64, f64) -> Result<(f64, f64, f64)>
    {
        let (minx, miny, _) = f(env.minx, env.miny)?;
        let (maxx, maxy, _) = f(env.maxx, env.maxy)?;
        *env = Envelope::new(minx, miny, maxx, maxy);
        Ok(())
    }

    /// Convert `env` by sampling about `points` locations along its edges
    ///
    /// The bounding box of the converted samples replaces the center, width
    ///   and height of `env`.  More expensive than
    ///   [forward_box](#method.forward_box) but tolerates strongly warped
    ///   regions.  Fails if any sample fails, leaving `env` untouched.
    pub fn forward_box_robust(&self, env: &mut Envelope<f64>, points: usize) -> Result<()> {
        if self.is_source_equal_dest {
            return Ok(());
        }
        self.sampled(env, points, |x, y| self.forward(x, y, 0.0))
    }
    /// Convert `env` by sampling its edges, destination to source
    pub fn backward_box_robust(&self, env: &mut Envelope<f64>, points: usize) -> Result<()> {
        if self.is_source_equal_dest {
            return Ok(());
        }
        self.sampled(env, points, |x, y| self.backward(x, y, 0.0))
    }
    fn sampled<F>(&self, env: &mut Envelope<f64>, points: usize, f: F) -> Result<()>
        where F: Fn(f64, f64) -> Result<(f64, f64, f64)>
    {
        let mut coords = Vec::with_capacity(points.max(4));
        for (x, y) in envelope_points(env, points) {
            let (x, y, _) = f(x, y)?;
            coords.push((x, y));
        }
        if let Some(result) = Envelope::from_points(coords) {
            let (cx, cy) = result.center();
            env.re_center(cx, cy);
            env.set_width(result.width());
            env.set_height(result.height());
        }
        Ok(())
    }
}

/// Points along the edges of `env`, about `points` of them
///
/// Top and bottom edges first, corners included, then the left and right
///   edges between them.  At least the four corners are produced.
pub fn envelope_points(env: &Envelope<f64>, points: usize) -> Vec<(f64, f64)> {
    let steps = if points <= 4 {
        1
    } else {
        (points - 4 + 3) / 4 + 1
    };
    let xstep = env.width() / steps as f64;
    let ystep = env.height() / steps as f64;

    let mut coords = Vec::with_capacity(4 * steps);
    for i in 0 ..= steps {
        let x = env.minx + i as f64 * xstep;
        coords.push((x, env.miny));
        coords.push((x, env.maxy));
    }
    for i in 1 .. steps {
        let y = env.miny + i as f64 * ystep;
        coords.push((env.minx, y));
        coords.push((env.maxx, y));
    }
    coords
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONGLAT: &str = "+proj=longlat +a=6378137 +b=6378137 +no_defs";
    const MERC: &str = "+proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 +k=1 +units=m +no_defs";

    #[test]
    fn sample_counts() {
        let env = Envelope::new(0.0, 0.0, 4.0, 4.0);
        for &n in &[0, 1, 4] {
            let pts = envelope_points(&env, n);
            assert_eq!(pts, vec![(0.0, 0.0), (0.0, 4.0), (4.0, 0.0), (4.0, 4.0)]);
        }
        // ceil((5-4)/4) + 1 = 2 steps
        assert_eq!(envelope_points(&env, 5).len(), 8);
        // ceil((20-4)/4) + 1 = 5 steps: 12 on top and bottom, 8 on the sides
        let pts = envelope_points(&env, 20);
        assert_eq!(pts.len(), 20);
        assert!(pts.iter().all(|&(x, y)| x == 0.0 || x == 4.0 || y == 0.0 || y == 4.0));
    }

    #[test]
    fn identity_touches_nothing() {
        let t = ProjTransform::from_params(MERC, MERC).unwrap();
        assert!(t.equal());
        let p = (1.5e300, -3.25, 7.0);
        assert_eq!(t.forward(p.0, p.1, p.2).unwrap(), p);
        assert_eq!(t.backward(p.0, p.1, p.2).unwrap(), p);
        let env = Envelope::new(-1.0, -2.0, 3.0, 4.0);
        let mut b = env;
        t.forward_box(&mut b).unwrap();
        t.backward_box(&mut b).unwrap();
        t.forward_box_robust(&mut b, 3).unwrap();
        t.backward_box_robust(&mut b, 100).unwrap();
        assert_eq!(b, env);
    }

    #[test]
    fn longlat_to_mercator() {
        let t = ProjTransform::from_params(LONGLAT, MERC).unwrap();
        assert!(!t.equal());
        let (x, y, z) = t.forward(10.0, 0.0, 42.0).unwrap();
        assert!((x - 6378137.0 * 10.0 * DEG_TO_RAD).abs() < 1e-6, "x {}", x);
        assert!(y.abs() < 1e-6);
        assert_eq!(z, 42.0);
        let (lon, lat, _) = t.backward(x, 1_000_000.0, 0.0).unwrap();
        assert!((lon - 10.0).abs() < 1e-7);
        let expected = (2.0 * (1_000_000.0f64 / 6378137.0).exp().atan() - PI / 2.0) * RAD_TO_DEG;
        assert!((lat - expected).abs() < 1e-7, "lat {} {}", lat, expected);
    }

    #[test]
    fn robust_box_bounds_samples() {
        let t = ProjTransform::from_params(LONGLAT, MERC).unwrap();
        let mut fast = Envelope::new(-10.0, -20.0, 10.0, 20.0);
        let mut robust = fast;
        t.forward_box(&mut fast).unwrap();
        t.forward_box_robust(&mut robust, 32).unwrap();
        assert!((fast.minx - robust.minx).abs() < 1e-6);
        assert!((fast.maxy - robust.maxy).abs() < 1e-6);
        assert!(robust.minx < 0.0 && robust.maxx > 0.0);
    }
}
