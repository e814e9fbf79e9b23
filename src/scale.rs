//! Image resampling
//!
//! Targets are caller owned and already sized; nothing here allocates.
//!   A source or target with no pixels leaves the target untouched.

use crate::Surface;
use crate::SurfaceMut;

fn degenerate<T: SurfaceMut, S: Surface>(target: &T, source: &S) -> bool {
    source.width() < 1 || source.height() < 1 ||
        target.width() < 1 || target.height() < 1
}

/// Resize `source` into `target` by nearest neighbor
///
/// Each target step advances the source by `source / target` pixels; the
///   `source % target` remainder is spread evenly across the target with
///   an integer error term.  Target rows that land on the same source row
///   as the row above are copied rather than resampled.
pub fn scale_image<T: SurfaceMut, S: Surface>(target: &mut T, source: &S) {
    if degenerate(target, source) {
        return;
    }
    let (sw, sh) = (source.width(), source.height());
    let (tw, th) = (target.width(), target.height());

    let (int_part_y, fract_part_y) = (sh / th, sh % th);
    let (int_part_x, fract_part_x) = (sw / tw, sw % tw);
    let mut err_y = 0;
    let mut err_x = 0;
    let mut ys = 0;
    let mut prev_y = None;

    for y in 0 .. th {
        if prev_y == Some(ys) {
            target.copy_row(y - 1, y);
        } else {
            let src = source.row(ys);
            let dst = target.row_mut(y);
            let mut xs = 0;
            for px in dst.iter_mut() {
                *px = src[xs];
                xs += int_part_x;
                err_x += fract_part_x;
                if err_x >= tw {
                    err_x -= tw;
                    xs += 1;
                }
            }
            prev_y = Some(ys);
        }
        ys += int_part_y;
        err_y += fract_part_y;
        if err_y >= th {
            err_y -= th;
            ys += 1;
        }
    }
}

/// Sampling grid shared by the bilinear resamplers
///
/// Positions are in units of 1/target of a source pixel
struct Axis {
    src: i64,
    dst: i64,
    offset: i64,
    half: u64,
    fixed: bool,
}

impl Axis {
    fn new(src: usize, dst: usize, off_f: f64) -> Self {
        let (s, d) = (src as f64, dst as f64);
        let offset = ((s - d - off_f * 2.0 * s) / 2.0).round_ties_even() as i64;
        let (src, dst) = (src as i64, dst as i64);
        Axis { src, dst, offset,
               half: (dst / 2) as u64,
               // Shrinking by more than half, sample midway
               fixed: src / 2 >= dst,
        }
    }
    /// Source index, clamped neighbor index and the weight of the neighbor
    fn sample(&self, i: usize) -> (usize, usize, u64) {
        let pos = i as i64 * self.src + self.offset;
        if pos < 0 {
            return (0, 0, self.half);
        }
        let s0 = (pos / self.dst).min(self.src - 1);
        let s1 = (s0 + 1).min(self.src - 1);
        let w = if self.fixed { self.half } else { (pos % self.dst) as u64 };
        (s0 as usize, s1 as usize, w)
    }
    /// Weighted average of `p` and `q`, rounded to nearest
    ///
    /// Equal inputs are passed through untouched
    fn mix(&self, p: u64, q: u64, w: u64) -> u64 {
        if p == q {
            return q;
        }
        let dst = self.dst as u64;
        (q * w + p * (dst - w) + self.half) / dst
    }
}

/// Copy rows straight across when sizes match and there is no offset
fn copy_same<T: SurfaceMut, S: Surface>(target: &mut T, source: &S, ax: &Axis, ay: &Axis) -> bool {
    if ax.src != ax.dst || ay.src != ay.dst || ax.offset != 0 || ay.offset != 0 {
        return false;
    }
    for y in 0 .. target.height() {
        target.row_mut(y).copy_from_slice(source.row(y));
    }
    true
}

/// Bilinear interpolation of one channel from the four neighbors `a b / c d`
fn bilinear(ax: &Axis, ay: &Axis, a: u64, b: u64, c: u64, d: u64, wx: u64, wy: u64) -> u64 {
    let r = ax.mix(a, b, wx);
    let s = ax.mix(c, d, wx);
    ay.mix(r, s, wy)
}

/// Resize `source` into `target` by bilinear interpolation
///
/// `x_off_f` and `y_off_f` shift the sampled region by a fraction of the
///   source size, for aligning tiles.  All four channels are interpolated
///   independently with integer weights.
pub fn scale_image_bilinear<T: SurfaceMut, S: Surface>(target: &mut T, source: &S,
                                                       x_off_f: f64, y_off_f: f64) {
    if degenerate(target, source) {
        return;
    }
    let ax = Axis::new(source.width(), target.width(), x_off_f);
    let ay = Axis::new(source.height(), target.height(), y_off_f);
    if copy_same(target, source, &ax, &ay) {
        return;
    }
    for y in 0 .. target.height() {
        let (ys, ys1, wy) = ay.sample(y);
        let (top, bottom) = (source.row(ys), source.row(ys1));
        let dst = target.row_mut(y);
        for (x, px) in dst.iter_mut().enumerate() {
            let (xs, xs1, wx) = ax.sample(x);
            let (a, b) = (top[xs], top[xs1]);
            let (c, d) = (bottom[xs], bottom[xs1]);
            let mut out = 0;
            for shift in (0 .. 32).step_by(8) {
                let ch = |p: u32| u64::from((p >> shift) & 0xff);
                let r = bilinear(&ax, &ay, ch(a), ch(b), ch(c), ch(d), wx, wy);
                out |= (r as u32) << shift;
            }
            *px = out;
        }
    }
}

/// Resize the first channel of `source` into an opaque gray `target`
///
/// Same sampling as [scale_image_bilinear](fn.scale_image_bilinear.html);
///   each output pixel is `0xff` alpha with red, green and blue set to the
///   interpolated sample
pub fn scale_image_bilinear8<T: SurfaceMut, S: Surface>(target: &mut T, source: &S,
                                                        x_off_f: f64, y_off_f: f64) {
    if degenerate(target, source) {
        return;
    }
    let ax = Axis::new(source.width(), target.width(), x_off_f);
    let ay = Axis::new(source.height(), target.height(), y_off_f);
    if copy_same(target, source, &ax, &ay) {
        return;
    }
    for y in 0 .. target.height() {
        let (ys, ys1, wy) = ay.sample(y);
        let (top, bottom) = (source.row(ys), source.row(ys1));
        let dst = target.row_mut(y);
        for (x, px) in dst.iter_mut().enumerate() {
            let (xs, xs1, wx) = ax.sample(x);
            let ch = |p: u32| u64::from(p & 0xff);
            let r = bilinear(&ax, &ay, ch(top[xs]), ch(top[xs1]),
                             ch(bottom[xs]), ch(bottom[xs1]), wx, wy) as u32;
            *px = 0xff00_0000 | (r << 16) | (r << 8) | r;
        }
    }
}
