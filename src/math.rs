//! Fixed point compositing of packed pixels

/// Split a Pixel into `[red, green, blue, alpha]`
pub fn unpack(pixel: u32) -> [u32; 4] {
    [pixel & 0xff,
     (pixel >> 8) & 0xff,
     (pixel >> 16) & 0xff,
     (pixel >> 24) & 0xff]
}

/// Join `[red, green, blue, alpha]` into a Pixel
///
/// Components are expected to be in 0..=255
pub fn pack(c: [u32; 4]) -> u32 {
    (c[3] << 24) | (c[2] << 16) | (c[1] << 8) | c[0]
}

/// Composite the color channels of `src` over `dst` with an alpha of `cover`
///
/// The alpha byte of `src` is ignored; `cover` is used in its place.
/// Destination channels are premultiplied by the destination alpha,
/// combined at a scale of 256 and divided back out, truncating:
///
///   a' = ((cover + a0) << 8) - a0 * cover
///
///   c' = (((c1 << 8) - c0 * a0) * cover + (c0 * a0 << 8)) / a'
///
/// The result alpha is `a' >> 8`, which never exceeds 255.
/// A `cover` of 0 returns `dst` unchanged.
///
///     use mapcore::math::blend_over;
///
///     // Full coverage onto an empty pixel copies the color, opaque
///     assert_eq!(blend_over(0, 0x0011_2233, 255), 0xff11_2233);
///     // Half coverage onto an empty pixel keeps the color, half alpha
///     assert_eq!(blend_over(0, 0x0000_00ff, 128), 0x8000_00ff);
///
pub fn blend_over(dst: u32, src: u32, cover: u32) -> u32 {
    if cover == 0 {
        return dst;
    }
    let a1 = i64::from(cover.min(255));
    let c1 = unpack(src);
    let c0 = unpack(dst);
    let a0 = i64::from(c0[3]);

    let alpha = ((a1 + a0) << 8) - a0 * a1;

    let mut out = [0u32; 4];
    for i in 0 .. 3 {
        let p0 = i64::from(c0[i]) * a0;
        let p1 = i64::from(c1[i]);
        out[i] = ((((p1 << 8) - p0) * a1 + (p0 << 8)) / alpha) as u32;
    }
    out[3] = (alpha >> 8) as u32;
    pack(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_unpack() {
        assert_eq!(unpack(0x4433_2211), [0x11, 0x22, 0x33, 0x44]);
        assert_eq!(pack([0x11, 0x22, 0x33, 0x44]), 0x4433_2211);
    }

    #[test]
    fn zero_cover_is_noop() {
        assert_eq!(blend_over(0x1234_5678, 0xffff_ffff, 0), 0x1234_5678);
    }

    #[test]
    fn opaque_over_opaque_truncates() {
        // red over blue at cover 255
        // a' = (510 << 8) - 255*255 = 65535
        // r' = ((255 << 8) - 0)*255 / 65535 = 16646400 / 65535 = 254
        // b' = ((0 - 65025)*255 + (65025 << 8)) / 65535 = 65025 / 65535 = 0
        let red = 0xff00_00ff;
        let blue = 0xffff_0000;
        assert_eq!(blend_over(blue, red, 255), 0xff00_00fe);
    }

    #[test]
    fn half_cover_over_opaque() {
        // white destination, black source at cover 128
        // a' = (383 << 8) - 255*128 = 65408
        // c' = ((0 - 65025)*128 + 65025*256) / 65408 = 127
        assert_eq!(blend_over(0xffff_ffff, 0xff00_0000, 128), 0xff7f_7f7f);
    }

    #[test]
    fn repeated_half_cover_converges() {
        let mut p = 0;
        p = blend_over(p, 0x0000_00ff, 128);
        assert_eq!(p, 0x8000_00ff);
        p = blend_over(p, 0x0000_00ff, 128);
        assert_eq!(p, 0xc000_00ff);
        for _ in 0 .. 32 {
            let prev = p >> 24;
            p = blend_over(p, 0x0000_00ff, 128);
            assert!(p >> 24 >= prev);
            assert_eq!(p & 0xff, 0xff);
        }
        assert_eq!(p >> 24, 0xff);
    }
}
