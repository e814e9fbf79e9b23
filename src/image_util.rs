//! Writing and comparing finished images
//!
//! Encoding is delegated to the `image` crate; only PNG is written here.

use crate::buffer::PixelBuffer;
use crate::error::{Error, Result};
use crate::Surface;
use crate::SurfaceMut;

use std::path::Path;

/// Image type from the extension of `filename`, ignoring case
///
///     use mapcore::image_util::type_from_filename;
///
///     assert_eq!(type_from_filename("map.PNG"), Some("png"));
///     assert_eq!(type_from_filename("map.jpeg"), Some("jpeg"));
///     assert_eq!(type_from_filename("map.xyz"), None);
///
pub fn type_from_filename(filename: &str) -> Option<&'static str> {
    let ext = Path::new(filename).extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("png"),
        "jpg" | "jpeg" => Some("jpeg"),
        "tif" | "tiff" => Some("tiff"),
        "pdf" => Some("pdf"),
        "svg" => Some("svg"),
        "ps" => Some("ps"),
        _ => None,
    }
}

/// Write `image` to `filename` as an RGBA PNG
pub fn save_to_file<S: Surface, P: AsRef<Path>>(image: &S, filename: P) -> Result<()> {
    let path = filename.as_ref();
    let name = path.to_string_lossy();
    match type_from_filename(&name) {
        Some("png") => {}
        Some(other) => return Err(Error::UnsupportedFormat(other.to_string())),
        None => return Err(Error::UnsupportedFormat(name.to_string())),
    }
    let (w, h) = (image.width(), image.height());
    let mut buf = Vec::with_capacity(w * h * 4);
    for y in 0 .. h {
        for p in image.row(y) {
            buf.extend_from_slice(&p.to_le_bytes());
        }
    }
    log::debug!("saving {}x{} image to {}", w, h, name);
    image::save_buffer(path, &buf, w as u32, h as u32, image::RGBA(8))?;
    Ok(())
}

/// Read any image the `image` crate understands into a PixelBuffer
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<PixelBuffer> {
    let img = image::open(filename)?.to_rgba();
    let (w, h) = img.dimensions();
    let data = img.into_raw()
        .chunks(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    PixelBuffer::from_vec(w as usize, h as usize, data)
        .ok_or_else(|| Error::UnsupportedFormat("truncated pixel data".to_string()))
}

/// Images in two files hold identical pixels
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let d1 = read_file(f1)?;
    let d2 = read_file(f2)?;
    if d1.width() != d2.width() || d1.height() != d2.height() {
        return Ok(false);
    }
    let mut flag = true;
    for (i, (v1, v2)) in d1.data().iter().zip(d2.data().iter()).enumerate() {
        if v1 != v2 {
            log::debug!("{} [{},{}]: {:08x} {:08x}", i, i % d1.width(), i / d1.width(), v1, v2);
            flag = false;
        }
    }
    Ok(flag)
}

/// Frame the image with a 1 pixel border, for checking alignment
///
/// Top red, bottom green, left yellow, right blue
pub fn add_border<S: SurfaceMut>(image: &mut S) {
    let (w, h) = (image.width(), image.height());
    if w == 0 || h == 0 {
        return;
    }
    for x in 0 .. w {
        image.set(x, 0, 0xff00_00ff);
        image.set(x, h - 1, 0xff00_ff00);
    }
    for y in 0 .. h {
        image.set(0, y, 0xff00_ffff);
        image.set(w - 1, y, 0xffff_0000);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RasterCanvas;

    #[test]
    fn unsupported_types() {
        let c = RasterCanvas::new(1, 1);
        match save_to_file(&c, "out.jpg") {
            Err(Error::UnsupportedFormat(t)) => assert_eq!(t, "jpeg"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(save_to_file(&c, "out").is_err());
    }

    #[test]
    fn border() {
        let mut b = PixelBuffer::new(3, 3);
        add_border(&mut b);
        assert_eq!(b.pixel(1, 0), 0xff00_00ff);
        assert_eq!(b.pixel(1, 2), 0xff00_ff00);
        assert_eq!(b.pixel(0, 1), 0xff00_ffff);
        assert_eq!(b.pixel(2, 1), 0xffff_0000);
        assert_eq!(b.pixel(1, 1), 0);
    }
}
