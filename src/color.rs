use crate::rtweekend::*;
use std::io::{self, Write};

pub type Color = Vec3;

/// Gamma 2 transfer: the display curve is approximated by a square root.
#[inline]
pub fn linear_to_gamma(linear_component: f64) -> f64 {
    if linear_component > 0.0 {
        linear_component.sqrt()
    } else {
        0.0
    }
}

pub fn to_bytes(pixel_color: Color) -> [u8; 3] {
    const INTENSITY: Interval = Interval::new(0.000, 0.999);
    let encode = |c: f64| (256.0 * INTENSITY.clamp(linear_to_gamma(c))) as u8;
    [
        encode(pixel_color.x),
        encode(pixel_color.y),
        encode(pixel_color.z),
    ]
}

pub fn write_color<W: Write>(out: &mut W, pixel_color: Color) -> io::Result<()> {
    let [r, g, b] = to_bytes(pixel_color);
    writeln!(out, "{r} {g} {b}")
}

/// Plain-text PPM: header, then one pixel per line in row-major order.
pub fn write_ppm<W: Write>(out: &mut W, width: usize, height: usize, pixels: &[Color]) -> io::Result<()> {
    writeln!(out, "P3")?;
    writeln!(out, "{width} {height}")?;
    writeln!(out, "255")?;

    for &pixel in pixels {
        write_color(out, pixel)?;
    }
    out.flush()
}
