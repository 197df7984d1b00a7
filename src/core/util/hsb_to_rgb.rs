use crate::core::data::colour::Colour;

fn channel(value: f32) -> u8 {
    (value * 255.0 + 0.5) as u8
}

/// Converts hue/saturation/brightness to RGB.
///
/// Only the fractional part of `hue` is used (`hue - floor(hue)`), so hues
/// wrap around the colour wheel in both directions. Saturation and
/// brightness are expected in `[0, 1]`.
#[must_use]
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> Colour {
    if saturation == 0.0 {
        let grey = channel(brightness);
        return Colour {
            r: grey,
            g: grey,
            b: grey,
        };
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match (h as u32) % 6 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };

    Colour {
        r: channel(r),
        g: channel(g),
        b: channel(b),
    }
}
