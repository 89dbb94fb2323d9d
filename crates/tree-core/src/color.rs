//! Small RGB helpers. Colors are `Vec3` with components in [0, 1].

use crate::error::ConfigError;
use glam::Vec3;

/// Parse a `#rrggbb` (or `rrggbb`) string.
pub fn parse_hex(s: &str) -> Result<Vec3, ConfigError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ConfigError::InvalidColor(s.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map(|v| v as f32 / 255.0)
            .map_err(|_| ConfigError::InvalidColor(s.to_string()))
    };
    Ok(Vec3::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Convert RGB to (hue, saturation, lightness), all in [0, 1].
pub fn rgb_to_hsl(c: Vec3) -> Vec3 {
    let max = c.max_element();
    let min = c.min_element();
    let l = (max + min) * 0.5;
    if (max - min).abs() < f32::EPSILON {
        return Vec3::new(0.0, 0.0, l);
    }
    let d = max - min;
    let s = if l <= 0.5 {
        d / (max + min)
    } else {
        d / (2.0 - max - min)
    };
    let h = if max == c.x {
        (c.y - c.z) / d + if c.y < c.z { 6.0 } else { 0.0 }
    } else if max == c.y {
        (c.z - c.x) / d + 2.0
    } else {
        (c.x - c.y) / d + 4.0
    };
    Vec3::new(h / 6.0, s, l)
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

/// Convert (hue, saturation, lightness) back to RGB.
pub fn hsl_to_rgb(hsl: Vec3) -> Vec3 {
    let h = hsl.x.rem_euclid(1.0);
    let s = hsl.y.clamp(0.0, 1.0);
    let l = hsl.z.clamp(0.0, 1.0);
    if s == 0.0 {
        return Vec3::splat(l);
    }
    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Vec3::new(
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

/// Shift a color in HSL space; hue wraps, saturation and lightness clamp.
pub fn offset_hsl(c: Vec3, dh: f32, ds: f32, dl: f32) -> Vec3 {
    let hsl = rgb_to_hsl(c);
    hsl_to_rgb(hsl + Vec3::new(dh, ds, dl))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_roundtrip_keeps_palette_colors() {
        for hex in ["#ff1493", "#ff7f50", "#ffd700", "#ffeaf5", "#ffbf00"] {
            let c = parse_hex(hex).unwrap();
            let back = hsl_to_rgb(rgb_to_hsl(c));
            assert!((c - back).abs().max_element() < 1e-4, "{hex}: {c} vs {back}");
        }
    }

    #[test]
    fn lightness_offset_clamps() {
        let white = offset_hsl(Vec3::ONE, 0.0, 0.0, 0.5);
        assert_eq!(white, Vec3::ONE);
        let black = offset_hsl(Vec3::ZERO, 0.0, 0.0, -0.5);
        assert_eq!(black, Vec3::ZERO);
    }
}
