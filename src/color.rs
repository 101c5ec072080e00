use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Categorical palette
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            to_color32(rgb)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Continuous scale
// ---------------------------------------------------------------------------

/// Anchor colours of the viridis map at t = 0, 0.25, 0.5, 0.75, 1.
const VIRIDIS: [(u8, u8, u8); 5] = [
    (0x44, 0x01, 0x54),
    (0x3b, 0x52, 0x8b),
    (0x21, 0x91, 0x8c),
    (0x5e, 0xc9, 0x62),
    (0xfd, 0xe7, 0x25),
];

/// Sample the viridis map at `t` in `[0, 1]` (clamped), interpolating
/// between anchors in linear light.
pub fn viridis(t: f32) -> Color32 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let segments = (VIRIDIS.len() - 1) as f32;
    let pos = t * segments;
    let i = (pos.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = pos - i as f32;

    let linear = |(r, g, b): (u8, u8, u8)| -> LinSrgb {
        Srgb::new(r, g, b).into_format::<f32>().into_linear()
    };
    let mixed = linear(VIRIDIS[i]).mix(linear(VIRIDIS[i + 1]), frac);
    to_color32(Srgb::from_linear(mixed))
}

/// One viridis colour per value, scaled over the values' own range. A
/// constant series maps to the top of the scale.
pub fn scale_colors(values: &[f64]) -> Vec<Color32> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    values
        .iter()
        .map(|&v| {
            if range.abs() < f64::EPSILON {
                viridis(1.0)
            } else {
                viridis(((v - min) / range) as f32)
            }
        })
        .collect()
}

fn to_color32(rgb: Srgb) -> Color32 {
    let rgb: Srgb<u8> = rgb.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        let p = generate_palette(4);
        assert_eq!(p.len(), 4);
        assert_ne!(p[0], p[2]);
    }

    #[test]
    fn viridis_hits_its_endpoints() {
        assert_eq!(viridis(0.0), Color32::from_rgb(0x44, 0x01, 0x54));
        assert_eq!(viridis(1.0), Color32::from_rgb(0xfd, 0xe7, 0x25));
        assert_eq!(viridis(-3.0), viridis(0.0));
        assert_eq!(viridis(7.0), viridis(1.0));
    }

    #[test]
    fn scale_colors_spans_the_map() {
        let colors = scale_colors(&[10.0, 20.0, 30.0]);
        assert_eq!(colors[0], viridis(0.0));
        assert_eq!(colors[2], viridis(1.0));
        assert_eq!(scale_colors(&[5.0, 5.0]), vec![viridis(1.0); 2]);
    }
}
