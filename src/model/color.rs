use super::theme::Theme;

/// 8-bit RGB channels; alpha is supplied when the color is turned into CSS.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgba(...)` string with `alpha` clamped to [0, 1].
    pub fn rgba(self, alpha: f32) -> String {
        let a = if alpha.is_finite() {
            alpha.clamp(0.0, 1.0)
        } else {
            0.0
        };
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, a)
    }
}

pub const DARK_PARTICLE: Rgb = Rgb::new(0, 255, 255); // cyan
pub const LIGHT_PARTICLE: Rgb = Rgb::new(99, 102, 241); // indigo

#[inline]
pub fn particle_color(theme: Theme) -> Rgb {
    match theme {
        Theme::Dark => DARK_PARTICLE,
        Theme::Light => LIGHT_PARTICLE,
    }
}
