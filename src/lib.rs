//! Tower Stack - A tower-stacking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (slab motion, drop resolution, game state)
//! - `session`: The game component (owns state, clock registration and input)
//! - `platform`: Frame-callback abstraction (browser and headless)
//! - `renderer`: WebGPU rendering pipeline
//! - `tuning`: Data-driven game balance
//! - `autoplay`: Deterministic demo player

pub mod autoplay;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use session::Session;
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Horizontal play-field width
    pub const FIELD_WIDTH: f32 = 400.0;
    /// Height of one floor
    pub const SLAB_HEIGHT: f32 = 35.0;
    /// Gap left between floors when drawing
    pub const SLAB_GAP: f32 = 2.0;

    /// Base slab defaults
    pub const INITIAL_WIDTH: f32 = 200.0;
    pub const INITIAL_X: f32 = 100.0;

    /// Moving slab speed in field units per frame callback (not per second)
    pub const BASE_SPEED: f32 = 2.0;
    /// Extra speed per placed floor
    pub const SPEED_GROWTH: f32 = 0.1;

    /// Floors kept on screen before the camera starts scrolling
    pub const VISIBLE_FLOORS: u32 = 5;
    /// World rows shown in the viewport
    pub const VIEW_FLOORS: u32 = 12;

    /// Slab colours: hsl(HUE_BASE + depth * HUE_STEP, SATURATION, LIGHTNESS)
    pub const HUE_BASE: u32 = 280;
    pub const HUE_STEP: u32 = 15;
    pub const SATURATION: f32 = 0.8;
    pub const LIGHTNESS: f32 = 0.6;
}

/// Convert an HSL colour (hue in degrees, s/l in 0..=1) to RGB components
#[inline]
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 0.001)
    }

    #[test]
    fn test_hsl_primaries() {
        assert!(close(hsl_to_rgb(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]));
        assert!(close(hsl_to_rgb(120.0, 1.0, 0.5), [0.0, 1.0, 0.0]));
        assert!(close(hsl_to_rgb(240.0, 1.0, 0.5), [0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_hsl_base_slab_colour() {
        // hsl(280, 80%, 60%) is a violet: red and blue high, green low
        let [r, g, b] = hsl_to_rgb(280.0, 0.8, 0.6);
        assert!(close([r, g, b], [0.7067, 0.28, 0.92]));
    }

    #[test]
    fn test_hsl_wraps_hue() {
        assert!(close(hsl_to_rgb(360.0, 1.0, 0.5), hsl_to_rgb(0.0, 1.0, 0.5)));
    }
}
