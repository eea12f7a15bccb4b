//! Per-frame cube motion state
//!
//! Advanced once per rendered frame by the app's redraw handler; the state
//! itself holds no timer and knows nothing about the event loop.

use super::color::Color;

/// Angular rate of the continuous spin, radians per second
pub const SPIN_RATE: f32 = 1.0;

/// Half-life of the colour easing step, seconds
pub const COLOR_HALF_LIFE: f32 = 0.05;

/// Rendered scale while the cube is active (clicked on)
pub const ACTIVE_SCALE: f32 = 1.5;

/// Rendered scale at rest
pub const REST_SCALE: f32 = 1.0;

/// Visual state of the spinning cube
#[derive(Debug, Clone, Copy)]
pub struct CubeMotion {
    /// Accumulated rotation around the X axis, radians. Grows without
    /// bound; the trigonometry in the transform build normalizes it.
    pub rotation_x: f32,
    /// Colour currently shown, easing toward the store selection
    pub colour: Color,
    /// Toggled by clicking the cube; drives the rendered scale
    pub active: bool,
    /// Cursor is over the cube. Cosmetic only.
    pub hovered: bool,
}

impl CubeMotion {
    pub fn new() -> Self {
        Self {
            rotation_x: 0.0,
            colour: Color::WHITE,
            active: false,
            hovered: false,
        }
    }

    /// Advances the motion by one frame
    ///
    /// Rotation accumulates first, then the colour eases toward `target`.
    /// `delta` is the elapsed wall-clock time since the previous frame in
    /// seconds, as supplied by the render driver.
    pub fn advance(&mut self, delta: f32, target: Color) {
        self.rotation_x += delta * SPIN_RATE;
        self.colour = self.colour.damp_toward(target, COLOR_HALF_LIFE, delta);
    }

    pub fn toggle_active(&mut self) {
        self.active = !self.active;
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Uniform scale derived from the active flag
    pub fn scale(&self) -> f32 {
        if self.active {
            ACTIVE_SCALE
        } else {
            REST_SCALE
        }
    }
}

impl Default for CubeMotion {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::store::Swatch;

    #[test]
    fn rotation_accumulates_exactly_delta_at_unit_rate() {
        let mut motion = CubeMotion::new();
        let target = Swatch::Hotpink.colour();

        for delta in [0.0, 0.016, 0.5, 0.007] {
            let before = motion.rotation_x;
            motion.advance(delta, target);
            assert_eq!(motion.rotation_x, before + delta);
        }
    }

    #[test]
    fn colour_converges_to_held_selection() {
        let mut motion = CubeMotion::new();
        let target = Swatch::Flamered.colour();

        for _ in 0..240 {
            motion.advance(1.0 / 60.0, target);
        }

        assert!(motion.colour.distance(target) < 1e-4);
    }

    #[test]
    fn click_toggles_active_and_scale() {
        let mut motion = CubeMotion::new();
        assert!(!motion.active);
        assert_eq!(motion.scale(), REST_SCALE);

        motion.toggle_active();
        assert!(motion.active);
        assert_eq!(motion.scale(), ACTIVE_SCALE);

        motion.toggle_active();
        assert_eq!(motion.scale(), REST_SCALE);
    }

    #[test]
    fn hover_flag_has_no_effect_on_scale() {
        let mut motion = CubeMotion::new();
        motion.set_hovered(true);
        assert_eq!(motion.scale(), REST_SCALE);
    }

    #[test]
    fn starts_white_and_inactive() {
        let motion = CubeMotion::default();
        assert_eq!(motion.colour, Color::WHITE);
        assert_eq!(motion.rotation_x, 0.0);
        assert!(!motion.active);
        assert!(!motion.hovered);
    }
}
