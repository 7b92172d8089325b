//! GPU-compatible data for the circle shader
//!
//! Layout matches `CircleUniforms` in `circle.wgsl`: `color` is a vec4 and so
//! starts on a 16-byte boundary.

use bytemuck::{Pod, Zeroable};
use pong_core::{Color, Position};

/// Per-frame circle parameters
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleUniforms {
    /// Logical surface size in pixels the circle coordinates refer to
    pub viewport: [f32; 2],
    /// Circle center in surface pixels
    pub center: [f32; 2],
    /// Radius in surface pixels
    pub radius: f32,
    pub _padding: [f32; 3],
    /// Fill color
    pub color: [f32; 4],
}

impl CircleUniforms {
    pub fn new(viewport: (u32, u32), center: Position, radius: u32, color: Color) -> Self {
        Self {
            viewport: [viewport.0.max(1) as f32, viewport.1.max(1) as f32],
            center: [center.x as f32, center.y as f32],
            radius: radius as f32,
            _padding: [0.0; 3],
            color: color.to_array(),
        }
    }
}

impl Default for CircleUniforms {
    fn default() -> Self {
        Self::new((1, 1), Position::default(), 0, Color::WHITE)
    }
}

/// Convert a loop color to a wgpu clear color
pub fn to_wgpu_color(color: Color) -> wgpu::Color {
    wgpu::Color {
        r: color.r as f64,
        g: color.g as f64,
        b: color.b as f64,
        a: color.a as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_size_matches_shader() {
        assert_eq!(std::mem::size_of::<CircleUniforms>(), 48);
        assert_eq!(std::mem::offset_of!(CircleUniforms, radius), 16);
        assert_eq!(std::mem::offset_of!(CircleUniforms, color), 32);
    }

    #[test]
    fn test_uniforms_from_loop_values() {
        let u = CircleUniforms::new((800, 600), Position::new(415, 295), 20, Color::WHITE);
        assert_eq!(u.viewport, [800.0, 600.0]);
        assert_eq!(u.center, [415.0, 295.0]);
        assert_eq!(u.radius, 20.0);
        assert_eq!(u.color, [1.0; 4]);
    }

    #[test]
    fn test_off_screen_center_is_kept() {
        let u = CircleUniforms::new((800, 600), Position::new(-40, 900), 20, Color::WHITE);
        assert_eq!(u.center, [-40.0, 900.0]);
    }

    #[test]
    fn test_zero_viewport_is_clamped() {
        let u = CircleUniforms::new((0, 0), Position::default(), 1, Color::BLACK);
        assert_eq!(u.viewport, [1.0, 1.0]);
    }

    #[test]
    fn test_wgpu_color() {
        let c = to_wgpu_color(Color::new(0.5, 0.25, 0.0, 1.0));
        assert_eq!((c.r, c.g, c.b, c.a), (0.5, 0.25, 0.0, 1.0));
    }
}
