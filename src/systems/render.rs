//! GPU rendering system
//!
//! Implements the loop's [`Canvas`] on top of wgpu. Draw calls are recorded
//! during the frame and turned into a single render pass on `present`.

use std::sync::Arc;
use winit::window::Window;
use pong_core::{Canvas, Color, Position};
use pong_render::{to_wgpu_color, CirclePipeline, CircleUniforms, ContextError, RenderContext};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost or outdated (window moved between displays, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// What the current frame asked for
#[derive(Debug, Clone, Copy, PartialEq)]
struct FrameCommands {
    clear: Color,
    circle: Option<CircleUniforms>,
}

impl FrameCommands {
    fn new() -> Self {
        Self {
            clear: Color::BLACK,
            circle: None,
        }
    }

    /// Clearing discards anything drawn before it
    fn clear(&mut self, color: Color) {
        self.clear = color;
        self.circle = None;
    }

    fn fill_circle(&mut self, viewport: (u32, u32), center: Position, radius: u32, color: Color) {
        self.circle = Some(CircleUniforms::new(viewport, center, radius, color));
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: CirclePipeline,
    /// Logical surface size that circle coordinates refer to
    viewport: (u32, u32),
    commands: FrameCommands,
}

impl RenderSystem {
    /// Create render system for a window
    ///
    /// `viewport` is the logical surface size in pixels; positions passed to
    /// `fill_circle` are relative to it regardless of the physical size.
    pub fn new(window: Arc<Window>, viewport: (u32, u32), vsync: bool) -> Result<Self, ContextError> {
        let context = pollster::block_on(RenderContext::new(window, vsync))?;
        let pipeline = CirclePipeline::new(&context.device, context.config.format);

        Ok(Self {
            context,
            pipeline,
            viewport,
            commands: FrameCommands::new(),
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Reconfigure the surface after `RenderError::SurfaceLost`
    pub fn recover_surface(&mut self) {
        self.context.reconfigure();
    }
}

impl Canvas for RenderSystem {
    type Error = RenderError;

    fn clear(&mut self, color: Color) {
        self.commands.clear(color);
    }

    fn fill_circle(&mut self, center: Position, radius: u32, color: Color) {
        self.commands.fill_circle(self.viewport, center, radius, color);
    }

    fn present(&mut self) -> Result<(), RenderError> {
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost)
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        if let Some(uniforms) = &self.commands.circle {
            self.pipeline.update_uniforms(&self.context.queue, uniforms);
        }

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline.draw(
            &mut encoder,
            &view,
            to_wgpu_color(self.commands.clear),
            self.commands.circle.is_some(),
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        self.commands = FrameCommands::new();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }

    #[test]
    fn test_commands_record_circle() {
        let mut commands = FrameCommands::new();
        commands.clear(Color::BLACK);
        commands.fill_circle((800, 600), Position::new(415, 295), 20, Color::WHITE);

        let circle = commands.circle.expect("circle should be recorded");
        assert_eq!(circle.center, [415.0, 295.0]);
        assert_eq!(circle.viewport, [800.0, 600.0]);
        assert_eq!(commands.clear, Color::BLACK);
    }

    #[test]
    fn test_clear_discards_earlier_circle() {
        let mut commands = FrameCommands::new();
        commands.fill_circle((800, 600), Position::new(1, 1), 20, Color::WHITE);
        commands.clear(Color::new(0.2, 0.2, 0.2, 1.0));
        assert_eq!(commands.circle, None);
        assert_eq!(commands.clear, Color::new(0.2, 0.2, 0.2, 1.0));
    }
}
