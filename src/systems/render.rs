//! GPU rendering system
//!
//! Manages GPU presentation including:
//! - Render context and surface
//! - The software canvas the compositor draws into
//! - Uploading and presenting each frame

use std::sync::Arc;
use winit::window::Window;
use starfield_core::Viewport;
use starfield_render::{
    context::{ContextError, RenderContext},
    present::PresentPipeline,
    PixelCanvas,
};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost or outdated (window resized, minimized, etc.)
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

/// Manages the canvas and its presentation on the GPU
pub struct RenderSystem {
    context: RenderContext,
    present: PresentPipeline,
    canvas: PixelCanvas,
}

impl RenderSystem {
    /// Create render system for a window
    pub fn new(window: Arc<Window>, vsync: bool) -> Result<Self, ContextError> {
        let size = window.inner_size();
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let present = PresentPipeline::new(
            &context.device,
            context.config.format,
            size.width,
            size.height,
        );
        let canvas = PixelCanvas::new(size.width, size.height);

        Ok(Self {
            context,
            present,
            canvas,
        })
    }

    /// Handle window resize
    ///
    /// The canvas follows the window even to zero size; the surface keeps
    /// its last usable size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.canvas.resize(width, height);
    }

    /// Current drawable area in pixels
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas.width(), self.canvas.height())
    }

    /// The canvas the compositor draws into
    pub fn canvas_mut(&mut self) -> &mut PixelCanvas {
        &mut self.canvas
    }

    /// Upload the canvas and present it
    pub fn present(&mut self) -> Result<(), RenderError> {
        self.present
            .upload(&self.context.device, &self.context.queue, &self.canvas);

        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                return Err(RenderError::SurfaceLost);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                return Err(RenderError::OutOfMemory);
            }
            Err(e) => {
                return Err(RenderError::Other(format!("{:?}", e)));
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder =
            self.context
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Present Encoder"),
                });

        self.present.render(&mut encoder, &view);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Reconfigure the surface after it was lost
    pub fn recover_surface(&mut self) {
        self.context.reconfigure();
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
}
