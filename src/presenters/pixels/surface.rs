use crate::core::actions::progressive_scan::ports::paint_surface::PaintSurface;
use crate::core::data::colour::Colour;
use crate::core::data::raster_size::RasterSize;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture, TextureError};
use tracing::error;
use winit::window::Window;

/// Framebuffer the scan paints into, with egui composited on top.
///
/// The buffer is sized in raster (logical) pixels and the surface in physical
/// pixels; `pixels` scales one onto the other.
pub struct PixelsSurface {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    raster: RasterSize,
    surface_width: u32,
    surface_height: u32,
    pixel_density: f64,
    pending_error: Option<TextureError>,
}

impl PixelsSurface {
    pub fn new(window: &'static Window, raster: RasterSize) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_width = size.width.max(1);
        let surface_height = size.height.max(1);
        let surface_texture = SurfaceTexture::new(surface_width, surface_height, window);

        let pixels = Pixels::new(raster.width.max(1), raster.height.max(1), surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        let mut surface = Self {
            pixels,
            egui_renderer,
            raster,
            surface_width,
            surface_height,
            pixel_density: window.scale_factor(),
            pending_error: None,
        };
        surface.clear();

        Ok(surface)
    }

    #[must_use]
    pub fn raster(&self) -> RasterSize {
        self.raster
    }

    #[must_use]
    pub fn pixel_density(&self) -> f64 {
        self.pixel_density
    }

    /// Resizes the swap chain to the window's physical size.
    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.surface_width = width;
        self.surface_height = height;

        Ok(())
    }

    /// Error raised by the last `clear_and_rescale`, if any.
    pub fn take_error(&mut self) -> Option<TextureError> {
        self.pending_error.take()
    }

    pub fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.raster.is_empty() {
            return Ok(());
        }

        let surface_size = [self.surface_width, self.surface_height];
        let egui_renderer = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: surface_size,
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            // Keep the scanned frame underneath.
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn clear(&mut self) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&Colour::BLACK.to_rgba());
        }
    }
}

impl PaintSurface for PixelsSurface {
    fn paint_pixel(&mut self, x: u32, y: u32, colour: Colour) {
        if !self.raster.contains(x, y) {
            return;
        }

        let index = (y as usize * self.raster.width as usize + x as usize) * 4;

        if let Some(pixel) = self.pixels.frame_mut().get_mut(index..index + 4) {
            pixel.copy_from_slice(&colour.to_rgba());
        }
    }

    fn clear_and_rescale(&mut self, raster: RasterSize, pixel_density: f64) {
        self.raster = raster;
        self.pixel_density = pixel_density;

        if raster.is_empty() {
            return;
        }

        if let Err(err) = self.pixels.resize_buffer(raster.width, raster.height) {
            error!(%err, width = raster.width, height = raster.height, "failed to resize framebuffer");
            self.raster = RasterSize::default();
            self.pending_error = Some(err);
            return;
        }

        self.clear();
    }
}
