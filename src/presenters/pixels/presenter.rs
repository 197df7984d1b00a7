use crate::adapters::pixel_format::copy_rgb_to_rgba;
use crate::core::data::display_geometry::DisplayGeometry;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use log::warn;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use winit::window::Window;

/// Shows frames in the window through a `pixels` framebuffer with the egui
/// overlay drawn on top.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    geometry: DisplayGeometry,
    surface_width: u32,
    surface_height: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, geometry: DisplayGeometry) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(geometry.width(), geometry.height(), surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        let mut presenter = Self {
            pixels,
            egui_renderer,
            geometry,
            surface_width: size.width,
            surface_height: size.height,
        };
        presenter.draw_placeholder();

        Ok(presenter)
    }

    fn draw_placeholder(&mut self) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }
    }

    /// Copies a finished frame into the framebuffer. Frames of another size
    /// are ignored.
    pub fn upload_frame(&mut self, frame: &PixelBuffer) -> bool {
        if frame.geometry() != self.geometry {
            warn!(
                "dropping {}x{} frame for {}x{} framebuffer",
                frame.geometry().width(),
                frame.geometry().height(),
                self.geometry.width(),
                self.geometry.height()
            );
            return false;
        }

        match copy_rgb_to_rgba(frame.buffer(), self.pixels.frame_mut()) {
            Ok(_) => true,
            Err(err) => {
                warn!("{err}");
                false
            }
        }
    }

    /// Maps a physical window position to a framebuffer pixel.
    #[must_use]
    pub fn window_to_pixel(&self, position: (f32, f32)) -> Option<Point> {
        self.pixels
            .window_pos_to_pixel(position)
            .ok()
            .map(|(x, y)| Point {
                x: x as i32,
                y: y as i32,
            })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.surface_width = width;
        self.surface_height = height;
        self.pixels.resize_surface(width, height)
    }

    pub fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        let surface_size = [self.surface_width, self.surface_height];

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
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
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
                            load: wgpu::LoadOp::Load, // keep the fractal underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }
}
