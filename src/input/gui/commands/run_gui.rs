use std::error::Error;

use log::{error, info};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::adapters::buffered_raster_sink::BufferedRasterSink;
use crate::controllers::config::ExplorerConfig;
use crate::controllers::explorer_session::ExplorerSession;
use crate::input::gui::app::gui_app::GuiApp;
use crate::presenters::memory::latest_frame::LatestFramePresenter;
use crate::presenters::pixels::presenter::PixelsPresenter;

/// Opens the explorer window and runs it until closed.
pub struct RunGuiCommand {
    config: ExplorerConfig,
}

impl RunGuiCommand {
    #[must_use]
    pub fn new(config: ExplorerConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let geometry = self.config.geometry()?;
        let sink = BufferedRasterSink::new(geometry, LatestFramePresenter::default());
        let session = ExplorerSession::new(&self.config, sink)?;

        let event_loop = EventLoop::new()?;

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Fractal Zoom")
                .with_inner_size(PhysicalSize::new(geometry.width(), geometry.height()))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter = PixelsPresenter::new(window, geometry)?;
        let mut app = GuiApp::new(window, &event_loop, presenter, session, &self.config);
        app.start();
        info!(
            "opened {}x{} window for {}",
            geometry.width(),
            geometry.height(),
            self.config.fractal
        );

        let mut redraw_pending = true;

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let (egui_consumed, egui_repaint) = app.handle_window_event(window, event);

                if egui_repaint {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::CursorMoved { position, .. } => {
                        app.set_cursor_position(position.x, position.y);
                    }
                    WindowEvent::CursorLeft { .. } => app.clear_cursor_position(),
                    WindowEvent::MouseInput {
                        state: ElementState::Pressed,
                        button: MouseButton::Left,
                        ..
                    } if !egui_consumed => {
                        app.click();
                        redraw_pending = true;
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        let (egui_output, actions) = app.update_ui(window);
                        for action in actions {
                            app.perform(action);
                        }

                        app.egui_state
                            .handle_platform_output(window, egui_output.platform_output.clone());

                        if egui_output
                            .viewport_output
                            .values()
                            .any(|v| v.repaint_delay.is_zero())
                        {
                            redraw_pending = true;
                        }

                        if let Err(err) = app.render(egui_output) {
                            error!("render failed: {err}");
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        app.resize(size.width, size.height);
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        app.resize(size.width, size.height);
                        redraw_pending = true;
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        Ok(())
    }
}
