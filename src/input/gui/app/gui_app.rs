use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{error, warn};
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::adapters::buffered_raster_sink::BufferedRasterSink;
use crate::controllers::config::ExplorerConfig;
use crate::controllers::explorer_session::{ExplorerSession, SessionResult};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_view::render_view::RenderStats;
use crate::core::colour_mapping::factory::colour_map_factory;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::input::gui::app::state::{GuiAction, GuiAppState};
use crate::presenters::memory::latest_frame::LatestFramePresenter;
use crate::presenters::pixels::presenter::PixelsPresenter;

type GuiSink = BufferedRasterSink<LatestFramePresenter>;

pub struct GuiApp {
    presenter: PixelsPresenter,
    session: ExplorerSession<GuiSink>,
    ui_state: GuiAppState,
    base_hue: f32,
    hue_scale: f32,
    cursor_position: Option<(f32, f32)>,
    last_render: Option<RenderStats>,
    last_error_message: Option<String>,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl GuiApp {
    pub fn new(
        window: &Window,
        event_loop: &EventLoop<()>,
        presenter: PixelsPresenter,
        session: ExplorerSession<GuiSink>,
        config: &ExplorerConfig,
    ) -> Self {
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            presenter,
            session,
            ui_state: GuiAppState::new(config.fractal, config.colour_map),
            base_hue: config.base_hue,
            hue_scale: config.hue_scale,
            cursor_position: None,
            last_render: None,
            last_error_message: None,
            egui_ctx,
            egui_state,
        }
    }

    fn apply(&mut self, outcome: SessionResult<GuiSink>) {
        match outcome {
            Ok(stats) => {
                self.last_render = Some(stats);
                self.last_error_message = None;
            }
            Err(err) => {
                warn!("{err}");
                self.last_error_message = Some(err.to_string());
            }
        }

        if let Some(frame) = self.session.sink_mut().presenter_mut().take_frame() {
            self.presenter.upload_frame(&frame);
        }
    }

    /// Draws the first frame of the session.
    pub fn start(&mut self) {
        let outcome = self.session.render();
        self.apply(outcome);
    }

    pub fn reset(&mut self) {
        let outcome = self.session.reset();
        self.apply(outcome);
    }

    fn select_fractal(&mut self, kind: FractalKinds) {
        let outcome = self.session.select_rule(kind);
        self.apply(outcome);
    }

    fn select_colour_map(&mut self, kind: ColourMapKinds) {
        let max_iterations = self.session.rule().max_iterations();

        let outcome = match colour_map_factory(kind, max_iterations, self.base_hue, self.hue_scale)
        {
            Ok(colour_map) => self.session.set_colour_map(colour_map),
            Err(err) => Err(err.into()),
        };
        self.apply(outcome);
    }

    pub fn perform(&mut self, action: GuiAction) {
        match action {
            GuiAction::Reset => self.reset(),
            GuiAction::SelectFractal(kind) => self.select_fractal(kind),
            GuiAction::SelectColourMap(kind) => self.select_colour_map(kind),
        }
    }

    /// Zooms in on the pixel under the cursor.
    pub fn click(&mut self) {
        let Some(position) = self.cursor_position else {
            return;
        };

        match self.presenter.window_to_pixel(position) {
            Some(pixel) => {
                let outcome = self.session.click(pixel);
                self.apply(outcome);
            }
            None => warn!("click at {position:?} is outside the fractal"),
        }
    }

    pub fn set_cursor_position(&mut self, x: f64, y: f64) {
        self.cursor_position = Some((x as f32, y as f32));
    }

    pub fn clear_cursor_position(&mut self) {
        self.cursor_position = None;
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if let Err(err) = self.presenter.resize(width, height) {
            error!("failed to resize surface: {err}");
        }
    }

    /// Runs the egui frame and returns its output plus any requested actions.
    pub fn update_ui(&mut self, window: &Window) -> (egui::FullOutput, Vec<GuiAction>) {
        let raw_input = self.egui_state.take_egui_input(window);
        let region = self.session.region();
        let geometry = self.session.geometry();
        let mut reset_clicked = false;

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Fractal Zoom")
                .default_pos([10.0, 10.0])
                .default_size([260.0, 220.0])
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.label("Fractal:");
                        egui::ComboBox::from_id_source("fractal_kind")
                            .selected_text(self.ui_state.selected_fractal.display_name())
                            .show_ui(ui, |ui| {
                                for &kind in FractalKinds::ALL {
                                    ui.selectable_value(
                                        &mut self.ui_state.selected_fractal,
                                        kind,
                                        kind.display_name(),
                                    );
                                }
                            });
                    });

                    ui.horizontal(|ui| {
                        ui.label("Colour map:");
                        egui::ComboBox::from_id_source("colour_map_kind")
                            .selected_text(self.ui_state.selected_colour_map.display_name())
                            .show_ui(ui, |ui| {
                                for &kind in ColourMapKinds::ALL {
                                    ui.selectable_value(
                                        &mut self.ui_state.selected_colour_map,
                                        kind,
                                        kind.display_name(),
                                    );
                                }
                            });
                    });

                    ui.separator();
                    ui.label("View region:");
                    ui.label(format!("Real: [{:.6}, {:.6}]", region.x_min(), region.x_max()));
                    ui.label(format!("Imag: [{:.6}, {:.6}]", region.y_min(), region.y_max()));
                    ui.label(format!("Width: {:e}", region.width()));

                    if ui.button("Reset view").clicked() {
                        reset_clicked = true;
                    }

                    ui.separator();
                    ui.label(format!("Display: {}x{}", geometry.width(), geometry.height()));
                    if let Some(stats) = self.last_render {
                        ui.label(format!(
                            "Last render: {} ms, {} in set",
                            stats.duration.as_millis(),
                            stats.in_set
                        ));
                    }
                    if let Some(message) = &self.last_error_message {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        });

        let mut actions = self.ui_state.take_selection_changes();
        if reset_clicked {
            actions.push(GuiAction::Reset);
        }

        (output, actions)
    }

    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}
