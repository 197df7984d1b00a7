pub mod generate_fractal;
pub mod recenter_and_zoom;
pub mod render_view;
