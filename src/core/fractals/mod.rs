pub mod burning_ship;
pub mod escape_time;
pub mod factory;
pub mod fractal_kinds;
pub mod fractal_rule;
pub mod julia;
pub mod mandelbrot;
pub mod tricorn;
