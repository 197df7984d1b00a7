#[allow(clippy::module_inception)]
pub mod recenter_and_zoom;
