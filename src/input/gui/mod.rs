//! Windowed explorer: winit events drive an [`ExplorerSession`] whose frames
//! are shown through `pixels`, with egui controls on top.
//!
//! [`ExplorerSession`]: crate::controllers::explorer_session::ExplorerSession

pub mod app;
pub mod commands;
