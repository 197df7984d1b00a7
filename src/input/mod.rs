//! Interactive front ends that turn user input into session operations.

#[cfg(feature = "gui")]
pub mod gui;
