//! Shared egui UI modules.

/// Controller orchestrating form edits and submissions.
pub mod controller;
/// UI-facing state owned by the controller.
pub mod state;
/// egui renderer.
pub mod ui;
