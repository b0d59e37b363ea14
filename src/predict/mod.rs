//! Form state for the prediction inputs and the client for the remote
//! prediction service.

/// Client for the `/predict` route.
pub mod api;
/// The eight-field form state and input coercion.
pub mod form;
/// Connectivity check against the `/health` route.
pub mod health;
