//! Dioxus components for the linked car views.
//!
//! This crate provides:
//! - `state`: `AppState`, the Dioxus signals holding the `Dashboard`
//! - `animation`: browser clock and the frame loop that drives transitions
//! - `components`: attribute selectors, SVG chart views, page chrome

pub mod animation;
pub mod components;
pub mod state;
