//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Text and checkbox inputs
//! - `select_input`: Dropdown input
//! - `registration_form`: Patient registration sections and actions

mod field_renderer;
mod registration_form;
mod select_input;

pub use registration_form::draw_registration;
