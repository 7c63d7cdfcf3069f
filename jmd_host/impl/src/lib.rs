//! Host capabilities for running the inquiry pipeline outside a browser.

pub mod delay;
pub mod form;
pub mod navigator;
pub mod notification;
