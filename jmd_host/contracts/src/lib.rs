//! Capabilities of the environment the page runs in.
//!
//! The business logic only talks to the host through these traits, so it can
//! run in a browser, in a terminal or against mocks.

pub mod delay;
pub mod form;
pub mod navigator;
pub mod notification;
pub mod page;
