//! Port definitions for the interactive controller.
//!
//! Contains the trait the presentation layer implements to receive
//! rendered frames and render failures.

pub mod presenter;
