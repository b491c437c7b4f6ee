//! Interactive controller for real-time fractal rendering.
//!
//! Keeps one background worker busy with the newest submitted
//! [`RenderRequest`](crate::core::actions::render::RenderRequest). Each
//! submission gets a generation number; a submission that arrives mid-render
//! cancels the render in progress and nothing is emitted for it.
//!
//! # Architecture
//!
//! - **Input**: `Arc<RenderRequest>` submissions
//! - **Output**: `InteractiveControllerPresenterPort` receiving `RenderEvent`s
//! - **Core**: `render_cancelable` from `core::actions::render`

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
pub use events::render::RenderEvent;
pub use ports::presenter::InteractiveControllerPresenterPort;
