//! Event handling for the CLI client.
//!
//! The event loop paces frames, forwards keyboard input to the runtime,
//! narrates runtime events, and redraws the UI.

mod handlers;
mod r#loop;

pub use r#loop::EventLoop;
