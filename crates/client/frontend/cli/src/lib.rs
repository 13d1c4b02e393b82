//! Terminal UI frontend for the quest game.
//!
//! This crate provides a terminal-based user interface for the game.
//! It implements the `client_frontend_core::Frontend` trait for pure UI rendering.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Shows the hero selection screen before a runtime exists
//! - Receives a RuntimeHandle for communication
//! - Does NOT own the Runtime
//! - Ticks frames, forwards key presses and releases, and narrates events

mod app;
mod config;
mod event;
mod hero_select;
mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::{CliConfig, InputConfig, UiConfig};
pub use hero_select::show_hero_select;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
