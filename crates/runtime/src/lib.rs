//! Runtime orchestration for the exploration and battle simulation.
//!
//! This crate wraps a [`game_core::GameSession`] in a background worker and
//! exposes it through a cloneable [`RuntimeHandle`]. Clients drive the game by
//! ticking frames, forwarding movement and battle input, and subscribing to the
//! topics they care about.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`oracle`] supplies the entropy source used outside of tests
//! - `workers` keeps the simulation task internal to the crate
pub mod api;
pub mod events;
pub mod oracle;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{Event, EventBus, SessionEvent, Topic};
pub use oracle::EntropyRng;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
