//! Cross-frontend primitives for presenting the game.
//!
//! Houses message logging, battle narration, and view-model types that the CLI
//! and any future graphical client can reuse.
pub mod config;
pub mod event;
pub mod format;
pub mod frontend;
pub mod message;
pub mod view_model;

pub use config::{FrontendConfig, MessageConfig};
pub use event::{BattleNarrator, EventConsumer, EventImpact};
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::{BattleView, FighterView, SessionView};
