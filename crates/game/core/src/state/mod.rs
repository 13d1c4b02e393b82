//! Combatant and overworld state.
//!
//! Archetypes fix a unit's base stats at construction; [`Unit`] carries the
//! mutable battle-runtime part (health, action points, temporary guard). The
//! overworld primitives ([`Position`], [`Velocity`]) live here too so the
//! session can expose them for rendering.
mod archetype;
mod common;
mod unit;

pub use archetype::{Archetype, ArchetypeStats, HeroKit};
pub use common::{Position, ResourceMeter, Velocity};
pub use unit::{ActionPoints, AttackSlot, Unit};
