//! Widgets composing the terminal screens.
pub mod battle;
pub mod field;
pub mod footer;
pub mod header;
pub mod hero_select;
pub mod messages;
