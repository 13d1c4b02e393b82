//! Player-facing wording for archetypes and battle events.
use arrayvec::ArrayVec;
use game_core::{Archetype, AttackReport, Unit};

use crate::message::{MessageEntry, MessageLevel};

pub const GAME_OVER_TEXT: &str = "GAME OVER!";
pub const DEFEND_TEXT: &str = "The hero is defending!";
pub const FLEE_TEXT: &str = "The hero fled!";
pub const CRIT_TEXT: &str = "CRIT!";
pub const HERO_PROMPT: &str = "Choose the character you want to play as:";

/// Most lines a single attack can produce.
pub const MAX_ATTACK_LINES: usize = 4;

/// Name with the first letter upper-cased, e.g. `Jaskirat`.
pub fn display_name(archetype: Archetype) -> String {
    let tag = archetype.tag();
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Banner shown when a battle ends with a knockout.
pub fn winner_banner(winner: Archetype) -> String {
    format!("{} WINS!", winner.tag().to_uppercase())
}

/// Header for the enemy side of the battle screen: `Ghost! | 9/13`.
pub fn enemy_banner(enemy: &Unit) -> String {
    format!(
        "{}! | {}/{}",
        display_name(enemy.archetype()),
        enemy.current_health(),
        enemy.max_health()
    )
}

pub fn encounter_text(enemy: Archetype) -> String {
    format!("A {} appears!", display_name(enemy))
}

/// Narrate one attack in the order it played out.
///
/// Misses skip the damage line; `show_misses = false` also drops the miss line.
pub fn attack_lines(report: &AttackReport, show_misses: bool) -> ArrayVec<MessageEntry, MAX_ATTACK_LINES> {
    let name = display_name(report.attacker);
    let mut lines = ArrayVec::new();
    lines.push(MessageEntry::info(format!("The {name} attacks!")));

    if !report.is_hit() {
        if show_misses {
            lines.push(MessageEntry::info(format!("{name}'s move missed!")));
        }
        return lines;
    }

    lines.push(MessageEntry::info(format!("The {name}'s move hit!")));
    if report.is_critical() {
        lines.push(MessageEntry::new(CRIT_TEXT, MessageLevel::Critical));
    }
    lines.push(MessageEntry::info(format!(
        "{} damage is dealt!",
        report.damage
    )));
    lines
}
