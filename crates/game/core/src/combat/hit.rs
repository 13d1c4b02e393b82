//! Dodge and critical roll checks.

/// Check if an attack lands.
///
/// # Arguments
///
/// * `dodge_chance` - Defender's dodge chance (0-100)
/// * `roll` - Percentile roll in `[0, 100)`
///
/// # Returns
///
/// `true` when `roll >= dodge_chance`; a roll below the dodge chance misses.
pub fn check_hit(dodge_chance: u32, roll: u32) -> bool {
    roll >= dodge_chance
}

/// Check if a landed hit is critical.
///
/// The comparison is inclusive, so a crit chance of 100 or more always
/// crits and a crit chance of 0 still crits on a roll of 0.
pub fn check_critical(crit_chance: u32, roll: u32) -> bool {
    roll <= crit_chance
}
