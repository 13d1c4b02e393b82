//! Damage calculation.

/// Damage before defense.
///
/// # Formula
///
/// ```text
/// damage = power        (normal hit)
/// damage = power * 2    (critical hit)
/// ```
pub fn calculate_damage(power: u32, is_critical: bool) -> u32 {
    if is_critical {
        power.saturating_mul(2)
    } else {
        power
    }
}

/// Apply the defender's defense to a landed hit.
///
/// # Formula
///
/// ```text
/// final = 1                   (damage < defense)
/// final = damage - defense    (otherwise)
/// ```
///
/// Outclassed hits still scratch for 1; an exact match is fully absorbed.
pub fn mitigate_damage(damage: u32, defense: u32) -> u32 {
    if damage < defense { 1 } else { damage - defense }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_doubles_power() {
        assert_eq!(calculate_damage(6, false), 6);
        assert_eq!(calculate_damage(6, true), 12);
    }

    #[test]
    fn defense_subtracts_with_floor() {
        assert_eq!(mitigate_damage(6, 1), 5);
        assert_eq!(mitigate_damage(1, 4), 1);
        assert_eq!(mitigate_damage(9, 9), 0);
        assert_eq!(mitigate_damage(12, 0), 12);
    }
}
