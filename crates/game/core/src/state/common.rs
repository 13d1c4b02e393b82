//! Shared primitive types used across the rules.

/// Position in overworld surface units, measured from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// Per-axis movement intent. Each component is -1, 0 or 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Velocity {
    pub dx: i32,
    pub dy: i32,
}

impl Velocity {
    pub const ZERO: Self = Self { dx: 0, dy: 0 };

    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// True when at least one axis carries movement.
    pub const fn is_moving(&self) -> bool {
        self.dx != 0 || self.dy != 0
    }
}

/// Bounded counter for health and action points.
///
/// `current` never exceeds `maximum` and never drops below zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    pub const fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Removes up to `amount`, clamping at zero. Returns the amount removed.
    pub fn deplete(&mut self, amount: u32) -> u32 {
        let removed = amount.min(self.current);
        self.current -= removed;
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_clamps_on_construction_and_depletion() {
        let mut meter = ResourceMeter::new(30, 20);
        assert_eq!(meter.current, 20);

        assert_eq!(meter.deplete(5), 5);
        assert_eq!(meter.current, 15);
        assert_eq!(meter.deplete(40), 15);
        assert!(meter.is_empty());
        assert_eq!(meter.deplete(1), 0);
    }

    #[test]
    fn velocity_motion() {
        assert!(!Velocity::ZERO.is_moving());
        assert!(Velocity::new(0, -1).is_moving());
        assert!(Velocity::new(1, 0).is_moving());
    }
}
