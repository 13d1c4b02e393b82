//! Held movement keys for terminals that never report key releases.
//!
//! Such terminals only send presses (plus OS auto-repeat presses), so a key
//! counts as held until it has gone `hold_frames` frames without another press.

use bitflags::bitflags;
use game_core::Direction;

bitflags! {
    /// Movement keys currently held down.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct HeldKeys: u8 {
        const UP    = 1 << 0;
        const DOWN  = 1 << 1;
        const LEFT  = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl HeldKeys {
    const DIRECTIONS: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn from_direction(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::UP,
            Direction::Down => Self::DOWN,
            Direction::Left => Self::LEFT,
            Direction::Right => Self::RIGHT,
        }
    }
}

fn slot(direction: Direction) -> usize {
    match direction {
        Direction::Up => 0,
        Direction::Down => 1,
        Direction::Left => 2,
        Direction::Right => 3,
    }
}

/// Last press frame per held direction.
#[derive(Debug, Default)]
pub struct HeldTracker {
    held: HeldKeys,
    pressed_at: [u64; 4],
}

impl HeldTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held(&self) -> HeldKeys {
        self.held
    }

    pub fn press(&mut self, direction: Direction, frame: u64) {
        self.held.insert(HeldKeys::from_direction(direction));
        self.pressed_at[slot(direction)] = frame;
    }

    pub fn release(&mut self, direction: Direction) {
        self.held.remove(HeldKeys::from_direction(direction));
    }

    pub fn clear(&mut self) {
        self.held = HeldKeys::empty();
    }

    /// Drop keys not pressed again within `hold_frames` and return them.
    pub fn expire(&mut self, frame: u64, hold_frames: u64) -> Vec<Direction> {
        let expired: Vec<Direction> = HeldKeys::DIRECTIONS
            .into_iter()
            .filter(|&direction| {
                self.held.contains(HeldKeys::from_direction(direction))
                    && frame.saturating_sub(self.pressed_at[slot(direction)]) >= hold_frames
            })
            .collect();

        for &direction in &expired {
            self.release(direction);
        }
        expired
    }
}
