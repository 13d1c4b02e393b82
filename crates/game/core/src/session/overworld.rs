//! Hero movement on the overworld field.
use crate::config::FieldConfig;
use crate::state::{Position, Velocity};

/// Arrow-key style movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Hero position plus the movement intent set by input.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Overworld {
    field: FieldConfig,
    position: Position,
    velocity: Velocity,
}

impl Overworld {
    pub fn new(field: FieldConfig) -> Self {
        Self {
            field,
            position: field.spawn,
            velocity: Velocity::ZERO,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn field(&self) -> &FieldConfig {
        &self.field
    }

    /// Press sets the axis towards `direction`; release zeroes that axis.
    pub fn set_intent(&mut self, direction: Direction, pressed: bool) {
        let (axis, sign) = match direction {
            Direction::Up => (&mut self.velocity.dy, -1),
            Direction::Down => (&mut self.velocity.dy, 1),
            Direction::Left => (&mut self.velocity.dx, -1),
            Direction::Right => (&mut self.velocity.dx, 1),
        };
        *axis = if pressed { sign } else { 0 };
    }

    pub fn halt(&mut self) {
        self.velocity = Velocity::ZERO;
    }

    /// Advance one frame, axis by axis. A step that leaves the field is
    /// undone for that axis only. Returns whether the position changed.
    pub fn step(&mut self) -> bool {
        let start = self.position;

        self.position.x += self.velocity.dx;
        if self.out_of_bounds(self.position.x + self.field.sprite_width, self.field.width) {
            self.position.x -= self.velocity.dx;
        }

        self.position.y += self.velocity.dy;
        if self.out_of_bounds(self.position.y + self.field.sprite_height, self.field.height) {
            self.position.y -= self.velocity.dy;
        }

        self.position != start
    }

    fn out_of_bounds(&self, axis_end: i32, axis_limit: i32) -> bool {
        self.position.x < 0 || self.position.y < self.field.top || axis_end > axis_limit
    }
}
