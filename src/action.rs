use std::fmt;

use super::vec2::Vec2;

/// The single command sent to the referee each turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Move(Vec2),
    Shoot(i32),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(dest) => write!(f, "MOVE {dest}"),
            Action::Shoot(id) => write!(f, "SHOOT {id}"),
        }
    }
}
