//! Facing directions and the per-entity animation table

use super::animation::Animation;

/// Keys into an entity's animation table: the four facings plus the
/// player's attack action. A closed set, so the table is a dense array
/// rather than a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Attack,
}

impl Direction {
    pub const COUNT: usize = 5;

    fn index(self) -> usize {
        self as usize
    }
}

/// Fixed-size animation table indexed by `Direction`. Slots an entity never
/// sets stay `None`; looking one up yields no animation (idle entities keep
/// their last displayed frame).
#[derive(Debug, Default)]
pub struct AnimationSet {
    slots: [Option<Animation>; Direction::COUNT],
}

impl AnimationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, direction: Direction, animation: Animation) {
        self.slots[direction.index()] = Some(animation);
    }

    pub fn get(&self, direction: Direction) -> Option<&Animation> {
        self.slots[direction.index()].as_ref()
    }

    pub fn get_mut(&mut self, direction: Direction) -> Option<&mut Animation> {
        self.slots[direction.index()].as_mut()
    }
}
