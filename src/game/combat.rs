//! Combat state
//!
//! Two variants share one capability set, selected per entity role at
//! construction: the player gets `BasicCombat` (an attacking flag driven by
//! the attack animation), enemies get `CooldownCombat` (contact damage
//! rate-limited by a per-tick countdown). Health is a plain signed counter;
//! nothing here clamps it; callers decide what `<= 0` means.

/// Capabilities common to both combat variants.
pub trait Combat {
    fn health(&self) -> i32;
    fn attack_power(&self) -> i32;
    fn attacking(&self) -> bool;

    /// Subtract unconditionally; health may go negative.
    fn damage(&mut self, amount: i32);

    /// Advance per-tick timers. The basic variant has none.
    fn update(&mut self) {}
}

/// Player-style combat: no cooldown, an attacking flag toggled externally.
#[derive(Debug, Clone)]
pub struct BasicCombat {
    health: i32,
    attack_power: i32,
    attacking: bool,
}

impl BasicCombat {
    pub fn new(health: i32, attack_power: i32) -> Self {
        Self {
            health,
            attack_power,
            attacking: false,
        }
    }

    /// Raise the attacking flag. The scene clears it again via
    /// `attacking_stop` once the attack animation has played through.
    pub fn attack(&mut self) {
        self.attacking = true;
    }

    pub fn attacking_stop(&mut self) {
        self.attacking = false;
    }

    pub fn heal(&mut self, amount: i32) {
        self.health += amount;
    }
}

impl Combat for BasicCombat {
    fn health(&self) -> i32 {
        self.health
    }

    fn attack_power(&self) -> i32 {
        self.attack_power
    }

    fn attacking(&self) -> bool {
        self.attacking
    }

    fn damage(&mut self, amount: i32) {
        self.health -= amount;
    }
}

/// Enemy-style combat: attacks land at most once per cooldown window.
#[derive(Debug, Clone)]
pub struct CooldownCombat {
    base: BasicCombat,
    cooldown: u32,
    timer: u32,
}

impl CooldownCombat {
    pub fn new(health: i32, attack_power: i32, cooldown: u32) -> Self {
        Self {
            base: BasicCombat::new(health, attack_power),
            cooldown,
            timer: 0,
        }
    }

    /// Try to land an attack. Succeeds only when the cooldown has fully
    /// elapsed, in which case the countdown restarts. An enemy overlapping
    /// the player every tick still damages only once per window.
    pub fn attack(&mut self) -> bool {
        if self.timer > 0 {
            return false;
        }
        self.timer = self.cooldown;
        true
    }
}

impl Combat for CooldownCombat {
    fn health(&self) -> i32 {
        self.base.health()
    }

    fn attack_power(&self) -> i32 {
        self.base.attack_power()
    }

    fn attacking(&self) -> bool {
        self.base.attacking()
    }

    fn damage(&mut self, amount: i32) {
        self.base.damage(amount);
    }

    fn update(&mut self) {
        self.timer = self.timer.saturating_sub(1);
    }
}
