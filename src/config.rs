use super::vec2::Vec2;

/// Game constants shared by the planners and the local simulator.
#[derive(Debug, Clone, PartialEq)]
pub struct Rules {
    /// Top-left corner of the arena.
    pub arena_low: Vec2,
    /// Bottom-right corner of the arena.
    pub arena_high: Vec2,
    pub hunter_speed: f64,
    pub enemy_speed: f64,
    pub enemy_attack_range: f64,
    /// Numerator of the damage falloff `factor / distance^exponent`.
    pub damage_factor: f64,
    pub damage_exponent: f64,
    /// Upper bound on refinement passes of the evasion planner.
    pub max_evasion_rounds: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            arena_low: Vec2::ZERO,
            arena_high: Vec2::new(16000., 9000.),
            hunter_speed: 1000.,
            enemy_speed: 500.,
            enemy_attack_range: 2000.,
            damage_factor: 125000.,
            damage_exponent: 1.2,
            max_evasion_rounds: 16,
        }
    }
}

impl Rules {
    pub fn with_arena(width: f64, height: f64) -> Self {
        Rules {
            arena_high: Vec2::new(width, height),
            ..Default::default()
        }
    }

    pub fn clamp_to_arena(&self, pos: Vec2) -> Vec2 {
        pos.clamp(self.arena_low, self.arena_high)
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        pos == self.clamp_to_arena(pos)
    }
}
