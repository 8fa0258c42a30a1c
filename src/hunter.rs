use tracing::{debug, warn};

use super::*;

/// The unit we control. Rebuilt from the referee's snapshot every turn.
#[derive(Debug, Clone, Copy)]
pub struct Hunter<'a> {
    pub pos: Vec2,
    pub speed: f64,
    rules: &'a Rules,
}

fn ids(threats: &[&Threat]) -> String {
    if threats.is_empty() {
        return "none".to_string();
    }
    threats
        .iter()
        .map(|t| t.id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn lethal_at(threats: &[Threat], dest: Vec2) -> Vec<&Threat> {
    threats.iter().filter(|t| t.nearly_in_range_of(dest)).collect()
}

impl<'a> Hunter<'a> {
    pub fn new(pos: Vec2, rules: &'a Rules) -> Self {
        Hunter {
            pos,
            speed: rules.hunter_speed,
            rules,
        }
    }

    /// Where one full-speed step towards `target` would land.
    pub fn next_position_towards(&self, target: Vec2) -> Vec2 {
        self.pos
            .towards(&[target])
            .truncate_to(self.speed)
            .relative_to(self.pos)
    }

    /// Damage of one shot fired from `distance` away. Point-blank shots are
    /// treated as infinitely strong.
    pub fn damage_dealt(&self, distance: f64) -> f64 {
        if distance <= 0. {
            return f64::INFINITY;
        }
        self.rules.damage_factor / distance.powf(self.rules.damage_exponent)
    }

    fn flee_from(&self, danger: &[&Threat]) -> Vec2 {
        let positions: Vec<Vec2> = danger.iter().map(|t| t.pos).collect();
        let away = -self.pos.towards(&positions);
        self.rules
            .clamp_to_arena(away.truncate_to(self.speed).relative_to(self.pos))
    }

    /// Moves away from every threat that would reach us, widening the set of
    /// threats to flee from until the destination is out of everyone's reach.
    ///
    /// If a pass adds no new threat the destination can no longer change, so
    /// the search stops there, as it does after `max_evasion_rounds` passes.
    /// In both cases the destination reached by the fewest threats is
    /// returned, the later one on ties.
    pub fn safety_from(&self, threats: &[Threat]) -> Vec2 {
        let mut destination = self.pos;
        let mut lethal = lethal_at(threats, destination);
        if lethal.is_empty() {
            return destination;
        }

        let mut danger: Vec<&Threat> = Vec::new();
        let mut best: Option<(Vec2, usize)> = None;

        for round in 0..self.rules.max_evasion_rounds.max(1) {
            let known = danger.len();
            for threat in lethal {
                if !danger.iter().any(|d| d.id == threat.id) {
                    danger.push(threat);
                }
            }

            if round > 0 && danger.len() == known {
                warn!(
                    "no escape from {}, staying with best destination",
                    ids(&danger)
                );
                return best.map_or(destination, |(dest, _)| dest);
            }

            debug!("those are dangerous: {}", ids(&danger));
            destination = self.flee_from(&danger);
            lethal = lethal_at(threats, destination);
            debug!("moving to {destination} runs into: {}", ids(&lethal));

            if lethal.is_empty() {
                return destination;
            }

            if best.map_or(true, |(_, count)| lethal.len() <= count) {
                best = Some((destination, lethal.len()));
            }
        }

        warn!(
            "evasion gave up after {} rounds, fleeing from {}",
            self.rules.max_evasion_rounds,
            ids(&danger)
        );
        best.map_or(destination, |(dest, _)| dest)
    }

    /// Chooses between shooting `target` now and stepping closer first.
    ///
    /// Shoots when one step closer would still not give enough time before
    /// the capture, or when that step would put us within reach of any
    /// threat. Otherwise moves towards the target.
    pub fn plan_attack(&self, target: &Threat, threats: &[Threat]) -> Action {
        let turns_available = target.turns_before_capture;

        let distance_this_turn = self.pos.distance_to(target.pos);
        let shots_at_this_turn = self.damage_dealt(distance_this_turn);

        let next_position_if_move = self.next_position_towards(target.pos);
        let distance_next_turn = next_position_if_move.distance_to(target.next_pos);
        let shots_at_next_turn = self.damage_dealt(distance_next_turn);

        debug!(
            enemy = target.id,
            turns_available, shots_at_this_turn, shots_at_next_turn, "planning attack"
        );

        if shots_at_next_turn >= turns_available as f64 {
            return Action::Shoot(target.id);
        }

        if threats
            .iter()
            .any(|t| t.nearly_in_range_of(next_position_if_move))
        {
            return Action::Shoot(target.id);
        }

        let destination = self.pos.towards(&[target.pos]).relative_to(self.pos);
        Action::Move(self.rules.clamp_to_arena(destination))
    }
}
