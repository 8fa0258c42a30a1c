use tracing::{debug, info};

use super::*;

/// Picks one action per turn: flee when someone can reach us, take a
/// point-blank shot when one opens up, otherwise go after the enemy closest
/// to capturing its data point.
pub struct Strategy {
    pub rules: Rules,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::new(Rules::default())
    }
}

impl Strategy {
    pub fn new(rules: Rules) -> Self {
        Strategy { rules }
    }
}

impl Strategy {
    pub fn decide(&self, world: &World) -> Result<Action, DecisionError> {
        if world.enemies.is_empty() {
            return Err(DecisionError::NoEnemies);
        }

        let threats = Threat::from_world(world, &self.rules)?;
        let hunter = Hunter::new(world.me, &self.rules);

        for t in &threats {
            debug!(
                id = t.id,
                life = t.life,
                turns_before_capture = t.turns_before_capture,
                "threat heading to {}",
                t.objective
            );
        }

        if threats.iter().any(|t| t.nearly_in_range_of(hunter.pos)) {
            info!("safety");
            return Ok(Action::Move(hunter.safety_from(&threats)));
        }

        let vulnerable = threats.iter().filter(|t| t.at_point_blank_of(&hunter));
        if let Some(target) = min_by(vulnerable, |t| hunter.pos.distance_to(t.pos)) {
            info!("shoot point blank at {}", target.id);
            return Ok(Action::Shoot(target.id));
        }

        let target = min_by(threats.iter(), |t| t.turns_before_capture as f64)
            .ok_or(DecisionError::NoEnemies)?;
        info!("plan attack on {}", target.id);
        Ok(hunter.plan_attack(target, &threats))
    }

    /// Decides the turn and writes the command for the referee.
    pub fn play(&self, world: &World) -> Result<Action, DecisionError> {
        let action = self.decide(world)?;
        println!("{action}");
        Ok(action)
    }
}
