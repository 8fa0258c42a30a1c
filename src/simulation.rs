use rand::Rng;
use tracing::{debug, info};

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// An enemy got within attack range of the hunter.
    Caught,
    /// Every enemy was shot down.
    Cleared,
    /// Enemies captured every data point.
    DataLost,
    /// The turn budget of [`Simulation::play`] ran out.
    TurnLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub outcome: Outcome,
    pub score: i64,
    pub turns: i32,
    pub kills: u32,
    pub shots_fired: u32,
    pub data_points_left: usize,
}

/// Local referee: applies turns the way the game does and keeps score.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub rules: Rules,
    pub me: Vec2,
    pub data_points: Vec<DataPoint>,
    pub enemies: Vec<Enemy>,
    total_life: i32,
    shots_fired: u32,
    kills: u32,
    turn: i32,
    outcome: Option<Outcome>,
}

impl Simulation {
    pub fn new(me: Vec2, data_points: Vec<DataPoint>, enemies: Vec<Enemy>, rules: Rules) -> Self {
        let total_life = enemies.iter().map(|e| e.life).sum();
        let mut sim = Simulation {
            rules,
            me,
            data_points,
            enemies,
            total_life,
            shots_fired: 0,
            kills: 0,
            turn: 0,
            outcome: None,
        };
        sim.outcome = sim.finished();
        sim
    }

    /// A random scenario: 1-5 data points, 1-8 enemies with 5-20 life, and
    /// the hunter placed where no enemy can reach it on the first turn when
    /// such a spot can be found.
    pub fn random<R: Rng>(rng: &mut R, rules: Rules) -> Self {
        let random_pos = |rng: &mut R| {
            Vec2::new(
                rng.gen_range(rules.arena_low.x..=rules.arena_high.x).floor(),
                rng.gen_range(rules.arena_low.y..=rules.arena_high.y).floor(),
            )
        };

        let data_points = (0..rng.gen_range(1..=5))
            .map(|id| DataPoint::new(id, random_pos(rng)))
            .collect::<Vec<_>>();

        let enemies = (0..rng.gen_range(1..=8))
            .map(|id| Enemy::new(id, random_pos(rng), rng.gen_range(5..=20)))
            .collect::<Vec<_>>();

        let safe_distance = rules.enemy_attack_range + rules.enemy_speed;
        let mut me = random_pos(rng);
        for _ in 0..100 {
            if enemies.iter().all(|e| e.pos.distance_to(me) > safe_distance) {
                break;
            }
            me = random_pos(rng);
        }

        Simulation::new(me, data_points, enemies, rules)
    }

    pub fn world(&self) -> World {
        World {
            me: self.me,
            data_points: self.data_points.clone(),
            enemies: self.enemies.clone(),
            iter: self.turn,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    fn finished(&self) -> Option<Outcome> {
        if self.enemies.is_empty() {
            Some(Outcome::Cleared)
        } else if self.data_points.is_empty() {
            Some(Outcome::DataLost)
        } else {
            None
        }
    }

    fn move_enemies(&mut self) {
        let data_points = self
            .data_points
            .iter()
            .map(|dp| dp.pos)
            .collect::<Vec<_>>();

        for enemy in &mut self.enemies {
            if let Ok(threat) = Threat::new(enemy, &data_points, &self.rules) {
                enemy.pos = threat.next_pos;
            }
        }
    }

    fn shoot(&mut self, id: i32) {
        let hunter = Hunter::new(self.me, &self.rules);
        let Some(idx) = self.enemies.iter().position(|e| e.id == id) else {
            return;
        };

        let enemy = &mut self.enemies[idx];
        let damage = hunter.damage_dealt(hunter.pos.distance_to(enemy.pos)).round() as i32;
        enemy.life = enemy.life.saturating_sub(damage);
        self.shots_fired += 1;
        debug!(id, damage, life = enemy.life, "shot");

        if enemy.life <= 0 {
            info!("enemy {id} destroyed");
            self.enemies.remove(idx);
            self.kills += 1;
        }
    }

    fn capture(&mut self) {
        let enemies = &self.enemies;
        self.data_points.retain(|dp| {
            let captured = enemies.iter().any(|e| e.pos == dp.pos);
            if captured {
                info!("data point {} captured", dp.id);
            }
            !captured
        });
    }

    /// Plays one turn with the hunter's `action` and returns the outcome
    /// once the game is over.
    pub fn step(&mut self, action: &Action) -> Result<Option<Outcome>, SimulationError> {
        if self.outcome.is_some() {
            return Err(SimulationError::GameOver);
        }
        if let Action::Shoot(id) = *action {
            if !self.enemies.iter().any(|e| e.id == id) {
                return Err(SimulationError::UnknownTarget(id));
            }
        }

        self.turn += 1;
        self.move_enemies();

        if let Action::Move(dest) = *action {
            let hunter = Hunter::new(self.me, &self.rules);
            self.me = self.rules.clamp_to_arena(hunter.next_position_towards(dest));
        }

        let range = self.rules.enemy_attack_range;
        if self.enemies.iter().any(|e| e.pos.distance_to(self.me) <= range) {
            info!("caught at turn {}", self.turn);
            self.outcome = Some(Outcome::Caught);
            return Ok(self.outcome);
        }

        if let Action::Shoot(id) = *action {
            self.shoot(id);
        }

        self.capture();
        self.outcome = self.finished();
        Ok(self.outcome)
    }

    pub fn score(&self) -> i64 {
        if self.outcome == Some(Outcome::Caught) {
            return 0;
        }

        let kills = self.kills as i64;
        let data_points_left = self.data_points.len() as i64;
        let bonus = (self.total_life as i64 - 3 * self.shots_fired as i64).max(0);

        10 * kills + 100 * data_points_left + 3 * data_points_left * bonus
    }

    pub fn report(&self) -> Report {
        Report {
            outcome: self.outcome.unwrap_or(Outcome::TurnLimit),
            score: self.score(),
            turns: self.turn,
            kills: self.kills,
            shots_fired: self.shots_fired,
            data_points_left: self.data_points.len(),
        }
    }

    /// Lets `strategy` play until the game ends or `max_turns` have passed.
    pub fn play(&mut self, strategy: &Strategy, max_turns: i32) -> Result<Report, SimulationError> {
        while self.outcome.is_none() && self.turn < max_turns {
            let action = strategy.decide(&self.world())?;
            debug!(turn = self.turn, "{action}");
            self.step(&action)?;
        }

        let report = self.report();
        info!(
            outcome = ?report.outcome,
            score = report.score,
            turns = report.turns,
            "game finished"
        );
        Ok(report)
    }
}
