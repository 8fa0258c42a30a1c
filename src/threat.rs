use super::*;

/// An enemy together with what it will do next: where it is heading, where
/// it will be after one move and how long until it captures its objective.
#[derive(Debug, Clone, PartialEq)]
pub struct Threat {
    pub id: i32,
    pub pos: Vec2,
    pub life: i32,
    pub attack_range: f64,
    pub speed: f64,
    pub objective: Vec2,
    pub turns_before_capture: u32,
    pub next_pos: Vec2,
}

/// Nearest of `points` to `from`. Ties go to the earliest point.
pub fn nearest(from: Vec2, points: &[Vec2]) -> Option<Vec2> {
    min_by(points.iter().copied(), |p| from.distance_to(*p))
}

/// First item with the smallest key. `f64` keys are compared with a strict
/// `<`, so equal keys never replace an earlier item.
pub fn min_by<T, I, F>(items: I, mut key: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> f64,
{
    let mut best: Option<(T, f64)> = None;
    for item in items {
        let k = key(&item);
        let better = match &best {
            Some((_, best_k)) => k < *best_k,
            None => true,
        };
        if better {
            best = Some((item, k));
        }
    }
    best.map(|(item, _)| item)
}

impl Threat {
    pub fn new(enemy: &Enemy, data_points: &[Vec2], rules: &Rules) -> Result<Self, DecisionError> {
        let objective = nearest(enemy.pos, data_points).ok_or(DecisionError::NoDataPoints)?;
        let speed = rules.enemy_speed;

        let turns_before_capture = (enemy.pos.distance_to(objective) / speed).ceil() as u32;
        let next_pos = enemy
            .pos
            .towards(&[objective])
            .truncate_to(speed)
            .relative_to(enemy.pos);

        Ok(Threat {
            id: enemy.id,
            pos: enemy.pos,
            life: enemy.life,
            attack_range: rules.enemy_attack_range,
            speed,
            objective,
            turns_before_capture,
            next_pos,
        })
    }

    /// Builds a threat for every enemy of the turn, in input order.
    pub fn from_world(world: &World, rules: &Rules) -> Result<Vec<Threat>, DecisionError> {
        let data_points = world.data_point_positions();
        world
            .enemies
            .iter()
            .map(|enemy| Threat::new(enemy, &data_points, rules))
            .collect()
    }

    /// Whether `target` will be within reach once this threat has moved.
    pub fn nearly_in_range_of(&self, target: Vec2) -> bool {
        self.next_pos.distance_to(target) <= self.attack_range
    }

    /// Whether the hunter can close in over two moves, staying out of reach
    /// after the first and being in reach after the second.
    pub fn at_point_blank_of(&self, hunter: &Hunter) -> bool {
        let hunter_next = hunter.next_position_towards(self.pos);
        let hunter_next_next = hunter_next
            .towards(&[self.next_pos])
            .truncate_to(hunter.speed)
            .relative_to(hunter_next);

        !self.nearly_in_range_of(hunter_next) && self.nearly_in_range_of(hunter_next_next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threat_at(x: f64, y: f64, data_points: &[Vec2]) -> Threat {
        let enemy = Enemy::new(0, Vec2::new(x, y), 10);
        Threat::new(&enemy, data_points, &Rules::default()).unwrap()
    }

    #[test]
    fn objective_is_nearest_data_point() {
        let dps = [Vec2::new(5000., 0.), Vec2::new(1000., 0.), Vec2::new(9000., 0.)];
        let threat = threat_at(0., 0., &dps);
        assert_eq!(threat.objective, Vec2::new(1000., 0.));
        assert_eq!(threat.turns_before_capture, 2);
        assert_eq!(threat.next_pos, Vec2::new(500., 0.));
    }

    #[test]
    fn objective_tie_goes_to_first_data_point() {
        let dps = [Vec2::new(-1000., 0.), Vec2::new(1000., 0.)];
        let threat = threat_at(0., 0., &dps);
        assert_eq!(threat.objective, Vec2::new(-1000., 0.));
    }

    #[test]
    fn close_objective_is_reached_in_one_move() {
        let threat = threat_at(0., 0., &[Vec2::new(300., 400.)]);
        assert_eq!(threat.turns_before_capture, 1);
        assert_eq!(threat.next_pos, Vec2::new(300., 400.));
    }

    #[test]
    fn threat_standing_on_objective_stays_put() {
        let threat = threat_at(700., 700., &[Vec2::new(700., 700.)]);
        assert_eq!(threat.turns_before_capture, 0);
        assert_eq!(threat.next_pos, Vec2::new(700., 700.));
    }

    #[test]
    fn no_data_points_is_an_error() {
        let enemy = Enemy::new(3, Vec2::new(1., 1.), 10);
        assert_eq!(
            Threat::new(&enemy, &[], &Rules::default()),
            Err(DecisionError::NoDataPoints)
        );
    }

    #[test]
    fn range_uses_predicted_position() {
        let threat = threat_at(0., 0., &[Vec2::new(10000., 0.)]);
        assert_eq!(threat.next_pos, Vec2::new(500., 0.));
        assert!(threat.nearly_in_range_of(Vec2::new(2500., 0.)));
        assert!(!threat.nearly_in_range_of(Vec2::new(2501., 0.)));
        assert!(!threat.nearly_in_range_of(Vec2::new(-1600., 0.)));
    }

    #[test]
    fn point_blank_when_second_step_lands_in_range() {
        let rules = Rules::default();
        // Threat heads right towards x=9000; hunter starts 4000 to its left.
        let threat = threat_at(6000., 4500., &[Vec2::new(9000., 4500.)]);
        let hunter = Hunter::new(Vec2::new(2000., 4500.), &rules);
        // First step: hunter at 3000, threat at 6500 -> 3500 apart.
        // Second step: hunter at 4000 -> 2500 apart, still out of reach.
        assert!(!threat.at_point_blank_of(&hunter));

        let hunter = Hunter::new(Vec2::new(2600., 4500.), &rules);
        // First step: 3600 vs 6500 -> 2900. Second step: 4600 -> 1900.
        assert!(threat.at_point_blank_of(&hunter));
    }

    #[test]
    fn not_point_blank_when_first_step_is_already_in_range() {
        let rules = Rules::default();
        let threat = threat_at(6000., 4500., &[Vec2::new(9000., 4500.)]);
        // First step: 4000 vs 6500 -> 2500; second step 5000 -> 1500.
        let hunter = Hunter::new(Vec2::new(3000., 4500.), &rules);
        assert!(threat.at_point_blank_of(&hunter));

        // First step: 4500 vs 6500 -> 2000, already in reach.
        let hunter = Hunter::new(Vec2::new(3500., 4500.), &rules);
        assert!(!threat.at_point_blank_of(&hunter));
    }

    #[test]
    fn min_by_keeps_first_of_equals() {
        let items = [(1, 3.), (2, 1.), (3, 1.)];
        assert_eq!(min_by(items.iter(), |(_, k)| *k).map(|(id, _)| *id), Some(2));
        assert_eq!(min_by(Vec::<f64>::new(), |k| *k), None);
    }
}
