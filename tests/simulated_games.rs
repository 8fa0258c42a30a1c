use hunterbot::*;
use rand::{rngs::StdRng, SeedableRng};

const MAX_TURNS: i32 = 300;

#[test]
fn seeded_games_run_to_completion() {
    let strategy = Strategy::default();
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..20 {
        let mut sim = Simulation::random(&mut rng, strategy.rules.clone());
        let report = sim.play(&strategy, MAX_TURNS).unwrap();

        assert!(report.turns <= MAX_TURNS);
        if report.outcome == Outcome::Caught {
            assert_eq!(report.score, 0);
        }
        if report.outcome != Outcome::TurnLimit {
            assert_eq!(sim.outcome(), Some(report.outcome));
        }
        assert!(sim.rules.contains(sim.me));
    }
}

#[test]
fn same_scenario_plays_the_same_way() {
    let strategy = Strategy::default();
    let sim = Simulation::random(&mut StdRng::seed_from_u64(99), strategy.rules.clone());

    let first = sim.clone().play(&strategy, MAX_TURNS).unwrap();
    let second = sim.clone().play(&strategy, MAX_TURNS).unwrap();
    assert_eq!(first, second);
}

#[test]
fn lone_enemy_far_from_its_data_point_is_hunted_down() {
    let strategy = Strategy::default();
    let mut sim = Simulation::new(
        Vec2::new(1000., 4500.),
        vec![DataPoint::new(0, Vec2::new(15000., 4500.))],
        vec![Enemy::new(0, Vec2::new(6000., 4500.), 10)],
        strategy.rules.clone(),
    );

    let report = sim.play(&strategy, MAX_TURNS).unwrap();
    assert_eq!(report.outcome, Outcome::Cleared);
    assert_eq!(report.kills, 1);
    assert_eq!(report.data_points_left, 1);
}
