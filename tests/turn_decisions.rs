use hunterbot::*;

fn world(me: (f64, f64), data_points: &[(f64, f64)], enemies: &[(f64, f64)]) -> World {
    World {
        me: Vec2::new(me.0, me.1),
        data_points: data_points
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| DataPoint::new(id as i32, Vec2::new(x, y)))
            .collect(),
        enemies: enemies
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| Enemy::new(id as i32, Vec2::new(x, y), 10))
            .collect(),
        iter: 1,
    }
}

#[test]
fn flees_when_an_enemy_can_reach_us() {
    let world = world((8000., 4500.), &[(12000., 4500.)], &[(9000., 4500.)]);
    let action = Strategy::default().decide(&world).unwrap();
    assert_eq!(action, Action::Move(Vec2::new(7000., 4500.)));
}

#[test]
fn flight_stays_inside_a_small_arena() {
    let strategy = Strategy::new(Rules::with_arena(4000., 3000.));
    let world = world((3900., 1500.), &[(0., 1500.)], &[(3000., 1500.)]);

    let action = strategy.decide(&world).unwrap();
    assert_eq!(action, Action::Move(Vec2::new(4000., 1500.)));
}

#[test]
fn shoots_nearest_point_blank_enemy() {
    // Both enemies can be closed in on over two moves; the second one is
    // nearer to the hunter right now.
    let world = world(
        (3000., 4500.),
        &[(9000., 4500.), (3000., 0.)],
        &[(6000., 4500.), (3000., 1700.)],
    );
    let strategy = Strategy::default();
    let threats = Threat::from_world(&world, &strategy.rules).unwrap();
    let hunter = Hunter::new(world.me, &strategy.rules);

    assert!(threats.iter().all(|t| !t.nearly_in_range_of(world.me)));
    assert!(threats.iter().all(|t| t.at_point_blank_of(&hunter)));
    assert_eq!(strategy.decide(&world).unwrap(), Action::Shoot(1));
}

#[test]
fn attacks_enemy_closest_to_capture() {
    let world = world(
        (1000., 1000.),
        &[(15000., 8000.), (15000., 2000.)],
        &[(10000., 8000.), (14000., 2000.)],
    );
    let strategy = Strategy::default();
    let threats = Threat::from_world(&world, &strategy.rules).unwrap();
    assert_eq!(threats[0].turns_before_capture, 10);
    assert_eq!(threats[1].turns_before_capture, 2);

    let action = strategy.decide(&world).unwrap();
    assert_eq!(action, Action::Move(Vec2::new(14000., 2000.)));
}

#[test]
fn capture_ties_go_to_first_enemy() {
    let world = world(
        (1000., 1000.),
        &[(11000., 8000.), (15000., 2000.)],
        &[(10000., 8000.), (14000., 2000.)],
    );
    let action = Strategy::default().decide(&world).unwrap();
    assert_eq!(action, Action::Move(Vec2::new(10000., 8000.)));
}

#[test]
fn reads_turn_and_answers_with_a_command() {
    let feed = "8000 4500\n1\n0 12000 4500\n1\n0 9000 4500 10\n";
    let mut reader = TurnReader::new(feed.as_bytes());
    let world = reader.read_turn().unwrap().unwrap();

    let action = Strategy::default().decide(&world).unwrap();
    assert_eq!(action.to_string(), "MOVE 7000 4500");
}
