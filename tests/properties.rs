use frogshot::Difficulty;
use frogshot::consts::{INITIAL_LIVES, POINTS_PER_POP};
use frogshot::sim::{
    BallColor, Cluster, GamePhase, GameState, HitOutcome, Projectile, Target, TickInput,
    resolve_collision, tick,
};
use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![Just(Difficulty::Easy), Just(Difficulty::Hard)]
}

fn color() -> impl Strategy<Value = BallColor> {
    prop::sample::select(BallColor::ALL.to_vec())
}

fn tick_input() -> impl Strategy<Value = TickInput> {
    (
        prop::option::of((0.0f32..800.0, 0.0f32..600.0)),
        any::<bool>(),
        any::<bool>(),
        prop::bool::weighted(0.02),
    )
        .prop_map(|(pointer, fire, action, start)| TickInput {
            pointer: pointer.map(|(x, y)| Vec2::new(x, y)),
            fire,
            action,
            start,
        })
}

proptest! {
    #[test]
    fn session_invariants_hold(
        seed in any::<u64>(),
        difficulty in difficulty(),
        inputs in prop::collection::vec(tick_input(), 1..600),
    ) {
        let mut state = GameState::new(seed, difficulty);
        for input in &inputs {
            let before = (state.phase, state.score);
            tick(&mut state, input);

            prop_assert!(state.lives <= INITIAL_LIVES);
            prop_assert_eq!(state.score % POINTS_PER_POP, 0);
            prop_assert!(state.level >= 1);
            if state.phase == GamePhase::Playing {
                prop_assert!(!state.cluster.is_empty());
            }
            if before.0 == GamePhase::GameOver && state.phase == GamePhase::GameOver {
                prop_assert_eq!(state.score, before.1);
            }
        }
    }

    #[test]
    fn start_always_resets(
        seed in any::<u64>(),
        inputs in prop::collection::vec(tick_input(), 0..300),
    ) {
        let mut state = GameState::new(seed, Difficulty::Easy);
        for input in &inputs {
            tick(&mut state, input);
        }

        state.start();
        prop_assert_eq!(state.phase, GamePhase::Playing);
        prop_assert_eq!(state.score, 0);
        prop_assert_eq!(state.level, 1);
        prop_assert_eq!(state.lives, INITIAL_LIVES);
        prop_assert!(state.shooter.projectile.is_none());
        prop_assert_eq!(state.cluster.len(), 1);
    }

    #[test]
    fn fire_while_in_flight_is_noop(
        seed in any::<u64>(),
        first_aim in (0.0f32..800.0, 0.0f32..500.0),
        second_aim in (0.0f32..800.0, 0.0f32..600.0),
    ) {
        let mut state = GameState::new(seed, Difficulty::Hard);
        let mut rng = Pcg32::seed_from_u64(seed);
        state.shooter.aim(Vec2::new(first_aim.0, first_aim.1));
        prop_assert!(state.shooter.fire(&mut rng));
        let in_flight = state.shooter.projectile;
        let loaded = state.shooter.next_color;

        state.shooter.aim(Vec2::new(second_aim.0, second_aim.1));
        prop_assert!(!state.shooter.fire(&mut rng));
        prop_assert_eq!(state.shooter.projectile, in_flight);
        prop_assert_eq!(state.shooter.next_color, loaded);
    }

    #[test]
    fn matching_hit_pops_exactly_one(
        seed in any::<u64>(),
        colors in prop::collection::vec(color(), 2..10),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut state = GameState::new(seed, Difficulty::Easy);
        state.start();
        // Spread targets far enough apart that only one is in range
        state.cluster = Cluster {
            targets: colors
                .iter()
                .enumerate()
                .map(|(i, &color)| Target { pos: Vec2::new(60.0 + 70.0 * i as f32, 200.0), color })
                .collect(),
            phase: 0.0,
        };
        let index = pick.index(colors.len());
        let target = state.cluster.targets[index];
        state.shooter.projectile = Some(Projectile { pos: target.pos, dir: Vec2::NEG_Y, color: target.color });

        let outcome = resolve_collision(&mut state);
        prop_assert_eq!(outcome, HitOutcome::Match { index });
        prop_assert_eq!(state.cluster.len(), colors.len() - 1);
        prop_assert_eq!(state.score, POINTS_PER_POP);
        prop_assert!(state.shooter.projectile.is_none());
    }

    #[test]
    fn mismatching_hit_costs_exactly_one_life(
        seed in any::<u64>(),
        target_color in color(),
        shot_color in color(),
        lives in 1u8..=3,
    ) {
        prop_assume!(target_color != shot_color);
        let mut state = GameState::new(seed, Difficulty::Easy);
        state.start();
        state.lives = lives;
        let pos = Vec2::new(300.0, 250.0);
        state.cluster = Cluster { targets: vec![Target { pos, color: target_color }], phase: 0.0 };
        state.shooter.projectile = Some(Projectile { pos, dir: Vec2::NEG_Y, color: shot_color });

        resolve_collision(&mut state);
        prop_assert_eq!(state.lives, lives - 1);
        prop_assert_eq!(state.cluster.len(), 1);
        prop_assert_eq!(state.phase == GamePhase::GameOver, lives == 1);
    }

    #[test]
    fn clearing_a_level_spawns_level_sized_cluster(
        seed in any::<u64>(),
        level in 1u32..30,
        color in color(),
    ) {
        let mut state = GameState::new(seed, Difficulty::Hard);
        state.start();
        state.level = level;
        let pos = Vec2::new(300.0, 250.0);
        state.cluster = Cluster { targets: vec![Target { pos, color }], phase: 1.0 };
        state.shooter.projectile = Some(Projectile { pos, dir: Vec2::X, color });

        resolve_collision(&mut state);
        prop_assert_eq!(state.level, level + 1);
        prop_assert_eq!(state.cluster.len() as u32, level + 1);
        prop_assert_eq!(state.cluster.phase, 0.0);
        prop_assert!(state.shooter.projectile.is_none());
    }
}

#[test]
fn red_shot_clears_level_one() {
    let mut state = GameState::new(7, Difficulty::Easy);
    tick(
        &mut state,
        &TickInput {
            start: true,
            ..Default::default()
        },
    );
    state.cluster.targets[0].color = BallColor::Red;
    state.shooter.next_color = BallColor::Red;

    // Aim straight at the target and keep ticking until the shot lands
    let target = state.cluster.targets[0].pos;
    tick(
        &mut state,
        &TickInput {
            pointer: Some(target),
            fire: true,
            ..Default::default()
        },
    );
    for _ in 0..200 {
        if state.level == 2 {
            break;
        }
        tick(&mut state, &TickInput::default());
    }

    assert_eq!(state.level, 2);
    assert_eq!(state.score, 10);
    assert_eq!(state.cluster.len(), 2);
    assert!(state.shooter.projectile.is_none());
}

#[test]
fn menu_and_game_over_do_not_simulate() {
    let mut state = GameState::new(3, Difficulty::Easy);
    state.start();
    state.shooter.projectile = Some(Projectile {
        pos: Vec2::new(400.0, 400.0),
        dir: Vec2::NEG_Y,
        color: BallColor::Blue,
    });
    tick(&mut state, &TickInput::default());
    let cluster = state.cluster.targets.clone();
    let shot = state.shooter.projectile;

    let mut frozen = state.clone();
    frozen.phase = GamePhase::GameOver;
    for _ in 0..10 {
        tick(&mut frozen, &TickInput::default());
    }
    assert_eq!(frozen.cluster.targets, cluster);
    assert_eq!(frozen.shooter.projectile, shot);
    assert_eq!(frozen.time_ticks, state.time_ticks);
}
