use rstest::rstest;

use crate::{
    flip::{RandomFlip, ScriptedFlip},
    state::{MoveOutcome, State, Station},
    Error,
};

use super::{step, step_with, StepConfig, StepOutcome};

////////////////////////////////////////////////////////////////////////////////

#[test]
fn only_olin_direction_fires() {
    let mut state = State::new(0, 5);
    let mut flip = RandomFlip::new(0);
    step(&mut state, 1., 0., &mut flip).unwrap();
    // p1 = 1 tries Olin first and finds it empty,
    // so nothing moves and Olin records a stock-out.
    assert_eq!(
        state,
        State {
            olin: 0,
            wellesley: 5,
            olin_empty: 1,
            wellesley_empty: 0,
        }
    );
}

#[test]
fn only_wellesley_direction_fires() {
    let mut state = State::new(0, 5);
    let mut flip = RandomFlip::new(0);
    step(&mut state, 0., 1., &mut flip).unwrap();
    assert_eq!(
        state,
        State {
            olin: 1,
            wellesley: 4,
            olin_empty: 0,
            wellesley_empty: 0,
        }
    );
}

#[test]
fn both_empty_both_fire() {
    let mut state = State::new(0, 0);
    let mut flip = RandomFlip::new(0);
    step(&mut state, 1., 1., &mut flip).unwrap();
    assert_eq!(
        state,
        State {
            olin: 0,
            wellesley: 0,
            olin_empty: 1,
            wellesley_empty: 1,
        }
    );
}

#[rstest]
#[case(State::new(0, 0))]
#[case(State::new(10, 2))]
#[case(State { olin: 3, wellesley: 0, olin_empty: 4, wellesley_empty: 9 })]
fn no_op(#[case] initial: State, #[values(0, 1, 15)] seed: u64) {
    let mut state = initial;
    let mut flip = RandomFlip::new(seed);
    for _ in 0..50 {
        step(&mut state, 0., 0., &mut flip).unwrap();
    }
    assert_eq!(state, initial);
}

////////////////////////////////////////////////////////////////////////////////

#[test]
fn olin_attempted_before_wellesley() {
    // single bike crosses to wellesley and immediately rides back
    let mut state = State::new(1, 0);
    let mut flip = ScriptedFlip::new([true, true]);
    let outcome = step_with(&mut state, &StepConfig::new(0.5, 0.5).unwrap(), &mut flip);
    assert_eq!(
        outcome,
        StepOutcome {
            to_wellesley: Some(MoveOutcome::Moved {
                from: Station::Olin,
                to: Station::Wellesley
            }),
            to_olin: Some(MoveOutcome::Moved {
                from: Station::Wellesley,
                to: Station::Olin
            }),
        }
    );
    assert_eq!(state, State::new(1, 0));
}

#[test]
fn scripted_sequence() {
    let mut state = State::new(2, 0);
    let mut flip = ScriptedFlip::new([
        true, false, // olin -> wellesley
        true, false, // olin -> wellesley
        true, false, // olin empty
        false, true, // wellesley -> olin
        false, false,
    ]);
    let cfg = StepConfig::new(0.5, 0.5).unwrap();
    let outcomes = (0..5)
        .map(|_| step_with(&mut state, &cfg, &mut flip))
        .collect::<Vec<_>>();
    assert_eq!(flip.remaining(), 0);
    assert_eq!(
        state,
        State {
            olin: 1,
            wellesley: 1,
            olin_empty: 1,
            wellesley_empty: 0,
        }
    );
    assert_eq!(outcomes[4], StepOutcome::default());
    assert_eq!(outcomes.iter().flat_map(|o| o.iter()).count(), 4);
    assert!(outcomes[2].to_wellesley.unwrap().is_stock_out());
}

////////////////////////////////////////////////////////////////////////////////

#[rstest]
#[case(-0.1, 0.5, "p1")]
#[case(1.1, 0.5, "p1")]
#[case(0.5, -1., "p2")]
#[case(0.5, 2., "p2")]
#[case(f64::NAN, 0.5, "p1")]
fn invalid_probability(#[case] p1: f64, #[case] p2: f64, #[case] name: &str) {
    let mut state = State::new(1, 1);
    let mut flip = ScriptedFlip::new([]);
    let err = step(&mut state, p1, p2, &mut flip).unwrap_err();
    match err {
        Error::InvalidProbability { name: got, .. } => assert_eq!(got, name),
        e => panic!("unexpected error: {e}"),
    }
    assert_eq!(state, State::new(1, 1));
}

#[test]
fn bounds_are_valid() {
    assert!(StepConfig::new(0., 1.).is_ok());
    assert!(StepConfig::new(1., 0.).is_ok());
    assert_eq!(StepConfig::idle(), StepConfig::new(0., 0.).unwrap());
}

////////////////////////////////////////////////////////////////////////////////

#[rstest]
fn random_steps_keep_invariants(
    #[values(0.0, 0.3, 0.5, 1.0)] p1: f64,
    #[values(0.0, 0.4, 1.0)] p2: f64,
    #[values(123, 321)] seed: u64,
) {
    let mut state = State::new(10, 2);
    let mut flip = RandomFlip::new(seed);
    let cfg = StepConfig::new(p1, p2).unwrap();
    for _ in 0..200 {
        let prev = state;
        step_with(&mut state, &cfg, &mut flip);
        assert_eq!(state.total(), 12);
        assert!(state.olin_empty >= prev.olin_empty);
        assert!(state.wellesley_empty >= prev.wellesley_empty);
    }
}
