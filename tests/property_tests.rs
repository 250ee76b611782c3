use proptest::prelude::*;
use std::collections::HashSet;
use timeforge::config::PenaltyWeights;
use timeforge::fitness::Evaluator;
use timeforge::search::Mutator;
use timeforge::timetable::{Day, Session, TimeSlot, Timetable};

// --- STRATEGIES ---

fn arb_day() -> impl Strategy<Value = Day> {
    prop_oneof![
        Just(Day::Monday),
        Just(Day::Tuesday),
        Just(Day::Wednesday),
        Just(Day::Thursday),
        Just(Day::Friday),
    ]
}

fn arb_slot() -> impl Strategy<Value = TimeSlot> {
    (0u8..5).prop_map(|i| TimeSlot::new(8 + 2 * i, 10 + 2 * i).unwrap())
}

prop_compose! {
    fn arb_session()(
        student in "S[0-9]",
        course in proptest::option::of("C[0-9]"),
        day in proptest::option::of(arb_day()),
        slot in proptest::option::of(arb_slot()),
    ) -> Session {
        Session { student, course, day, slot, duration: None }
    }
}

prop_compose! {
    fn arb_timetable()(
        sessions in proptest::collection::vec(arb_session(), 1..40)
    ) -> Timetable {
        Timetable::new(sessions)
    }
}

prop_compose! {
    fn arb_assigned_session()(
        student in "S[0-9]",
        course in proptest::option::of("C[0-9]"),
        day in arb_day(),
        slot in arb_slot(),
    ) -> Session {
        Session { student, course, day: Some(day), slot: Some(slot), duration: None }
    }
}

prop_compose! {
    fn arb_assigned_timetable()(
        sessions in proptest::collection::vec(arb_assigned_session(), 1..40)
    ) -> Timetable {
        Timetable::new(sessions)
    }
}

fn test_mutator() -> Mutator {
    Mutator::new(
        vec![Day::Monday, Day::Tuesday, Day::Wednesday],
        vec![
            TimeSlot::new(8, 10).unwrap(),
            TimeSlot::new(10, 12).unwrap(),
            TimeSlot::new(14, 16).unwrap(),
        ],
    )
}

/// Reference clash check: does any (student, day, slot) triple repeat?
fn has_clash(timetable: &Timetable) -> bool {
    let mut seen = HashSet::new();
    for s in timetable.iter() {
        if let (Some(day), Some(slot)) = (s.day, s.slot) {
            if !seen.insert((s.student.clone(), day, slot)) {
                return true;
            }
        }
    }
    false
}

proptest! {
    #[test]
    fn score_is_always_within_unit_interval(timetable in arb_timetable()) {
        let score = Evaluator::new(PenaltyWeights::default()).score(&timetable);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn complete_timetables_score_above_zero(timetable in arb_assigned_timetable()) {
        let score = Evaluator::new(PenaltyWeights::default()).score(&timetable);
        prop_assert!(score > 0.0);
    }

    #[test]
    fn perfect_score_means_no_clash_and_vice_versa(timetable in arb_assigned_timetable()) {
        let score = Evaluator::new(PenaltyWeights::default()).score(&timetable);
        prop_assert_eq!(score == 1.0, !has_clash(&timetable));
    }

    #[test]
    fn mutation_preserves_identities(
        timetable in arb_timetable(),
        rate in 0.0..=1.0f64,
        seed in any::<u64>(),
    ) {
        let mut rng = fastrand::Rng::with_seed(seed);
        let child = test_mutator().mutate(&timetable, rate, &mut rng);

        prop_assert_eq!(child.len(), timetable.len());
        prop_assert_eq!(child.identities(), timetable.identities());
    }

    #[test]
    fn full_rate_mutation_assigns_everything(
        timetable in arb_timetable(),
        seed in any::<u64>(),
    ) {
        let mut rng = fastrand::Rng::with_seed(seed);
        let child = test_mutator().mutate(&timetable, 1.0, &mut rng);
        prop_assert!(child.iter().all(|s| s.is_assigned()));
    }

    #[test]
    fn scoring_is_deterministic(timetable in arb_timetable()) {
        let evaluator = Evaluator::new(PenaltyWeights::default());
        prop_assert_eq!(evaluator.score(&timetable), evaluator.score(&timetable));
    }
}
