use super::*;

#[test]
fn small_target_counts_by_one() {
    let plan = CounterPlan::new(20, COUNTER_DURATION);
    assert_eq!(plan.increment, 1);
    assert_eq!(plan.step, Duration::from_millis(45));
    assert_eq!(plan.values().collect::<Vec<_>>(), (1..=20).collect::<Vec<_>>());
}

#[test]
fn target_of_one_takes_whole_duration() {
    let plan = CounterPlan::new(1, COUNTER_DURATION);
    assert_eq!(plan.step, COUNTER_DURATION);
    assert_eq!(plan.values().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn large_target_grows_increment_instead_of_shrinking_step() {
    let plan = CounterPlan::new(1000, COUNTER_DURATION);
    assert_eq!(plan.step, MIN_STEP);
    assert!(plan.increment > 1);
    let values = plan.values().collect::<Vec<_>>();
    assert!(values.len() <= 45);
    assert_eq!(values.last(), Some(&1000));
    assert!(values.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn zero_target_renders_zero_once() {
    let plan = CounterPlan::new(0, COUNTER_DURATION);
    assert_eq!(plan.values().collect::<Vec<_>>(), vec![0]);
}

#[test]
fn zero_duration_never_steps_faster_than_minimum() {
    let plan = CounterPlan::new(5, Duration::ZERO);
    assert_eq!(plan.step, MIN_STEP);
    assert_eq!(plan.values().last(), Some(5));
}

#[test]
fn every_page_counter_lands_on_target() {
    for (_, target) in COUNTERS {
        let plan = CounterPlan::new(target, COUNTER_DURATION);
        assert!(plan.step >= MIN_STEP);
        assert_eq!(plan.values().last(), Some(target));
    }
}
