use super::*;

#[test]
fn zero_target_shows_zero_once() {
    assert_eq!(counter_frames(0), vec![0]);
}

#[test]
fn frames_end_at_target_after_fixed_ticks() {
    for target in [1, 3, 7, 18, 20, 250] {
        let frames = counter_frames(target);
        assert_eq!(frames.len(), COUNTER_TICKS);
        assert_eq!(frames.last().copied(), Some(target));
    }
}

#[test]
fn frames_never_decrease() {
    let frames = counter_frames(13);
    assert!(frames.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn small_targets_hold_floor_values() {
    let frames = counter_frames(2);
    assert_eq!(frames[0], 0);
    assert_eq!(frames[9], 1);
    assert_eq!(frames[19], 2);
}
