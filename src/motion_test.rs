use super::*;

fn close(a: (f64, f64), b: (f64, f64)) -> bool {
    (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
}

// =============================================================
// Parallax offset
// =============================================================

#[test]
fn pointer_at_the_viewport_center_has_no_offset() {
    assert_eq!(parallax_offset((600.0, 400.0), (1200.0, 800.0)), (0.0, 0.0));
}

#[test]
fn offset_is_the_centered_distance_over_the_divisor() {
    // Bottom-right corner of a 1200x800 viewport.
    assert_eq!(parallax_offset((1200.0, 800.0), (1200.0, 800.0)), (75.0, 50.0));
    // Top-left corner pulls the other way.
    assert_eq!(parallax_offset((0.0, 0.0), (1200.0, 800.0)), (-75.0, -50.0));
}

#[test]
fn offset_scales_linearly_with_pointer_distance() {
    let near = parallax_offset((700.0, 400.0), (1200.0, 800.0));
    let far = parallax_offset((800.0, 400.0), (1200.0, 800.0));
    assert!(close((far.0, far.1), (near.0 * 2.0, 0.0)));
}

// =============================================================
// Trail tween
// =============================================================

#[test]
fn tween_holds_its_origin_until_retargeted() {
    let mut tween = TrailTween::new((0.0, 0.0));
    assert_eq!(tween.sample(10_000.0), (0.0, 0.0));
}

#[test]
fn tween_reaches_the_target_after_the_full_duration_and_holds_it() {
    let mut tween = TrailTween::new((0.0, 0.0));
    tween.retarget(1_000.0, (100.0, 40.0));
    assert_eq!(tween.sample(1_000.0 + TRAIL_DURATION_MS), (100.0, 40.0));
    // Fill-forwards: later samples stay on the target.
    assert_eq!(tween.sample(9_999.0), (100.0, 40.0));
}

#[test]
fn tween_is_eased_partway_through_a_segment() {
    let mut tween = TrailTween::new((0.0, 0.0));
    tween.retarget(0.0, (100.0, 40.0));
    // ease-out-cubic(0.5) = 0.875
    assert!(close(tween.sample(250.0), (87.5, 35.0)));
}

#[test]
fn tween_motion_is_monotonic_along_a_segment() {
    let mut tween = TrailTween::new((0.0, 0.0));
    tween.retarget(0.0, (100.0, 0.0));
    let mut last = 0.0;
    for step in 1..=10 {
        let (x, _) = tween.sample(f64::from(step) * 50.0);
        assert!(x >= last);
        last = x;
    }
    assert_eq!(last, 100.0);
}

#[test]
fn retarget_supersedes_the_segment_in_flight() {
    let mut tween = TrailTween::new((0.0, 0.0));
    tween.retarget(0.0, (100.0, 0.0));
    let (mid, _) = tween.sample(250.0);
    assert!(close((mid, 0.0), (87.5, 0.0)));

    // A new target mid-flight restarts from the interpolated position.
    tween.retarget(250.0, (200.0, 0.0));
    assert!(close(tween.sample(250.0), (87.5, 0.0)));

    let (later, _) = tween.sample(500.0);
    assert!(later > 87.5 && later < 200.0);

    // The old 100.0 target is never revisited.
    assert_eq!(tween.sample(250.0 + TRAIL_DURATION_MS), (200.0, 0.0));
}

#[test]
fn retargeting_the_same_target_keeps_the_clock() {
    let mut tween = TrailTween::new((0.0, 0.0));
    tween.retarget(0.0, (100.0, 0.0));
    tween.sample(400.0);
    tween.retarget(400.0, (100.0, 0.0));
    // Had the clock reset, 100ms later the segment would still be in flight.
    assert_eq!(tween.sample(500.0), (100.0, 0.0));
}

#[test]
fn target_reports_the_latest_retarget() {
    let mut tween = TrailTween::new((0.0, 0.0));
    assert_eq!(tween.target(), (0.0, 0.0));
    tween.retarget(0.0, (12.0, 34.0));
    assert_eq!(tween.target(), (12.0, 34.0));
}
