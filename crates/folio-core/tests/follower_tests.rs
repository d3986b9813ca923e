use folio_core::{CursorFollower, CursorParams, SmoothedPoint};
use glam::Vec2;

#[test]
fn smoothed_point_approaches_stationary_target_without_overshoot() {
    for factor in [0.1_f32, 0.2] {
        let target = Vec2::new(640.0, -120.0);
        let mut p = SmoothedPoint::new(factor);
        let mut prev_dist = p.pos.distance(target);
        for _ in 0..200 {
            let pos = p.step(target);
            let dist = pos.distance(target);
            assert!(dist <= prev_dist, "factor {} moved away", factor);
            assert!(pos.x <= target.x && pos.y >= target.y, "factor {} overshot", factor);
            prev_dist = dist;
        }
        assert!(prev_dist < 1e-3, "factor {} did not converge", factor);
    }
}

#[test]
fn follower_tracks_moving_pointer() {
    let mut f = CursorFollower::new(CursorParams::default());
    let path = [(10.0, 10.0), (200.0, 40.0), (200.0, 400.0), (50.0, 60.0)];
    for (x, y) in path {
        f.set_pointer(x, y);
        for _ in 0..3 {
            f.tick();
        }
    }
    for _ in 0..300 {
        f.tick();
    }
    let (dot, halo) = f.centres();
    assert!(dot.distance(Vec2::new(50.0, 60.0)) < 1e-3);
    assert!(halo.distance(Vec2::new(50.0, 60.0)) < 1e-3);
}

#[test]
fn frame_offsets_centre_each_proxy() {
    let mut f = CursorFollower::default();
    f.set_pointer(500.0, 500.0);
    for _ in 0..400 {
        f.tick();
    }
    let frame = f.tick();
    assert!(frame.dot.distance(Vec2::splat(494.0)) < 1e-2);
    assert!(frame.halo.distance(Vec2::splat(480.0)) < 1e-2);
}
