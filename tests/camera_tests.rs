//! Integration tests for the follow camera: pitch clamping, obstruction
//! snap/ease behavior, hit filtering, and the boom-length invariant,
//! including full rig runs against the reference world.

use chase_rig::physics::probe_blockers;
use chase_rig::{
    Aabb, CameraConfig, FlatGroundMover, FollowCamera, FollowRig, HitKind, LookInput, MoveInput,
    RayHit, RigConfig,
};
use glam::Vec3;

const DT: f32 = 1.0 / 60.0;

fn no_hit(_: Vec3, _: Vec3, _: f32) -> Option<RayHit> {
    None
}

#[test]
fn pitch_stays_in_bounds_through_wild_pointer_input() {
    let mut camera = FollowCamera::new(CameraConfig::default());
    let deltas = [
        (300.0, -900.0),
        (-50.0, 400.0),
        (0.0, -1200.0),
        (700.0, 700.0),
        (-2.5, -0.25),
    ];
    for (dx, dy) in deltas {
        camera.update(&LookInput::new(dx, dy), Vec3::ZERO, no_hit);
        assert!(camera.pitch() >= -35.0 && camera.pitch() <= 60.0);
    }
}

#[test]
fn obstruction_snap_is_exact() {
    let mut camera = FollowCamera::new(CameraConfig::default());
    // Camera at 5.0, hit at 2.0, padding 0.1: next frame sits at 1.9.
    camera.update(&LookInput::default(), Vec3::ZERO, |_, _, _| {
        Some(RayHit::solid(2.0))
    });
    assert!((camera.local_distance() - -1.9).abs() < 1e-6);
}

#[test]
fn recovery_lerp_is_exact() {
    let mut camera = FollowCamera::new(CameraConfig::default());
    camera.update(&LookInput::default(), Vec3::ZERO, |_, _, _| {
        Some(RayHit::solid(2.0))
    });
    // lerp(-1.9, -5.0, 0.1) = -2.21 on the first clear frame.
    camera.update(&LookInput::default(), Vec3::ZERO, no_hit);
    assert!((camera.local_distance() - -2.21).abs() < 1e-5);
}

#[test]
fn recovery_converges_to_full_extension() {
    let mut camera = FollowCamera::new(CameraConfig::default());
    camera.update(&LookInput::default(), Vec3::ZERO, |_, _, _| {
        Some(RayHit::solid(1.0))
    });
    for _ in 0..400 {
        camera.update(&LookInput::default(), Vec3::ZERO, no_hit);
    }
    assert!((camera.local_distance() - -5.0).abs() < 1e-3);
}

#[test]
fn player_and_trigger_hits_are_transparent() {
    for kind in [HitKind::PlayerBody, HitKind::NonSolid] {
        let mut camera = FollowCamera::new(CameraConfig::default());
        camera.update(&LookInput::default(), Vec3::ZERO, |_, _, _| {
            Some(RayHit::solid(2.0))
        });
        camera.update(&LookInput::default(), Vec3::ZERO, move |_, _, _| {
            Some(RayHit { distance: 0.5, kind })
        });
        // Not an obstruction: the boom eases outward instead of snapping
        // in to 0.4.
        assert!((camera.local_distance() - -2.21).abs() < 1e-5);
    }
}

#[test]
fn farther_obstruction_eases_instead_of_snapping() {
    let mut camera = FollowCamera::new(CameraConfig::default());
    camera.update(&LookInput::default(), Vec3::ZERO, |_, _, _| {
        Some(RayHit::solid(1.0))
    });
    assert!((camera.local_distance() - -0.9).abs() < 1e-6);

    // The wall is now farther than the camera: ease toward its padded
    // distance rather than jumping there.
    camera.update(&LookInput::default(), Vec3::ZERO, |_, _, _| {
        Some(RayHit::solid(3.0))
    });
    let expected = -0.9 + (-2.9 - -0.9) * 0.1;
    assert!((camera.local_distance() - expected).abs() < 1e-5);
}

#[test]
fn boom_length_never_exceeds_max_distance() {
    let mut camera = FollowCamera::new(CameraConfig::default());
    let script: [(f32, Option<f32>); 6] = [
        (10.0, Some(0.5)),
        (0.0, None),
        (-30.0, Some(4.9)),
        (5.0, None),
        (0.0, Some(0.05)),
        (90.0, None),
    ];
    for (dx, hit) in script {
        for _ in 0..50 {
            camera.update(&LookInput::new(dx, 0.0), Vec3::ZERO, |_, _, _| {
                hit.map(RayHit::solid)
            });
            assert!(camera.local_distance() <= 0.0);
            assert!(camera.local_distance().abs() <= 5.0 + 1e-5);
        }
    }
}

#[test]
fn collapsed_boom_skips_the_probe_and_recovers() {
    let mut camera = FollowCamera::new(CameraConfig::default());
    // A hit at exactly the padding distance collapses the boom to zero.
    camera.update(&LookInput::default(), Vec3::ZERO, |_, _, _| {
        Some(RayHit::solid(0.1))
    });
    assert_eq!(camera.local_distance(), 0.0);

    // With a zero-length boom the probe direction is degenerate; the
    // update must not call the raycast and the boom eases back out.
    camera.update(&LookInput::default(), Vec3::ZERO, |_, _, _| {
        panic!("probe must not run with a collapsed boom")
    });
    assert!((camera.local_distance() - -0.5).abs() < 1e-5);
}

#[test]
fn wall_between_camera_and_character_pulls_boom_in() {
    let mut rig = FollowRig::new(RigConfig::default()).unwrap();
    let mut mover = FlatGroundMover::new(Vec3::ZERO, 0.0);
    // Wall behind the character, across the camera's line of sight.
    let wall = Aabb::new(Vec3::new(-6.0, 0.0, -3.5), Vec3::new(6.0, 4.0, -2.5));
    mover.add_blocker(wall);

    let blockers = [wall];
    for _ in 0..10 {
        rig.tick(
            DT,
            &MoveInput::default(),
            &LookInput::default(),
            &mut mover,
            |o, d, max| probe_blockers(&blockers, o, d, max),
        );
    }
    // Pivot at y=1.5 looking along -Z hits the wall at 2.5 m; boom sits
    // at the padded distance.
    assert!((rig.camera().local_distance() - -2.4).abs() < 1e-4);

    // Character walks forward, clear of the wall: boom recovers.
    for _ in 0..600 {
        rig.tick(
            DT,
            &MoveInput::new(0.0, 1.0),
            &LookInput::default(),
            &mut mover,
            |o, d, max| probe_blockers(&blockers, o, d, max),
        );
    }
    assert!((rig.camera().local_distance() - -5.0).abs() < 1e-2);
}
