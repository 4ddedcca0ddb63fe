//! E2E tests for the split-screen viewport layout.
//!
//! Inserts a primary `Window` and two registered cameras, runs the layout and
//! the follower together, and checks viewports, surfaces and what the
//! tracked player actually sees.

use bevy::camera::{ScalingMode, Viewport};
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use split_cam::follow::{
    CameraIndex, CameraRegistry, FollowConfig, FollowPlugin, SceneCamera, SplitScreenPlugin,
};
use split_cam::player::InputBuffer;
use split_cam::{Position, SceneBounds};

fn test_app(window_size: UVec2) -> (App, Entity) {
    let mut app = App::new();
    app.add_plugins((FollowPlugin(FollowConfig::default()), SplitScreenPlugin))
        .add_message::<WindowResized>()
        .insert_resource(SceneBounds {
            width: 2000.0,
            height: 1500.0,
        });

    let mut window = Window::default();
    window
        .resolution
        .set_physical_resolution(window_size.x, window_size.y);
    let window = app.world_mut().spawn((window, PrimaryWindow)).id();
    (app, window)
}

fn spawn_camera(app: &mut App, order: isize) -> (Entity, CameraIndex) {
    // Sized for a 1280x720 window split in two.
    let view = Vec2::new(640.0, 720.0);
    let cam = app
        .world_mut()
        .spawn((
            Camera {
                order,
                ..default()
            },
            Projection::from(OrthographicProjection {
                scaling_mode: ScalingMode::Fixed {
                    width: view.x,
                    height: view.y,
                },
                ..OrthographicProjection::default_2d()
            }),
            SceneCamera::new(view),
            Transform::default(),
        ))
        .id();
    let index = app.world_mut().resource_mut::<CameraRegistry>().register(cam);
    (cam, index)
}

fn viewport(app: &App, cam: Entity) -> (UVec2, UVec2) {
    let Viewport {
        physical_position,
        physical_size,
        ..
    } = app
        .world()
        .get::<Camera>(cam)
        .unwrap()
        .viewport
        .clone()
        .expect("viewport not set");
    (physical_position, physical_size)
}

fn fixed_scaling(app: &App, cam: Entity) -> Vec2 {
    match app.world().get::<Projection>(cam).unwrap() {
        Projection::Orthographic(ortho) => match ortho.scaling_mode {
            ScalingMode::Fixed { width, height } => Vec2::new(width, height),
            ref other => panic!("unexpected scaling mode {other:?}"),
        },
        _ => panic!("expected orthographic projection"),
    }
}

#[test]
fn cameras_get_side_by_side_slices() {
    let (mut app, _) = test_app(UVec2::new(1280, 720));
    let (left, _) = spawn_camera(&mut app, 0);
    let (right, _) = spawn_camera(&mut app, 1);

    app.update();

    assert_eq!(viewport(&app, left), (UVec2::ZERO, UVec2::new(640, 720)));
    assert_eq!(
        viewport(&app, right),
        (UVec2::new(640, 0), UVec2::new(640, 720))
    );
    let cam = app.world().get::<SceneCamera>(right).unwrap();
    assert_eq!(cam.surface, UVec2::new(640, 720));
    assert_eq!(cam.dimensions, Vec2::new(640.0, 720.0));
}

#[test]
fn large_window_resizes_view_and_projection_together() {
    let (mut app, _) = test_app(UVec2::new(2560, 1440));
    let (cam, _) = spawn_camera(&mut app, 0);
    spawn_camera(&mut app, 1);

    app.update();

    let scene_cam = app.world().get::<SceneCamera>(cam).unwrap().clone();
    assert_eq!(scene_cam.surface, UVec2::new(1280, 1440));
    assert_eq!(scene_cam.dimensions, scene_cam.surface.as_vec2());
    assert_eq!(fixed_scaling(&app, cam), scene_cam.dimensions);
}

#[test]
fn settled_player_stays_inside_rendered_view_on_large_window() {
    let (mut app, _) = test_app(UVec2::new(2560, 1440));
    let (cam, index) = spawn_camera(&mut app, 0);
    spawn_camera(&mut app, 1);
    let player = Vec2::new(1000.0, 1000.0);
    app.world_mut()
        .spawn((Position(player), InputBuffer::default(), index));

    for _ in 0..2000 {
        app.update();
    }

    let scene_cam = app.world().get::<SceneCamera>(cam).unwrap();
    let view = fixed_scaling(&app, cam);
    let offset = player - scene_cam.scene_position;
    assert!(
        offset.x >= 0.0 && offset.y >= 0.0 && offset.x <= view.x && offset.y <= view.y,
        "player outside rendered view: offset={offset:?} view={view:?}"
    );
    // Horizontally unconstrained, so the player settles near the centre.
    assert!((offset.x - view.x / 2.0).abs() <= 20.0, "offset={offset:?}");
}

#[test]
fn resize_message_relayouts_cameras() {
    let (mut app, window) = test_app(UVec2::new(1280, 720));
    let (left, _) = spawn_camera(&mut app, 0);
    let (right, _) = spawn_camera(&mut app, 1);
    app.update();

    app.world_mut()
        .get_mut::<Window>(window)
        .unwrap()
        .resolution
        .set_physical_resolution(1600, 900);
    app.world_mut().write_message(WindowResized {
        window,
        width: 1600.0,
        height: 900.0,
    });
    app.update();

    assert_eq!(viewport(&app, left), (UVec2::ZERO, UVec2::new(800, 900)));
    assert_eq!(
        viewport(&app, right),
        (UVec2::new(800, 0), UVec2::new(800, 900))
    );
    assert_eq!(
        app.world().get::<SceneCamera>(left).unwrap().surface,
        UVec2::new(800, 900)
    );
    assert_eq!(fixed_scaling(&app, right), Vec2::new(800.0, 900.0));
}
