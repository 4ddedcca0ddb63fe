//! Debug overlay: Tab toggles [`GameState::Debugging`], which freezes player
//! input and draws scene bounds, camera views and follow deadzones.

use bevy::math::Isometry2d;
use bevy::prelude::*;

use crate::follow::{FollowConfig, SceneCamera};
use crate::{GameState, SceneBounds, math};

/// Tab toggle plus gizmo overlays.
pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, toggle_debugging).add_systems(
            Update,
            (draw_scene_bounds, draw_camera_views).run_if(in_state(GameState::Debugging)),
        );
    }
}

fn toggle_debugging(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        let new_state = match state.get() {
            GameState::Running => GameState::Debugging,
            GameState::Debugging => GameState::Running,
        };
        info!("Game state -> {new_state:?}");
        next.set(new_state);
    }
}

/// Rectangle spanning `size` at scene-space top-left `corner`, in world space.
fn scene_rect(corner: Vec2, size: Vec2) -> Isometry2d {
    Isometry2d::from_translation(math::scene_to_world(corner + size / 2.0))
}

fn draw_scene_bounds(mut gizmos: Gizmos, scene: Res<SceneBounds>) {
    gizmos.rect_2d(
        scene_rect(Vec2::ZERO, scene.size()),
        scene.size(),
        Color::srgb(0.9, 0.2, 0.2),
    );
}

fn draw_camera_views(mut gizmos: Gizmos, cfg: Res<FollowConfig>, cameras: Query<&SceneCamera>) {
    for cam in &cameras {
        gizmos.rect_2d(
            scene_rect(cam.scene_position, cam.dimensions),
            cam.dimensions,
            Color::srgb(0.3, 0.8, 1.0),
        );
        // The tracked entity can roam this box without moving the camera.
        let surface = cam.surface.as_vec2();
        let center = cam.scene_position + surface / 2.0;
        gizmos.rect_2d(
            Isometry2d::from_translation(math::scene_to_world(center)),
            cfg.deadzone * 2.0,
            Color::srgb(1.0, 0.85, 0.2),
        );
    }
}
