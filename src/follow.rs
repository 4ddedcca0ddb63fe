//! Camera follower.
//!
//! Every entity with a [`Position`](crate::Position), an
//! [`InputBuffer`](crate::player::InputBuffer) and a [`CameraIndex`] drags the
//! camera at that index toward itself each frame: deadzone first, then a fixed
//! lerp, then quarter-pixel snapping, then a clamp to [`SceneBounds`](crate::SceneBounds).
//!
//! [`SplitScreenPlugin`] lays the registered cameras out side by side.

mod entities;
mod systems;

pub use entities::{CameraIndex, CameraRegistry, FollowError, SceneCamera};
pub use systems::{follow_tracked_cameras, layout_split_viewports, sync_camera_transforms};

use bevy::prelude::*;

use crate::{SceneBounds, math};

/// Per-plugin configuration for the camera follower.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct FollowConfig {
    /// Per-axis distance the target may drift before the camera moves.
    pub deadzone: Vec2,
    /// Fraction of the remaining distance covered each frame.
    pub smoothness: f32,
    /// Grid the final position snaps to (0.25 = quarter-pixel precision).
    pub pixel_snap: f32,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            deadzone: Vec2::splat(20.0),
            smoothness: 0.02,
            pixel_snap: 0.25,
        }
    }
}

impl FollowConfig {
    /// Next scene position for `camera` while tracking `tracked`.
    pub fn next_position(&self, tracked: Vec2, camera: &SceneCamera, scene: Vec2) -> Vec2 {
        let current = camera.scene_position;
        let target = math::centering_target(tracked, camera.surface.as_vec2());
        let target = math::apply_deadzone(target, current, self.deadzone);
        let smoothed = math::lerp_vec2(current, target, self.smoothness);
        let snapped = math::snap_to_grid(smoothed, self.pixel_snap);
        math::clamp_to_scene(snapped, scene, camera.dimensions)
    }
}

/// Moves registered cameras after their tracked entities.
pub struct FollowPlugin(pub FollowConfig);

impl Plugin for FollowPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<FollowConfig>()
            .register_type::<SceneCamera>()
            .register_type::<CameraIndex>()
            .insert_resource(self.0.clone())
            .init_resource::<CameraRegistry>()
            .init_resource::<SceneBounds>()
            .add_systems(
                Update,
                (follow_tracked_cameras, sync_camera_transforms)
                    .chain()
                    .after(crate::player::apply_buffered_movement),
            );
    }
}

/// Splits the primary window between registered cameras, left to right.
pub struct SplitScreenPlugin;

impl Plugin for SplitScreenPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, layout_split_viewports.before(follow_tracked_cameras));
    }
}
