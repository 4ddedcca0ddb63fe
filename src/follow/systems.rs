use bevy::camera::{ScalingMode, Viewport};
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use super::FollowConfig;
use super::entities::{CameraIndex, CameraRegistry, FollowError, SceneCamera};
use crate::player::InputBuffer;
use crate::{Position, SceneBounds, math};

/// Drags each tracked entity's camera toward it.
///
/// A bad [`CameraIndex`] doesn't stop the other cameras from updating; the
/// last failure is returned once every tracked entity has been processed.
pub fn follow_tracked_cameras(
    cfg: Res<FollowConfig>,
    scene: Res<SceneBounds>,
    registry: Res<CameraRegistry>,
    tracked: Query<(&Position, &CameraIndex), With<InputBuffer>>,
    mut cameras: Query<&mut SceneCamera>,
) -> Result {
    let mut failure = None;

    for (pos, &index) in &tracked {
        let entity = match registry.get(index) {
            Ok(entity) => entity,
            Err(err) => {
                failure = Some(err);
                continue;
            }
        };
        let Ok(mut cam) = cameras.get_mut(entity) else {
            failure = Some(FollowError::NotACamera(entity));
            continue;
        };

        let next = cfg.next_position(pos.0, &cam, scene.size());
        // Only touch the component when it moves, keeping change detection quiet.
        if next != cam.scene_position {
            cam.scene_position = next;
        }
    }

    match failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// Places each camera's render transform at the centre of its scene view.
pub fn sync_camera_transforms(
    mut cameras: Query<(&SceneCamera, &mut Transform), Changed<SceneCamera>>,
) {
    for (cam, mut transform) in &mut cameras {
        let center = math::scene_to_world(cam.scene_position + cam.dimensions / 2.0);
        transform.translation = center.extend(transform.translation.z);
    }
}

/// Gives each registered camera an equal vertical slice of the primary window.
///
/// Runs when the registry changes or the window is resized. The slice size,
/// in logical pixels, becomes the camera's [`SceneCamera::surface`] and
/// [`SceneCamera::dimensions`], and the projection is rescaled to match so the
/// view centred by the follower is the view that gets rendered.
pub fn layout_split_viewports(
    window_q: Query<&Window, With<PrimaryWindow>>,
    mut resized: MessageReader<WindowResized>,
    registry: Res<CameraRegistry>,
    mut cameras: Query<(&mut Camera, &mut SceneCamera, &mut Projection)>,
) {
    let window_changed = resized.read().count() > 0;
    if !window_changed && !registry.is_changed() {
        return;
    }
    let Ok(window) = window_q.single() else {
        return;
    };

    let physical = UVec2::new(window.physical_width(), window.physical_height());
    let scale = window.scale_factor();
    let slices = math::split_viewports(physical, registry.len());

    for (entity, (position, size)) in registry.iter().zip(slices) {
        let Ok((mut camera, mut scene_cam, mut projection)) = cameras.get_mut(entity) else {
            warn!("Registered camera {entity} is missing Camera/SceneCamera/Projection");
            continue;
        };
        camera.viewport = Some(Viewport {
            physical_position: position,
            physical_size: size,
            ..default()
        });
        scene_cam.resize((size.as_vec2() / scale).round().as_uvec2());
        if let Projection::Orthographic(ref mut ortho) = *projection {
            ortho.scaling_mode = ScalingMode::Fixed {
                width: scene_cam.dimensions.x,
                height: scene_cam.dimensions.y,
            };
        }
        debug!("Camera {entity} viewport {position} size {size}");
    }
}
