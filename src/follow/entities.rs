use bevy::prelude::*;

/// Scene-space state of a follower camera.
#[derive(Component, Reflect, Clone, Debug, PartialEq)]
#[reflect(Component)]
pub struct SceneCamera {
    /// Top-left corner of the view in scene space. Written only by the follower.
    pub scene_position: Vec2,
    /// Size of the render surface in logical pixels (the viewport slice).
    pub surface: UVec2,
    /// Logical view size used for boundary math and projection.
    pub dimensions: Vec2,
}

impl SceneCamera {
    /// A camera at the scene origin whose surface matches its logical size.
    pub fn new(dimensions: Vec2) -> Self {
        Self {
            scene_position: Vec2::ZERO,
            surface: dimensions.round().as_uvec2(),
            dimensions,
        }
    }

    /// Sets a new surface size and keeps the logical view size equal to it.
    pub fn resize(&mut self, surface: UVec2) {
        self.surface = surface;
        self.dimensions = surface.as_vec2();
    }
}

/// Offset into [`CameraRegistry`] selecting the camera that tracks this entity.
#[derive(Component, Reflect, Clone, Copy, Debug, PartialEq, Eq)]
#[reflect(Component)]
pub struct CameraIndex(pub usize);

/// Ordered list of active cameras. Built at startup, read every frame.
#[derive(Resource, Default, Debug)]
pub struct CameraRegistry {
    cameras: Vec<Entity>,
}

impl CameraRegistry {
    /// Appends `camera` and returns the index that refers to it.
    pub fn register(&mut self, camera: Entity) -> CameraIndex {
        self.cameras.push(camera);
        CameraIndex(self.cameras.len() - 1)
    }

    /// Camera entity at `index`.
    pub fn get(&self, index: CameraIndex) -> Result<Entity, FollowError> {
        self.cameras
            .get(index.0)
            .copied()
            .ok_or(FollowError::IndexOutOfRange {
                index: index.0,
                len: self.cameras.len(),
            })
    }

    /// Registered cameras in index order.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.cameras.iter().copied()
    }

    /// Number of registered cameras.
    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    /// `true` when no camera has been registered.
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }
}

/// Failures while resolving a tracked entity's camera.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FollowError {
    /// `CameraIndex` does not name a registry slot.
    #[error("camera index {index} out of range ({len} cameras registered)")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Registry length at the time of the lookup.
        len: usize,
    },
    /// A registry slot points at an entity without a [`SceneCamera`].
    #[error("registered camera {0} has no SceneCamera")]
    NotACamera(Entity),
}
