#![warn(missing_docs)]
//! Split-screen 2D camera follower.
//!
//! Each player owns a camera that trails them with a deadzone, exponential
//! smoothing and quarter-pixel snapping, clamped to the scene. Entity tags
//! mark blocking terrain and music sources.

pub mod debug;
pub mod follow;
pub mod math;
pub mod player;
pub mod scene;
pub mod tags;

use bevy::prelude::*;

/// Application-wide game state, used for system scheduling.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub enum GameState {
    /// Normal play: input moves players, cameras follow.
    #[default]
    Running,
    /// Debug overlay active (Tab to toggle). Player input is ignored.
    Debugging,
}

/// Scene-space position. Origin at the scene's top-left, y grows downward.
#[derive(Component, Reflect, Default, Clone, Copy, Debug, PartialEq)]
#[reflect(Component)]
pub struct Position(pub Vec2);

/// Half-size of an entity's axis-aligned box, centred on its [`Position`].
#[derive(Component, Reflect, Default, Clone, Copy, Debug, PartialEq)]
#[reflect(Component)]
pub struct Extent(pub Vec2);

/// Logical size of the active scene; cameras are clamped inside it.
#[derive(Resource, Reflect, Clone, Copy, Debug, PartialEq)]
#[reflect(Resource)]
pub struct SceneBounds {
    /// Scene width in scene units.
    pub width: f32,
    /// Scene height in scene units.
    pub height: f32,
}

impl SceneBounds {
    /// Width and height as a vector.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl Default for SceneBounds {
    fn default() -> Self {
        Self {
            width: 2000.0,
            height: 1500.0,
        }
    }
}
