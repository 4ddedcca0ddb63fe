//! Demo scene: bounds, noise terrain, a music source, players and cameras.
//!
//! Spawns one player per [`SceneConfig::players`], each with its own camera
//! registered in [`CameraRegistry`](crate::follow::CameraRegistry), and keeps
//! render transforms in sync with scene-space [`Position`](crate::Position)s.

mod entities;
mod systems;

pub use entities::MusicTrack;
pub use systems::{spawn_scene, sync_position_transforms, terrain_columns};

use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::SceneBounds;

/// Nested configuration for the scene.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct SceneConfig {
    /// Scene size in scene units.
    pub size: Vec2,
    /// Window size in logical pixels, split evenly between players.
    pub window_size: Vec2,
    /// Number of players (one camera each).
    pub players: usize,
    /// Terrain strip along the scene floor.
    pub terrain: TerrainSettings,
    /// Title of the track attached to the music source.
    pub music_title: String,
    /// Background clear color.
    pub clear_color: Color,
}

/// Noise parameters for the terrain strip.
#[derive(Clone, Debug, Reflect)]
pub struct TerrainSettings {
    /// Seed for the height noise generator.
    pub seed: u32,
    /// Number of noise octaves.
    pub octaves: usize,
    /// Spatial scale divisor for noise sampling.
    pub noise_scale: f64,
    /// Width of one terrain column.
    pub column_width: f32,
    /// Shortest column.
    pub min_height: f32,
    /// Tallest column.
    pub max_height: f32,
}

impl SceneConfig {
    /// Logical view size of each player's camera.
    pub fn view_size(&self) -> Vec2 {
        let players = self.players.max(1) as f32;
        Vec2::new(self.window_size.x / players, self.window_size.y)
    }

    /// Primary window resolution matching [`window_size`](Self::window_size).
    pub fn window_resolution(&self) -> WindowResolution {
        let size = self.window_size.round().as_uvec2();
        WindowResolution::new(size.x, size.y)
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            size: Vec2::new(2000.0, 1500.0),
            window_size: Vec2::new(1280.0, 720.0),
            players: 2,
            terrain: TerrainSettings {
                seed: 42,
                octaves: 4,
                noise_scale: 400.0,
                column_width: 50.0,
                min_height: 40.0,
                max_height: 240.0,
            },
            music_title: "Overworld".into(),
            clear_color: Color::srgb(0.05, 0.06, 0.09),
        }
    }
}

/// Scene setup at startup, position→transform sync every frame.
pub struct ScenePlugin(pub SceneConfig);

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SceneConfig>()
            .register_type::<SceneBounds>()
            .register_type::<MusicTrack>()
            .register_type::<crate::Position>()
            .register_type::<crate::Extent>()
            .insert_resource(self.0.clone())
            .insert_resource(SceneBounds {
                width: self.0.size.x,
                height: self.0.size.y,
            })
            .insert_resource(ClearColor(self.0.clear_color))
            .add_systems(Startup, spawn_scene)
            .add_systems(
                Update,
                sync_position_transforms.after(crate::player::apply_buffered_movement),
            );
    }
}
