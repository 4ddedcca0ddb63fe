//! Players and their input buffers.
//!
//! Each player has a [`Keymap`]; held keys are collected into the player's
//! [`InputBuffer`] every frame and drained by movement. Players are the
//! entities cameras follow.

mod entities;
mod systems;

pub use entities::{InputBuffer, Keymap, Player, PlayerAction};
pub use systems::{apply_buffered_movement, buffer_keyboard_input, resolve_move};

use bevy::prelude::*;

use crate::GameState;

/// Per-plugin configuration for player movement.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct PlayerConfig {
    /// Movement speed in scene units per second.
    pub move_speed: f32,
    /// Half-size of the player's collision box.
    pub half_extent: Vec2,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 320.0,
            half_extent: Vec2::new(12.0, 20.0),
        }
    }
}

/// Keyboard-driven player movement.
pub struct PlayerPlugin(pub PlayerConfig);

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Player>()
            .register_type::<InputBuffer>()
            .register_type::<PlayerConfig>()
            .insert_resource(self.0.clone())
            .add_systems(
                Update,
                (buffer_keyboard_input, apply_buffered_movement)
                    .chain()
                    .run_if(not(in_state(GameState::Debugging))),
            );
    }
}
