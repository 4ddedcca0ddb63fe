use bevy::prelude::*;

/// Marker for a player-controlled entity, numbered in spawn order.
#[derive(Component, Reflect, Clone, Copy, Debug)]
#[reflect(Component)]
pub struct Player {
    /// Zero-based player number.
    pub index: usize,
}

/// A movement request produced by input.
#[derive(Reflect, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerAction {
    /// Toward the top of the scene (negative y).
    Up,
    /// Toward the bottom of the scene.
    Down,
    /// Toward the left edge.
    Left,
    /// Toward the right edge.
    Right,
}

impl PlayerAction {
    /// Unit step in scene space (y-down).
    pub fn direction(self) -> Vec2 {
        match self {
            Self::Up => Vec2::NEG_Y,
            Self::Down => Vec2::Y,
            Self::Left => Vec2::NEG_X,
            Self::Right => Vec2::X,
        }
    }
}

/// Actions gathered this frame, waiting to be applied.
#[derive(Component, Reflect, Default, Clone, Debug)]
#[reflect(Component)]
pub struct InputBuffer {
    /// Pending actions, in key-scan order.
    pub actions: Vec<PlayerAction>,
}

/// Key bindings for one player.
#[derive(Component, Clone, Debug)]
pub struct Keymap {
    /// `(key, action)` pairs; every held key contributes its action.
    pub bindings: Vec<(KeyCode, PlayerAction)>,
}

impl Keymap {
    /// W/A/S/D.
    pub fn wasd() -> Self {
        Self {
            bindings: vec![
                (KeyCode::KeyW, PlayerAction::Up),
                (KeyCode::KeyS, PlayerAction::Down),
                (KeyCode::KeyA, PlayerAction::Left),
                (KeyCode::KeyD, PlayerAction::Right),
            ],
        }
    }

    /// Arrow keys.
    pub fn arrows() -> Self {
        Self {
            bindings: vec![
                (KeyCode::ArrowUp, PlayerAction::Up),
                (KeyCode::ArrowDown, PlayerAction::Down),
                (KeyCode::ArrowLeft, PlayerAction::Left),
                (KeyCode::ArrowRight, PlayerAction::Right),
            ],
        }
    }

    /// Default bindings for player `index`: WASD for the first, arrows for the rest.
    pub fn for_player(index: usize) -> Self {
        if index == 0 { Self::wasd() } else { Self::arrows() }
    }
}
