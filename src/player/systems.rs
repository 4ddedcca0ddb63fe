use bevy::prelude::*;

use super::PlayerConfig;
use super::entities::{InputBuffer, Keymap, Player};
use crate::tags::BlockTerrainTag;
use crate::{Extent, Position, SceneBounds, math};

/// Replaces each player's buffered actions with the actions held this frame.
pub fn buffer_keyboard_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut players: Query<(&Keymap, &mut InputBuffer)>,
) {
    for (keymap, mut buffer) in &mut players {
        buffer.actions.clear();
        buffer.actions.extend(
            keymap
                .bindings
                .iter()
                .filter(|(key, _)| keys.pressed(*key))
                .map(|(_, action)| *action),
        );
    }
}

/// Drains input buffers into movement, blocked by terrain and the scene edge.
pub fn apply_buffered_movement(
    time: Res<Time>,
    cfg: Res<PlayerConfig>,
    scene: Res<SceneBounds>,
    mut players: Query<(&mut Position, &Extent, &mut InputBuffer), With<Player>>,
    blocks: Query<(&Position, &Extent), (With<BlockTerrainTag>, Without<Player>)>,
) {
    let blockers: Vec<(Vec2, Vec2)> = blocks.iter().map(|(p, e)| (p.0, e.0)).collect();

    for (mut pos, extent, mut buffer) in &mut players {
        let direction = buffer
            .actions
            .drain(..)
            .map(|a| a.direction())
            .sum::<Vec2>()
            .normalize_or_zero();
        if direction == Vec2::ZERO {
            continue;
        }
        let delta = direction * cfg.move_speed * time.delta_secs();
        let next = resolve_move(pos.0, delta, extent.0, scene.size(), &blockers);
        if next != pos.0 {
            pos.0 = next;
        }
    }
}

/// Applies `delta` one axis at a time, dropping the component of an axis whose
/// move would overlap a blocker, then keeps the box inside the scene.
///
/// `blockers` are `(centre, half_extent)` pairs.
pub fn resolve_move(
    pos: Vec2,
    delta: Vec2,
    half: Vec2,
    scene: Vec2,
    blockers: &[(Vec2, Vec2)],
) -> Vec2 {
    let blocked = |p: Vec2| {
        blockers
            .iter()
            .any(|&(center, block_half)| math::aabb_overlap(p, half, center, block_half))
    };

    let mut out = pos;
    let try_x = Vec2::new(out.x + delta.x, out.y);
    if delta.x != 0.0 && !blocked(try_x) {
        out = try_x;
    }
    let try_y = Vec2::new(out.x, out.y + delta.y);
    if delta.y != 0.0 && !blocked(try_y) {
        out = try_y;
    }

    // min before max: a box wider than the scene pins to its left/top edge
    let max = scene - half;
    Vec2::new(out.x.min(max.x).max(half.x), out.y.min(max.y).max(half.y))
}
