use bevy::camera::ScalingMode;
use bevy::prelude::*;
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use super::entities::MusicTrack;
use super::{SceneConfig, TerrainSettings};
use crate::follow::{CameraRegistry, SceneCamera};
use crate::player::{InputBuffer, Keymap, Player, PlayerConfig};
use crate::tags::TagKind;
use crate::{Extent, Position, math};

const TERRAIN_COLOR: Color = Color::srgb(0.22, 0.32, 0.18);
const MUSIC_COLOR: Color = Color::srgb(0.9, 0.75, 0.2);
const PLAYER_COLORS: [Color; 2] = [Color::srgb(0.2, 0.6, 1.0), Color::srgb(1.0, 0.35, 0.3)];

/// Terrain columns standing on the scene floor, as `(centre, half_extent)`.
///
/// Column heights come from 1D fractal noise sampled at each column centre.
pub fn terrain_columns(t: &TerrainSettings, scene: Vec2) -> Vec<(Vec2, Vec2)> {
    if t.column_width <= 0.0 {
        return Vec::new();
    }
    let fbm: Fbm<Perlin> = Fbm::new(t.seed).set_octaves(t.octaves);
    let count = (scene.x / t.column_width).floor() as usize;

    (0..count)
        .map(|i| {
            let x = (i as f32 + 0.5) * t.column_width;
            let noise_val = fbm.get([x as f64 / t.noise_scale, 0.0]);
            let height = math::map_noise_to_range(noise_val, t.min_height, t.max_height)
                .max(t.min_height)
                .min(t.max_height)
                .min(scene.y);
            let half = Vec2::new(t.column_width, height) / 2.0;
            (Vec2::new(x, scene.y - half.y), half)
        })
        .collect()
}

/// Spawns terrain, the music source, and one player + camera per player slot.
pub fn spawn_scene(
    mut commands: Commands,
    cfg: Res<SceneConfig>,
    player_cfg: Res<PlayerConfig>,
    mut registry: ResMut<CameraRegistry>,
) {
    let columns = terrain_columns(&cfg.terrain, cfg.size);
    for (i, &(center, half)) in columns.iter().enumerate() {
        let mut block = commands.spawn((
            Name::new(format!("Terrain {i}")),
            Position(center),
            Extent(half),
            Sprite::from_color(TERRAIN_COLOR, half * 2.0),
            Transform::default(),
        ));
        TagKind::BlockTerrain.attach(&mut block);
    }

    let music_half = Vec2::splat(16.0);
    let mut music = commands.spawn((
        Name::new(cfg.music_title.clone()),
        Position(cfg.size / 2.0),
        Extent(music_half),
        MusicTrack {
            title: cfg.music_title.clone(),
        },
        Sprite::from_color(MUSIC_COLOR, music_half * 2.0),
        Transform::from_xyz(0.0, 0.0, 0.5),
    ));
    TagKind::Music.attach(&mut music);

    let view = cfg.view_size();
    for i in 0..cfg.players {
        let spawn = Vec2::new(200.0 + 150.0 * i as f32, cfg.size.y * 0.4);
        let start = math::clamp_to_scene(math::centering_target(spawn, view), cfg.size, view);

        let camera = commands
            .spawn((
                Name::new(format!("Camera {i}")),
                Camera2d,
                Camera {
                    order: i as isize,
                    ..default()
                },
                Projection::from(OrthographicProjection {
                    scaling_mode: ScalingMode::Fixed {
                        width: view.x,
                        height: view.y,
                    },
                    ..OrthographicProjection::default_2d()
                }),
                SceneCamera {
                    scene_position: start,
                    ..SceneCamera::new(view)
                },
                Transform::default(),
            ))
            .id();
        let index = registry.register(camera);

        commands.spawn((
            Name::new(format!("Player {i}")),
            Player { index: i },
            Position(spawn),
            Extent(player_cfg.half_extent),
            InputBuffer::default(),
            Keymap::for_player(i),
            index,
            Sprite::from_color(
                PLAYER_COLORS[i % PLAYER_COLORS.len()],
                player_cfg.half_extent * 2.0,
            ),
            Transform::from_xyz(0.0, 0.0, 1.0),
        ));
    }

    info!(
        "Scene {}x{}: {} terrain columns, {} players",
        cfg.size.x,
        cfg.size.y,
        columns.len(),
        cfg.players
    );
}

/// Mirrors scene-space positions into render transforms.
pub fn sync_position_transforms(mut q: Query<(&Position, &mut Transform), Changed<Position>>) {
    for (pos, mut transform) in &mut q {
        let world = math::scene_to_world(pos.0);
        transform.translation = world.extend(transform.translation.z);
    }
}
