//! Split-screen camera follower demo.
//!
//! Two players roam a noise-generated scene; each half of the window follows
//! one of them. WASD / arrow keys move, Tab toggles the debug overlay.

use bevy::app::AppExit;
use bevy::prelude::*;
#[cfg(feature = "native")]
use bevy::remote::{RemotePlugin, http::RemoteHttpPlugin};
use bevy_inspector_egui::quick::WorldInspectorPlugin;
#[cfg(feature = "native")]
use clap::Parser;

use split_cam::GameState;
use split_cam::debug::DebugPlugin;
use split_cam::follow::{FollowConfig, FollowPlugin, SplitScreenPlugin};
use split_cam::player::{PlayerConfig, PlayerPlugin};
use split_cam::scene::{SceneConfig, ScenePlugin};
use split_cam::tags::TagsPlugin;

#[cfg(feature = "native")]
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of players, one camera each
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=2))]
    players: u8,

    /// Scene width in scene units
    #[arg(long, default_value_t = 2000.0)]
    scene_width: f32,

    /// Scene height in scene units
    #[arg(long, default_value_t = 1500.0)]
    scene_height: f32,

    /// Camera deadzone, same on both axes
    #[arg(long, default_value_t = 20.0)]
    deadzone: f32,

    /// Fraction of the remaining distance the camera covers per frame
    #[arg(long, default_value_t = 0.02)]
    smoothness: f32,

    /// Snap grid for camera positions (0 disables snapping)
    #[arg(long, default_value_t = 0.25)]
    pixel_snap: f32,

    /// Terrain noise seed
    #[arg(long, default_value_t = 42)]
    seed: u32,
}

#[cfg(feature = "native")]
impl Args {
    fn into_configs(self) -> (SceneConfig, FollowConfig) {
        let defaults = SceneConfig::default();
        let scene = SceneConfig {
            size: Vec2::new(self.scene_width, self.scene_height),
            players: self.players as usize,
            terrain: split_cam::scene::TerrainSettings {
                seed: self.seed,
                ..defaults.terrain
            },
            ..defaults
        };
        let follow = FollowConfig {
            deadzone: Vec2::splat(self.deadzone),
            smoothness: self.smoothness,
            pixel_snap: self.pixel_snap,
        };
        (scene, follow)
    }
}

fn main() {
    #[cfg(feature = "native")]
    let (scene, follow) = Args::parse().into_configs();
    #[cfg(not(feature = "native"))]
    let (scene, follow) = (SceneConfig::default(), FollowConfig::default());

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            resolution: scene.window_resolution(),
            title: "Split Cam".into(),
            ..default()
        }),
        ..default()
    }))
    .set_error_handler(bevy::ecs::error::warn)
    .register_type::<GameState>()
    .init_state::<GameState>()
    .add_plugins(bevy_egui::EguiPlugin::default())
    .add_plugins(TagsPlugin)
    .add_plugins(ScenePlugin(scene))
    .add_plugins(PlayerPlugin(PlayerConfig::default()))
    .add_plugins(FollowPlugin(follow))
    .add_plugins(SplitScreenPlugin)
    .add_plugins(DebugPlugin)
    .add_systems(Update, exit_on_esc)
    .add_plugins(WorldInspectorPlugin::new().run_if(in_state(GameState::Debugging)));

    #[cfg(feature = "native")]
    app.add_plugins(RemotePlugin::default())
        .add_plugins(RemoteHttpPlugin::default());

    app.run();
}

fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
