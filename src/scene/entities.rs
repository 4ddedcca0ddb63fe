use bevy::prelude::*;

/// Music played by a [`MusicTag`](crate::tags::MusicTag) entity.
#[derive(Component, Reflect, Clone, Debug)]
#[reflect(Component)]
pub struct MusicTrack {
    /// Display title.
    pub title: String,
}
